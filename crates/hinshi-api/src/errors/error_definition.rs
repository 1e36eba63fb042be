//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use hinshi::errors::{AnalysisError, HinshiError};

/// APIエラー
///
/// レスポンスでは `{"error": {"code", "message"}}` として返す。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力テキストが不正（空文字列など）
  #[error("入力値が無効です: {0}")]
  InvalidInput(String),

  /// テキストが MAX_TEXT_LENGTH を超えている
  #[error("テキストが長すぎます: {actual} バイト（最大: {max} バイト）")]
  TextTooLong {
    /// 受け取ったバイト数
    actual: usize,
    /// 上限
    max: usize,
  },

  /// 辞書を用意できず解析器が使えない
  #[error("解析器を利用できません: {0}")]
  AnalyzerUnavailable(String),

  /// 起動時の設定エラー（環境変数、バインド先）
  #[error("設定エラー: {0}")]
  Config(String),

  /// 素性の形式エラーなど、クライアントに原因のないエラー
  #[error("内部エラー: {0}")]
  Internal(String),
}

impl ApiError {
  /// エラーコード
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput(_) => "invalid_input",
      Self::TextTooLong { .. } => "text_too_long",
      Self::AnalyzerUnavailable(_) => "analyzer_unavailable",
      Self::Config(_) => "config_error",
      Self::Internal(_) => "internal_error",
    }
  }

  /// HTTPステータスコード
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput(_) | Self::TextTooLong { .. } => StatusCode::BAD_REQUEST,
      Self::AnalyzerUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
      Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong { actual, max }
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (self.status(), Json(body)).into_response()
  }
}

/// 解析エラーを HTTP のエラーに振り分ける
impl From<HinshiError> for ApiError {
  fn from(err: HinshiError) -> Self {
    match err {
      HinshiError::Analysis(AnalysisError::InvalidInput { reason }) => Self::InvalidInput(reason),
      HinshiError::Analysis(AnalysisError::Dictionary(e)) => Self::AnalyzerUnavailable(e.to_string()),
      HinshiError::Dictionary(e) => Self::AnalyzerUnavailable(e.to_string()),
      HinshiError::Config(e) => Self::AnalyzerUnavailable(e.to_string()),
      HinshiError::Malformed(e) => Self::Internal(e.to_string()),
      HinshiError::Output(e) => Self::Internal(e.to_string()),
      // #[non_exhaustive]
      other => Self::Internal(other.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;

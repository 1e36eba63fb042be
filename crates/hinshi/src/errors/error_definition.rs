//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（HinshiConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// dictionary.path がファイルとして存在しない
  #[error("dictionary.path に辞書ファイルが存在しません: path={path:?}")]
  DictionaryFileNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// dictionary.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("dictionary.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// dictionary.cache_dir の作成に失敗
  #[error("dictionary.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 辞書関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(String),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 形態素解析器の呼び出しに関するエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalysisError {
  /// 辞書を用意できず解析器が使えない
  #[error("辞書エラー: {0}")]
  Dictionary(#[from] DictionaryError),

  /// 入力テキストが不正（空文字列など）
  #[error("解析対象の入力テキストが不正: {reason}")]
  InvalidInput {
    /// 不正の理由
    reason: String,
  },
}

/// 解析結果の素性文字列が必要なフィールド数に満たない
///
/// 品詞・品詞細分類1〜3・活用型・活用形・基本形の 7 フィールドが最低限必要。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
  "素性文字列のフィールド数が不足しています: surface={surface}, feature={feature}, \
   field_count={field_count} (必要: {required})"
)]
pub struct MalformedAnalysisError {
  /// 対象ノードの表層形
  pub surface: String,
  /// 受け取った素性文字列
  pub feature: String,
  /// 実際のフィールド数
  pub field_count: usize,
  /// 必要なフィールド数
  pub required: usize,
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `HinshiResult<T>` = `Result<T, HinshiError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum HinshiError {
  /// 辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 解析器呼び出しエラー
  #[error(transparent)]
  Analysis(#[from] AnalysisError),

  /// 素性文字列の形式エラー
  #[error(transparent)]
  Malformed(#[from] MalformedAnalysisError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// dump 出力先への書き込み失敗
  #[error("解析結果の出力に失敗しました: {0}")]
  Output(Arc<io::Error>),
}

impl From<io::Error> for HinshiError {
  fn from(err: io::Error) -> Self {
    HinshiError::Output(Arc::new(err))
  }
}

/// hinshi クレートの標準 Result 型エイリアス
pub type HinshiResult<T> = Result<T, HinshiError>;

//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{NodesRequest, NodesResponse, WordsRequest, WordsResponse};

use super::state::AppState;

/// POST /words エンドポイント
///
/// 品詞を指定して語を抽出する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト", "pos": ["名詞", "動詞"], "use_base_form": false }
/// ```
///
/// # Response
/// - 200 OK: 抽出成功
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 503 Service Unavailable: 辞書を利用できない
/// - 500 Internal Server Error: 内部エラー
pub async fn post_words(
  State(state): State<AppState>,
  Json(request): Json<WordsRequest>,
) -> Result<Json<WordsResponse>, ApiError> {
  debug!(
    text_len = request.text.len(),
    pos = ?request.pos,
    use_base_form = request.use_base_form,
    "品詞抽出リクエストを受信"
  );

  // 形態素解析は CPU バウンドなので spawn_blocking で非同期ランタイムから分離する
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.words(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    word_count = response.words.len(),
    elapsed_ms = response.elapsed_ms,
    "品詞抽出完了"
  );

  Ok(Json(response))
}

/// POST /nodes エンドポイント
///
/// 境界ノードを除いた解析結果をすべて返す。
pub async fn post_nodes(
  State(state): State<AppState>,
  Json(request): Json<NodesRequest>,
) -> Result<Json<NodesResponse>, ApiError> {
  debug!(text_len = request.text.len(), "ノード一覧リクエストを受信");

  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.nodes(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    node_count = response.nodes.len(),
    elapsed_ms = response.elapsed_ms,
    "形態素解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

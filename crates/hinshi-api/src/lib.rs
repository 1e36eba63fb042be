//! hinshi-api crate
//!
//! Web server exposing part-of-speech word extraction as an HTTP API.
//!
//! ## Endpoints
//! - `POST /words` - Words filtered by part-of-speech
//! - `POST /nodes` - All analysis nodes
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5530/words \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "MeCabで遊んでみよう！", "pos": ["名詞", "動詞"], "use_base_form": true}'
//! ```

/// ルーター・ハンドラー・共有状態
pub mod api;
/// 環境変数からの設定読み込み
pub mod config;
/// API エラーと HTTP レスポンスへの変換
pub mod errors;
/// リクエスト / レスポンスモデル
pub mod models;
/// 品詞抽出サービス
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::ApiError;
pub use models::{NodesRequest, NodesResponse, WordsRequest, WordsResponse};
pub use service::HinshiApiServiceFull;

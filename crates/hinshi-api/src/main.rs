//! hinshi-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hinshi_api::ApiError;
use hinshi_api::api::AppState;
use hinshi_api::api::run_server;
use hinshi_api::config::Config;
use hinshi_api::service::HinshiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時は info）
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(env_filter).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(preset = ?config.preset, "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(HinshiApiServiceFull::new(&config)?);
  tracing::info!("品詞抽出サービスを初期化しました");

  let state = AppState::new(config, service);

  run_server(state).await
}

//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::HinshiApiService;

/// Application State
///
/// State shared across the entire server.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Part-of-speech extraction service
  ///
  /// - Production: `Arc::new(HinshiApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubHinshiApiService)`
  pub service: Arc<dyn HinshiApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn HinshiApiService>) -> Self {
    Self { config, service }
  }
}

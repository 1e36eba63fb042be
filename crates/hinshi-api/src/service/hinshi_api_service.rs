//! Part-of-speech extraction service

use std::collections::HashSet;
use std::time::Instant;

use hinshi::config::{DictionaryConfig, HinshiConfig};
use hinshi::{MecabParser, VibratoAnalyzer, WordForm};

use crate::config::Config;
use crate::config::MAX_TEXT_LENGTH;
use crate::errors::{ApiError, Result};
use crate::models::{NodesRequest, NodesResponse, WordsRequest, WordsResponse};

/// Common interface for the extraction service
///
/// This trait allows swapping production implementation (`HinshiApiServiceFull`) with
/// test stubs/mocks.
pub trait HinshiApiService: Send + Sync {
  /// Extracts words filtered by part-of-speech
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - Internal error
  fn words(&self, request: WordsRequest) -> Result<WordsResponse>;

  /// Returns every analysis node of the text
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - Internal error
  fn nodes(&self, request: NodesRequest) -> Result<NodesResponse>;
}

/// Builds the library configuration for the selected preset
fn analyzer_config(config: &Config) -> HinshiConfig {
  HinshiConfig {
    dictionary: DictionaryConfig {
      preset: config.preset.into(),
      ..DictionaryConfig::default()
    },
    ..HinshiConfig::default()
  }
}

/// Rejects empty and oversized input
fn validate_text(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes == 0 {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }

  Ok(())
}

/// Part-of-speech extraction service
///
/// Holds one analyzer (shared dictionary) and builds a `MecabParser` per request.
#[derive(Clone)]
pub struct HinshiApiServiceFull {
  analyzer: VibratoAnalyzer,
}

impl HinshiApiServiceFull {
  /// Initializes the service
  ///
  /// # Errors
  /// Returns an error if dictionary load fails
  pub fn new(config: &Config) -> Result<Self> {
    let analyzer = VibratoAnalyzer::from_config(&analyzer_config(config))
      .map_err(|e| ApiError::config(format!("Failed to load dictionary: {}", e)))?;

    Ok(Self { analyzer })
  }

  /// Extracts words filtered by part-of-speech
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  pub fn words(&self, request: WordsRequest) -> Result<WordsResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();

    let pos_set: HashSet<&str> = request.pos.iter().map(String::as_str).collect();
    let form = WordForm::from_use_base_form(request.use_base_form);

    let parser = MecabParser::new(request.text, &self.analyzer);
    let words = parser.find_words_by_pos_with(&pos_set, form)?;

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(WordsResponse { words, elapsed_ms })
  }

  /// Returns every analysis node of the text
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  pub fn nodes(&self, request: NodesRequest) -> Result<NodesResponse> {
    validate_text(&request.text)?;

    let start = Instant::now();

    let parser = MecabParser::new(request.text, &self.analyzer);
    let nodes = parser.nodes()?.to_vec();

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(NodesResponse { nodes, elapsed_ms })
  }
}

/// Production implementation of trait `HinshiApiService`
impl HinshiApiService for HinshiApiServiceFull {
  // Writing `self.words(...)` would recurse into the trait method,
  // so the inherent methods are called explicitly.
  fn words(&self, request: WordsRequest) -> Result<WordsResponse> {
    HinshiApiServiceFull::words(self, request)
  }

  fn nodes(&self, request: NodesRequest) -> Result<NodesResponse> {
    HinshiApiServiceFull::nodes(self, request)
  }
}

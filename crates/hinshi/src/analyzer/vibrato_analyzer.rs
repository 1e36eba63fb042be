//! Analyzer backed by vibrato-rkyv

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::{AnalysisNode, MorphAnalyzer};
use crate::config::HinshiConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::{AnalysisError, HinshiResult};

/// Morphological analyzer using Vibrato-rkyv
///
/// - Stateless (only holds dictionary reference)
/// - `Clone + Send + Sync`, so one instance can serve many parsers
/// - Emits MeCab-shaped node chains (`BOS/EOS`, tokens..., `BOS/EOS`)
#[derive(Clone)]
pub struct VibratoAnalyzer {
  inner: VibratoImpl,
}

impl VibratoAnalyzer {
  /// Constructs an analyzer from an already loaded Dictionary
  pub fn from_dictionary(dict: Dictionary) -> Self {
    Self {
      inner: VibratoImpl::new(dict),
    }
  }

  /// Constructs an analyzer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this when the dictionary comes from `DictionaryManager::load()`.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use hinshi::dictionary::DictionaryManager;
  /// # use hinshi::analyzer::VibratoAnalyzer;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let analyzer = VibratoAnalyzer::from_shared_dictionary(dict);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }

  /// Validates the configuration, loads its dictionary and builds the analyzer.
  ///
  /// # Errors
  /// - Invalid configuration: `HinshiError::Config`
  /// - Dictionary download or load failure: `HinshiError::Analysis(AnalysisError::Dictionary)`,
  ///   since the analyzer cannot be built without one
  pub fn from_config(config: &HinshiConfig) -> HinshiResult<Self> {
    config.validate()?;

    let manager =
      DictionaryManager::from_config(&config.dictionary).map_err(AnalysisError::from)?;
    let dict = manager.load().map_err(AnalysisError::from)?;

    debug!(manager = ?manager, "Analyzer dictionary ready");
    Ok(Self::from_shared_dictionary(dict))
  }
}

impl MorphAnalyzer for VibratoAnalyzer {
  fn parse_to_nodes(&self, text: &str) -> Result<Vec<AnalysisNode>, AnalysisError> {
    if text.is_empty() {
      return Err(AnalysisError::InvalidInput {
        reason: "テキストが空です".to_string(),
      });
    }

    // worker holds the lattice for analysis, created each time
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(input_text = %text, "Start morphological analysis");

    // Two extra slots for the boundary nodes
    let mut nodes = Vec::with_capacity(worker.num_tokens() + 2);
    nodes.push(AnalysisNode::boundary());

    for token in worker.token_iter() {
      debug!(
        surface = %token.surface(),
        feature = %token.feature(),
        start = token.range_byte().start,
        end = token.range_byte().end,
        "Token"
      );
      nodes.push(AnalysisNode::new(token.surface(), token.feature()));
    }

    nodes.push(AnalysisNode::boundary());

    debug!(
      total_tokens = worker.num_tokens(),
      total_nodes = nodes.len(),
      "Morphological analysis completed"
    );

    Ok(nodes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{ConfigError, DictionaryError, HinshiError};
  use std::fs;
  use tempfile::TempDir;

  fn config_with_path(path: std::path::PathBuf) -> HinshiConfig {
    let mut config = HinshiConfig::default();
    config.dictionary.path = Some(path);
    config
  }

  #[test]
  fn from_config_rejects_missing_dictionary_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.dic");

    let err = VibratoAnalyzer::from_config(&config_with_path(missing.clone()))
      .err()
      .expect("missing dictionary file must fail");

    match err {
      HinshiError::Config(ConfigError::DictionaryFileNotFound { path }) => assert_eq!(path, missing),
      other => panic!("expected DictionaryFileNotFound, got: {other:?}"),
    }
  }

  #[test]
  fn from_config_reports_unloadable_dictionary_as_analysis_error() {
    let temp_dir = TempDir::new().unwrap();
    let dict_file = temp_dir.path().join("broken.dic");
    fs::write(&dict_file, b"not a dictionary").unwrap();

    let err = VibratoAnalyzer::from_config(&config_with_path(dict_file))
      .err()
      .expect("broken dictionary must fail");

    assert!(
      matches!(
        err,
        HinshiError::Analysis(AnalysisError::Dictionary(DictionaryError::VibratoLoad(_)))
      ),
      "unexpected error: {err:?}"
    );
  }
}

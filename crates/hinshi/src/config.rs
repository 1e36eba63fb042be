// crates/hinshi/src/config.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Top-level configuration for hinshi.
///
/// Passed explicitly into `VibratoAnalyzer::from_config` / `MecabParser::from_config`
/// so that no analyzer setting is taken from a process-wide default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HinshiConfig {
  /// [dictionary] section
  #[serde(default)]
  pub dictionary: DictionaryConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic"
  #[serde(default)]
  pub preset: DictionaryPreset,
  /// Local compiled dictionary file.
  ///
  /// Takes precedence over `preset` when set.
  #[serde(default)]
  pub path: Option<PathBuf>,
  /// Dictionary cache directory for preset dictionaries.
  ///
  /// If omitted, `DictionaryManager` falls back to the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` belongs to vibrato-rkyv and does not implement
/// `serde::Deserialize`, and the orphan rule forbids adding it here.
/// This enum is the configuration-side mirror, converted with `.into()`.
///
/// Only IPADIC is offered: `NodeWrapper` reads the IPADIC feature layout
/// (base form at index 6), and UniDic places its lemma elsewhere and emits
/// shorter features for unknown words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest, MeCab's standard feature layout
  #[default]
  Ipadic,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `EnvFilter`.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Accessor Methods =====

impl HinshiConfig {
  /// Returns the preset dictionary type to pass to DictionaryManager.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.dictionary.preset.into()
  }

  /// Returns the local dictionary file, if one is configured.
  pub fn dictionary_path(&self) -> Option<&Path> {
    self.dictionary.path.as_deref()
  }

  /// Returns the configured dictionary cache directory.
  ///
  /// `None` if unspecified.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.dictionary.cache_dir.as_deref()
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Builds the `EnvFilter` for `tracing_subscriber`.
  ///
  /// `RUST_LOG` wins when set; otherwise the configured level is used.
  pub fn env_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level().as_str()))
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `dictionary.path` is an existing file when set
  /// - `dictionary.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if let Some(path) = &self.dictionary.path
      && !path.is_file()
    {
      return Err(ConfigError::DictionaryFileNotFound { path: path.clone() });
    }

    // dictionary.cache_dir exists or can be created
    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        // If it exists, check that it is a directory
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

// ===== Convert configuration types to vibrato-rkyv types =====

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

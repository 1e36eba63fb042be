//! Dictionary Management Module
//!
//! Resolves the dictionary the analyzer runs on: either a vibrato-rkyv preset
//! (downloaded into a cache directory on first use) or a local compiled dictionary file.

use crate::config::DictionaryConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum DictionarySource {
  /// vibrato-rkyv preset
  Preset(PresetDictionaryKind),
  /// Compiled dictionary file on disk
  Local(PathBuf),
}

/// Dictionary manager for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset or local file
  source: DictionarySource,

  /// Loaded dictionary, initialized at the first `load()`.
  /// DictionaryError implements Clone so the Result itself is memoized.
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the preset kind, `None` for a local dictionary
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    match &self.source {
      DictionarySource::Preset(kind) => Some(*kind),
      DictionarySource::Local(_) => None,
    }
  }

  /// Returns `true` once `load()` has run (successfully or not)
  pub fn is_loaded(&self) -> bool {
    self.dictionary.get().is_some()
  }

  /// Preset dictionary stored under the default OS cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    let cache_dir = default_cache_dir()?;
    Ok(Self::with_preset_in(preset_kind, cache_dir))
  }

  /// Preset dictionary stored under an explicit cache directory
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    }
  }

  /// Local compiled dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    // The directory containing the dictionary doubles as its cache directory
    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Builds a manager from the `[dictionary]` section.
  ///
  /// `path` takes precedence over `preset`; `cache_dir` falls back to the OS default.
  pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
    if let Some(path) = &config.path {
      return Self::from_local_path(path);
    }

    let kind = config.preset.into();
    match &config.cache_dir {
      Some(dir) => Ok(Self::with_preset_in(kind, dir)),
      None => Self::with_preset(kind),
    }
  }

  /// Load dictionary
  /// - Loads on the first call
  /// - Returns a clone of `Arc<Dictionary>` from the second call onwards
  /// - A first-call error is cached and returned again
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => Self::load_from_local_path(path),
      DictionarySource::Preset(kind) => self.load_from_preset(*kind),
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    info!(path = %path.display(), "Loading local dictionary");
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Downloads the preset on the first run, loads from the cache directory afterwards
  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    // One subdirectory per dictionary name
    let dict_dir = self.cache_dir.join(preset_kind.name());
    debug!(dict_dir = %dict_dir.display(), preset = preset_kind.name(), "Loading preset dictionary");

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                |
/// |---------|---------------------------------------------|
/// | Linux   | `~/.cache/hinshi/dict`                      |
/// | macOS   | `~/Library/Caches/hinshi/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\hinshi\dict` |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("hinshi").join("dict"))
}

/// `vibrato_rkyv::Dictionary` does not implement `Debug`, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.is_loaded())
      .finish()
  }
}

//! Config loading from environment variables

use std::str::FromStr;

use hinshi::config::DictionaryPreset;

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_PRESET_DICT};
use crate::errors::ApiError;

/// Dictionary Preset Type
///
/// Node records follow the IPADIC feature layout, so UniDic presets are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// IPAdic dictionary
  Ipadic,
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" | "unidic-csj" => Err(format!(
        "Unsupported preset: {}. UniDic features do not follow the IPADIC layout; use ipadic",
        s
      )),
      _ => Err(format!("Unknown preset: {}. Valid values: ipadic", s)),
    }
  }
}

impl From<Preset> for DictionaryPreset {
  fn from(preset: Preset) -> Self {
    match preset {
      Preset::Ipadic => DictionaryPreset::Ipadic,
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// Dictionary preset to use
  pub preset: Preset,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `HINSHI_API_BASE_URL`: bind address
  /// - `HINSHI_PRESET_DICT`: `ipadic`
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("HINSHI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let preset_dict_str =
      std::env::var("HINSHI_PRESET_DICT").unwrap_or_else(|_| DEFAULT_PRESET_DICT.to_string());

    let preset = Preset::from_str(&preset_dict_str).map_err(ApiError::config)?;

    Ok(Self { bind_addr, preset })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preset_from_str_ipadic() {
    assert_eq!(Preset::from_str("ipadic").unwrap(), Preset::Ipadic);
    assert_eq!(Preset::from_str("IPADIC").unwrap(), Preset::Ipadic);
  }

  #[test]
  fn preset_from_str_rejects_unidic() {
    for name in ["unidic-cwj", "UNIDIC-CSJ"] {
      let err = Preset::from_str(name).unwrap_err();
      assert!(err.contains("Unsupported preset"), "{name}: {err}");
    }
  }

  #[test]
  fn preset_from_str_invalid() {
    let err = Preset::from_str("jumandic").unwrap_err();
    assert!(err.contains("jumandic"));
  }

  #[test]
  fn preset_converts_to_dictionary_preset() {
    assert_eq!(DictionaryPreset::from(Preset::Ipadic), DictionaryPreset::Ipadic);
  }

  #[test]
  fn default_preset_parses() {
    assert_eq!(Preset::from_str(DEFAULT_PRESET_DICT).unwrap(), Preset::Ipadic);
  }
}

//! YAML configuration for option defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! parse:
//!   max_token_length: 4095
//! defines:
//!   - "jpeg:quality=90"
//!   - "filter:blur=0.8"
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use magick_options_core::MAX_TOKEN_LEN;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::store::OptionStore;

fn default_max_token_length() -> usize {
    MAX_TOKEN_LEN
}

/// Settings for the mnemonic list parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Longest token kept before truncation, in bytes.
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LEN,
        }
    }
}

/// Top-level configuration file.
///
/// Only `version` is required; the other sections fall back to defaults.
///
/// # Examples
///
/// ```
/// use magick_options_store::{OptionStore, OptionsConfig};
///
/// let yaml = r#"
/// version: "1.0"
/// defines: ["jpeg:quality=90"]
/// "#;
/// let config: OptionsConfig = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.parse_settings().max_token_length, 4095);
///
/// let mut options = OptionStore::new();
/// config.apply(&mut options).unwrap();
/// assert_eq!(options.get("jpeg:quality"), Some("90"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// List parser settings.
    #[serde(default)]
    pub parse: ParseConfig,
    /// `key=value` definitions applied to an [`OptionStore`].
    #[serde(default)]
    pub defines: Vec<String>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            parse: ParseConfig::default(),
            defines: Vec::new(),
        }
    }
}

impl OptionsConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::StoreError::Io) if the file cannot be read, or
    /// [`Yaml`](crate::StoreError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader)?;
        debug!(path = %path.display(), defines = config.defines.len(), "loaded options config");
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::StoreError::Io) if the file cannot be written,
    /// or [`Yaml`](crate::StoreError::Yaml) if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Applies every define to `store`, in file order.
    ///
    /// Later defines for the same key win. Stops at the first malformed
    /// define; earlier ones stay applied.
    pub fn apply(&self, store: &mut OptionStore) -> Result<()> {
        for define in &self.defines {
            store.define(define)?;
        }
        debug!(count = self.defines.len(), "applied config defines");
        Ok(())
    }

    pub fn parse_settings(&self) -> ParseConfig {
        self.parse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
parse:
  max_token_length: 64
defines:
  - "jpeg:quality=90"
  - "Filter:Blur=0.8"
  - "jpeg:quality=75"
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: OptionsConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.parse.max_token_length, 64);
        assert_eq!(config.defines.len(), 3);
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: OptionsConfig = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
        assert_eq!(config, OptionsConfig::default());
        assert_eq!(config.parse_settings().max_token_length, MAX_TOKEN_LEN);
    }

    #[test]
    fn test_missing_version_is_an_error() {
        assert!(serde_yaml::from_str::<OptionsConfig>("defines: []\n").is_err());
    }

    #[test]
    fn test_apply_later_defines_win() {
        let config: OptionsConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let mut options = OptionStore::new();
        config.apply(&mut options).unwrap();
        assert_eq!(options.get("jpeg:quality"), Some("75"));
        assert_eq!(options.get("filter:blur"), Some("0.8"));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_apply_stops_at_bad_define() {
        let config = OptionsConfig {
            defines: vec!["a=1".into(), "=2".into(), "b=3".into()],
            ..OptionsConfig::default()
        };
        let mut options = OptionStore::new();
        let err = config.apply(&mut options).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDefine(_)));
        assert_eq!(options.get("a"), Some("1"));
        assert!(!options.contains("b"));
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.yml");

        let original: OptionsConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = OptionsConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OptionsConfig::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}

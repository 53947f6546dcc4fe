//! Runtime configuration.
//!
//! Loaded from a JSON document; every field has a default so `{}` is a
//! valid configuration. The binaries read the file named by `KATA_CONFIG`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::counting::CountStrategy;
use crate::error::{KataError, Result};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "KATA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Alphabet for the palindrome merge and the custom-order checker.
    pub alphabet: Alphabet,
    /// Algorithm behind `COUNT`.
    pub count_strategy: CountStrategy,
    /// Joins nested keys in `FLATTEN`.
    pub flatten_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            count_strategy: CountStrategy::default(),
            flatten_delimiter: "_".to_owned(),
        }
    }
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|e| KataError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            KataError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load from `$KATA_CONFIG`, or defaults when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.flatten_delimiter.is_empty() {
            return Err(KataError::configuration("flatten_delimiter must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.alphabet, Alphabet::Lowercase);
        assert_eq!(config.count_strategy, CountStrategy::Centers);
        assert_eq!(config.flatten_delimiter, "_");
    }

    #[test]
    fn fields_parse() {
        let config = Config::from_json_str(
            r#"{"alphabet":"byte","count_strategy":"enumerate","flatten_delimiter":"."}"#,
        )
        .unwrap();
        assert_eq!(config.alphabet, Alphabet::Byte);
        assert_eq!(config.count_strategy, CountStrategy::Enumerate);
        assert_eq!(config.flatten_delimiter, ".");
    }

    #[test]
    fn bad_values_are_configuration_errors() {
        for text in [
            r#"{"alphabet":"klingon"}"#,
            r#"{"flatten_delimiter":""}"#,
            r#"{"unknown":1}"#,
            "not json",
        ] {
            assert!(
                matches!(Config::from_json_str(text), Err(KataError::Configuration { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"alphabet":"byte"}}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.alphabet, Alphabet::Byte);
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = Config::load("/nonexistent/kata.json").unwrap_err();
        assert!(matches!(err, KataError::Configuration { .. }));
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            alphabet: Alphabet::Byte,
            ..Config::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&text).unwrap(), config);
    }
}

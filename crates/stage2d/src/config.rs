//! File-backed configuration loading
//!
//! Games derive `Serialize`/`Deserialize`/`Default` on their config structs
//! and implement [`Config`] to get `.toml` and `.ron` file support for free.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// File-backed configuration
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from a `.toml` or `.ron` file
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, fails to parse,
    /// or has an extension other than `.toml` / `.ron`.
    fn load(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") && !path.ends_with(".ron") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load configuration, falling back to defaults
    ///
    /// A missing or malformed file is not fatal: the failure is logged and
    /// the `Default` values are used instead.
    fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("could not load '{path}' ({err}), using default configuration");
                Self::default()
            }
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    ///
    /// # Errors
    /// Returns [`ConfigError`] when serialization fails, the file cannot be
    /// written, or the extension is not `.toml` / `.ron`.
    fn save(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        width: u32,
        label: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                width: 800,
                label: "default".to_string(),
            }
        }
    }

    impl Config for TestConfig {}

    fn temp_path(file: &str) -> String {
        std::env::temp_dir()
            .join(file)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("stage2d_config_round_trip.toml");
        let config = TestConfig {
            width: 1024,
            label: "custom".to_string(),
        };

        config.save(&path).unwrap();
        let loaded = TestConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let loaded = TestConfig::load_or_default(&temp_path("stage2d_config_missing.toml"));
        assert_eq!(loaded, TestConfig::default());
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = TestConfig::load("settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let path = temp_path("stage2d_config_malformed.toml");
        std::fs::write(&path, "width = \"not a number\"").unwrap();

        let loaded = TestConfig::load_or_default(&path);
        assert_eq!(loaded, TestConfig::default());

        std::fs::remove_file(&path).unwrap();
    }
}

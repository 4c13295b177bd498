//! Classifier tunables.
//!
//! The hybrid ratio and primary floor are behavioral constants inherited from
//! the original scoring model; they are carried as configuration rather than
//! hardcoded so deployments can retune them without touching the engine.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `IDEAGAUGE_HYBRID_RATIO` | `0.6` | Runner-up/top score ratio that marks a hybrid |
//! | `IDEAGAUGE_PRIMARY_FLOOR` | `2.0` | Minimum top score before collapsing to `other` |
//! | `IDEAGAUGE_HIGH_CONFIDENCE` | `0.7` | Score ratio for `high` confidence |
//! | `IDEAGAUGE_MEDIUM_CONFIDENCE` | `0.4` | Score ratio for `medium` confidence |

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from loading or validating classifier configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config value {name} must be finite and non-negative, got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("medium_confidence ({medium}) must not exceed high_confidence ({high})")]
    ConfidenceBandsInverted { medium: f64, high: f64 },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Threshold configuration for [`classify`](crate::classifier::classify).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Runner-up/top score ratio at or above which the idea is a hybrid.
    pub hybrid_ratio: f64,
    /// Minimum top score; below it the primary category collapses to `other`.
    pub primary_floor: f64,
    /// Score ratio at or above which an entry gets `high` confidence.
    pub high_confidence: f64,
    /// Score ratio at or above which an entry gets `medium` confidence.
    pub medium_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hybrid_ratio: 0.6,
            primary_floor: 2.0,
            high_confidence: 0.7,
            medium_confidence: 0.4,
        }
    }
}

impl ClassifierConfig {
    /// Build from defaults, then apply any `IDEAGAUGE_*` overrides present in
    /// the environment. Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let mut apply = |name: &str, slot: &mut f64| {
            if let Ok(raw) = std::env::var(name) {
                match raw.parse::<f64>() {
                    Ok(v) => *slot = v,
                    Err(_) => tracing::warn!("ignoring unparsable {name}={raw}"),
                }
            }
        };
        apply("IDEAGAUGE_HYBRID_RATIO", &mut config.hybrid_ratio);
        apply("IDEAGAUGE_PRIMARY_FLOOR", &mut config.primary_floor);
        apply("IDEAGAUGE_HIGH_CONFIDENCE", &mut config.high_confidence);
        apply("IDEAGAUGE_MEDIUM_CONFIDENCE", &mut config.medium_confidence);
        config
    }

    /// Load and validate from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("hybrid_ratio", self.hybrid_ratio),
            ("primary_floor", self.primary_floor),
            ("high_confidence", self.high_confidence),
            ("medium_confidence", self.medium_confidence),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        if self.medium_confidence > self.high_confidence {
            return Err(ConfigError::ConfidenceBandsInverted {
                medium: self.medium_confidence,
                high: self.high_confidence,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_source_constants() {
        let config = ClassifierConfig::default();
        assert_eq!(config.hybrid_ratio, 0.6);
        assert_eq!(config.primary_floor, 2.0);
        assert_eq!(config.high_confidence, 0.7);
        assert_eq!(config.medium_confidence, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hybrid_ratio = 0.5").unwrap();
        let config = ClassifierConfig::from_toml_path(file.path()).unwrap();
        assert_eq!(config.hybrid_ratio, 0.5);
        assert_eq!(config.primary_floor, 2.0);
    }

    #[test]
    fn test_toml_rejects_inverted_bands() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "medium_confidence = 0.9\nhigh_confidence = 0.7").unwrap();
        let err = ClassifierConfig::from_toml_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfidenceBandsInverted { .. }));
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let config = ClassifierConfig {
            primary_floor: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "primary_floor", .. })
        ));

        let config = ClassifierConfig {
            hybrid_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ClassifierConfig::from_toml_path(Path::new("/nonexistent/ideagauge.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

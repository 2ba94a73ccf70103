//! Configuration file loading
//!
//! Config is resolved in order:
//! 1. An explicit path (`--config`), which must exist
//! 2. The override in the data dir (~/.local/share/tally/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from a file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::insights::RecommenderConfig;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Resolved application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub recommender: RecommenderConfig,
    /// Email of the user to act on when none is given
    pub default_user: Option<String>,
}

impl Config {
    /// Load from an explicit path, the data-dir override, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    fs::read_to_string(&default_path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                    })?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }
}

/// Location of the user override file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    defaults: Option<RawDefaults>,
    recommender: Option<RawRecommender>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    user: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecommender {
    currency_symbol: Option<String>,
    top_categories: Option<usize>,
    volatility_factor: Option<f64>,
    savings_target_ratio: Option<f64>,
}

fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(defaults) = raw.defaults {
        config.default_user = defaults
            .user
            .map(|u| u.trim().to_lowercase())
            .filter(|u| !u.is_empty());
    }

    if let Some(rec) = raw.recommender {
        if let Some(symbol) = rec.currency_symbol {
            config.recommender.currency_symbol = symbol;
        }
        if let Some(n) = rec.top_categories {
            config.recommender.top_categories = n;
        }
        if let Some(factor) = rec.volatility_factor {
            if !factor.is_finite() || factor < 1.0 {
                return Err(Error::Config(format!(
                    "recommender.volatility_factor must be >= 1.0, got {}",
                    factor
                )));
            }
            config.recommender.volatility_factor = factor;
        }
        if let Some(ratio) = rec.savings_target_ratio {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(Error::Config(format!(
                    "recommender.savings_target_ratio must be between 0 and 1, got {}",
                    ratio
                )));
            }
            config.recommender.savings_target_ratio = ratio;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [defaults]
            user = " Me@Example.com "

            [recommender]
            currency_symbol = "$"
            top_categories = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.default_user.as_deref(), Some("me@example.com"));
        assert_eq!(config.recommender.currency_symbol, "$");
        assert_eq!(config.recommender.top_categories, 5);
        assert_eq!(config.recommender.volatility_factor, 1.2);
        assert_eq!(config.recommender.savings_target_ratio, 0.2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            parse_config("[recommender]\nvolatility_factor = 0.5"),
            Err(Error::Config(_))
        ));
        assert!(parse_config("[recommender]\nsavings_target_ratio = 1.5").is_err());
        assert!(parse_config("not = [valid").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[server]\nport = 80\n[recommender]\nextra = true").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[recommender]\ncurrency_symbol = \"€\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.recommender.currency_symbol, "€");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(Error::Config(_))));
    }
}

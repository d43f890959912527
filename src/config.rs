use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Engine settings read once at start-up. Every field has a default, so a
/// config file only needs the values it wants to change.
///
/// ```ron
/// (
///     data_dir: "data",
///     fallback_move: "tackle",
///     seed: Some(42),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding `species.ron`, `moves.ron`, `types.ron` and
    /// `experience.ron`.
    pub data_dir: PathBuf,
    /// Move substituted for unknown or unusable move names.
    pub fallback_move: String,
    /// A wild Pokemon is shiny with probability `1 / shiny_odds`.
    pub shiny_odds: u32,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Fixed seed for reproducible battles. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            data_dir: PathBuf::from("data"),
            fallback_move: "tackle".to_string(),
            shiny_odds: 8192,
            log_filter: "info".to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.shiny_odds == 0 {
            return Err(ConfigError::Invalid {
                field: "shiny_odds",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.fallback_move.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "fallback_move",
                reason: "must name a move".to_string(),
            });
        }
        Ok(())
    }

    /// Probability that a freshly generated Pokemon is shiny.
    pub fn shiny_chance(&self) -> f64 {
        1.0 / self.shiny_odds.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: EngineConfig = ron::from_str("(seed: Some(7), shiny_odds: 4096)").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.shiny_odds, 4096);
        assert_eq!(config.fallback_move, "tackle");
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_zero_shiny_odds_rejected() {
        let config = EngineConfig {
            shiny_odds: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "shiny_odds", .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::load(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

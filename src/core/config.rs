//! Engine configuration.
//!
//! Configuration covers how the engine is hosted (RNG seeding, how much
//! move history to keep in memory). It never changes the rules.
//!
//! ```toml
//! seed = 1234
//! history_limit = 500
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dice RNG seed. `None` seeds from OS entropy.
    /// Same seed produces the same sequence of throws.
    pub seed: Option<u64>,

    /// Maximum move records kept in the in-memory move log.
    /// `None` keeps every move of the current game.
    pub history_limit: Option<usize>,
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a bounded move log.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::Validation(
                "history_limit must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the dice RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.history_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default().with_seed(9).with_history_limit(20);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.history_limit, Some(20));
        assert_eq!(config.rng().seed(), 9);
    }

    #[test]
    fn test_from_toml() {
        let config = EngineConfig::from_toml_str("seed = 1234\nhistory_limit = 500\n").unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.history_limit, Some(500));

        let partial = EngineConfig::from_toml_str("seed = 5").unwrap();
        assert_eq!(partial.history_limit, None);
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let err = EngineConfig::from_toml_str("history_limit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = EngineConfig::from_toml_str("seed = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("senet.toml");
        std::fs::write(&path, "seed = 77").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(77));

        let missing = EngineConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::FileRead { .. }));
    }
}

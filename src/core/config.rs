//! Engine configuration.
//!
//! `MemoryConfig` carries the tunables of the deck formula and the
//! resolution timing. `Default` gives the reference values; builder
//! methods adjust single fields; JSON files may override any subset.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MemoryError, Result};

/// Engine configuration.
///
/// Pair count for a level is
/// `min(base_pairs + level * pairs_per_level, max_pairs_cap)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Pairs before any per-level growth (default: 2).
    pub base_pairs: u32,

    /// Pairs added for each level (default: 2).
    pub pairs_per_level: u32,

    /// Hard cap on pairs per deck (default: 12, i.e. 24 cards).
    pub max_pairs_cap: u32,

    /// Delay between the second flip and the match/no-match commit.
    pub resolve_delay_ms: u64,

    /// Delay between the final match notification and the success notification.
    pub success_delay_ms: u64,

    /// Highest level offered by level pickers. The engine itself accepts any level.
    pub max_selectable_level: u32,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_pairs: 2,
            pairs_per_level: 2,
            max_pairs_cap: 12,
            resolve_delay_ms: 1500,
            success_delay_ms: 500,
            max_selectable_level: 6,
            seed: None,
        }
    }
}

impl MemoryConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pair cap.
    #[must_use]
    pub fn with_max_pairs_cap(mut self, cap: u32) -> Self {
        self.max_pairs_cap = cap;
        self
    }

    /// Set the deck formula's base and per-level growth.
    #[must_use]
    pub fn with_pair_growth(mut self, base_pairs: u32, pairs_per_level: u32) -> Self {
        self.base_pairs = base_pairs;
        self.pairs_per_level = pairs_per_level;
        self
    }

    /// Set both resolution delays.
    #[must_use]
    pub fn with_delays(mut self, resolve: Duration, success: Duration) -> Self {
        self.resolve_delay_ms = duration_ms(resolve);
        self.success_delay_ms = duration_ms(success);
        self
    }

    /// Delay before a pending pair is committed.
    #[must_use]
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Delay between the final match and the success notification.
    #[must_use]
    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    /// Check that the configuration can produce playable decks.
    pub fn validate(&self) -> Result<()> {
        if self.max_pairs_cap == 0 {
            return Err(MemoryError::InvalidConfig(
                "max_pairs_cap must be at least 1".into(),
            ));
        }
        if self.max_selectable_level == 0 {
            return Err(MemoryError::InvalidConfig(
                "max_selectable_level must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MemoryError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MemoryConfig::default();

        assert_eq!(config.base_pairs, 2);
        assert_eq!(config.pairs_per_level, 2);
        assert_eq!(config.max_pairs_cap, 12);
        assert_eq!(config.resolve_delay(), Duration::from_millis(1500));
        assert_eq!(config.success_delay(), Duration::from_millis(500));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MemoryConfig::default()
            .with_seed(9)
            .with_max_pairs_cap(6)
            .with_pair_growth(1, 3)
            .with_delays(Duration::from_millis(10), Duration::from_millis(5));

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_pairs_cap, 6);
        assert_eq!(config.base_pairs, 1);
        assert_eq!(config.pairs_per_level, 3);
        assert_eq!(config.resolve_delay_ms, 10);
        assert_eq!(config.success_delay_ms, 5);
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = MemoryConfig::default().with_max_pairs_cap(0);
        assert!(matches!(config.validate(), Err(MemoryError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "resolve_delay_ms": 800, "seed": 3 }"#;
        let config = MemoryConfig::from_json_str(json).unwrap();

        assert_eq!(config.resolve_delay_ms, 800);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_pairs_cap, 12);
        assert_eq!(config.success_delay_ms, 500);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            MemoryConfig::from_json_str("{ not json"),
            Err(MemoryError::ConfigParse(_))
        ));
        assert!(matches!(
            MemoryConfig::from_json_str(r#"{ "max_pairs_cap": 0 }"#),
            Err(MemoryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = MemoryConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MemoryError::ConfigIo { .. }));
    }
}

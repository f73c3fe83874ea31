//! Configuration management for simulation parameters.
//!
//! Strongly-typed sections that map onto `reefsim.toml`. Every field has a
//! default, so a partial file only overrides what it names.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `reefsim.toml` (overrides defaults)
//! 3. Command-line flags such as `--seed` and `--steps` (override the file)
//!
//! ## Example `reefsim.toml`
//!
//! ```toml
//! [world]
//! depth = 80
//! width = 120
//! seed = 42
//!
//! [clock]
//! day_duration = 8
//! night_duration = 2
//! tide_interval = 25
//!
//! [population]
//! shark = 0.02
//! sardine = 0.08
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid dimensions and run length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub depth: usize,
    pub width: usize,
    /// `None` draws a fresh seed at startup.
    pub seed: Option<u64>,
    /// Steps for a headless run.
    pub steps: u64,
    /// How often, in steps, a summary line is logged. Zero disables it.
    pub log_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            depth: 80,
            width: 120,
            seed: None,
            steps: 4000,
            log_interval: 100,
        }
    }
}

/// Day/night cycle and tide control.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub day_duration: u32,
    pub night_duration: u32,
    /// The tide turns every this many steps. Zero leaves it where it started.
    pub tide_interval: u64,
    pub start_high_tide: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            day_duration: 8,
            night_duration: 2,
            tide_interval: 25,
            start_high_tide: false,
        }
    }
}

/// Per-cell probability of seeding each species. Checked cumulatively in
/// declaration order, so the sum must stay at or below one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub shark: f64,
    pub whale: f64,
    pub clownfish: f64,
    pub salmon: f64,
    pub sardine: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            shark: 0.02,
            whale: 0.02,
            clownfish: 0.08,
            salmon: 0.08,
            sardine: 0.08,
        }
    }
}

impl PopulationConfig {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.shark + self.whale + self.clownfish + self.salmon + self.sardine
    }

    fn each(&self) -> [(&'static str, f64); 5] {
        [
            ("shark", self.shark),
            ("whale", self.whale),
            ("clownfish", self.clownfish),
            ("salmon", self.salmon),
            ("sardine", self.sardine),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Milliseconds between steps in the interactive view.
    pub tick_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { tick_ms: 100 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub clock: ClockConfig,
    pub population: PopulationConfig,
    pub view: ViewConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Field dimensions must be positive and at most 1000
    /// - The day must last at least one step
    /// - Creation probabilities must each be in [0.0, 1.0] and sum to at most 1.0
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.depth > 0, "Field depth must be positive");
        anyhow::ensure!(self.world.depth <= 1000, "Field depth too large (max 1000)");
        anyhow::ensure!(self.world.width > 0, "Field width must be positive");
        anyhow::ensure!(self.world.width <= 1000, "Field width too large (max 1000)");

        // Clock validation
        anyhow::ensure!(
            self.clock.day_duration > 0,
            "Day duration must be positive"
        );
        anyhow::ensure!(
            self.clock
                .day_duration
                .checked_add(self.clock.night_duration)
                .is_some(),
            "Day and night durations overflow"
        );

        // Population validation
        for (name, probability) in self.population.each() {
            anyhow::ensure!(
                (0.0..=1.0).contains(&probability),
                "Creation probability for {name} must be in [0.0, 1.0]"
            );
        }
        anyhow::ensure!(
            self.population.total() <= 1.0,
            "Creation probabilities sum to {:.3} (max 1.0)",
            self.population.total()
        );

        // View validation
        anyhow::ensure!(self.view.tick_ms > 0, "View tick must be positive");
        anyhow::ensure!(self.view.tick_ms <= 10_000, "View tick too long (max 10s)");

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse or validate is
    /// an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Hash of every parameter that shapes a run, for tagging logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.clock).as_bytes());
        hasher.update(format!("{:?}", self.population).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_depth() {
        let config = AppConfig {
            world: WorldConfig {
                depth: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_width() {
        let config = AppConfig {
            world: WorldConfig {
                width: 1001,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_day_rejected() {
        let config = AppConfig {
            clock: ClockConfig {
                day_duration: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_probabilities_must_fit() {
        let config = AppConfig {
            population: PopulationConfig {
                shark: 0.5,
                whale: 0.5,
                clownfish: 0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            population: PopulationConfig {
                salmon: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [world]
            depth = 10
            seed = 3

            [clock]
            start_high_tide = true
            "#,
        )
        .unwrap();
        assert_eq!(config.world.depth, 10);
        assert_eq!(config.world.width, 120);
        assert_eq!(config.world.seed, Some(3));
        assert!(config.clock.start_high_tide);
        assert_eq!(config.clock.day_duration, 8);
        assert_eq!(config.population, PopulationConfig::default());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(AppConfig::from_toml("[world]\ndepth = 0\n").is_err());
        assert!(AppConfig::from_toml("[world\n").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist/reefsim.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let mut config3 = AppConfig::default();
        config3.world.seed = Some(1);
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }

    #[test]
    fn test_view_does_not_change_fingerprint() {
        let mut config = AppConfig::default();
        let before = config.fingerprint();
        config.view.tick_ms = 500;
        assert_eq!(before, config.fingerprint());
    }
}

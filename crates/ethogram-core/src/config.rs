//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. Each reward variant carries its own default parameter set;
//! validation fails fast at simulator construction.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Which reward semantics a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardMode {
    /// Reward equals the chosen behavior's current drive level.
    DriveLinked,
    /// Reward is a uniform draw from a fixed per-drive range.
    RangedRandom,
}

impl RewardMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RewardMode::DriveLinked => "drive_linked",
            RewardMode::RangedRandom => "ranged_random",
        }
    }
}

/// Learning parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningParams {
    /// Learning rate, in (0,1]. Higher adapts faster to rewards.
    pub alpha: f32,
    /// Discount factor, in [0,1]. Higher weighs future rewards more.
    pub gamma: f32,
    /// Exploration rate, in [0,1]. Probability of a random behavior.
    pub epsilon: f32,
}

impl Default for LearningParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            gamma: 0.9,
            epsilon: 0.7,
        }
    }
}

/// Clock parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Total simulated hours; the run covers hour 0 through this inclusive.
    pub horizon_hours: u64,
    /// Hours per tick.
    pub tick_hours: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        // One week at three-hour ticks.
        Self {
            horizon_hours: 168,
            tick_hours: 3,
        }
    }
}

/// Drift and relief draw ranges for the per-tick drive update
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveRanges {
    pub drift_min: f32,
    pub drift_max: f32,
    pub relief_min: f32,
    pub relief_max: f32,
}

impl Default for DriveRanges {
    fn default() -> Self {
        Self {
            drift_min: 0.01,
            drift_max: 0.1,
            relief_min: 0.01,
            relief_max: 0.5,
        }
    }
}

/// Reward strategy parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub mode: RewardMode,
    /// Draw range for the ranged-random mode.
    pub range_min: f32,
    pub range_max: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            mode: RewardMode::DriveLinked,
            range_min: 0.0,
            range_max: 1.0,
        }
    }
}

/// Top-level simulator configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub params: LearningParams,
    pub schedule: ScheduleConfig,
    pub drives: DriveRanges,
    pub reward: RewardConfig,
}

impl SimConfig {
    /// Defaults for the drive-linked variant: one week at 3h ticks,
    /// alpha 0.5, gamma 0.9, epsilon 0.7, gentle drift and relief.
    pub fn drive_linked() -> Self {
        Self::default()
    }

    /// Defaults for the ranged-random variant: two weeks at 2h ticks,
    /// alpha 0.9, gamma 0.7, epsilon 0.8, more volatile drift and relief.
    pub fn ranged_random() -> Self {
        Self {
            params: LearningParams {
                alpha: 0.9,
                gamma: 0.7,
                epsilon: 0.8,
            },
            schedule: ScheduleConfig {
                horizon_hours: 336,
                tick_hours: 2,
            },
            drives: DriveRanges {
                drift_min: 0.01,
                drift_max: 0.2,
                relief_min: 0.01,
                relief_max: 0.8,
            },
            reward: RewardConfig {
                mode: RewardMode::RangedRandom,
                range_min: 0.0,
                range_max: 1.0,
            },
        }
    }

    /// Defaults for the given reward mode.
    pub fn for_mode(mode: RewardMode) -> Self {
        match mode {
            RewardMode::DriveLinked => Self::drive_linked(),
            RewardMode::RangedRandom => Self::ranged_random(),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from the default path, or falls back to the
    /// drive-linked defaults if it cannot be read.
    pub fn load_or_default() -> Self {
        Self::from_file(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates every tunable, failing fast with a descriptive error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.params;
        if !(p.alpha > 0.0 && p.alpha <= 1.0) {
            return Err(ConfigError::ParamOutOfRange {
                name: "alpha",
                bounds: "(0, 1]",
                value: p.alpha,
            });
        }
        if !(0.0..=1.0).contains(&p.gamma) {
            return Err(ConfigError::ParamOutOfRange {
                name: "gamma",
                bounds: "[0, 1]",
                value: p.gamma,
            });
        }
        if !(0.0..=1.0).contains(&p.epsilon) {
            return Err(ConfigError::ParamOutOfRange {
                name: "epsilon",
                bounds: "[0, 1]",
                value: p.epsilon,
            });
        }

        let d = &self.drives;
        if !(d.drift_min > 0.0 && d.drift_min < d.drift_max) {
            return Err(ConfigError::EmptyRange {
                name: "drift",
                min: d.drift_min,
                max: d.drift_max,
            });
        }
        if !(d.relief_min > 0.0 && d.relief_min < d.relief_max) {
            return Err(ConfigError::EmptyRange {
                name: "relief",
                min: d.relief_min,
                max: d.relief_max,
            });
        }

        let r = &self.reward;
        if !(r.range_min < r.range_max) {
            return Err(ConfigError::EmptyRange {
                name: "reward",
                min: r.range_min,
                max: r.range_max,
            });
        }

        // A zero-hour horizon is valid: the inclusive loop bound still runs
        // one tick at hour 0. Only the increment must be nonzero.
        if self.schedule.tick_hours == 0 {
            return Err(ConfigError::ZeroDuration { name: "tick_hours" });
        }

        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{name} must be in {bounds}, got {value}")]
    ParamOutOfRange {
        name: &'static str,
        bounds: &'static str,
        value: f32,
    },
    #[error("{name} range [{min}, {max}) is empty or inverted")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be nonzero")]
    ZeroDuration { name: &'static str },
}

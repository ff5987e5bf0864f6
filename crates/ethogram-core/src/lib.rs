//! Core simulation logic for the ethogram behavior simulator.
//!
//! A single organism with four internal drives selects among four behaviors
//! epsilon-greedily over a table of running value estimates, updates the
//! chosen estimate with a single-step bandit-style rule, and records
//! normalized snapshots of drive levels and behavior occupancy every tick.

pub mod behavior;
pub mod config;
pub mod drives;
pub mod output;
pub mod reward;
pub mod simulator;
pub mod values;

pub use behavior::{Behavior, Drive};
pub use config::{
    ConfigError, DriveRanges, LearningParams, RewardConfig, RewardMode, ScheduleConfig, SimConfig,
    DEFAULT_TUNING_PATH,
};
pub use drives::{BehaviorTally, DriveVector};
pub use output::{write_report, SeriesWriter};
pub use reward::{DriveLinked, RangedRandom, RewardStrategy};
pub use simulator::Simulator;
pub use values::{BehaviorValues, DriveValueEntry, DriveValues, ValueModel};

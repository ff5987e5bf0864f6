//! Shared clock and snapshot types for the ethogram simulator.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the core simulator crate.

pub mod clock;
pub mod snapshot;

// Re-export clock types
pub use clock::{ParseTimeError, SimClock, SimTime, SimTimestamp, HOURS_PER_DAY};

// Re-export snapshot types
pub use snapshot::{
    generate_run_id, BehaviorProportions, DriveLevels, DriveProportions, ParamsSnapshot,
    RunReport, RunSummary, TickSnapshot,
};

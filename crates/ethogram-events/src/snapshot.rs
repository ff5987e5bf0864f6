//! Snapshot Types
//!
//! Serialization structs for per-tick snapshots and end-of-run reports.
//!
//! Snapshots capture the normalized state of the organism at a point in
//! time, used for analysis and visualization downstream.

use serde::{Deserialize, Serialize};

use crate::SimTimestamp;

/// Generates a run ID with the given sequence number.
pub fn generate_run_id(sequence: u64) -> String {
    format!("run_{:06}", sequence)
}

/// Normalized drive levels, one field per drive.
///
/// Fields sum to 1 whenever the underlying drive total is nonzero; a
/// zero-total tick is recorded as all zeros rather than dividing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveProportions {
    pub hunger: f32,
    pub boredom: f32,
    pub loneliness: f32,
    pub tiredness: f32,
}

impl DriveProportions {
    /// Sum of all proportions.
    pub fn sum(&self) -> f32 {
        self.hunger + self.boredom + self.loneliness + self.tiredness
    }
}

/// Normalized behavior occupancy, one field per behavior.
///
/// Each field is the fraction of ticks so far in which that behavior was
/// selected. Fields sum to 1 once at least one tick has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorProportions {
    pub feeding: f32,
    pub exploring: f32,
    pub socializing: f32,
    pub resting: f32,
}

impl BehaviorProportions {
    /// Sum of all proportions.
    pub fn sum(&self) -> f32 {
        self.feeding + self.exploring + self.socializing + self.resting
    }
}

/// One entry in the append-only snapshot log, recorded every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub timestamp: SimTimestamp,
    pub drives: DriveProportions,
    pub behaviors: BehaviorProportions,
}

/// Raw (unnormalized) drive levels, one field per drive, each in [0,1].
///
/// Unlike [`DriveProportions`], these carry no sum-to-1 contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveLevels {
    pub hunger: f32,
    pub boredom: f32,
    pub loneliness: f32,
    pub tiredness: f32,
}

/// The tunable parameters a run was annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamsSnapshot {
    /// Learning rate.
    pub alpha: f32,
    /// Discount factor.
    pub gamma: f32,
    /// Exploration rate.
    pub epsilon: f32,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub seed: u64,
    /// Reward variant the run was configured with.
    pub reward_mode: String,
    pub params: ParamsSnapshot,
    pub ticks_run: u64,
    /// Drive levels at the end of the run.
    pub final_drives: DriveLevels,
    /// Value estimates at the end of the run, in behavior order.
    pub final_estimates: Vec<f32>,
}

/// A full run report: summary plus the complete snapshot series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub series: Vec<TickSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimTime;

    #[test]
    fn test_run_id_format() {
        assert_eq!(generate_run_id(0), "run_000000");
        assert_eq!(generate_run_id(42), "run_000042");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = TickSnapshot {
            timestamp: SimTimestamp::new(1, SimTime::from_hours(3)),
            drives: DriveProportions {
                hunger: 0.4,
                boredom: 0.2,
                loneliness: 0.2,
                tiredness: 0.2,
            },
            behaviors: BehaviorProportions {
                feeding: 1.0,
                ..BehaviorProportions::default()
            },
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"day_1.hour_03\""));

        let back: TickSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_proportion_sums() {
        let drives = DriveProportions {
            hunger: 0.25,
            boredom: 0.25,
            loneliness: 0.25,
            tiredness: 0.25,
        };
        assert!((drives.sum() - 1.0).abs() < 1e-6);
        assert_eq!(BehaviorProportions::default().sum(), 0.0);
    }
}

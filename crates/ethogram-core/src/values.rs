//! Value Tables
//!
//! Running value estimates used for greedy behavior selection, in the two
//! shapes the reward variants require: keyed by behavior (drive-linked
//! variant) or keyed by drive with an attached behavior and reward range
//! (ranged-random variant). Both share the same single-step update rule:
//!
//! ```text
//! new = (1 - alpha) * old + alpha * (reward + gamma * max_over_all_estimates)
//! ```
//!
//! The max term is computed once over the whole table before any entry is
//! mutated and applied uniformly. There is one global state, so this is a
//! bandit-style estimator, not a full state-action Q table.

use rand::Rng;

use crate::behavior::{Behavior, Drive};

/// Value table keyed by behavior, zero-initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorValues {
    estimates: [f32; Behavior::COUNT],
}

impl BehaviorValues {
    pub fn zeroed() -> Self {
        Self {
            estimates: [0.0; Behavior::COUNT],
        }
    }

    /// Current estimate for a behavior.
    pub fn get(&self, behavior: Behavior) -> f32 {
        self.estimates[behavior.index()]
    }

    /// Maximum estimate across all behaviors.
    pub fn max_estimate(&self) -> f32 {
        self.estimates.iter().copied().fold(f32::MIN, f32::max)
    }

    /// The behavior with the maximal estimate; first maximum in enumeration
    /// order wins on ties.
    pub fn greedy(&self) -> Behavior {
        let mut best = Behavior::ALL[0];
        let mut best_estimate = self.get(best);
        for behavior in Behavior::ALL {
            if self.get(behavior) > best_estimate {
                best = behavior;
                best_estimate = self.get(behavior);
            }
        }
        best
    }

    /// Applies the single-step update to exactly the chosen behavior's entry.
    pub fn update(&mut self, behavior: Behavior, reward: f32, alpha: f32, gamma: f32) {
        let shared_max = self.max_estimate();
        let old = self.estimates[behavior.index()];
        self.estimates[behavior.index()] =
            (1.0 - alpha) * old + alpha * (reward + gamma * shared_max);
    }

    /// Estimates in behavior order.
    pub fn estimates(&self) -> Vec<f32> {
        self.estimates.to_vec()
    }
}

/// One entry of the drive-keyed value table.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveValueEntry {
    /// Running value estimate.
    pub estimate: f32,
    /// Range rewards are drawn from when this entry's behavior is chosen.
    pub reward_range: (f32, f32),
    /// The behavior associated with this drive.
    pub behavior: Behavior,
}

/// Value table keyed by drive, with an attached behavior per entry.
///
/// Estimates are initialized uniformly at random. Updates scan every entry
/// for a matching behavior rather than assuming a direct key lookup, so the
/// rule stays correct if the mapping ever becomes one-to-many.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveValues {
    entries: [DriveValueEntry; Drive::COUNT],
}

impl DriveValues {
    /// Builds the default table: one entry per drive, associated with the
    /// drive's behavior, estimates drawn uniformly in [0,1) in drive order.
    pub fn random<R: Rng>(rng: &mut R, reward_range: (f32, f32)) -> Self {
        Self {
            entries: Drive::ALL.map(|drive| DriveValueEntry {
                estimate: rng.gen(),
                reward_range,
                behavior: drive.behavior(),
            }),
        }
    }

    /// Builds a table from explicit entries, in drive order.
    pub fn from_entries(entries: [DriveValueEntry; Drive::COUNT]) -> Self {
        Self { entries }
    }

    /// The entry for a drive.
    pub fn entry(&self, drive: Drive) -> &DriveValueEntry {
        &self.entries[drive.index()]
    }

    /// Entries in drive order.
    pub fn entries(&self) -> &[DriveValueEntry; Drive::COUNT] {
        &self.entries
    }

    /// Maximum estimate across all entries.
    pub fn max_estimate(&self) -> f32 {
        self.entries
            .iter()
            .map(|e| e.estimate)
            .fold(f32::MIN, f32::max)
    }

    /// The behavior attached to the maximal-estimate entry; first maximum in
    /// drive order wins on ties.
    pub fn greedy(&self) -> Behavior {
        let mut best = &self.entries[0];
        for entry in &self.entries {
            if entry.estimate > best.estimate {
                best = entry;
            }
        }
        best.behavior
    }

    /// Applies the single-step update to every entry whose behavior matches.
    ///
    /// The max term is taken once before any mutation.
    pub fn update_for_behavior(&mut self, behavior: Behavior, reward: f32, alpha: f32, gamma: f32) {
        let shared_max = self.max_estimate();
        for entry in self.entries.iter_mut() {
            if entry.behavior == behavior {
                entry.estimate =
                    (1.0 - alpha) * entry.estimate + alpha * (reward + gamma * shared_max);
            }
        }
    }

    /// Estimates in drive order.
    pub fn estimates(&self) -> Vec<f32> {
        self.entries.iter().map(|e| e.estimate).collect()
    }
}

/// The value table a simulator runs with, one shape per reward variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueModel {
    /// Drive-linked variant: estimates keyed by behavior.
    Behavior(BehaviorValues),
    /// Ranged-random variant: estimates keyed by drive.
    Drive(DriveValues),
}

impl ValueModel {
    /// Greedy behavior under the current estimates.
    pub fn greedy(&self) -> Behavior {
        match self {
            ValueModel::Behavior(table) => table.greedy(),
            ValueModel::Drive(table) => table.greedy(),
        }
    }

    /// Applies the single-step update for the chosen behavior.
    pub fn update(&mut self, behavior: Behavior, reward: f32, alpha: f32, gamma: f32) {
        match self {
            ValueModel::Behavior(table) => table.update(behavior, reward, alpha, gamma),
            ValueModel::Drive(table) => table.update_for_behavior(behavior, reward, alpha, gamma),
        }
    }

    /// Estimates in canonical (behavior/drive) order.
    pub fn estimates(&self) -> Vec<f32> {
        match self {
            ValueModel::Behavior(table) => table.estimates(),
            ValueModel::Drive(table) => table.estimates(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_greedy_tie_break_first_in_order() {
        let table = BehaviorValues::zeroed();
        assert_eq!(table.greedy(), Behavior::Feeding);

        let mut table = BehaviorValues::zeroed();
        table.update(Behavior::Socializing, 1.0, 0.5, 0.0);
        table.update(Behavior::Resting, 1.0, 0.5, 0.0);
        // Both updated entries now tie at 0.5; first in order wins.
        assert_eq!(table.greedy(), Behavior::Socializing);
    }

    #[test]
    fn test_greedy_strict_maximum() {
        let mut table = BehaviorValues::zeroed();
        table.update(Behavior::Resting, 0.8, 1.0, 0.0);
        assert_eq!(table.greedy(), Behavior::Resting);
    }

    #[test]
    fn test_behavior_update_equation() {
        let mut table = BehaviorValues::zeroed();
        table.update(Behavior::Feeding, 1.0, 0.5, 0.9);
        assert_eq!(table.get(Behavior::Feeding), 0.5);

        // Second update sees the shared max of 0.5.
        let expected = (1.0 - 0.5) * 0.0 + 0.5 * (0.2 + 0.9 * 0.5);
        table.update(Behavior::Exploring, 0.2, 0.5, 0.9);
        assert_eq!(table.get(Behavior::Exploring), expected);
    }

    #[test]
    fn test_drive_update_only_touches_matching_entries() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut table = DriveValues::random(&mut rng, (0.0, 1.0));
        let before = table.estimates();

        table.update_for_behavior(Behavior::Exploring, 0.5, 0.9, 0.7);

        let after = table.estimates();
        for drive in Drive::ALL {
            let i = drive.index();
            if drive.behavior() == Behavior::Exploring {
                let shared_max = before.iter().copied().fold(f32::MIN, f32::max);
                let expected = (1.0 - 0.9) * before[i] + 0.9 * (0.5 + 0.7 * shared_max);
                assert_eq!(after[i], expected);
            } else {
                assert_eq!(after[i], before[i]);
            }
        }
    }

    #[test]
    fn test_drive_update_scans_one_to_many() {
        // Two entries mapped to the same behavior both receive the update,
        // each from its own prior estimate but the same shared max.
        let entry = |estimate: f32, behavior: Behavior| DriveValueEntry {
            estimate,
            reward_range: (0.0, 1.0),
            behavior,
        };
        let mut table = DriveValues::from_entries([
            entry(0.2, Behavior::Feeding),
            entry(0.6, Behavior::Feeding),
            entry(0.9, Behavior::Socializing),
            entry(0.1, Behavior::Resting),
        ]);

        table.update_for_behavior(Behavior::Feeding, 0.5, 0.5, 0.9);

        let shared_max = 0.9f32;
        let target = 0.5f32 * (0.5 + 0.9 * shared_max);
        assert_eq!(table.entry(Drive::Hunger).estimate, 0.5 * 0.2 + target);
        assert_eq!(table.entry(Drive::Boredom).estimate, 0.5 * 0.6 + target);
        assert_eq!(table.entry(Drive::Loneliness).estimate, 0.9);
        assert_eq!(table.entry(Drive::Tiredness).estimate, 0.1);
    }

    #[test]
    fn test_drive_greedy_returns_attached_behavior() {
        let mut rng = SmallRng::seed_from_u64(11);
        let table = DriveValues::random(&mut rng, (0.0, 1.0));

        let greedy = table.greedy();
        let max = table.max_estimate();
        let winning_drive = Drive::ALL
            .into_iter()
            .find(|d| table.entry(*d).estimate == max)
            .unwrap();
        assert_eq!(greedy, winning_drive.behavior());
    }
}

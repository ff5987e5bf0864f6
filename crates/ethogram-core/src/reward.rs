//! Reward Strategies
//!
//! The two reward semantics the simulator can run with, behind one trait so
//! a single simulator serves both. The variant is selected by configuration.

use rand::{Rng, RngCore};

use crate::behavior::Behavior;
use crate::config::RewardMode;
use crate::drives::DriveVector;
use crate::values::ValueModel;

/// Computes the scalar reward for a chosen behavior.
pub trait RewardStrategy {
    fn reward(
        &self,
        behavior: Behavior,
        drives: &DriveVector,
        values: &ValueModel,
        rng: &mut dyn RngCore,
    ) -> f32;
}

/// Drive-linked reward: the current level of the behavior's associated
/// drive. Always in [0,1] since drives are clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveLinked;

impl RewardStrategy for DriveLinked {
    fn reward(
        &self,
        behavior: Behavior,
        drives: &DriveVector,
        _values: &ValueModel,
        _rng: &mut dyn RngCore,
    ) -> f32 {
        drives.get(behavior.drive())
    }
}

/// Ranged-random reward: a uniform draw from the reward range attached to
/// the drive entry whose behavior matches, found by scanning all entries.
///
/// Deliberately independent of the actual drive level.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangedRandom;

impl RewardStrategy for RangedRandom {
    fn reward(
        &self,
        behavior: Behavior,
        _drives: &DriveVector,
        values: &ValueModel,
        rng: &mut dyn RngCore,
    ) -> f32 {
        if let ValueModel::Drive(table) = values {
            for entry in table.entries() {
                if entry.behavior == behavior {
                    let (lo, hi) = entry.reward_range;
                    return rng.gen_range(lo..hi);
                }
            }
        }
        // No matching entry: no reward.
        0.0
    }
}

/// Builds the strategy a reward mode selects.
pub fn for_mode(mode: RewardMode) -> Box<dyn RewardStrategy> {
    match mode {
        RewardMode::DriveLinked => Box::new(DriveLinked),
        RewardMode::RangedRandom => Box::new(RangedRandom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{BehaviorValues, DriveValues};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_drive_linked_returns_exact_drive_level() {
        let mut rng = SmallRng::seed_from_u64(1);
        let drives = DriveVector::new([0.9, 0.1, 0.3, 0.7]);
        let values = ValueModel::Behavior(BehaviorValues::zeroed());

        let strategy = DriveLinked;
        assert_eq!(
            strategy.reward(Behavior::Feeding, &drives, &values, &mut rng),
            0.9
        );
        assert_eq!(
            strategy.reward(Behavior::Resting, &drives, &values, &mut rng),
            0.7
        );
    }

    #[test]
    fn test_ranged_random_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(1);
        let drives = DriveVector::new([0.0; 4]);
        let table = DriveValues::random(&mut rng, (0.25, 0.75));
        let values = ValueModel::Drive(table);

        let strategy = RangedRandom;
        for _ in 0..100 {
            for behavior in Behavior::ALL {
                let reward = strategy.reward(behavior, &drives, &values, &mut rng);
                assert!((0.25..0.75).contains(&reward));
            }
        }
    }

    #[test]
    fn test_ranged_random_without_matching_entry_is_zero() {
        let mut rng = SmallRng::seed_from_u64(1);
        let drives = DriveVector::new([0.5; 4]);
        // Wrong table shape carries no drive entries to scan.
        let values = ValueModel::Behavior(BehaviorValues::zeroed());

        let strategy = RangedRandom;
        assert_eq!(
            strategy.reward(Behavior::Feeding, &drives, &values, &mut rng),
            0.0
        );
    }
}

//! Drive Vector and Behavior Tally
//!
//! The organism's internal state: four drive levels clamped to [0,1] and a
//! monotone count of how often each behavior has been chosen. Both expose a
//! zero-total-safe normalized view for the snapshot log.

use rand::Rng;

use ethogram_events::{BehaviorProportions, DriveProportions};

use crate::behavior::{Behavior, Drive};

/// Fixed-size mapping from drive to its current level, indexed by
/// the drive enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveVector {
    levels: [f32; Drive::COUNT],
}

impl DriveVector {
    /// Creates a drive vector with the given levels, in drive order.
    pub fn new(levels: [f32; Drive::COUNT]) -> Self {
        Self { levels }
    }

    /// Initializes every drive uniformly at random in [0,1), drawing in
    /// drive order.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut levels = [0.0f32; Drive::COUNT];
        for level in levels.iter_mut() {
            *level = rng.gen();
        }
        Self { levels }
    }

    /// Current level of a drive.
    pub fn get(&self, drive: Drive) -> f32 {
        self.levels[drive.index()]
    }

    /// Raw levels in drive order.
    pub fn levels(&self) -> [f32; Drive::COUNT] {
        self.levels
    }

    /// Adds an independent uniform draw from `[min, max)` to every drive,
    /// in drive order, flooring each at zero.
    pub fn drift<R: Rng>(&mut self, rng: &mut R, min: f32, max: f32) {
        for level in self.levels.iter_mut() {
            *level += rng.gen_range(min..max);
            *level = level.max(0.0);
        }
    }

    /// Subtracts a uniform draw from `[min, max)` from the given drive.
    ///
    /// May leave the level negative; callers clamp afterwards.
    pub fn relieve<R: Rng>(&mut self, drive: Drive, rng: &mut R, min: f32, max: f32) {
        self.levels[drive.index()] -= rng.gen_range(min..max);
    }

    /// Clamps every drive into [0,1].
    pub fn clamp_unit(&mut self) {
        for level in self.levels.iter_mut() {
            *level = level.clamp(0.0, 1.0);
        }
    }

    /// Sum of all drive levels.
    pub fn total(&self) -> f32 {
        self.levels.iter().sum()
    }

    /// Normalized view of the drive vector.
    ///
    /// Returns all zeros when the total is exactly zero instead of dividing.
    pub fn normalized(&self) -> DriveProportions {
        let total = self.total();
        if total == 0.0 {
            return DriveProportions::default();
        }
        DriveProportions {
            hunger: self.get(Drive::Hunger) / total,
            boredom: self.get(Drive::Boredom) / total,
            loneliness: self.get(Drive::Loneliness) / total,
            tiredness: self.get(Drive::Tiredness) / total,
        }
    }
}

/// Cumulative count of ticks each behavior was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehaviorTally {
    counts: [u64; Behavior::COUNT],
}

impl BehaviorTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one selection of the given behavior.
    pub fn record(&mut self, behavior: Behavior) {
        self.counts[behavior.index()] += 1;
    }

    /// Ticks in which the given behavior was selected.
    pub fn count(&self, behavior: Behavior) -> u64 {
        self.counts[behavior.index()]
    }

    /// Total ticks recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Normalized occupancy per behavior.
    ///
    /// Returns all zeros before the first recorded tick instead of dividing.
    pub fn normalized(&self) -> BehaviorProportions {
        let total = self.total();
        if total == 0 {
            return BehaviorProportions::default();
        }
        let total = total as f32;
        BehaviorProportions {
            feeding: self.count(Behavior::Feeding) as f32 / total,
            exploring: self.count(Behavior::Exploring) as f32 / total,
            socializing: self.count(Behavior::Socializing) as f32 / total,
            resting: self.count(Behavior::Resting) as f32 / total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_levels_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(7);
        let drives = DriveVector::random(&mut rng);
        for level in drives.levels() {
            assert!((0.0..1.0).contains(&level));
        }
    }

    #[test]
    fn test_drift_raises_every_drive() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut drives = DriveVector::new([0.5; 4]);
        drives.drift(&mut rng, 0.01, 0.1);
        for level in drives.levels() {
            assert!(level > 0.5 && level < 0.6);
        }
    }

    #[test]
    fn test_relieve_then_clamp_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut drives = DriveVector::new([0.05, 0.9, 0.9, 0.9]);
        drives.relieve(Drive::Hunger, &mut rng, 0.4, 0.5);
        drives.clamp_unit();
        assert_eq!(drives.get(Drive::Hunger), 0.0);
        for level in drives.levels() {
            assert!((0.0..=1.0).contains(&level));
        }
    }

    #[test]
    fn test_normalized_sums_to_one() {
        let drives = DriveVector::new([0.9, 0.1, 0.3, 0.7]);
        let proportions = drives.normalized();
        assert!((proportions.sum() - 1.0).abs() < 1e-5);
        assert!(proportions.hunger > proportions.boredom);
    }

    #[test]
    fn test_normalized_zero_total_is_all_zero() {
        let drives = DriveVector::new([0.0; 4]);
        assert_eq!(drives.normalized(), DriveProportions::default());
    }

    #[test]
    fn test_tally_record_and_normalize() {
        let mut tally = BehaviorTally::new();
        assert_eq!(tally.normalized(), BehaviorProportions::default());

        tally.record(Behavior::Feeding);
        tally.record(Behavior::Feeding);
        tally.record(Behavior::Resting);

        assert_eq!(tally.count(Behavior::Feeding), 2);
        assert_eq!(tally.total(), 3);

        let proportions = tally.normalized();
        assert!((proportions.sum() - 1.0).abs() < 1e-6);
        assert!((proportions.feeding - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(proportions.exploring, 0.0);
    }
}

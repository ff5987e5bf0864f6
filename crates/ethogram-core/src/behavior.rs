//! Behavior and Drive Enumerations
//!
//! The closed set of behaviors the organism can take and the internal drives
//! they relieve. Each behavior relieves exactly one drive; the mapping is a
//! static invariant rather than a runtime lookup. Iteration order over
//! `ALL` is the deterministic tie-break order for greedy selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete action the organism can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    Feeding,
    Exploring,
    Socializing,
    Resting,
}

impl Behavior {
    /// All behaviors in the fixed enumeration order.
    pub const ALL: [Behavior; 4] = [
        Behavior::Feeding,
        Behavior::Exploring,
        Behavior::Socializing,
        Behavior::Resting,
    ];

    /// Number of behaviors in the closed set.
    pub const COUNT: usize = 4;

    /// The drive this behavior relieves.
    pub fn drive(self) -> Drive {
        match self {
            Behavior::Feeding => Drive::Hunger,
            Behavior::Exploring => Drive::Boredom,
            Behavior::Socializing => Drive::Loneliness,
            Behavior::Resting => Drive::Tiredness,
        }
    }

    /// Position in the fixed enumeration order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Feeding => write!(f, "feeding"),
            Behavior::Exploring => write!(f, "exploring"),
            Behavior::Socializing => write!(f, "socializing"),
            Behavior::Resting => write!(f, "resting"),
        }
    }
}

/// An internal scalar need in [0,1]; higher means more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drive {
    Hunger,
    Boredom,
    Loneliness,
    Tiredness,
}

impl Drive {
    /// All drives, ordered to match `Behavior::ALL`.
    pub const ALL: [Drive; 4] = [
        Drive::Hunger,
        Drive::Boredom,
        Drive::Loneliness,
        Drive::Tiredness,
    ];

    /// Number of drives in the closed set.
    pub const COUNT: usize = 4;

    /// The behavior that relieves this drive.
    pub fn behavior(self) -> Behavior {
        match self {
            Drive::Hunger => Behavior::Feeding,
            Drive::Boredom => Behavior::Exploring,
            Drive::Loneliness => Behavior::Socializing,
            Drive::Tiredness => Behavior::Resting,
        }
    }

    /// Position in the fixed enumeration order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drive::Hunger => write!(f, "hunger"),
            Drive::Boredom => write!(f, "boredom"),
            Drive::Loneliness => write!(f, "loneliness"),
            Drive::Tiredness => write!(f, "tiredness"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_one_correspondence() {
        for behavior in Behavior::ALL {
            assert_eq!(behavior.drive().behavior(), behavior);
        }
        for drive in Drive::ALL {
            assert_eq!(drive.behavior().drive(), drive);
        }
    }

    #[test]
    fn test_enumeration_orders_match() {
        for (behavior, drive) in Behavior::ALL.iter().zip(Drive::ALL.iter()) {
            assert_eq!(behavior.drive(), *drive);
            assert_eq!(behavior.index(), drive.index());
        }
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Behavior::Socializing).unwrap(),
            "\"socializing\""
        );
        assert_eq!(
            serde_json::from_str::<Drive>("\"tiredness\"").unwrap(),
            Drive::Tiredness
        );
    }
}

//! Vault combinations: direction/count pairs and the target generator

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_PAIR_COUNT;

/// Spin direction of the handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Direction of a click at horizontal offset `dx` from the dial center.
    /// Right of center spins clockwise; dead-center counts as counter-clockwise.
    pub fn from_offset(dx: f32) -> Self {
        if crate::safe_sign(dx) > 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Rotation sign (+1 clockwise, -1 counter-clockwise)
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Clockwise => "clockwise",
            Direction::CounterClockwise => "counter-clockwise",
        }
    }
}

/// `count` consecutive detents turned in `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationPair {
    pub count: u32,
    pub direction: Direction,
}

impl CombinationPair {
    pub fn new(count: u32, direction: Direction) -> Self {
        Self { count, direction }
    }
}

/// Ordered pairs; adjacent pairs never share a direction
pub type Combination = Vec<CombinationPair>;

/// Generate a random target combination of `length` pairs.
///
/// Counts are uniform in `[1, MAX_PAIR_COUNT]` and directions alternate,
/// starting opposite to a randomly picked seed direction.
pub fn generate_combination<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Combination {
    let mut last_direction = if rng.random_bool(0.5) {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };

    let mut combination = Vec::with_capacity(length);
    for _ in 0..length {
        let direction = last_direction.opposite();
        combination.push(CombinationPair {
            count: rng.random_range(1..=MAX_PAIR_COUNT),
            direction,
        });
        last_direction = direction;
    }

    combination
}

/// Compact human-readable form, e.g. `2R 3L 1R` (R = clockwise)
pub fn describe(combination: &[CombinationPair]) -> String {
    combination
        .iter()
        .map(|pair| {
            let dir = match pair.direction {
                Direction::Clockwise => 'R',
                Direction::CounterClockwise => 'L',
            };
            format!("{}{}", pair.count, dir)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

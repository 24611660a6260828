//! Combination matching
//!
//! Judges the player's combination against the target, prefix-wise. Every
//! pair but the last must match exactly; the last may still be below its
//! target count since the player can keep turning.

use super::combination::CombinationPair;

/// Matcher verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Correct so far, more input needed
    Continue,
    /// Wrong pair or overshoot: the puzzle resets
    Reset,
    /// Full combination entered: the vault opens
    Win,
}

/// Compare `player` against `target`
pub fn judge(player: &[CombinationPair], target: &[CombinationPair]) -> Verdict {
    debug_assert!(player.len() <= target.len());
    let Some(last_index) = player.len().checked_sub(1) else {
        return Verdict::Continue;
    };

    for (i, (entered, expected)) in player.iter().zip(target).enumerate() {
        let count_can_increase = i == last_index;
        let wrong = (!count_can_increase && entered.count != expected.count)
            || (count_can_increase && entered.count > expected.count)
            || entered.direction != expected.direction;
        if wrong {
            return Verdict::Reset;
        }
    }

    // Directions already checked above
    let last_matches = match (player.last(), target.last()) {
        (Some(entered), Some(expected)) => entered.count == expected.count,
        _ => false,
    };
    if player.len() == target.len() && last_matches {
        Verdict::Win
    } else {
        Verdict::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::combination::Direction::{Clockwise as Cw, CounterClockwise as Ccw};

    fn target() -> Vec<CombinationPair> {
        vec![
            CombinationPair::new(2, Cw),
            CombinationPair::new(3, Ccw),
            CombinationPair::new(1, Cw),
        ]
    }

    #[test]
    fn test_full_match_wins() {
        assert_eq!(judge(&target(), &target()), Verdict::Win);
    }

    #[test]
    fn test_overshoot_on_last_pair_resets() {
        let player = [CombinationPair::new(3, Cw)];
        assert_eq!(judge(&player, &target()), Verdict::Reset);
    }

    #[test]
    fn test_partial_last_pair_continues() {
        let player = [CombinationPair::new(1, Cw)];
        assert_eq!(judge(&player, &target()), Verdict::Continue);

        let player = [CombinationPair::new(2, Cw), CombinationPair::new(2, Ccw)];
        assert_eq!(judge(&player, &target()), Verdict::Continue);
    }

    #[test]
    fn test_undershot_earlier_pair_resets() {
        let player = [CombinationPair::new(1, Cw), CombinationPair::new(1, Ccw)];
        assert_eq!(judge(&player, &target()), Verdict::Reset);
    }

    #[test]
    fn test_wrong_direction_resets() {
        let player = [CombinationPair::new(1, Ccw)];
        assert_eq!(judge(&player, &target()), Verdict::Reset);
    }

    #[test]
    fn test_full_length_short_last_pair_continues() {
        let player = [
            CombinationPair::new(2, Cw),
            CombinationPair::new(3, Ccw),
            CombinationPair::new(1, Cw),
        ];
        let mut longer_last = target();
        longer_last[2].count = 4;
        assert_eq!(judge(&player, &longer_last), Verdict::Continue);
    }

    #[test]
    fn test_empty_player_continues() {
        assert_eq!(judge(&[], &target()), Verdict::Continue);
    }
}

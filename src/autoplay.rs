//! Idle/demo mode: a player that knows the combination
//!
//! Drives the native headless demo.

use std::collections::VecDeque;

use crate::sim::{CombinationPair, Direction, VaultPhase, VaultState};

/// Click sequence that enters `combination` exactly
pub fn solution_clicks(combination: &[CombinationPair]) -> Vec<Direction> {
    combination
        .iter()
        .flat_map(|pair| std::iter::repeat_n(pair.direction, pair.count as usize))
        .collect()
}

/// Feeds the solution one click at a time, waiting for the dial to rest
#[derive(Debug, Clone, Default)]
pub struct Autoplayer {
    cycle: Option<u64>,
    pending: VecDeque<Direction>,
}

impl Autoplayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next click to make, if the vault is ready for one
    pub fn next_click(&mut self, state: &VaultState) -> Option<Direction> {
        if state.phase != VaultPhase::Locked
            || state.handle.is_resetting()
            || !state.handle.is_settled()
            || state.tracker.is_match_pending()
        {
            return None;
        }

        if self.cycle != Some(state.cycle) {
            self.cycle = Some(state.cycle);
            self.pending = solution_clicks(&state.target).into();
        }
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{click, tick};
    use crate::sim::Direction::{Clockwise as Cw, CounterClockwise as Ccw};

    #[test]
    fn test_solution_clicks_expand_counts() {
        let combination = [CombinationPair::new(2, Ccw), CombinationPair::new(1, Cw)];
        assert_eq!(solution_clicks(&combination), vec![Ccw, Ccw, Cw]);
    }

    #[test]
    fn test_autoplayer_opens_vault() {
        let mut state = VaultState::new(2024);
        let mut player = Autoplayer::new();

        for _ in 0..(120 * 120) {
            if let Some(direction) = player.next_click(&state) {
                click(&mut state, direction);
            }
            tick(&mut state, SIM_DT);
            if state.phase == VaultPhase::Open {
                break;
            }
        }
        assert_eq!(state.phase, VaultPhase::Open);
        assert_eq!(state.cycle, 0);
    }

    #[test]
    fn test_autoplayer_waits_for_rest() {
        let mut state = VaultState::new(5);
        let mut player = Autoplayer::new();

        let direction = player.next_click(&state).unwrap();
        click(&mut state, direction);
        assert!(player.next_click(&state).is_none());
    }
}

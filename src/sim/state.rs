//! Vault game state
//!
//! Everything the simulation mutates lives here: the target combination,
//! the player's entries, the handle and the seeded RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::combination::{Combination, describe, generate_combination};
use super::handle::HandleMotion;
use super::tracker::CombinationTracker;
use crate::consts::COMBINATION_LENGTH;

/// Current phase of the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaultPhase {
    /// Door shut, accepting clicks
    Locked,
    /// Combination solved, door open until the next cycle
    Open,
}

/// Lifecycle events raised by the simulation, drained by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new cycle started (wrong combination or post-win reset)
    Reset { cycle: u64 },
    /// The combination was solved
    VaultOpened { cycle: u64 },
}

/// Complete vault state
#[derive(Debug, Clone)]
pub struct VaultState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Game cycle counter; bumped on every reset
    pub cycle: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds spent in the current cycle while locked
    pub cycle_elapsed: f32,
    pub phase: VaultPhase,
    /// Combination that opens the vault this cycle
    pub target: Combination,
    pub tracker: CombinationTracker,
    pub handle: HandleMotion,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl VaultState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = generate_combination(&mut rng, COMBINATION_LENGTH);
        log::info!("Vault combination: {}", describe(&target));

        Self {
            seed,
            rng,
            cycle: 0,
            time_ticks: 0,
            cycle_elapsed: 0.0,
            phase: VaultPhase::Locked,
            target,
            tracker: CombinationTracker::new(COMBINATION_LENGTH),
            handle: HandleMotion::default(),
            events: Vec::new(),
        }
    }

    /// Start a new cycle: fresh target, empty entries, reset spin.
    ///
    /// Returns false (and changes nothing but the entries) when a reset spin
    /// is already running, so back-to-back resets count once.
    pub fn reset(&mut self) -> bool {
        self.tracker.clear();
        if self.handle.is_resetting() {
            log::debug!("Reset requested while already resetting (cycle {})", self.cycle);
            return false;
        }

        self.cycle += 1;
        self.cycle_elapsed = 0.0;
        self.phase = VaultPhase::Locked;
        self.target = generate_combination(&mut self.rng, COMBINATION_LENGTH);
        self.handle.begin_reset();
        self.events.push(GameEvent::Reset { cycle: self.cycle });

        log::info!("Cycle {} vault combination: {}", self.cycle, describe(&self.target));
        true
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_locked() {
        let state = VaultState::new(42);
        assert_eq!(state.phase, VaultPhase::Locked);
        assert_eq!(state.target.len(), COMBINATION_LENGTH);
        assert!(state.tracker.pairs().is_empty());
        assert!(state.handle.is_settled());
    }

    #[test]
    fn test_reset_twice_counts_once() {
        let mut state = VaultState::new(42);
        assert!(state.reset());
        let target = state.target.clone();

        assert!(!state.reset());
        assert_eq!(state.cycle, 1);
        assert_eq!(state.target, target);
        assert!(state.tracker.pairs().is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::Reset { cycle: 1 }]);
        assert!(state.events.is_empty());
    }
}

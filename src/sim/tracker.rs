//! Player combination tracking
//!
//! Turns raw clicks into count/direction pairs and mirrors every accepted
//! click into a handle command, so the dial always shows what was entered.

use super::combination::{CombinationPair, Direction};
use super::handle::HandleMotion;

/// What a click did to the player combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Same direction as before: last pair's count went up
    Extended,
    /// Direction changed: a new pair was started
    NewPair,
    /// Ignored (reset spin running, or combination already full)
    Ignored,
}

/// The player's combination so far
#[derive(Debug, Clone)]
pub struct CombinationTracker {
    /// Maximum pairs accepted
    capacity: usize,
    pairs: Vec<CombinationPair>,
    previous: Option<Direction>,
    /// Set by every accepted click, cleared once the matcher has judged
    match_pending: bool,
}

impl CombinationTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pairs: Vec::with_capacity(capacity),
            previous: None,
            match_pending: false,
        }
    }

    pub fn pairs(&self) -> &[CombinationPair] {
        &self.pairs
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_match_pending(&self) -> bool {
        self.match_pending
    }

    pub fn clear_match_pending(&mut self) {
        self.match_pending = false;
    }

    /// Forget everything entered so far
    pub fn clear(&mut self) {
        self.pairs.clear();
        self.previous = None;
        self.match_pending = false;
    }

    /// Register a click in `direction`, forwarding the rotation to `handle`
    pub fn register_click(&mut self, direction: Direction, handle: &mut HandleMotion) -> ClickOutcome {
        if handle.is_resetting() {
            return ClickOutcome::Ignored;
        }

        let outcome = if self.previous == Some(direction) {
            if let Some(last) = self.pairs.last_mut() {
                last.count += 1;
            }
            handle.add_turn(direction);
            ClickOutcome::Extended
        } else if self.pairs.len() < self.capacity {
            self.pairs.push(CombinationPair::new(1, direction));
            self.previous = Some(direction);
            handle.start_new_target(direction);
            ClickOutcome::NewPair
        } else {
            ClickOutcome::Ignored
        };

        debug_assert!(self.pairs.len() <= self.capacity);
        if outcome != ClickOutcome::Ignored {
            self.match_pending = true;
            log::debug!(
                "Click {}: {:?} ({} pairs entered)",
                direction.as_str(),
                outcome,
                self.pairs.len()
            );
        }
        outcome
    }
}

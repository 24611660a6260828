//! Simulation tick and click handling
//!
//! Per tick, in order: advance the handle (spin or reset spin), then judge
//! the player's combination once the handle has settled.

use super::combination::Direction;
use super::matcher::{Verdict, judge};
use super::state::{GameEvent, VaultPhase, VaultState};
use super::tracker::ClickOutcome;

/// Apply a click in `direction`. Ignored while the vault is open or the
/// handle is playing its reset spin.
pub fn click(state: &mut VaultState, direction: Direction) -> ClickOutcome {
    if state.phase == VaultPhase::Open {
        return ClickOutcome::Ignored;
    }
    state.tracker.register_click(direction, &mut state.handle)
}

/// Advance the vault state by `dt` seconds
pub fn tick(state: &mut VaultState, dt: f32) {
    state.time_ticks += 1;
    if state.phase == VaultPhase::Locked {
        state.cycle_elapsed += dt;
    }

    state.handle.update(dt);

    // Judge only once the dial has visibly clicked into place
    if state.tracker.is_match_pending() && state.handle.is_settled() {
        state.tracker.clear_match_pending();

        match judge(state.tracker.pairs(), &state.target) {
            Verdict::Continue => {}
            Verdict::Reset => {
                log::info!("Wrong combination, resetting");
                state.reset();
            }
            Verdict::Win => {
                log::info!("Vault opened after {:.1}s", state.cycle_elapsed);
                state.phase = VaultPhase::Open;
                state.tracker.clear();
                state.events.push(GameEvent::VaultOpened { cycle: state.cycle });
            }
        }
    }
}

//! Vault simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod combination;
pub mod handle;
pub mod matcher;
pub mod state;
pub mod tick;
pub mod tracker;

pub use combination::{Combination, CombinationPair, Direction, describe, generate_combination};
pub use handle::{HandleMode, HandleMotion};
pub use matcher::{Verdict, judge};
pub use state::{GameEvent, VaultPhase, VaultState};
pub use tick::{click, tick};
pub use tracker::{ClickOutcome, CombinationTracker};

//! Vault Lock - A combination-lock vault game
//!
//! Core modules:
//! - `sim`: Handle motion, combination tracking and matching
//! - `controller`: Per-frame orchestration and lifecycle callbacks
//! - `assets`: Explicitly loaded texture cache
//! - `platform`: Browser bindings
//! - `settings`: Runtime settings (timestep, auto-reset delay)

pub mod assets;
pub mod autoplay;
pub mod clock;
pub mod controller;
pub mod platform;
pub mod settings;
pub mod sim;

pub use controller::{VaultController, VaultObserver};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Angles are `f64`: they grow without wrapping, and `f32` loses the
/// minimum-speed step once an angle passes ~2^17 rad.
pub mod consts {
    use std::f64::consts::PI;

    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// One detent of the dial (radians)
    pub const TURN_UNIT: f64 = PI / 3.0;

    /// Handle spin acceleration (radians/s²)
    pub const HANDLE_ACCELERATION: f64 = PI * 1.8;
    /// Handle spin speed bounds (radians/s)
    pub const HANDLE_MIN_SPEED: f64 = PI * 0.2;
    pub const HANDLE_MAX_SPEED: f64 = PI * 0.75;

    /// Sharpness of the reset spin impulse
    pub const RESET_IMPULSE_K: f64 = 3.0;
    /// Reset spin speed at the impulse peak (radians/s)
    pub const RESET_PEAK_SPEED: f64 = PI * 10.0;
    /// Reset spin never drops below this; settles on the next detent once reached
    pub const RESET_MIN_SPEED: f64 = PI * 0.2;

    /// Number of pairs in a vault combination
    pub const COMBINATION_LENGTH: usize = 3;
    /// Largest count a single pair can ask for
    pub const MAX_PAIR_COUNT: u32 = 9;

    /// Seconds the vault stays open before the puzzle resets
    pub const VAULT_OPEN_SECS: f32 = 5.0;
}

/// Unimodal pulse: rises sharply to 1.0 at `x = 1/k`, then decays toward 0
#[inline]
pub fn exp_impulse(x: f64, k: f64) -> f64 {
    let h = k * x;
    h * (1.0 - h).exp()
}

/// Sign that maps zero to -1 (a click dead-center counts as counter-clockwise)
#[inline]
pub fn safe_sign(x: f32) -> f32 {
    if x > 0.0 { 1.0 } else { -1.0 }
}

/// Three-way sign: -1, 0 or 1
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// First detent strictly above `angle`
#[inline]
pub fn next_detent(angle: f64) -> f64 {
    consts::TURN_UNIT * ((angle / consts::TURN_UNIT).floor() + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TURN_UNIT;

    #[test]
    fn test_exp_impulse_peaks_at_one() {
        let k = 3.0;
        assert!((exp_impulse(1.0 / k, k) - 1.0).abs() < 1e-12);
        assert!(exp_impulse(0.1, k) < 1.0);
        assert!(exp_impulse(2.0, k) < 0.05);
        assert_eq!(exp_impulse(0.0, k), 0.0);
    }

    #[test]
    fn test_signs() {
        assert_eq!(safe_sign(0.0), -1.0);
        assert_eq!(safe_sign(3.0), 1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-2.0), -1.0);
    }

    #[test]
    fn test_next_detent() {
        assert!((next_detent(0.1) - TURN_UNIT).abs() < 1e-6);
        assert!((next_detent(TURN_UNIT * 2.5) - TURN_UNIT * 3.0).abs() < 1e-5);
        assert!((next_detent(-0.1) - 0.0).abs() < 1e-6);
    }
}

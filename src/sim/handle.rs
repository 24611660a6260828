//! Vault handle motion
//!
//! The handle spins toward a live target angle, one detent at a time. Targets
//! issued while it is still moving are queued and applied once it settles.
//! A failed combination plays a reset spin: a fast exponential impulse that
//! eases out and stops on the next detent.
//!
//! Settling is detected with exact float equality (`angle == target`). It is
//! only ever reached by snapping, never by integration alone.

use std::collections::VecDeque;

use crate::consts::*;
use crate::{exp_impulse, next_detent, sign};

use super::combination::Direction;

/// Animation mode of the handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleMode {
    /// Spinning toward (or resting on) the live target
    Spinning,
    /// Playing the reset spin
    Resetting {
        /// Seconds since the reset spin started
        elapsed: f64,
    },
}

/// Handle angle, targets and speed
#[derive(Debug, Clone)]
pub struct HandleMotion {
    /// Current angle (radians, unbounded)
    angle: f64,
    /// Live target angle
    target: f64,
    /// Targets waiting for the handle to settle
    queue: VecDeque<f64>,
    /// Spin speed (radians/sec); carries over between segments
    speed: f64,
    mode: HandleMode,
}

impl Default for HandleMotion {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl HandleMotion {
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            target: angle,
            queue: VecDeque::new(),
            speed: 0.0,
            mode: HandleMode::Spinning,
        }
    }

    /// Current handle angle (what the renderer draws)
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Live target angle
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn mode(&self) -> HandleMode {
        self.mode
    }

    /// Pending targets, front first
    pub fn queued_targets(&self) -> impl Iterator<Item = f64> + '_ {
        self.queue.iter().copied()
    }

    #[inline]
    pub fn is_resetting(&self) -> bool {
        matches!(self.mode, HandleMode::Resetting { .. })
    }

    /// Resting on the live target with nothing queued
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.angle == self.target && self.queue.is_empty()
    }

    fn reject_while_resetting(&self, command: &str) -> bool {
        debug_assert!(!self.is_resetting(), "{command} issued during reset spin");
        if self.is_resetting() {
            log::warn!("Ignoring {} during reset spin", command);
            return true;
        }
        false
    }

    /// Keep spinning the same way one more detent.
    ///
    /// Extends the last queued target if there is one, otherwise the live target.
    pub fn add_turn(&mut self, direction: Direction) {
        if self.reject_while_resetting("add_turn") {
            return;
        }

        let delta = direction.signum() * TURN_UNIT;
        match self.queue.back_mut() {
            Some(last) => *last += delta,
            None => self.target += delta,
        }
    }

    /// Begin a new segment one detent from the live target.
    ///
    /// Applied immediately when the handle is at rest, queued while it moves.
    pub fn start_new_target(&mut self, direction: Direction) {
        if self.reject_while_resetting("start_new_target") {
            return;
        }

        let candidate = self.target + direction.signum() * TURN_UNIT;
        if self.target != self.angle {
            self.queue.push_back(candidate);
        } else {
            self.target = candidate;
        }
    }

    /// Start the reset spin. Queued targets are dropped.
    pub fn begin_reset(&mut self) {
        self.queue.clear();
        self.mode = HandleMode::Resetting { elapsed: 0.0 };
    }

    /// Advance by `dt` seconds in whichever mode is active
    pub fn update(&mut self, dt: f32) {
        match self.mode {
            HandleMode::Spinning => self.tick(dt),
            HandleMode::Resetting { .. } => self.tick_reset(dt),
        }
    }

    /// Spin toward the live target. No-op while resetting or settled.
    pub fn tick(&mut self, dt: f32) {
        if self.is_resetting() {
            return;
        }
        let dt = f64::from(dt);

        if self.angle == self.target {
            match self.queue.pop_front() {
                Some(next) => self.target = next,
                None => return,
            }
        }

        // Speed up while more than half a detent remains, slow into the click
        let accel_dir = sign((self.angle - self.target).abs() - TURN_UNIT * 0.5);
        self.speed += accel_dir * HANDLE_ACCELERATION * dt;
        self.speed = self.speed.clamp(HANDLE_MIN_SPEED, HANDLE_MAX_SPEED);

        let delta_before = self.target - self.angle;
        self.angle += sign(delta_before) * self.speed * dt;
        let delta_after = self.target - self.angle;

        // Overshoot (or exact landing): snap so settle equality holds
        if sign(delta_before) != sign(delta_after) {
            self.angle = self.target;
        }
    }

    /// Advance the reset spin. No-op unless resetting.
    pub fn tick_reset(&mut self, dt: f32) {
        let HandleMode::Resetting { elapsed } = self.mode else {
            return;
        };
        let dt = f64::from(dt);
        let elapsed = elapsed + dt;
        self.mode = HandleMode::Resetting { elapsed };

        let impulse = exp_impulse(elapsed, RESET_IMPULSE_K);
        let rot_speed = (impulse * RESET_PEAK_SPEED).max(RESET_MIN_SPEED);
        let snap_before = next_detent(self.angle);

        self.angle += rot_speed * dt;
        self.target = self.angle;

        // Only the decaying tail may stop the spin, never the rising edge
        let decaying = elapsed > 1.0 / RESET_IMPULSE_K;
        if decaying && rot_speed == RESET_MIN_SPEED {
            let snap_after = next_detent(self.angle);
            if snap_before != snap_after {
                self.angle = snap_before;
                self.target = snap_before;
                self.mode = HandleMode::Spinning;
                log::debug!("Reset spin finished at {:.3} rad", snap_before);
            }
        }
    }
}

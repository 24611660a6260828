//! Fixed timestep accumulator
//!
//! Frame times from the host are uneven; the simulation always steps by a
//! fixed `dt`. Leftover time carries over to the next frame.

/// Longest frame we accept before clamping (tab switches, debugger pauses)
pub const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    sim_dt: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FixedStepClock {
    pub fn new(sim_dt: f32, max_substeps: u32) -> Self {
        Self {
            sim_dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn sim_dt(&self) -> f32 {
        self.sim_dt
    }

    /// Add a frame's elapsed time and return how many fixed steps to run.
    ///
    /// Time left over after hitting the substep cap is dropped, so a slow
    /// stretch never turns into a fast-forward later.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.sim_dt && substeps < self.max_substeps {
            self.accumulator -= self.sim_dt;
            substeps += 1;
        }
        if self.accumulator >= self.sim_dt {
            self.accumulator = 0.0;
        }
        substeps
    }
}

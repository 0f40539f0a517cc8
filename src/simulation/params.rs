//! Numerical and pacing parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` (simulated seconds per step),
//! - wall-clock `duration` and `tick`, which fix the number of steps,
//! - gravitational constant `G`,
//! - whether the driver sleeps `tick` between steps

use std::time::Duration;

use crate::error::{SimError, SimResult};

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub dt: f64,        // simulated seconds per step
    pub duration: f64,  // wall-clock run length (s)
    pub tick: f64,      // wall-clock seconds per step
    pub G: f64,         // gravitational constant
    pub realtime: bool, // sleep `tick` between steps
}

impl Parameters {
    /// Reject non-positive or non-finite step size, duration, tick, and `G`,
    /// and a tick too long to express as a `Duration`
    pub fn validate(&self) -> SimResult<()> {
        for (name, value) in [("dt", self.dt), ("duration", self.duration), ("tick", self.tick), ("G", self.G)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::config(format!("parameters.{name} must be > 0, got {value}")));
            }
        }
        self.pace()?;
        Ok(())
    }

    /// Wall-clock pause between steps
    pub fn pace(&self) -> SimResult<Duration> {
        Duration::try_from_secs_f64(self.tick)
            .map_err(|e| SimError::config(format!("parameters.tick {} is not a valid pause: {e}", self.tick)))
    }

    /// Number of steps in a full run, `floor(duration / tick)`
    pub fn steps(&self) -> usize {
        (self.duration / self.tick).floor() as usize
    }
}

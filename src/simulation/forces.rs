//! Gravitational acceleration from the attractor
//!
//! Only the attractor pulls. Bodies never act on each other or on the
//! attractor, so one evaluation per body is all a step needs.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{Attractor, NVec2};

/// Point-mass Newtonian gravity, no softening.
///
/// Close approaches are not smoothed; a body exactly on the attractor is an
/// error instead.
#[derive(Debug, Clone, Copy)]
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Acceleration felt at `x` (the position of body `name`):
    ///
    /// a = G * M * d / |d|^3, with d pointing from `x` to the attractor
    ///
    /// Evaluated as `(G*M / r^2) * (d / r)` so a distant body gets a tiny (or
    /// zero) pull instead of overflowing `r^3`.
    pub fn acceleration(&self, attractor: &Attractor, name: &str, x: &NVec2) -> SimResult<NVec2> {
        // d points from the body toward the attractor
        let d = attractor.x() - x;
        let r = d.norm();
        if !r.is_finite() {
            return Err(SimError::NonFinite {
                body: name.to_string(),
                what: format!("distance {r} from the attractor"),
            });
        }

        // zero, or so close that r^3 underflows
        if r == 0.0 || r * r * r == 0.0 {
            return Err(SimError::Singularity {
                body: name.to_string(),
                distance: r,
            });
        }

        let a = (self.G * attractor.mass() / (r * r)) * (d / r);
        if !(a.x.is_finite() && a.y.is_finite()) {
            return Err(SimError::NonFinite {
                body: name.to_string(),
                what: format!("acceleration {a:?} at {r:e} m"),
            });
        }
        Ok(a)
    }
}

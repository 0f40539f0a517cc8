//! Fixed-step time integrator for the attractor field
//!
//! Semi-implicit Euler in drift-then-kick order:
//!
//! x_n+1 = x_n + dt * v_n
//! a_n+1 = a(x_n+1)
//! v_n+1 = v_n + dt * a_n+1
//!
//! The position moves with the old velocity and the velocity is refreshed from
//! the new position. This ordering defines the trajectory and must not be
//! swapped.

use tracing::debug;

use crate::error::SimResult;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::states::{Attractor, Body, NVec2};

/// Diagnostic emitted for one body after a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub name: String,
    pub position: NVec2,
    pub velocity: NVec2,
}

/// One record per body, in the field's insertion order
pub type StepReport = Vec<StepRecord>;

/// Advance `bodies` by one step of `dt` under `attractor`.
///
/// New states are staged first and only written back once every body has been
/// evaluated, so an error leaves `bodies` as they were.
pub fn semi_implicit_euler(
    attractor: &Attractor,
    bodies: &mut [Body],
    gravity: &NewtonianGravity,
    dt: f64,
) -> SimResult<StepReport> {
    let mut staged: Vec<(NVec2, NVec2)> = Vec::with_capacity(bodies.len());

    for b in bodies.iter() {
        // Drift with the old velocity
        let x_new = b.x() + dt * b.v();

        // Kick using the acceleration at the new position
        let a = gravity.acceleration(attractor, b.name(), &x_new)?;
        let v_new = b.v() + dt * a;

        staged.push((x_new, v_new));
    }

    let mut report = StepReport::with_capacity(bodies.len());
    for (b, (x, v)) in bodies.iter_mut().zip(staged) {
        b.commit(x, v);
        debug!(
            body = b.name(),
            x = x.x,
            y = x.y,
            vx = v.x,
            vy = v.y,
            "step"
        );
        report.push(StepRecord {
            name: b.name().to_string(),
            position: x,
            velocity: v,
        });
    }

    Ok(report)
}

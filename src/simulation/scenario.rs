//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical and pacing parameters (`Parameters`)
//! - the gravity field (`GravityField`, attractor plus bodies at t = 0)
//!
//! A `Scenario` is handed to the `Simulation` driver, which owns it for the run.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Attractor, Body, GravityField, NVec2, G_SI};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub field: GravityField,
}

impl Scenario {
    /// Validate `cfg` and map it onto runtime types
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        cfg.validate()?;

        let parameters = cfg.parameters.to_parameters();

        let a_cfg = cfg.attractor;
        let mut attractor = Attractor::new(a_cfg.name, a_cfg.mass)?.with_size(a_cfg.size);
        if let Some(x) = a_cfg.x {
            attractor = attractor.at(x[0], x[1]);
        }

        let mut field = GravityField::with_gravity(NewtonianGravity { G: parameters.G });
        field.set_attractor(attractor);

        // Bodies: map `BodyConfig` -> runtime `Body`, keeping file order
        for bc in cfg.bodies.into_iter() {
            let BodyConfig { name, mass, size, x, v } = bc;
            field.add_body(
                Body::new(name, mass, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]))?.with_size(size),
            );
        }

        Ok(Self { parameters, field })
    }

    /// Sol with Earth and Mars on circular-ish starting orbits
    pub fn sol_earth_mars() -> SimResult<Self> {
        let parameters = Parameters {
            dt: 10000.0,
            duration: 10.0,
            tick: 0.01,
            G: G_SI,
            realtime: false,
        };

        let mut field = GravityField::new();
        field.set_attractor(Attractor::new("Sol", 1.989e30)?.with_size(1.391e6));
        field.add_body(
            Body::new("Earth", 5.972e24, NVec2::new(1.496e11, 0.0), NVec2::new(0.0, 29783.0))?
                .with_size(6371.0),
        );
        field.add_body(
            Body::new("Mars", 6.39e23, NVec2::new(2.279e11, 0.0), NVec2::new(0.0, 24077.0))?
                .with_size(3389.0),
        );

        Ok(Self { parameters, field })
    }
}

//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario is a thin `serde`-deserializable description of the system:
//!
//! - [`ParametersConfig`] – step size, run length, pacing, and `G`
//! - [`AttractorConfig`]  – the fixed central mass
//! - [`BodyConfig`]       – initial state for each orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper loaded from YAML
//!
//! # YAML format
//! All values are SI (kg, m, m/s, s):
//!
//! ```yaml
//! parameters:
//!   dt: 10000.0         # simulated seconds per step
//!   duration: 10.0      # wall-clock seconds of run
//!   tick: 0.01          # wall-clock seconds per step (default 0.01)
//!   realtime: false     # sleep `tick` between steps (default false)
//!
//! attractor:
//!   name: "Sol"
//!   mass: 1.989e30
//!   size: 1.391e6       # optional, display only
//!
//! bodies:
//!   - name: "Earth"
//!     mass: 5.972e24
//!     size: 6371.0
//!     x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//! ```
//!
//! `G` may be given under `parameters` and defaults to the SI value.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::states::{check_mass, G_SI};

fn default_tick() -> f64 {
    0.01
}

fn default_g() -> f64 {
    G_SI
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub dt: f64,       // simulated seconds per step
    pub duration: f64, // wall-clock length of the run
    #[serde(default = "default_tick")]
    pub tick: f64, // wall-clock seconds per step
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub realtime: bool, // pace steps at `tick`
}

impl ParametersConfig {
    /// Runtime parameters; checked by [`Parameters::validate`]
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            dt: self.dt,
            duration: self.duration,
            tick: self.tick,
            G: self.G,
            realtime: self.realtime,
        }
    }
}

/// The fixed central mass
#[derive(Deserialize, Debug, Clone)]
pub struct AttractorConfig {
    pub name: String,
    pub mass: f64,
    #[serde(default)]
    pub size: f64, // display radius
    #[serde(default)]
    pub x: Option<Vec<f64>>, // fixed position, origin when absent
}

/// Initial state for a single orbiting body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    #[serde(default)]
    pub size: f64,  // display radius
    pub x: Vec<f64>, // initial position [x, y] (m)
    pub v: Vec<f64>, // initial velocity [vx, vy] (m/s)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub attractor: AttractorConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Setup-time checks: positive step/duration/tick/masses, 2D vectors
    pub fn validate(&self) -> SimResult<()> {
        self.parameters.to_parameters().validate()?;

        check_mass(&self.attractor.name, self.attractor.mass)?;
        if let Some(x) = &self.attractor.x {
            check_vec2(&self.attractor.name, "x", x)?;
        }

        for b in &self.bodies {
            check_mass(&b.name, b.mass)?;
            check_vec2(&b.name, "x", &b.x)?;
            check_vec2(&b.name, "v", &b.v)?;
        }
        Ok(())
    }
}

fn check_vec2(name: &str, field: &str, v: &[f64]) -> SimResult<()> {
    if v.len() != 2 {
        return Err(SimError::config(format!(
            "`{name}`.{field} must have 2 components, got {}",
            v.len()
        )));
    }
    if v.iter().any(|c| !c.is_finite()) {
        return Err(SimError::config(format!("`{name}`.{field} must be finite")));
    }
    Ok(())
}

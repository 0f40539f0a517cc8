//! Core state types for the attractor/orbiter simulation.
//!
//! - `Body`         one orbiting point mass (position, velocity in SI units)
//! - `Attractor`    the fixed central mass, never accelerated
//! - `GravityField` one optional attractor plus the ordered orbiting bodies
//!
//! Positions and velocities are 2D `NVec2` values in meters and meters/second.

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::{semi_implicit_euler, StepReport};

pub type NVec2 = Vector2<f64>;

/// Newtonian gravitational constant in m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.67430e-11;

#[derive(Debug, Clone)]
pub struct Body {
    name: String, // display identifier
    m: f64,       // mass (kg), constant for the body's lifetime
    size: f64,    // display radius (m), not used by the physics
    x: NVec2,     // position (m)
    v: NVec2,     // velocity (m/s)
}

/// Masses must be finite and strictly positive
pub(crate) fn check_mass(name: &str, mass: f64) -> SimResult<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(SimError::config(format!("`{name}` mass must be > 0, got {mass}")));
    }
    Ok(())
}

impl Body {
    /// Fails with [`SimError::Configuration`] unless `mass` is finite and > 0
    pub fn new(name: impl Into<String>, mass: f64, x: NVec2, v: NVec2) -> SimResult<Self> {
        let name = name.into();
        check_mass(&name, mass)?;
        Ok(Self {
            name,
            m: mass,
            size: 0.0,
            x,
            v,
        })
    }

    /// Attach a display radius
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.x, self.x.y)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.v.x, self.v.y)
    }

    /// Position as a vector, for callers doing their own arithmetic
    pub fn x(&self) -> NVec2 {
        self.x
    }

    /// Velocity as a vector
    pub fn v(&self) -> NVec2 {
        self.v
    }

    /// Manual placement. Overwrites the position unconditionally.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = NVec2::new(x, y);
    }

    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.v = NVec2::new(vx, vy);
    }

    /// Move the body to `x`; this is how the integrator advances position
    pub fn move_to(&mut self, x: NVec2) {
        self.x = x;
    }

    /// Euclidean distance from this body to `point`. Zero when they coincide,
    /// so check before dividing by it.
    pub fn distance_to(&self, point: &NVec2) -> f64 {
        (point - self.x).norm()
    }

    pub fn distance_from_attractor(&self, attractor: &Attractor) -> f64 {
        self.distance_to(&attractor.x())
    }

    pub(crate) fn commit(&mut self, x: NVec2, v: NVec2) {
        self.move_to(x);
        self.v = v;
    }
}

/// The dominant central mass. Held at a fixed reference position and never
/// moved by a step.
#[derive(Debug, Clone)]
pub struct Attractor {
    name: String,
    m: f64,    // mass (kg)
    size: f64, // display radius (m)
    x: NVec2,  // fixed position, origin by default
}

impl Attractor {
    pub fn new(name: impl Into<String>, mass: f64) -> SimResult<Self> {
        let name = name.into();
        check_mass(&name, mass)?;
        Ok(Self {
            name,
            m: mass,
            size: 0.0,
            x: NVec2::zeros(),
        })
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Pin the attractor somewhere other than the origin
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = NVec2::new(x, y);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.x, self.x.y)
    }

    /// Always zero, the attractor does not move
    pub fn velocity(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    pub fn x(&self) -> NVec2 {
        self.x
    }
}

/// One attractor plus the orbiting bodies, in insertion order.
///
/// Bodies only feel the attractor, never each other, and the attractor feels
/// nothing. Insertion order only fixes iteration (and diagnostic) order.
#[derive(Debug, Clone)]
pub struct GravityField {
    attractor: Option<Attractor>,
    bodies: Vec<Body>,
    gravity: NewtonianGravity,
    t: f64, // simulated time (s)
}

impl Default for GravityField {
    fn default() -> Self {
        Self::new()
    }
}

impl GravityField {
    /// Empty field using the SI gravitational constant
    pub fn new() -> Self {
        Self::with_gravity(NewtonianGravity { G: G_SI })
    }

    pub fn with_gravity(gravity: NewtonianGravity) -> Self {
        Self {
            attractor: None,
            bodies: Vec::new(),
            gravity,
            t: 0.0,
        }
    }

    /// Set (or replace) the attractor
    pub fn set_attractor(&mut self, attractor: Attractor) {
        self.attractor = Some(attractor);
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn attractor(&self) -> Option<&Attractor> {
        self.attractor.as_ref()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for setup before a run
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    /// Simulated time elapsed over all successful steps
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Advance every body by one step of `dt` seconds.
    ///
    /// Fails with [`SimError::Configuration`] when no attractor is set or `dt`
    /// is negative or non-finite, with [`SimError::Singularity`] when a body
    /// lands on the attractor, and with [`SimError::NonFinite`] when a position
    /// or acceleration overflows. A failed step leaves every body untouched.
    pub fn step(&mut self, dt: f64) -> SimResult<StepReport> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::config(format!("step size must be finite and >= 0, got {dt}")));
        }
        let attractor = self
            .attractor
            .as_ref()
            .ok_or_else(|| SimError::config("step called before an attractor was set"))?;

        let report = semi_implicit_euler(attractor, &mut self.bodies, &self.gravity, dt)?;
        self.t += dt;
        Ok(report)
    }

    /// Specific orbital energy `v^2/2 - G*M/r` of body `i` (J/kg).
    /// `None` without an attractor, for an unknown index, or at r = 0.
    pub fn specific_energy(&self, i: usize) -> Option<f64> {
        let attractor = self.attractor.as_ref()?;
        let body = self.bodies.get(i)?;
        let r = body.distance_from_attractor(attractor);
        if r == 0.0 {
            return None;
        }
        Some(0.5 * body.v.norm_squared() - self.gravity.G * attractor.mass() / r)
    }
}

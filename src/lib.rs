pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, Attractor, GravityField, NVec2, G_SI};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{semi_implicit_euler, StepRecord, StepReport};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::driver::{Simulation, CancelToken, RunSummary};

pub use configuration::config::{ParametersConfig, AttractorConfig, BodyConfig, ScenarioConfig};

pub use visualization::FrameSink;
pub use visualization::console::{ConsoleSink, RecordingSink, Frame};

pub use benchmark::benchmark::bench_step;

pub use error::{SimError, SimResult};

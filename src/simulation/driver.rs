//! Run loop that steps a scenario at a fixed cadence
//!
//! The `Simulation` owns the scenario for the whole run, calls
//! `GravityField::step` once per tick, and hands the updated field to a
//! [`FrameSink`]. A [`CancelToken`] is checked between steps; it never
//! interrupts a step in progress.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::info;

use crate::error::SimResult;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::GravityField;
use crate::visualization::FrameSink;

/// Shared quit flag, set by whatever handles user input
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// What a finished (or cancelled) run did
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: usize,     // steps actually taken
    pub cancelled: bool,  // stopped early by the token
    pub sim_time: f64,    // simulated seconds covered
}

pub struct Simulation {
    scenario: Scenario,
    cancel: CancelToken,
}

impl Simulation {
    /// Validates the scenario parameters up front
    pub fn new(scenario: Scenario) -> SimResult<Self> {
        scenario.parameters.validate()?;
        Ok(Self {
            scenario,
            cancel: CancelToken::new(),
        })
    }

    /// Token to hand to an input collaborator
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn field(&self) -> &GravityField {
        &self.scenario.field
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Run for `floor(duration / tick)` steps
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> SimResult<RunSummary> {
        let steps = self.scenario.parameters.steps();
        self.run_steps(steps, sink)
    }

    /// Run for at most `steps` steps, stopping early if cancelled
    pub fn run_steps(&mut self, steps: usize, sink: &mut dyn FrameSink) -> SimResult<RunSummary> {
        let params = self.scenario.parameters.clone();
        let pace = if params.realtime { Some(params.pace()?) } else { None };

        info!(
            bodies = self.scenario.field.bodies().len(),
            steps,
            dt = params.dt,
            "starting run"
        );

        let mut taken = 0;
        let mut cancelled = false;

        sink.frame(0, &self.scenario.field);

        while taken < steps {
            if self.cancel.is_cancelled() {
                info!(step = taken, "run cancelled");
                cancelled = true;
                break;
            }

            self.scenario.field.step(params.dt)?;
            taken += 1;
            sink.frame(taken, &self.scenario.field);

            if let Some(pause) = pace {
                thread::sleep(pause);
            }
        }

        let field = &self.scenario.field;
        for (i, body) in field.bodies().iter().enumerate() {
            if let Some(e) = field.specific_energy(i) {
                info!(body = body.name(), specific_energy = e, "final state");
            }
        }

        Ok(RunSummary {
            steps: taken,
            cancelled,
            sim_time: field.time(),
        })
    }
}

//! Boundary to whatever displays the simulation.
//!
//! The physics never depends on rendering; a renderer only sees the field
//! through [`FrameSink::frame`] and the read accessors on the field.

pub mod console;

use crate::simulation::states::GravityField;

/// Receives the field after every step (and once before the first)
pub trait FrameSink {
    fn frame(&mut self, step: usize, field: &GravityField);
}

/// Discards every frame
pub struct NullSink;

impl FrameSink for NullSink {
    fn frame(&mut self, _step: usize, _field: &GravityField) {}
}

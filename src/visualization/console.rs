use std::io::{self, Write};

use crate::simulation::states::GravityField;
use crate::visualization::FrameSink;

/// Screen units per meter: 1 AU maps to 250 units
pub const SCALE: f64 = 250.0 / 1.496e11;

/// Text renderer: prints every body in screen units as
/// `step, NAME, x, y` lines, once every `every` frames.
pub struct ConsoleSink<W: Write> {
    out: W,
    every: usize,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(every: usize) -> Self {
        Self::new(io::stdout(), every)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, every: usize) -> Self {
        Self {
            out,
            every: every.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, step: usize, field: &GravityField) -> io::Result<()> {
        if let Some(a) = field.attractor() {
            let (x, y) = a.position();
            writeln!(self.out, "{step}, {}, {:.2}, {:.2}", a.name().to_uppercase(), x * SCALE, y * SCALE)?;
        }
        for b in field.bodies() {
            let (x, y) = b.position();
            writeln!(self.out, "{step}, {}, {:.2}, {:.2}", b.name().to_uppercase(), x * SCALE, y * SCALE)?;
        }
        Ok(())
    }
}

impl<W: Write> FrameSink for ConsoleSink<W> {
    fn frame(&mut self, step: usize, field: &GravityField) {
        if step % self.every != 0 {
            return;
        }
        // a closed pipe shouldn't take the simulation down
        if let Err(e) = self.write_frame(step, field) {
            tracing::warn!("console sink write failed: {e}");
        }
    }
}

/// Snapshot of one frame as a renderer would see it
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub step: usize,
    pub attractor: Option<(f64, f64)>,
    pub bodies: Vec<(String, (f64, f64))>,
}

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Frame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position track of one body across all recorded frames
    pub fn track(&self, name: &str) -> Vec<(f64, f64)> {
        self.frames
            .iter()
            .filter_map(|f| f.bodies.iter().find(|(n, _)| n == name).map(|(_, p)| *p))
            .collect()
    }
}

impl FrameSink for RecordingSink {
    fn frame(&mut self, step: usize, field: &GravityField) {
        self.frames.push(Frame {
            step,
            attractor: field.attractor().map(|a| a.position()),
            bodies: field
                .bodies()
                .iter()
                .map(|b| (b.name().to_string(), b.position()))
                .collect(),
        });
    }
}

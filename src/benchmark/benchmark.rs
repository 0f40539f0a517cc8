use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::states::{Attractor, Body, GravityField, NVec2};

/// Helper to build a field of `n` bodies on a ring of circular-speed orbits
fn make_field(n: usize) -> SimResult<GravityField> {
    let mut field = GravityField::new();
    field.set_attractor(Attractor::new("Sol", 1.989e30)?);
    let gm = field.gravity().G * 1.989e30;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic radii between 0.5 and 5 AU, no rand needed
        let r = 1.496e11 * (0.5 + 4.5 * ((i_f * 0.37).sin() * 0.5 + 0.5));
        let theta = i_f * 0.13;
        let speed = (gm / r).sqrt();

        let x = NVec2::new(r * theta.cos(), r * theta.sin());
        let v = NVec2::new(-speed * theta.sin(), speed * theta.cos());
        field.add_body(Body::new(format!("b{i}"), 1.0e20, x, v)?);
    }
    Ok(field)
}

/// Time `GravityField::step` for a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() -> SimResult<()> {
    println!("N,step_us");

    for n in [10, 100, 1_000, 10_000, 100_000] {
        // Small n: average over many steps to smooth noise
        let steps = if n <= 1_000 { 1_000 } else { 20 };
        let mut field = make_field(n)?;

        // Warm-up
        field.step(10000.0)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            field.step(10000.0)?;
        }
        let us = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        println!("{},{:.3}", n, us);
    }
    Ok(())
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `vitaflow_core` linkage with deterministic output.
//! - Count steps in `x,y,z` samples given as arguments.

use vitaflow_core::{MotionSample, StepFilter};

fn main() {
    println!("vitaflow_core ping={}", vitaflow_core::ping());
    println!("vitaflow_core version={}", vitaflow_core::core_version());

    let mut samples = Vec::new();
    for arg in std::env::args().skip(1) {
        match parse_sample(&arg) {
            Some(sample) => samples.push(sample),
            None => {
                eprintln!("skipping `{arg}`: expected x,y,z");
            }
        }
    }
    if !samples.is_empty() {
        let filter = StepFilter::default();
        let total = samples.len();
        let steps = filter.step_events(samples).count();
        println!("samples={total} steps={steps} threshold={}", filter.threshold());
    }
}

fn parse_sample(raw: &str) -> Option<MotionSample> {
    let mut parts = raw.split(',').map(|part| part.trim().parse::<f64>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(MotionSample::new(x, y, z))
}

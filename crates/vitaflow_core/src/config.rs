//! Tunables for the activity pipeline.

use std::time::Duration;

/// Magnitude (m/s²) above which one accelerometer sample counts as a step.
pub const DEFAULT_STEP_THRESHOLD: f64 = 12.0;
/// Interval requested from the accelerometer.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

/// Activity tracking configuration owned by a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityConfig {
    pub step_threshold: f64,
    pub sample_interval: Duration,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            step_threshold: DEFAULT_STEP_THRESHOLD,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

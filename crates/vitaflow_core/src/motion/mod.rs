//! Accelerometer step detection.
//!
//! # Responsibility
//! - Classify each motion sample independently by vector magnitude.
//! - Own the sensor subscription lifetime through a scoped guard.
//!
//! # Invariants
//! - No state is carried across samples: no debouncing, no peak search.
//! - A sensor started through [`SensorSubscription`] is stopped when the guard
//!   is dropped, on every exit path.

pub mod filter;
pub mod sensor;

pub use filter::{exceeds_threshold, step_events, StepEvents, StepFilter};
pub use sensor::{MotionSensor, QueueSensor, SensorSubscription};

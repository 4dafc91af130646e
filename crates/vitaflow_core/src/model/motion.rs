//! Accelerometer sample and step event types.

use serde::{Deserialize, Serialize};

/// One instantaneous 3-axis accelerometer reading in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MotionSample {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the acceleration vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 3]> for MotionSample {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

/// Signal for a single threshold crossing. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepEvent;

#[cfg(test)]
mod tests {
    use super::MotionSample;

    #[test]
    fn magnitude_is_euclidean_norm() {
        assert_eq!(MotionSample::new(3.0, 4.0, 12.0).magnitude(), 13.0);
        assert_eq!(MotionSample::from([0.0, 0.0, -9.0]).magnitude(), 9.0);
    }
}

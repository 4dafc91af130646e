//! Sensor provider contract and scoped subscription guard.

use crate::model::motion::MotionSample;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;

/// Accelerometer provider.
///
/// `poll_sample` returns the next delivered sample, or `None` when nothing is
/// pending right now. An unavailable or permission-denied sensor just never
/// yields.
pub trait MotionSensor {
    fn start(&mut self, interval: Duration);
    fn poll_sample(&mut self) -> Option<MotionSample>;
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Live sensor subscription.
///
/// Acquiring starts the sensor; dropping the guard stops it. Iterating drains
/// the samples currently pending.
pub struct SensorSubscription<'s, S: MotionSensor + ?Sized> {
    sensor: &'s mut S,
    interval: Duration,
}

impl<'s, S: MotionSensor + ?Sized> SensorSubscription<'s, S> {
    pub fn acquire(sensor: &'s mut S, interval: Duration) -> Self {
        sensor.start(interval);
        debug!(
            "event=sensor_subscribe module=motion status=ok interval_ms={}",
            interval.as_millis()
        );
        Self { sensor, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Underlying sensor, for hosts that feed samples into it.
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut *self.sensor
    }

    /// Stops the sensor now. Same as dropping the guard.
    pub fn release(self) {}
}

impl<S: MotionSensor + ?Sized> Iterator for SensorSubscription<'_, S> {
    type Item = MotionSample;

    fn next(&mut self) -> Option<Self::Item> {
        self.sensor.poll_sample()
    }
}

impl<S: MotionSensor + ?Sized> Drop for SensorSubscription<'_, S> {
    fn drop(&mut self) {
        self.sensor.stop();
        debug!("event=sensor_unsubscribe module=motion status=ok");
    }
}

const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Buffered sensor fed by a push-based host (platform sensor callback).
///
/// Samples pushed while stopped are discarded. When the buffer is full the
/// oldest sample is dropped.
#[derive(Debug, Clone)]
pub struct QueueSensor {
    pending: VecDeque<MotionSample>,
    capacity: usize,
    interval: Option<Duration>,
}

impl Default for QueueSensor {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}

impl QueueSensor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: VecDeque::with_capacity(capacity),
            capacity,
            interval: None,
        }
    }

    /// Interval requested by the current subscriber, if any.
    pub fn requested_interval(&self) -> Option<Duration> {
        self.interval
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Offers one sample. Returns `false` when the sensor is not subscribed.
    pub fn push(&mut self, sample: MotionSample) -> bool {
        if self.interval.is_none() {
            return false;
        }
        if self.pending.len() == self.capacity {
            self.pending.pop_front();
        }
        self.pending.push_back(sample);
        true
    }
}

impl MotionSensor for QueueSensor {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
    }

    fn poll_sample(&mut self) -> Option<MotionSample> {
        self.pending.pop_front()
    }

    fn stop(&mut self) {
        self.interval = None;
        self.pending.clear();
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{MotionSensor, QueueSensor, SensorSubscription};
    use crate::model::motion::MotionSample;
    use std::time::Duration;

    #[test]
    fn queue_sensor_discards_samples_while_stopped() {
        let mut sensor = QueueSensor::new();
        assert!(!sensor.push(MotionSample::new(0.0, 0.0, 20.0)));
        assert_eq!(sensor.pending_len(), 0);
    }

    #[test]
    fn queue_sensor_drops_oldest_when_full() {
        let mut sensor = QueueSensor::with_capacity(2);
        sensor.start(Duration::from_millis(100));
        sensor.push(MotionSample::new(1.0, 0.0, 0.0));
        sensor.push(MotionSample::new(2.0, 0.0, 0.0));
        sensor.push(MotionSample::new(3.0, 0.0, 0.0));

        let xs = std::iter::from_fn(|| sensor.poll_sample())
            .map(|sample| sample.x)
            .collect::<Vec<_>>();
        assert_eq!(xs, vec![2.0, 3.0]);
    }

    #[test]
    fn subscription_stops_sensor_on_early_return() {
        fn consume_until_error(sensor: &mut QueueSensor) -> Result<(), &'static str> {
            let mut subscription = SensorSubscription::acquire(sensor, Duration::from_millis(100));
            subscription.next().ok_or("no sample")?;
            Ok(())
        }

        let mut sensor = QueueSensor::new();
        assert!(consume_until_error(&mut sensor).is_err());
        assert!(!sensor.is_active());
        assert_eq!(sensor.requested_interval(), None);
    }
}

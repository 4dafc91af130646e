//! Magnitude threshold step filter.

use crate::config::{ActivityConfig, DEFAULT_STEP_THRESHOLD};
use crate::model::motion::{MotionSample, StepEvent};

/// Returns `true` when `magnitude` is strictly above `threshold`.
///
/// NaN magnitudes never count as steps.
pub fn exceeds_threshold(magnitude: f64, threshold: f64) -> bool {
    magnitude > threshold
}

/// Stateless per-sample step classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFilter {
    threshold: f64,
}

impl Default for StepFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_THRESHOLD)
    }
}

impl StepFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &ActivityConfig) -> Self {
        Self::new(config.step_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn classify(&self, sample: &MotionSample) -> Option<StepEvent> {
        exceeds_threshold(sample.magnitude(), self.threshold).then_some(StepEvent)
    }

    /// Lazily maps `samples` to the step events they contain.
    pub fn step_events<I>(&self, samples: I) -> StepEvents<I::IntoIter>
    where
        I: IntoIterator<Item = MotionSample>,
    {
        step_events(samples, self.threshold)
    }
}

/// Lazy step event sequence over a sample source.
///
/// Pulls samples until one crosses the threshold; ends when the source ends.
#[derive(Debug, Clone)]
pub struct StepEvents<I> {
    samples: I,
    filter: StepFilter,
}

impl<I> Iterator for StepEvents<I>
where
    I: Iterator<Item = MotionSample>,
{
    type Item = StepEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.samples.find_map(|sample| filter.classify(&sample))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.samples.size_hint().1)
    }
}

pub fn step_events<I>(samples: I, threshold: f64) -> StepEvents<I::IntoIter>
where
    I: IntoIterator<Item = MotionSample>,
{
    StepEvents {
        samples: samples.into_iter(),
        filter: StepFilter::new(threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::{exceeds_threshold, step_events, StepFilter};
    use crate::model::motion::{MotionSample, StepEvent};

    #[test]
    fn threshold_is_strict() {
        assert!(!exceeds_threshold(12.0, 12.0));
        assert!(exceeds_threshold(12.000_001, 12.0));
        assert!(!exceeds_threshold(f64::NAN, 12.0));
    }

    #[test]
    fn classify_uses_full_vector_magnitude() {
        let filter = StepFilter::default();
        // 7² + 7² + 7² = 147 -> ~12.12
        assert_eq!(
            filter.classify(&MotionSample::new(7.0, -7.0, 7.0)),
            Some(StepEvent)
        );
        assert_eq!(filter.classify(&MotionSample::new(0.0, 0.0, 9.81)), None);
    }

    #[test]
    fn consecutive_samples_above_threshold_each_count() {
        let spike = MotionSample::new(0.0, 0.0, 15.0);
        let rest = MotionSample::new(0.0, 0.0, 9.8);
        let samples = vec![spike, spike, rest, spike, rest, rest];
        assert_eq!(step_events(samples, 12.0).count(), 3);
    }

    #[test]
    fn step_events_is_lazy_over_unbounded_source() {
        let samples = (0..).map(|i| {
            if i % 4 == 0 {
                MotionSample::new(13.0, 0.0, 0.0)
            } else {
                MotionSample::new(1.0, 0.0, 0.0)
            }
        });
        assert_eq!(step_events(samples, 12.0).take(5).count(), 5);
    }
}

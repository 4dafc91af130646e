//! Dashboard activity session: explicit lifecycle around the counter store
//! and the accelerometer subscription.
//!
//! # Invariants
//! - `activate` reconciles the store before the sensor is subscribed, so no
//!   step can land on counters that were not rehydrated.
//! - At most one live subscription exists per session borrow of a sensor;
//!   the returned guard stops the sensor when released or dropped.

use crate::clock::Clock;
use crate::config::ActivityConfig;
use crate::model::activity::{CounterField, DailyCounters};
use crate::model::motion::MotionSample;
use crate::motion::{MotionSensor, SensorSubscription, StepFilter};
use crate::repo::kv_repo::KvStore;
use crate::service::counter_service::{DailyCounterStore, StoreState};
use log::debug;

pub struct ActivitySession<K: KvStore, C: Clock> {
    store: DailyCounterStore<K, C>,
    filter: StepFilter,
    config: ActivityConfig,
}

impl<K: KvStore, C: Clock> ActivitySession<K, C> {
    pub fn new(store: DailyCounterStore<K, C>, config: ActivityConfig) -> Self {
        Self {
            store,
            filter: StepFilter::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &ActivityConfig {
        &self.config
    }

    pub fn store(&self) -> &DailyCounterStore<K, C> {
        &self.store
    }

    pub fn is_ready(&self) -> bool {
        self.store.state() == StoreState::Ready
    }

    /// Reconciles counters, then subscribes to `sensor`.
    pub fn activate<'s, S>(&mut self, sensor: &'s mut S) -> SensorSubscription<'s, S>
    where
        S: MotionSensor + ?Sized,
    {
        self.reconcile();
        SensorSubscription::acquire(sensor, self.config.sample_interval)
    }

    /// Reconciles counters without touching any sensor.
    ///
    /// For hosts that own the platform subscription themselves and feed
    /// samples through [`ActivitySession::on_sample`].
    pub fn reconcile(&mut self) -> DailyCounters {
        let counters = self.store.reconcile();
        debug!(
            "event=session_activate module=service status=ok steps={} water={}",
            counters.steps, counters.water
        );
        counters
    }

    /// Drains pending samples from `subscription` and applies detected steps.
    ///
    /// Returns the number of steps that reached the counters.
    pub fn pump<S>(&mut self, subscription: &mut SensorSubscription<'_, S>) -> u32
    where
        S: MotionSensor + ?Sized,
    {
        let mut applied = 0;
        for event in self.filter.step_events(&mut *subscription) {
            if self.store.record_step(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Feeds a single sample delivered outside a subscription guard.
    pub fn on_sample(&mut self, sample: &MotionSample) -> bool {
        self.filter
            .classify(sample)
            .is_some_and(|event| self.store.record_step(event))
    }

    /// Ends the screen activation and stops the sensor.
    pub fn deactivate<S>(&mut self, subscription: SensorSubscription<'_, S>)
    where
        S: MotionSensor + ?Sized,
    {
        subscription.release();
        debug!("event=session_deactivate module=service status=ok");
    }

    /// Records one glass of water.
    pub fn add_water(&mut self) -> bool {
        self.store.increment(CounterField::Water, 1)
    }

    /// Display copy of today's counters.
    pub fn counters(&self) -> Option<DailyCounters> {
        self.store.snapshot()
    }
}

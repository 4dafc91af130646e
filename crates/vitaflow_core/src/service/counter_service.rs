//! Daily step/water counter store.
//!
//! # Responsibility
//! - Reconcile today's counters against durable storage on every activation.
//! - Apply increments in memory and persist both counters on each change.
//!
//! # Invariants
//! - Counters reset to zero exactly once per calendar date transition.
//! - Increments before the first reconciliation are dropped, not queued.
//! - Storage failures and absent/malformed values degrade to a zero baseline.

use crate::clock::{format_date, parse_date, Clock};
use crate::model::activity::{CounterField, DailyCounters};
use crate::model::motion::StepEvent;
use crate::repo::kv_repo::{KvStore, RepoResult};
use crate::service::lifetime_stats::fold_finished_day;
use crate::service::read_number_or_default;
use chrono::NaiveDate;
use log::{debug, info, warn};

pub const LAST_DATE_KEY: &str = "activity.last_date";
pub const STEPS_KEY: &str = "activity.steps";
pub const WATER_KEY: &str = "activity.water";

/// Lifecycle of the in-memory counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No counters loaded yet; increments are ignored.
    Uninitialized,
    /// Counters reconciled and available for increment/display.
    Ready,
}

/// Owner of today's [`DailyCounters`].
pub struct DailyCounterStore<K: KvStore, C: Clock> {
    kv: K,
    clock: C,
    counters: Option<DailyCounters>,
}

impl<K: KvStore, C: Clock> DailyCounterStore<K, C> {
    pub fn new(kv: K, clock: C) -> Self {
        Self {
            kv,
            clock,
            counters: None,
        }
    }

    pub fn state(&self) -> StoreState {
        if self.counters.is_some() {
            StoreState::Ready
        } else {
            StoreState::Uninitialized
        }
    }

    /// Copy of the current counters, `None` before the first reconciliation.
    pub fn snapshot(&self) -> Option<DailyCounters> {
        self.counters
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Loads today's counters, rolling over when the stored date is not today.
    ///
    /// Calling this repeatedly on the same date never re-zeroes counters.
    pub fn reconcile(&mut self) -> DailyCounters {
        let today = self.clock.today();
        let last_date = self.read_last_date();

        let rolled_today = self.counters.is_some_and(|counters| counters.date == today);

        let (counters, rolled_over) = if last_date == Some(today) {
            (self.load_counters(today), false)
        } else if rolled_today {
            // This store already rolled over to `today`; only the date write is missing.
            if let Err(err) = self.kv.set(LAST_DATE_KEY, &format_date(today)) {
                warn!(
                    "event=kv_write module=service status=error key={LAST_DATE_KEY} error={err}"
                );
            }
            (self.load_counters(today), false)
        } else {
            (self.roll_over(last_date, today), true)
        };

        self.counters = Some(counters);
        info!(
            "event=counters_reconcile module=service status=ok date={} rolled_over={rolled_over}",
            format_date(today)
        );
        counters
    }

    /// Adds `delta` to `field` and persists. Returns `false` when dropped
    /// because the store is not reconciled yet.
    pub fn increment(&mut self, field: CounterField, delta: i32) -> bool {
        let Some(counters) = self.counters.as_mut() else {
            debug!(
                "event=counter_increment module=service status=dropped field={} reason=uninitialized",
                field.as_str()
            );
            return false;
        };
        counters.apply(field, delta);
        // Best effort: failures are already logged by persist().
        let _ = self.persist();
        true
    }

    /// Counts one detected step.
    pub fn record_step(&mut self, _event: StepEvent) -> bool {
        self.increment(CounterField::Steps, 1)
    }

    /// Writes both counters, one key per field. No-op before reconciliation.
    ///
    /// # Errors
    /// Returns the first storage error; the other key may already be written.
    pub fn persist(&self) -> RepoResult<()> {
        let Some(counters) = self.counters else {
            return Ok(());
        };
        write_counters(&self.kv, &counters).map_err(|err| {
            warn!("event=counters_persist module=service status=error error={err}");
            err
        })
    }

    fn load_counters(&self, today: NaiveDate) -> DailyCounters {
        DailyCounters {
            date: today,
            steps: read_number_or_default(&self.kv, STEPS_KEY),
            water: read_number_or_default(&self.kv, WATER_KEY),
        }
    }

    fn read_last_date(&self) -> Option<NaiveDate> {
        match self.kv.get(LAST_DATE_KEY) {
            Ok(Some(raw)) => {
                let parsed = parse_date(&raw);
                if parsed.is_none() {
                    warn!("event=kv_read module=service status=malformed key={LAST_DATE_KEY}");
                }
                parsed
            }
            Ok(None) => None,
            Err(err) => {
                warn!(
                    "event=kv_read module=service status=error key={LAST_DATE_KEY} error={err}"
                );
                None
            }
        }
    }

    fn roll_over(&self, last_date: Option<NaiveDate>, today: NaiveDate) -> DailyCounters {
        let finished_steps: u32 = read_number_or_default(&self.kv, STEPS_KEY);
        let finished_water: u32 = read_number_or_default(&self.kv, WATER_KEY);
        let reset = DailyCounters::empty(today);

        // Reset before folding: an interrupted rollover can drop a day from
        // lifetime totals but never counts it twice or revives stale counters.
        if let Err(err) = write_counters(&self.kv, &reset) {
            warn!("event=counters_rollover module=service status=error stage=reset error={err}");
        }
        if let Err(err) = self.kv.set(LAST_DATE_KEY, &format_date(today)) {
            warn!(
                "event=counters_rollover module=service status=error stage=last_date error={err}"
            );
            // Fold only after the new date is durable.
            return reset;
        }
        if last_date.is_some() {
            if let Err(err) = fold_finished_day(&self.kv, finished_steps, finished_water) {
                warn!(
                    "event=counters_rollover module=service status=error stage=lifetime error={err}"
                );
            }
        }

        reset
    }
}

fn write_counters<K: KvStore + ?Sized>(kv: &K, counters: &DailyCounters) -> RepoResult<()> {
    kv.set(STEPS_KEY, &counters.steps.to_string())?;
    kv.set(WATER_KEY, &counters.water.to_string())?;
    Ok(())
}

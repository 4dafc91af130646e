use chrono::NaiveDate;
use std::cell::Cell;
use vitaflow_core::service::counter_service::{LAST_DATE_KEY, STEPS_KEY, WATER_KEY};
use vitaflow_core::service::lifetime_stats::{
    LIFETIME_ACTIVE_DAYS_KEY, LIFETIME_STEPS_KEY, LIFETIME_WATER_KEY,
};
use vitaflow_core::{
    load_lifetime_stats, CounterField, DailyCounterStore, DailyCounters, FixedClock, KvStore,
    RepoError, RepoResult, SqliteKvStore, StepEvent, StoreState,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
}

fn seed(kv: &SqliteKvStore, last_date: &str, steps: &str, water: &str) {
    kv.set(LAST_DATE_KEY, last_date).unwrap();
    kv.set(STEPS_KEY, steps).unwrap();
    kv.set(WATER_KEY, water).unwrap();
}

#[test]
fn reconcile_same_day_returns_persisted_counters() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    seed(&kv, "2026-05-10", "50", "3");
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));

    let counters = store.reconcile();
    assert_eq!(
        counters,
        DailyCounters {
            date: day(10),
            steps: 50,
            water: 3
        }
    );
    assert_eq!(store.state(), StoreState::Ready);
}

#[test]
fn reconcile_next_day_resets_and_moves_last_date() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    seed(&kv, "2026-05-10", "8000", "6");
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(11)));

    let counters = store.reconcile();
    assert_eq!(counters, DailyCounters::empty(day(11)));
    assert_eq!(kv.get(LAST_DATE_KEY).unwrap().as_deref(), Some("2026-05-11"));
    assert_eq!(kv.get(STEPS_KEY).unwrap().as_deref(), Some("0"));
    assert_eq!(kv.get(WATER_KEY).unwrap().as_deref(), Some("0"));
}

#[test]
fn reconcile_twice_same_day_keeps_increment() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));

    store.reconcile();
    assert!(store.increment(CounterField::Steps, 1));
    let second = store.reconcile();

    assert_eq!(second.steps, 1);
    assert_eq!(second.water, 0);
}

#[test]
fn fresh_install_starts_at_zero_without_touching_lifetime() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(1)));

    assert_eq!(store.reconcile(), DailyCounters::empty(day(1)));
    assert_eq!(kv.get(LIFETIME_ACTIVE_DAYS_KEY).unwrap(), None);
}

#[test]
fn sequential_increments_are_never_lost() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));
    store.reconcile();

    for _ in 0..250 {
        store.increment(CounterField::Steps, 1);
    }

    assert_eq!(store.snapshot().unwrap().steps, 250);
    assert_eq!(kv.get(STEPS_KEY).unwrap().as_deref(), Some("250"));
}

#[test]
fn steps_before_reconcile_are_dropped() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));

    for _ in 0..5 {
        assert!(!store.record_step(StepEvent));
    }
    assert_eq!(store.state(), StoreState::Uninitialized);
    assert_eq!(store.snapshot(), None);

    assert_eq!(store.reconcile().steps, 0);
    assert_eq!(kv.get(STEPS_KEY).unwrap().as_deref(), Some("0"));
}

#[test]
fn malformed_persisted_values_reconcile_to_zero() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    seed(&kv, "2026-05-10", "12abc", "-4");
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));

    let counters = store.reconcile();
    assert_eq!(counters.steps, 0);
    assert_eq!(counters.water, 0);
}

#[test]
fn malformed_last_date_triggers_rollover() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    seed(&kv, "10.05.2026", "40", "2");
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));

    assert_eq!(store.reconcile(), DailyCounters::empty(day(10)));
    assert_eq!(kv.get(LAST_DATE_KEY).unwrap().as_deref(), Some("2026-05-10"));
}

#[test]
fn rollover_folds_finished_day_into_lifetime_once() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let clock = FixedClock::new(day(10));
    let mut store = DailyCounterStore::new(&kv, &clock);

    store.reconcile();
    store.increment(CounterField::Steps, 4_000);
    store.increment(CounterField::Water, 5);

    clock.advance_days(1);
    store.reconcile();
    store.reconcile();
    store.increment(CounterField::Steps, 2_000);

    clock.advance_days(1);
    store.reconcile();

    let stats = load_lifetime_stats(&kv);
    assert_eq!(stats.total_steps, 6_000);
    assert_eq!(stats.total_water, 5);
    assert_eq!(stats.active_days, 2);
    assert_eq!(stats.average_steps(), 3_000);
    assert_eq!(kv.get(LIFETIME_STEPS_KEY).unwrap().as_deref(), Some("6000"));
    assert_eq!(kv.get(LIFETIME_WATER_KEY).unwrap().as_deref(), Some("5"));
}

#[test]
fn negative_delta_saturates_at_zero() {
    let kv = SqliteKvStore::open_in_memory().unwrap();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));
    store.reconcile();
    store.increment(CounterField::Water, 2);
    store.increment(CounterField::Water, -5);

    assert_eq!(store.snapshot().unwrap().water, 0);
}

/// Storage whose reads and writes can be switched to fail.
struct FlakyStore {
    inner: SqliteKvStore,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    fail_writes_to: Cell<Option<&'static str>>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: SqliteKvStore::open_in_memory().unwrap(),
            fail_reads: Cell::new(false),
            fail_writes: Cell::new(false),
            fail_writes_to: Cell::new(None),
        }
    }
}

impl KvStore for FlakyStore {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(RepoError::InvalidKey(key.to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        if self.fail_writes.get() || self.fail_writes_to.get() == Some(key) {
            return Err(RepoError::InvalidKey(key.to_string()));
        }
        self.inner.set(key, value)
    }
}

#[test]
fn read_failure_is_treated_like_absent_storage() {
    let kv = FlakyStore::new();
    kv.inner.set(LAST_DATE_KEY, "2026-05-10").unwrap();
    kv.inner.set(STEPS_KEY, "900").unwrap();
    kv.fail_reads.set(true);

    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));
    assert_eq!(store.reconcile(), DailyCounters::empty(day(10)));
}

#[test]
fn write_failure_keeps_in_memory_counters_and_reports_error() {
    let kv = FlakyStore::new();
    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(10)));
    store.reconcile();

    kv.fail_writes.set(true);
    assert!(store.increment(CounterField::Steps, 3));
    assert_eq!(store.snapshot().unwrap().steps, 3);
    assert!(store.persist().is_err());

    kv.fail_writes.set(false);
    store.persist().unwrap();
    assert_eq!(kv.inner.get(STEPS_KEY).unwrap().as_deref(), Some("3"));
}

#[test]
fn failed_date_write_does_not_fold_or_reset_the_same_day_twice() {
    let kv = FlakyStore::new();
    kv.inner.set(LAST_DATE_KEY, "2026-05-10").unwrap();
    kv.inner.set(STEPS_KEY, "100").unwrap();
    kv.inner.set(WATER_KEY, "1").unwrap();
    kv.fail_writes_to.set(Some(LAST_DATE_KEY));

    let mut store = DailyCounterStore::new(&kv, FixedClock::new(day(11)));
    assert_eq!(store.reconcile(), DailyCounters::empty(day(11)));
    assert!(store.increment(CounterField::Steps, 50));

    let again = store.reconcile();
    assert_eq!(again.steps, 50);
    assert_eq!(load_lifetime_stats(&kv).active_days, 0);

    kv.fail_writes_to.set(None);
    let recovered = store.reconcile();
    assert_eq!(recovered.steps, 50);
    assert_eq!(kv.inner.get(LAST_DATE_KEY).unwrap().as_deref(), Some("2026-05-11"));
    assert_eq!(load_lifetime_stats(&kv).active_days, 0);
}

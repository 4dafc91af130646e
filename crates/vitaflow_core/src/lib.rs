//! Core on-device logic for VitaFlow.
//! This crate is the single source of truth for activity-tracking invariants.

pub mod clock;
pub mod config;
pub mod db;
pub mod health;
pub mod logging;
pub mod model;
pub mod motion;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ActivityConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{CounterField, DailyCounters};
pub use model::motion::{MotionSample, StepEvent};
pub use model::profile::{Profile, ProfileDraft, ProfileValidationError};
pub use motion::{MotionSensor, QueueSensor, SensorSubscription, StepFilter};
pub use repo::kv_repo::{KvStore, RepoError, RepoResult, SqliteKvStore};
pub use service::activity_session::ActivitySession;
pub use service::counter_service::{DailyCounterStore, StoreState};
pub use service::lifetime_stats::{load_lifetime_stats, LifetimeStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

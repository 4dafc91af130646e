//! Lifetime activity totals accumulated at each day rollover.
//!
//! # Invariants
//! - Totals only grow; a rolled-over day is folded in once.
//! - Averages divide by at least one day.

use crate::repo::kv_repo::{KvStore, RepoResult};
use crate::service::read_number_or_default;
use serde::{Deserialize, Serialize};

pub const LIFETIME_STEPS_KEY: &str = "lifetime.steps";
pub const LIFETIME_WATER_KEY: &str = "lifetime.water";
pub const LIFETIME_ACTIVE_DAYS_KEY: &str = "lifetime.active_days";

/// Liters per water unit (one glass).
pub const WATER_GLASS_LITERS: f64 = 0.25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeStats {
    pub total_steps: u64,
    pub total_water: u64,
    pub active_days: u32,
}

impl LifetimeStats {
    /// Mean steps per tracked day, rounded half away from zero.
    pub fn average_steps(&self) -> u64 {
        (self.total_steps as f64 / f64::from(self.days_divisor())).round() as u64
    }

    /// Mean water per tracked day in liters, rounded to two decimals.
    pub fn average_water_liters(&self) -> f64 {
        let liters = self.total_water as f64 * WATER_GLASS_LITERS / f64::from(self.days_divisor());
        (liters * 100.0).round() / 100.0
    }

    fn days_divisor(&self) -> u32 {
        self.active_days.max(1)
    }
}

/// Loads lifetime totals; missing or unreadable values count as zero.
pub fn load_lifetime_stats<K: KvStore + ?Sized>(kv: &K) -> LifetimeStats {
    LifetimeStats {
        total_steps: read_number_or_default(kv, LIFETIME_STEPS_KEY),
        total_water: read_number_or_default(kv, LIFETIME_WATER_KEY),
        active_days: read_number_or_default(kv, LIFETIME_ACTIVE_DAYS_KEY),
    }
}

/// Adds one finished day to the lifetime totals and persists them.
pub fn fold_finished_day<K: KvStore + ?Sized>(
    kv: &K,
    steps: u32,
    water: u32,
) -> RepoResult<LifetimeStats> {
    let current = load_lifetime_stats(kv);
    let next = LifetimeStats {
        total_steps: current.total_steps.saturating_add(u64::from(steps)),
        total_water: current.total_water.saturating_add(u64::from(water)),
        active_days: current.active_days.saturating_add(1),
    };

    kv.set(LIFETIME_STEPS_KEY, &next.total_steps.to_string())?;
    kv.set(LIFETIME_WATER_KEY, &next.total_water.to_string())?;
    kv.set(LIFETIME_ACTIVE_DAYS_KEY, &next.active_days.to_string())?;
    Ok(next)
}

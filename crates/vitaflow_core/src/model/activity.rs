//! Daily activity counters.
//!
//! # Invariants
//! - `date` is the local calendar date of the last reconciliation.
//! - Counters never go below zero; increments saturate at both ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average stride length in kilometers.
pub const STRIDE_KM: f64 = 0.00076;
/// Daily walking distance goal in kilometers.
pub const DISTANCE_GOAL_KM: f64 = 5.0;

/// Counter addressed by [`crate::DailyCounterStore::increment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterField {
    /// Detected steps.
    Steps,
    /// Glasses of water (one unit = 250 ml).
    Water,
}

impl CounterField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "water",
        }
    }
}

/// Today's counters as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounters {
    pub date: NaiveDate,
    pub steps: u32,
    pub water: u32,
}

impl DailyCounters {
    /// Zeroed counters for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            water: 0,
        }
    }

    pub fn get(&self, field: CounterField) -> u32 {
        match field {
            CounterField::Steps => self.steps,
            CounterField::Water => self.water,
        }
    }

    /// Walked distance in kilometers, rounded to two decimals.
    pub fn distance_km(&self) -> f64 {
        (self.raw_distance_km() * 100.0).round() / 100.0
    }

    /// Percentage of [`DISTANCE_GOAL_KM`] reached today, capped at 100.
    pub fn goal_progress_pct(&self) -> u32 {
        let pct = (self.raw_distance_km() / DISTANCE_GOAL_KM * 100.0).round();
        pct.min(100.0) as u32
    }

    fn raw_distance_km(&self) -> f64 {
        f64::from(self.steps) * STRIDE_KM
    }

    /// Applies `delta` to `field`, clamping to `0..=u32::MAX`.
    pub fn apply(&mut self, field: CounterField, delta: i32) {
        let slot = match field {
            CounterField::Steps => &mut self.steps,
            CounterField::Water => &mut self.water,
        };
        *slot = if delta >= 0 {
            slot.saturating_add(delta.unsigned_abs())
        } else {
            slot.saturating_sub(delta.unsigned_abs())
        };
    }
}

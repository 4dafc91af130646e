//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose dashboard, profile and analysis use-cases to Dart via FRB.
//! - Own the process-wide activity session behind a mutex.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Samples are counted only between `activity_activate` and
//!   `activity_deactivate`.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use vitaflow_core::clock::format_date;
use vitaflow_core::health::{
    assess_sleep, diet_plan, exercise_advice, parse_sleep_hours, BmiCategory, WeatherReport,
};
use vitaflow_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_lifetime_stats,
    ping as ping_inner, ActivityConfig, ActivitySession, DailyCounterStore, DailyCounters,
    MotionSample, ProfileDraft, SqliteKvStore, SystemClock,
};

const ACTIVITY_DB_FILE_NAME: &str = "vitaflow_activity.sqlite3";
static ACTIVITY_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static ACTIVITY: Mutex<Option<FfiActivity>> = Mutex::new(None);

struct FfiActivity {
    session: ActivitySession<SqliteKvStore, SystemClock>,
    sensor_active: bool,
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Dashboard counters envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityResponse {
    pub ok: bool,
    /// `YYYY-MM-DD`, empty when not reconciled.
    pub date: String,
    pub steps: u32,
    pub water: u32,
    pub distance_km: f64,
    /// Progress toward the daily distance goal, `0..=100`.
    pub goal_progress_pct: u32,
    pub message: String,
}

impl ActivityResponse {
    fn from_counters(counters: Option<DailyCounters>, message: impl Into<String>) -> Self {
        match counters {
            Some(counters) => Self {
                ok: true,
                date: format_date(counters.date),
                steps: counters.steps,
                water: counters.water,
                distance_km: counters.distance_km(),
                goal_progress_pct: counters.goal_progress_pct(),
                message: message.into(),
            },
            None => Self::failure("activity not reconciled"),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            date: String::new(),
            steps: 0,
            water: 0,
            distance_km: 0.0,
            goal_progress_pct: 0,
            message: message.into(),
        }
    }
}

/// Reconciles today's counters and starts accepting sensor samples.
///
/// Call on every dashboard focus.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_activate() -> ActivityResponse {
    with_activity(|activity| {
        let counters = activity.session.reconcile();
        activity.sensor_active = true;
        ActivityResponse::from_counters(Some(counters), "Activity reconciled.")
    })
}

/// Stops accepting sensor samples. Counters stay readable.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_deactivate() -> ActivityResponse {
    with_activity(|activity| {
        activity.sensor_active = false;
        ActivityResponse::from_counters(activity.session.counters(), "Activity paused.")
    })
}

/// Feeds accelerometer samples `[x, y, z]` delivered since the last call.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_push_samples(samples: Vec<[f64; 3]>) -> ActivityResponse {
    with_activity(|activity| {
        if !activity.sensor_active {
            return ActivityResponse::from_counters(
                activity.session.counters(),
                "Samples ignored while inactive.",
            );
        }
        let mut steps = 0;
        for raw in samples {
            if activity.session.on_sample(&MotionSample::from(raw)) {
                steps += 1;
            }
        }
        ActivityResponse::from_counters(
            activity.session.counters(),
            format!("{steps} step(s) recorded."),
        )
    })
}

/// Records one glass of water.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_add_water() -> ActivityResponse {
    with_activity(|activity| {
        if activity.session.add_water() {
            ActivityResponse::from_counters(activity.session.counters(), "Water recorded.")
        } else {
            ActivityResponse::failure("activity not reconciled")
        }
    })
}

/// Lifetime averages shown on the profile screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LifetimeStatsResponse {
    pub ok: bool,
    pub average_steps: u64,
    pub average_water_liters: f64,
    pub active_days: u32,
    pub message: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn activity_lifetime_stats() -> LifetimeStatsResponse {
    match lock_activity() {
        Ok(guard) => match guard.as_ref() {
            Some(activity) => {
                let stats = load_lifetime_stats(activity.session.store().kv());
                LifetimeStatsResponse {
                    ok: true,
                    average_steps: stats.average_steps(),
                    average_water_liters: stats.average_water_liters(),
                    active_days: stats.active_days.max(1),
                    message: String::new(),
                }
            }
            None => LifetimeStatsResponse {
                ok: false,
                average_steps: 0,
                average_water_liters: 0.0,
                active_days: 1,
                message: "activity not reconciled".to_string(),
            },
        },
        Err(message) => LifetimeStatsResponse {
            ok: false,
            average_steps: 0,
            average_water_liters: 0.0,
            active_days: 1,
            message,
        },
    }
}

/// Diet plan summary for the dashboard modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DietPlanResponse {
    /// `underweight|normal|overweight|obese`.
    pub category: String,
    pub title: String,
    pub description: String,
    pub color: String,
    /// `[breakfast, lunch, dinner]` per day.
    pub days: Vec<Vec<String>>,
}

/// Picks the diet plan for optional profile measurements.
#[flutter_rust_bridge::frb(sync)]
pub fn health_diet_plan(weight_kg: Option<f64>, height_cm: Option<f64>) -> DietPlanResponse {
    let category = BmiCategory::for_measurements(weight_kg, height_cm);
    let plan = diet_plan(category);
    DietPlanResponse {
        category: bmi_category_label(category).to_string(),
        title: plan.title.to_string(),
        description: plan.description.to_string(),
        color: plan.color.to_string(),
        days: plan
            .days
            .iter()
            .map(|day| {
                vec![
                    day.breakfast.to_string(),
                    day.lunch.to_string(),
                    day.dinner.to_string(),
                ]
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResponse {
    pub ok: bool,
    /// Stable machine label (e.g. `great`, `too_hot`); empty on failure.
    pub label: String,
    pub message: String,
}

/// Assesses typed sleep hours.
#[flutter_rust_bridge::frb(sync)]
pub fn health_sleep_assessment(hours: String) -> AdviceResponse {
    match parse_sleep_hours(&hours) {
        Ok(hours) => {
            let assessment = assess_sleep(hours);
            AdviceResponse {
                ok: true,
                label: assessment.mood.as_str().to_string(),
                message: assessment.advice.to_string(),
            }
        }
        Err(err) => AdviceResponse {
            ok: false,
            label: String::new(),
            message: err.to_string(),
        },
    }
}

/// Derives exercise advice from a raw OpenWeather response body.
#[flutter_rust_bridge::frb(sync)]
pub fn health_exercise_advice(weather_json: String) -> AdviceResponse {
    match WeatherReport::from_openweather_json(&weather_json) {
        Ok(report) => {
            let advice = exercise_advice(&report);
            AdviceResponse {
                ok: true,
                label: advice.as_str().to_string(),
                message: advice.message().to_string(),
            }
        }
        Err(err) => {
            warn!("event=weather_parse module=ffi status=error error={err}");
            AdviceResponse {
                ok: false,
                label: String::new(),
                message: err.to_string(),
            }
        }
    }
}

/// Per-field validation messages; empty when the draft is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileValidationResponse {
    pub ok: bool,
    /// `(field, message)` pairs in form order.
    pub errors: Vec<(String, String)>,
}

#[flutter_rust_bridge::frb(sync)]
pub fn profile_validate(draft: ProfileDraft) -> ProfileValidationResponse {
    match draft.validate() {
        Ok(_) => ProfileValidationResponse {
            ok: true,
            errors: Vec::new(),
        },
        Err(err) => ProfileValidationResponse {
            ok: false,
            errors: err
                .issues
                .iter()
                .map(|(field, issue)| (field.as_str().to_string(), issue.to_string()))
                .collect(),
        },
    }
}

fn with_activity(f: impl FnOnce(&mut FfiActivity) -> ActivityResponse) -> ActivityResponse {
    let mut guard = match lock_activity() {
        Ok(guard) => guard,
        Err(message) => return ActivityResponse::failure(message),
    };
    if guard.is_none() {
        match SqliteKvStore::open(resolve_activity_db_path()) {
            Ok(kv) => {
                let store = DailyCounterStore::new(kv, SystemClock);
                *guard = Some(FfiActivity {
                    session: ActivitySession::new(store, ActivityConfig::default()),
                    sensor_active: false,
                });
            }
            Err(err) => {
                return ActivityResponse::failure(format!("activity DB open failed: {err}"));
            }
        }
    }
    match guard.as_mut() {
        Some(activity) => f(activity),
        None => ActivityResponse::failure("activity unavailable"),
    }
}

fn lock_activity() -> Result<MutexGuard<'static, Option<FfiActivity>>, String> {
    ACTIVITY
        .lock()
        .map_err(|_| "activity state poisoned".to_string())
}

fn resolve_activity_db_path() -> PathBuf {
    ACTIVITY_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("VITAFLOW_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(ACTIVITY_DB_FILE_NAME)
        })
        .clone()
}

fn bmi_category_label(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "underweight",
        BmiCategory::Normal => "normal",
        BmiCategory::Overweight => "overweight",
        BmiCategory::Obese => "obese",
    }
}

//! Pure health rules behind the dashboard and analysis screens.
//!
//! # Responsibility
//! - BMI classification and the matching diet plan.
//! - Sleep-hours mood assessment.
//! - Weather-driven outdoor exercise advice.
//!
//! None of these touch storage or the network.

pub mod bmi;
pub mod sleep;
pub mod weather;

pub use bmi::{bmi, diet_plan, BmiCategory, DayMeals, DietPlan};
pub use sleep::{assess_sleep, parse_sleep_hours, SleepAssessment, SleepInputError, SleepMood};
pub use weather::{
    exercise_advice, ExerciseAdvice, WeatherCondition, WeatherParseError, WeatherReport,
};

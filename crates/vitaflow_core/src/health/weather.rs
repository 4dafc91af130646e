//! Current-weather report and outdoor exercise advice.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Other(String),
}

impl WeatherCondition {
    /// Maps the provider's `weather[0].main` label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Snow" => Self::Snow,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

#[derive(Debug)]
pub enum WeatherParseError {
    Json(serde_json::Error),
    MissingCondition,
}

impl Display for WeatherParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid weather payload: {err}"),
            Self::MissingCondition => write!(f, "weather payload has no condition entry"),
        }
    }
}

impl Error for WeatherParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::MissingCondition => None,
        }
    }
}

impl From<serde_json::Error> for WeatherParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Deserialize)]
struct CurrentWeatherPayload {
    main: MainPayload,
    wind: WindPayload,
    weather: Vec<ConditionPayload>,
}

#[derive(Deserialize)]
struct MainPayload {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Deserialize)]
struct WindPayload {
    speed: f64,
}

#[derive(Deserialize)]
struct ConditionPayload {
    main: String,
    #[serde(default)]
    description: String,
}

impl WeatherReport {
    /// Parses an OpenWeather "current weather" response fetched with metric units.
    pub fn from_openweather_json(payload: &str) -> Result<Self, WeatherParseError> {
        let parsed: CurrentWeatherPayload = serde_json::from_str(payload)?;
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherParseError::MissingCondition)?;
        Ok(Self {
            temp_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_ms: parsed.wind.speed,
            condition: WeatherCondition::from_label(&condition.main),
            description: condition.description,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseAdvice {
    SlipperyRain,
    CarefulSnow,
    TooHot,
    TooCold,
    IdealForRunning,
}

impl ExerciseAdvice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SlipperyRain => "slippery_rain",
            Self::CarefulSnow => "careful_snow",
            Self::TooHot => "too_hot",
            Self::TooCold => "too_cold",
            Self::IdealForRunning => "ideal_for_running",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::SlipperyRain => "It's raining! High risk of slipping.",
            Self::CarefulSnow => "Snowfall! Be careful out there.",
            Self::TooHot => "Very hot! Run in the cool of the evening.",
            Self::TooCold => "Very cold! A short walk is enough.",
            Self::IdealForRunning => "Great weather! Ideal for a run.",
        }
    }
}

/// Precipitation wins over temperature; then `> 30 °C` and `< 5 °C`.
pub fn exercise_advice(report: &WeatherReport) -> ExerciseAdvice {
    match report.condition {
        WeatherCondition::Rain => ExerciseAdvice::SlipperyRain,
        WeatherCondition::Snow => ExerciseAdvice::CarefulSnow,
        _ if report.temp_c > 30.0 => ExerciseAdvice::TooHot,
        _ if report.temp_c < 5.0 => ExerciseAdvice::TooCold,
        _ => ExerciseAdvice::IdealForRunning,
    }
}

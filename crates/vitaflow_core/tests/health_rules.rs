use vitaflow_core::health::{
    exercise_advice, ExerciseAdvice, WeatherCondition, WeatherParseError, WeatherReport,
};

fn payload(temp: f64, condition: &str) -> String {
    format!(
        r#"{{
            "coord": {{"lon": 29.0, "lat": 41.0}},
            "weather": [{{"id": 800, "main": "{condition}", "description": "test sky"}}],
            "main": {{"temp": {temp}, "feels_like": {temp}, "humidity": 61}},
            "wind": {{"speed": 3.6, "deg": 200}},
            "name": "Istanbul"
        }}"#
    )
}

fn advice_for(temp: f64, condition: &str) -> ExerciseAdvice {
    let report = WeatherReport::from_openweather_json(&payload(temp, condition)).unwrap();
    exercise_advice(&report)
}

#[test]
fn parses_current_weather_payload() {
    let report = WeatherReport::from_openweather_json(&payload(18.5, "Clouds")).unwrap();
    assert_eq!(report.temp_c, 18.5);
    assert_eq!(report.humidity_pct, 61.0);
    assert_eq!(report.wind_speed_ms, 3.6);
    assert_eq!(report.condition, WeatherCondition::Clouds);
    assert_eq!(report.description, "test sky");
}

#[test]
fn precipitation_overrides_temperature() {
    assert_eq!(advice_for(35.0, "Rain"), ExerciseAdvice::SlipperyRain);
    assert_eq!(advice_for(-3.0, "Snow"), ExerciseAdvice::CarefulSnow);
}

#[test]
fn temperature_bands_are_exclusive() {
    assert_eq!(advice_for(30.0, "Clear"), ExerciseAdvice::IdealForRunning);
    assert_eq!(advice_for(30.5, "Clear"), ExerciseAdvice::TooHot);
    assert_eq!(advice_for(5.0, "Mist"), ExerciseAdvice::IdealForRunning);
    assert_eq!(advice_for(4.9, "Mist"), ExerciseAdvice::TooCold);
}

#[test]
fn unknown_condition_is_kept_verbatim() {
    let report = WeatherReport::from_openweather_json(&payload(20.0, "Haze")).unwrap();
    assert_eq!(report.condition, WeatherCondition::Other("Haze".to_string()));
}

#[test]
fn payload_without_condition_entry_is_rejected() {
    let body = r#"{"weather": [], "main": {"temp": 1, "feels_like": 1, "humidity": 1}, "wind": {"speed": 0}}"#;
    assert!(matches!(
        WeatherReport::from_openweather_json(body),
        Err(WeatherParseError::MissingCondition)
    ));
    assert!(matches!(
        WeatherReport::from_openweather_json("not json"),
        Err(WeatherParseError::Json(_))
    ));
}

//! Sleep duration assessment.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepMood {
    Tired,
    Okay,
    Great,
    Sluggish,
}

impl SleepMood {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tired => "tired",
            Self::Okay => "okay",
            Self::Great => "great",
            Self::Sluggish => "sluggish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SleepAssessment {
    pub mood: SleepMood,
    pub advice: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SleepInputError {
    NotANumber(String),
}

impl Display for SleepInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(value) => write!(f, "sleep hours must be a number, got `{value}`"),
        }
    }
}

impl Error for SleepInputError {}

/// Parses user-typed sleep hours. Accepts `,` as decimal separator.
pub fn parse_sleep_hours(input: &str) -> Result<f64, SleepInputError> {
    let normalized = input.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite())
        .ok_or_else(|| SleepInputError::NotANumber(input.trim().to_string()))
}

/// `< 5` tired, `< 7` okay, `<= 9` great, otherwise sluggish.
pub fn assess_sleep(hours: f64) -> SleepAssessment {
    if hours < 5.0 {
        SleepAssessment {
            mood: SleepMood::Tired,
            advice: "Avoid heavy work today.",
        }
    } else if hours < 7.0 {
        SleepAssessment {
            mood: SleepMood::Okay,
            advice: "A short nap could help.",
        }
    } else if hours <= 9.0 {
        SleepAssessment {
            mood: SleepMood::Great,
            advice: "Fully charged!",
        }
    } else {
        SleepAssessment {
            mood: SleepMood::Sluggish,
            advice: "Time to get moving!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{assess_sleep, parse_sleep_hours, SleepInputError, SleepMood};

    #[test]
    fn mood_boundaries() {
        assert_eq!(assess_sleep(4.99).mood, SleepMood::Tired);
        assert_eq!(assess_sleep(5.0).mood, SleepMood::Okay);
        assert_eq!(assess_sleep(7.0).mood, SleepMood::Great);
        assert_eq!(assess_sleep(9.0).mood, SleepMood::Great);
        assert_eq!(assess_sleep(9.5).mood, SleepMood::Sluggish);
    }

    #[test]
    fn parse_accepts_comma_and_rejects_text() {
        assert_eq!(parse_sleep_hours(" 7,5 "), Ok(7.5));
        assert_eq!(
            parse_sleep_hours("eight"),
            Err(SleepInputError::NotANumber("eight".to_string()))
        );
        assert!(parse_sleep_hours("inf").is_err());
    }
}

//! User profile form model and client-side validation.
//!
//! # Responsibility
//! - Hold raw, user-entered registration/profile fields.
//! - Turn a draft into a typed [`Profile`] or report every invalid field.
//!
//! # Invariants
//! - Required text fields are non-blank after trim.
//! - Numeric fields accept plain digits only (no sign, no decimal point).
//! - Age stays within `10..=100`; weekly exercise days within `0..=7`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_AGE: u32 = 10;
pub const MAX_AGE: u32 = 100;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));
static EXERCISE_DAYS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-7]$").expect("valid exercise days regex"));

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub chronic_conditions: String,
    pub exercise_days_per_week: String,
    pub smoking: bool,
    pub alcohol: bool,
}

/// Validated profile ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: u32,
    pub height_cm: u32,
    pub weight_kg: u32,
    pub chronic_conditions: Option<String>,
    pub exercise_days_per_week: u8,
    pub smoking: bool,
    pub alcohol: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Gender,
    Age,
    HeightCm,
    WeightKg,
    ExerciseDaysPerWeek,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::ExerciseDaysPerWeek => "exercise_days_per_week",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    NotANumber,
    OutOfRange { min: u32, max: u32 },
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "is required"),
            Self::NotANumber => write!(f, "must contain digits only"),
            Self::OutOfRange { min, max } => write!(f, "must be between {min} and {max}"),
        }
    }
}

/// All field problems found in one validation pass, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileValidationError {
    pub issues: Vec<(ProfileField, FieldIssue)>,
}

impl ProfileValidationError {
    pub fn issue_for(&self, field: ProfileField) -> Option<FieldIssue> {
        self.issues
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, issue)| *issue)
    }
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .issues
            .iter()
            .map(|(field, issue)| format!("{} {issue}", field.as_str()))
            .collect::<Vec<_>>();
        write!(f, "invalid profile: {}", parts.join("; "))
    }
}

impl Error for ProfileValidationError {}

impl ProfileDraft {
    /// Validates every field and returns the typed profile.
    ///
    /// # Errors
    /// Returns all field issues at once so the form can highlight each of them.
    pub fn validate(&self) -> Result<Profile, ProfileValidationError> {
        let mut issues = Vec::new();

        let first_name = required_text(&self.first_name, ProfileField::FirstName, &mut issues);
        let last_name = required_text(&self.last_name, ProfileField::LastName, &mut issues);
        let gender = required_text(&self.gender, ProfileField::Gender, &mut issues);
        let age = digits(&self.age, ProfileField::Age, &mut issues).and_then(|age| {
            if (MIN_AGE..=MAX_AGE).contains(&age) {
                Some(age)
            } else {
                issues.push((
                    ProfileField::Age,
                    FieldIssue::OutOfRange {
                        min: MIN_AGE,
                        max: MAX_AGE,
                    },
                ));
                None
            }
        });
        let height_cm = digits(&self.height_cm, ProfileField::HeightCm, &mut issues);
        let weight_kg = digits(&self.weight_kg, ProfileField::WeightKg, &mut issues);
        let exercise_days = exercise_days(&self.exercise_days_per_week, &mut issues);

        match (
            first_name,
            last_name,
            gender,
            age,
            height_cm,
            weight_kg,
            exercise_days,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(gender),
                Some(age),
                Some(height_cm),
                Some(weight_kg),
                Some(exercise_days_per_week),
            ) if issues.is_empty() => Ok(Profile {
                first_name,
                last_name,
                gender,
                age,
                height_cm,
                weight_kg,
                chronic_conditions: non_blank(&self.chronic_conditions),
                exercise_days_per_week,
                smoking: self.smoking,
                alcohol: self.alcohol,
            }),
            _ => Err(ProfileValidationError { issues }),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required_text(
    value: &str,
    field: ProfileField,
    issues: &mut Vec<(ProfileField, FieldIssue)>,
) -> Option<String> {
    let text = non_blank(value);
    if text.is_none() {
        issues.push((field, FieldIssue::Required));
    }
    text
}

fn digits(
    value: &str,
    field: ProfileField,
    issues: &mut Vec<(ProfileField, FieldIssue)>,
) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        issues.push((field, FieldIssue::Required));
        return None;
    }
    if !DIGITS_RE.is_match(trimmed) {
        issues.push((field, FieldIssue::NotANumber));
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(number) => Some(number),
        Err(_) => {
            issues.push((
                field,
                FieldIssue::OutOfRange {
                    min: 0,
                    max: u32::MAX,
                },
            ));
            None
        }
    }
}

fn exercise_days(value: &str, issues: &mut Vec<(ProfileField, FieldIssue)>) -> Option<u8> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        issues.push((ProfileField::ExerciseDaysPerWeek, FieldIssue::Required));
        return None;
    }
    if !EXERCISE_DAYS_RE.is_match(trimmed) {
        issues.push((
            ProfileField::ExerciseDaysPerWeek,
            FieldIssue::OutOfRange { min: 0, max: 7 },
        ));
        return None;
    }
    trimmed.parse::<u8>().ok()
}

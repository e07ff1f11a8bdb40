//! Input contract for itinerary generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::interests::InterestSet;
use super::levels::BudgetTier;

/// Validation failures raised while building [`TripPreferences`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripPreferencesValidationError {
    #[error("destination must not be blank")]
    BlankDestination,
    #[error("language must not be blank")]
    BlankLanguage,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("duration of {declared} days does not match the {actual}-day date range")]
    DurationMismatch { declared: u16, actual: i64 },
}

/// What a traveller asks the planner for.
///
/// ## Invariants
/// - `destination` and `language` are trimmed and non-empty.
/// - `end_date` is on or after `start_date`.
/// - `duration_days` equals the inclusive number of days between the dates.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use travel_backend::domain::{BudgetTier, TripPreferences};
///
/// let prefs: TripPreferences = serde_json::from_value(json!({
///     "destination": "Kyoto",
///     "interests": ["temples", "food"],
///     "budget": "high",
///     "durationDays": 3,
///     "startDate": "2026-10-01",
///     "endDate": "2026-10-03",
///     "language": "en"
/// }))
/// .expect("valid preferences");
/// assert_eq!(prefs.budget(), BudgetTier::High);
/// assert_eq!(prefs.duration_days(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TripPreferencesDto", into = "TripPreferencesDto")]
pub struct TripPreferences {
    destination: String,
    interests: InterestSet,
    budget: BudgetTier,
    duration_days: u16,
    start_date: NaiveDate,
    end_date: NaiveDate,
    language: String,
}

impl TripPreferences {
    /// Validate a trip request.
    pub fn new(
        destination: impl Into<String>,
        interests: InterestSet,
        budget: BudgetTier,
        duration_days: u16,
        start_date: NaiveDate,
        end_date: NaiveDate,
        language: impl Into<String>,
    ) -> Result<Self, TripPreferencesValidationError> {
        let destination = destination.into().trim().to_owned();
        if destination.is_empty() {
            return Err(TripPreferencesValidationError::BlankDestination);
        }
        let language = language.into().trim().to_owned();
        if language.is_empty() {
            return Err(TripPreferencesValidationError::BlankLanguage);
        }
        if end_date < start_date {
            return Err(TripPreferencesValidationError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        let actual = (end_date - start_date).num_days() + 1;
        if i64::from(duration_days) != actual {
            return Err(TripPreferencesValidationError::DurationMismatch {
                declared: duration_days,
                actual,
            });
        }
        Ok(Self {
            destination,
            interests,
            budget,
            duration_days,
            start_date,
            end_date,
            language,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn interests(&self) -> &InterestSet {
        &self.interests
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    /// Trip length in days, counting both ends.
    pub fn duration_days(&self) -> u16 {
        self.duration_days
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TripPreferencesDto {
    destination: String,
    interests: InterestSet,
    budget: BudgetTier,
    duration_days: u16,
    start_date: NaiveDate,
    end_date: NaiveDate,
    language: String,
}

impl From<TripPreferences> for TripPreferencesDto {
    fn from(value: TripPreferences) -> Self {
        Self {
            destination: value.destination,
            interests: value.interests,
            budget: value.budget,
            duration_days: value.duration_days,
            start_date: value.start_date,
            end_date: value.end_date,
            language: value.language,
        }
    }
}

impl TryFrom<TripPreferencesDto> for TripPreferences {
    type Error = TripPreferencesValidationError;

    fn try_from(value: TripPreferencesDto) -> Result<Self, Self::Error> {
        Self::new(
            value.destination,
            value.interests,
            value.budget,
            value.duration_days,
            value.start_date,
            value.end_date,
            value.language,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn payload() -> Value {
        json!({
            "destination": "Reykjavik",
            "interests": ["hot springs"],
            "budget": "low",
            "durationDays": 1,
            "startDate": "2026-02-10",
            "endDate": "2026-02-10",
            "language": "is"
        })
    }

    #[rstest]
    fn single_day_trip_is_valid(payload: Value) {
        let prefs: TripPreferences = serde_json::from_value(payload).expect("valid payload");
        assert_eq!(prefs.start_date(), prefs.end_date());
        assert_eq!(prefs.language(), "is");
    }

    #[rstest]
    fn duration_must_match_dates(mut payload: Value) {
        payload["durationDays"] = json!(2);
        let error = serde_json::from_value::<TripPreferences>(payload).expect_err("mismatch");
        assert!(error.to_string().contains("does not match"));
    }

    #[rstest]
    fn end_before_start_is_rejected() {
        let start: NaiveDate = "2026-02-10".parse().expect("date");
        let end: NaiveDate = "2026-02-09".parse().expect("date");
        let result = TripPreferences::new(
            "Oslo",
            InterestSet::default(),
            BudgetTier::Low,
            1,
            start,
            end,
            "no",
        );
        assert_eq!(
            result,
            Err(TripPreferencesValidationError::EndBeforeStart { start, end })
        );
    }

    #[rstest]
    #[case::destination("destination")]
    #[case::language("language")]
    fn blank_text_is_rejected(mut payload: Value, #[case] field: &str) {
        payload[field] = json!("  ");
        assert!(serde_json::from_value::<TripPreferences>(payload).is_err());
    }

    #[rstest]
    fn missing_budget_is_rejected(mut payload: Value) {
        payload
            .as_object_mut()
            .expect("payload is an object")
            .remove("budget");
        assert!(serde_json::from_value::<TripPreferences>(payload).is_err());
    }
}

//! Generated trip plans: itineraries, their days and the activities in them.
//!
//! An [`Itinerary`] owns an ordered list of [`DayPlan`]s, each of which owns
//! an ordered list of [`Activity`] values. Every level carries a
//! [`SustainabilityScore`]. Construction checks the date and ordering
//! invariants so handlers never see a day outside its trip.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::interests::InterestSet;
use super::levels::{BudgetTier, CrowdLevel};
use super::user::UserId;

/// Upper bound of the sustainability scale.
pub const SUSTAINABILITY_MAX: f32 = 10.0;

/// Validation failures raised while building itinerary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryValidationError {
    #[error("latitude must be between -90 and 90")]
    LatitudeOutOfRange,
    #[error("longitude must be between -180 and 180")]
    LongitudeOutOfRange,
    #[error("sustainability score must be between 0 and 10")]
    SustainabilityOutOfRange,
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    #[error("cost must be a non-negative amount")]
    InvalidCost,
    #[error("duration must be at least one minute")]
    ZeroDuration,
    #[error("day number must start at 1")]
    ZeroDayNumber,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("day {day_number} falls outside the trip dates")]
    DayOutsideRange { day_number: u16 },
    #[error("day {day_number} is out of order")]
    DaysOutOfOrder { day_number: u16 },
}

/// A WGS84 coordinate with an optional street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoPointDto", into = "GeoPointDto")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
    address: Option<String>,
}

impl GeoPoint {
    /// Validate a coordinate pair.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::GeoPoint;
    ///
    /// let point = GeoPoint::new(48.8584, 2.2945, Some("Champ de Mars".into()))
    ///     .expect("valid coordinate");
    /// assert_eq!(point.address(), Some("Champ de Mars"));
    /// assert!(GeoPoint::new(91.0, 0.0, None).is_err());
    /// ```
    pub fn new(
        latitude: f64,
        longitude: f64,
        address: Option<String>,
    ) -> Result<Self, ItineraryValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ItineraryValidationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ItineraryValidationError::LongitudeOutOfRange);
        }
        let address = address
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Ok(Self {
            latitude,
            longitude,
            address,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GeoPointDto {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl From<GeoPoint> for GeoPointDto {
    fn from(value: GeoPoint) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
            address: value.address,
        }
    }
}

impl TryFrom<GeoPointDto> for GeoPoint {
    type Error = ItineraryValidationError;

    fn try_from(value: GeoPointDto) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude, value.address)
    }
}

/// Environmental impact rating on the closed `0..=10` scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct SustainabilityScore(f32);

impl SustainabilityScore {
    /// Validate a raw score.
    pub fn new(value: f32) -> Result<Self, ItineraryValidationError> {
        if value.is_finite() && (0.0..=SUSTAINABILITY_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ItineraryValidationError::SustainabilityOutOfRange)
        }
    }

    /// The raw value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<SustainabilityScore> for f32 {
    fn from(value: SustainabilityScore) -> Self {
        value.0
    }
}

impl TryFrom<f32> for SustainabilityScore {
    type Error = ItineraryValidationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated activity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewActivity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: GeoPoint,
    pub cost: f64,
    pub duration_minutes: u32,
    pub crowd_level: CrowdLevel,
    pub sustainability_score: SustainabilityScore,
    pub is_hidden_gem: bool,
    pub images: Vec<String>,
}

/// A point of interest scheduled within a day.
///
/// ## Invariants
/// - `name` and `category` are trimmed and non-empty.
/// - `cost` is finite and non-negative.
/// - `duration_minutes` is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewActivity", into = "NewActivity")]
pub struct Activity {
    id: Uuid,
    name: String,
    description: String,
    category: String,
    location: GeoPoint,
    cost: f64,
    duration_minutes: u32,
    crowd_level: CrowdLevel,
    sustainability_score: SustainabilityScore,
    is_hidden_gem: bool,
    images: Vec<String>,
}

impl Activity {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Expected spend in the destination's currency.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn crowd_level(&self) -> CrowdLevel {
        self.crowd_level
    }

    pub fn sustainability_score(&self) -> SustainabilityScore {
        self.sustainability_score
    }

    /// Whether the activity is off the usual tourist trail.
    pub fn is_hidden_gem(&self) -> bool {
        self.is_hidden_gem
    }

    /// Image URLs.
    pub fn images(&self) -> &[String] {
        &self.images
    }
}

fn required(field: &'static str, value: String) -> Result<String, ItineraryValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItineraryValidationError::BlankField { field });
    }
    Ok(trimmed.to_owned())
}

impl TryFrom<NewActivity> for Activity {
    type Error = ItineraryValidationError;

    fn try_from(value: NewActivity) -> Result<Self, Self::Error> {
        if !value.cost.is_finite() || value.cost < 0.0 {
            return Err(ItineraryValidationError::InvalidCost);
        }
        if value.duration_minutes == 0 {
            return Err(ItineraryValidationError::ZeroDuration);
        }
        Ok(Self {
            id: value.id,
            name: required("name", value.name)?,
            description: value.description.trim().to_owned(),
            category: required("category", value.category)?,
            location: value.location,
            cost: value.cost,
            duration_minutes: value.duration_minutes,
            crowd_level: value.crowd_level,
            sustainability_score: value.sustainability_score,
            is_hidden_gem: value.is_hidden_gem,
            images: value.images,
        })
    }
}

impl From<Activity> for NewActivity {
    fn from(value: Activity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            category: value.category,
            location: value.location,
            cost: value.cost,
            duration_minutes: value.duration_minutes,
            crowd_level: value.crowd_level,
            sustainability_score: value.sustainability_score,
            is_hidden_gem: value.is_hidden_gem,
            images: value.images,
        }
    }
}

/// One day of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DayPlanDto", into = "DayPlanDto")]
pub struct DayPlan {
    date: NaiveDate,
    day_number: u16,
    activities: Vec<Activity>,
    sustainability_score: SustainabilityScore,
}

impl DayPlan {
    /// Build a day; `day_number` is one-based.
    pub fn new(
        date: NaiveDate,
        day_number: u16,
        activities: Vec<Activity>,
        sustainability_score: SustainabilityScore,
    ) -> Result<Self, ItineraryValidationError> {
        if day_number == 0 {
            return Err(ItineraryValidationError::ZeroDayNumber);
        }
        Ok(Self {
            date,
            day_number,
            activities,
            sustainability_score,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_number(&self) -> u16 {
        self.day_number
    }

    /// Activities in visiting order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn sustainability_score(&self) -> SustainabilityScore {
        self.sustainability_score
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct DayPlanDto {
    date: NaiveDate,
    day_number: u16,
    activities: Vec<Activity>,
    sustainability_score: SustainabilityScore,
}

impl From<DayPlan> for DayPlanDto {
    fn from(value: DayPlan) -> Self {
        Self {
            date: value.date,
            day_number: value.day_number,
            activities: value.activities,
            sustainability_score: value.sustainability_score,
        }
    }
}

impl TryFrom<DayPlanDto> for DayPlan {
    type Error = ItineraryValidationError;

    fn try_from(value: DayPlanDto) -> Result<Self, Self::Error> {
        Self::new(
            value.date,
            value.day_number,
            value.activities,
            value.sustainability_score,
        )
    }
}

/// Unvalidated itinerary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewItinerary {
    pub id: Uuid,
    pub user_id: UserId,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<DayPlan>,
    pub total_sustainability_score: SustainabilityScore,
    pub budget: BudgetTier,
    pub interests: InterestSet,
    pub created_at: DateTime<Utc>,
}

/// A multi-day trip plan for one destination.
///
/// ## Invariants
/// - `end_date` is on or after `start_date`.
/// - Every day's date lies within `start_date..=end_date`.
/// - Day dates and day numbers are strictly increasing.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use travel_backend::domain::Itinerary;
///
/// let payload = json!({
///     "id": "7b0c2f6e-1c7e-4a53-9d0f-2a9a3c1f4b11",
///     "userId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
///     "destination": "Lisbon",
///     "startDate": "2026-05-01",
///     "endDate": "2026-05-03",
///     "totalSustainabilityScore": 7.5,
///     "budget": "medium",
///     "interests": ["food"],
///     "createdAt": "2026-04-01T12:00:00Z"
/// });
/// // `days` is required.
/// assert!(serde_json::from_value::<Itinerary>(payload).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewItinerary", into = "NewItinerary")]
pub struct Itinerary {
    id: Uuid,
    user_id: UserId,
    destination: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: Vec<DayPlan>,
    total_sustainability_score: SustainabilityScore,
    budget: BudgetTier,
    interests: InterestSet,
    created_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Owner of the plan.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Days in calendar order.
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn total_sustainability_score(&self) -> SustainabilityScore {
        self.total_sustainability_score
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    pub fn interests(&self) -> &InterestSet {
        &self.interests
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn check_days(
    start: NaiveDate,
    end: NaiveDate,
    days: &[DayPlan],
) -> Result<(), ItineraryValidationError> {
    let mut previous: Option<&DayPlan> = None;
    for day in days {
        if day.date < start || day.date > end {
            return Err(ItineraryValidationError::DayOutsideRange {
                day_number: day.day_number,
            });
        }
        let out_of_order = previous
            .is_some_and(|prev| day.date <= prev.date || day.day_number <= prev.day_number);
        if out_of_order {
            return Err(ItineraryValidationError::DaysOutOfOrder {
                day_number: day.day_number,
            });
        }
        previous = Some(day);
    }
    Ok(())
}

impl TryFrom<NewItinerary> for Itinerary {
    type Error = ItineraryValidationError;

    fn try_from(value: NewItinerary) -> Result<Self, Self::Error> {
        if value.end_date < value.start_date {
            return Err(ItineraryValidationError::EndBeforeStart {
                start: value.start_date,
                end: value.end_date,
            });
        }
        check_days(value.start_date, value.end_date, &value.days)?;
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            destination: required("destination", value.destination)?,
            start_date: value.start_date,
            end_date: value.end_date,
            days: value.days,
            total_sustainability_score: value.total_sustainability_score,
            budget: value.budget,
            interests: value.interests,
            created_at: value.created_at,
        })
    }
}

impl From<Itinerary> for NewItinerary {
    fn from(value: Itinerary) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            destination: value.destination,
            start_date: value.start_date,
            end_date: value.end_date,
            days: value.days,
            total_sustainability_score: value.total_sustainability_score,
            budget: value.budget,
            interests: value.interests,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
#[path = "itinerary_tests.rs"]
mod tests;

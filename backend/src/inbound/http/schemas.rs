//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror each type's JSON shape and are registered under the
//! domain type's path, so the published contract names `crate.domain.User`
//! rather than the wrapper.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::DomainError`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DomainError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DomainErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "destination must not be empty")]
    message: String,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::BudgetTier`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BudgetTier, rename_all = "snake_case")]
pub enum BudgetTierSchema {
    Low,
    Medium,
    High,
}

/// OpenAPI schema for [`crate::domain::CrowdLevel`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CrowdLevel, rename_all = "snake_case")]
pub enum CrowdLevelSchema {
    Low,
    Medium,
    High,
}

/// OpenAPI schema for [`crate::domain::EmployeeStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EmployeeStatus, rename_all = "snake_case")]
pub enum EmployeeStatusSchema {
    Available,
    Busy,
    Offline,
}

/// OpenAPI schema for [`crate::domain::UserPreferences`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserPreferences, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPreferencesSchema {
    /// Lower-cased, de-duplicated interest tags.
    #[schema(example = json!(["museums", "street food"]))]
    interests: Vec<String>,
    budget: BudgetTierSchema,
    #[schema(example = "en")]
    language: String,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// `passwordHash` is accepted on input and never returned.
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = "ada@example.org")]
    email: String,
    #[schema(write_only)]
    password_hash: Option<String>,
    preferences: UserPreferencesSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::GeoPoint`].
#[derive(ToSchema)]
#[schema(as = crate::domain::GeoPoint)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GeoPointSchema {
    /// Degrees within `-90..=90`.
    latitude: f64,
    /// Degrees within `-180..=180`.
    longitude: f64,
    address: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Activity`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Activity, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ActivitySchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    name: String,
    description: String,
    #[schema(example = "museum")]
    category: String,
    location: GeoPointSchema,
    #[schema(minimum = 0.0)]
    cost: f64,
    #[schema(minimum = 1)]
    duration_minutes: u32,
    crowd_level: CrowdLevelSchema,
    #[schema(minimum = 0.0, maximum = 10.0)]
    sustainability_score: f32,
    is_hidden_gem: bool,
    images: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::DayPlan`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DayPlan, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DayPlanSchema {
    #[schema(value_type = String, format = Date)]
    date: String,
    #[schema(minimum = 1)]
    day_number: u16,
    activities: Vec<ActivitySchema>,
    #[schema(minimum = 0.0, maximum = 10.0)]
    sustainability_score: f32,
}

/// OpenAPI schema for [`crate::domain::Itinerary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Itinerary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItinerarySchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(value_type = String, format = Uuid)]
    user_id: String,
    #[schema(example = "Lisbon")]
    destination: String,
    #[schema(value_type = String, format = Date)]
    start_date: String,
    #[schema(value_type = String, format = Date)]
    end_date: String,
    days: Vec<DayPlanSchema>,
    #[schema(minimum = 0.0, maximum = 10.0)]
    total_sustainability_score: f32,
    budget: BudgetTierSchema,
    interests: Vec<String>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::TripPreferences`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TripPreferences, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TripPreferencesSchema {
    destination: String,
    interests: Vec<String>,
    budget: BudgetTierSchema,
    /// Inclusive day count between `startDate` and `endDate`.
    #[schema(minimum = 1)]
    duration_days: u16,
    #[schema(value_type = String, format = Date)]
    start_date: String,
    #[schema(value_type = String, format = Date)]
    end_date: String,
    #[schema(example = "en")]
    language: String,
}

/// OpenAPI schema for [`crate::domain::ForecastDay`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ForecastDay, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ForecastDaySchema {
    #[schema(value_type = String, format = Date)]
    date: String,
    high_celsius: f32,
    low_celsius: f32,
    condition: String,
    #[schema(maximum = 100)]
    precipitation_chance: u8,
}

/// OpenAPI schema for [`crate::domain::WeatherData`].
#[derive(ToSchema)]
#[schema(as = crate::domain::WeatherData, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WeatherDataSchema {
    location: String,
    temperature_celsius: f32,
    #[schema(example = "light rain")]
    condition: String,
    humidity_percent: u8,
    wind_speed_kph: f32,
    forecast: Vec<ForecastDaySchema>,
}

/// OpenAPI schema for [`crate::domain::EventData`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EventData, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventDataSchema {
    id: String,
    name: String,
    description: Option<String>,
    venue: String,
    #[schema(value_type = String, format = DateTime)]
    starts_at: String,
    #[schema(value_type = Option<String>, format = DateTime)]
    ends_at: Option<String>,
    category: String,
    price_from: Option<f64>,
    url: Option<String>,
}

/// OpenAPI schema for [`crate::domain::CrowdData`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CrowdData, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CrowdDataSchema {
    location: String,
    level: CrowdLevelSchema,
    #[schema(example = json!(["11:00-14:00"]))]
    peak_hours: Vec<String>,
    #[schema(maximum = 100)]
    capacity_percent: Option<u8>,
    #[schema(value_type = String, format = DateTime)]
    observed_at: String,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    name: String,
    #[schema(example = "sarah.johnson@travelplanner.com")]
    email: String,
    phone: String,
    role: String,
    department: String,
    specialties: Vec<String>,
    languages: Vec<String>,
    experience: u32,
    #[schema(minimum = 0.0, maximum = 5.0)]
    rating: f32,
    total_reviews: u32,
    availability: String,
    status: EmployeeStatusSchema,
    response_time: String,
    bio: String,
}

//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed entities shared by the HTTP contract and
//! the persistence layer. Types validate on construction and on
//! deserialisation, so invalid payloads never reach services.
//!
//! Public surface:
//! - Employee (alias to `employee::Employee`) and the seeding service
//!   `EmployeeSeeder`.
//! - User, Itinerary, DayPlan, Activity, TripPreferences: trip-planning
//!   contract types.
//! - WeatherData, EventData, CrowdData: read-only external feed shapes.
//! - DomainError and ErrorCode: transport-agnostic failure payload.

pub mod email;
pub mod employee;
pub mod employee_seeding;
pub mod error;
pub mod external_feeds;
pub mod interests;
pub mod itinerary;
pub mod levels;
pub mod ports;
pub mod trip_preferences;
pub mod user;

pub use self::email::{EmailAddress, EmailValidationError};
pub use self::employee::{
    Employee, EmployeeStatus, EmployeeValidationError, NewEmployee, ParseEmployeeStatusError,
    RATING_MAX, Rating,
};
pub use self::employee_seeding::{
    EmployeeSeedOutcome, EmployeeSeeder, EmployeeSeedingError, ReplaceMode, roster_employees,
};
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::external_feeds::{CrowdData, EventData, ForecastDay, WeatherData};
pub use self::interests::{InterestSet, InterestSetValidationError};
pub use self::itinerary::{
    Activity, DayPlan, GeoPoint, Itinerary, ItineraryValidationError, NewActivity, NewItinerary,
    SUSTAINABILITY_MAX, SustainabilityScore,
};
pub use self::levels::{BudgetTier, CrowdLevel, ParseLevelError};
pub use self::trip_preferences::{TripPreferences, TripPreferencesValidationError};
pub use self::user::{PasswordHash, User, UserId, UserPreferences, UserValidationError};

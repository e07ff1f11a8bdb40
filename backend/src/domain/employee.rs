//! Support-staff employee records.
//!
//! Employees are written wholesale by the seeding binary and read by the
//! support directory. Construction goes through [`NewEmployee`] so every
//! [`Employee`] in memory has already passed validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::email::{EmailAddress, EmailValidationError};

/// Upper bound of the review rating scale.
pub const RATING_MAX: f32 = 5.0;

/// Availability status of a support employee.
///
/// # Examples
///
/// ```
/// # use travel_backend::domain::EmployeeStatus;
/// assert_eq!("busy".parse::<EmployeeStatus>(), Ok(EmployeeStatus::Busy));
/// assert_eq!(EmployeeStatus::Offline.as_str(), "offline");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Ready to take new conversations.
    Available,
    /// Handling other travellers.
    Busy,
    /// Outside working hours.
    Offline,
}

impl EmployeeStatus {
    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown employee status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown employee status: {input}")]
pub struct ParseEmployeeStatusError {
    /// The unrecognised input value.
    pub input: String,
}

impl FromStr for EmployeeStatus {
    type Err = ParseEmployeeStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "offline" => Ok(Self::Offline),
            _ => Err(ParseEmployeeStatusError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Validation failures raised while building an [`Employee`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeValidationError {
    /// A required free-text field was blank.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    /// The email failed validation.
    #[error("email is invalid: {0}")]
    Email(#[from] EmailValidationError),
    /// A set contained a blank entry.
    #[error("{field} must not contain blank entries")]
    BlankSetEntry { field: &'static str },
    /// Rating was NaN, infinite or outside `0..=5`.
    #[error("rating must be between 0 and 5")]
    RatingOutOfRange,
    /// A count does not fit the storage column.
    #[error("{field} value {value} is too large")]
    CountTooLarge { field: &'static str, value: u32 },
}

/// Review rating on the closed `0..=5` scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    /// Validate a raw rating.
    pub fn new(value: f32) -> Result<Self, EmployeeValidationError> {
        if value.is_finite() && (0.0..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EmployeeValidationError::RatingOutOfRange)
        }
    }

    /// The raw value.
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<Rating> for f32 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = EmployeeValidationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated employee fields, as supplied by the roster or a payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub experience: u32,
    pub rating: f32,
    pub total_reviews: u32,
    pub availability: String,
    pub status: EmployeeStatus,
    pub response_time: String,
    pub bio: String,
}

/// A validated support-staff member.
///
/// ## Invariants
/// - Free-text fields are trimmed and non-empty.
/// - `email` is a normalised [`EmailAddress`].
/// - `specialties` and `languages` hold no blanks and no duplicates, in
///   first-seen order.
/// - `experience` and `total_reviews` fit a PostgreSQL `INTEGER`.
/// - `rating` is within `0..=5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewEmployee", into = "NewEmployee")]
pub struct Employee {
    name: String,
    email: EmailAddress,
    phone: String,
    role: String,
    department: String,
    specialties: Vec<String>,
    languages: Vec<String>,
    experience: u32,
    rating: Rating,
    total_reviews: u32,
    availability: String,
    status: EmployeeStatus,
    response_time: String,
    bio: String,
}

impl Employee {
    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Job title.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Owning department.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Areas of expertise.
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Spoken languages.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Years of experience.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Average review rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Number of reviews behind the rating.
    pub fn total_reviews(&self) -> u32 {
        self.total_reviews
    }

    /// Free-text working schedule.
    pub fn availability(&self) -> &str {
        &self.availability
    }

    /// Current availability status.
    pub fn status(&self) -> EmployeeStatus {
        self.status
    }

    /// Free-text typical response latency.
    pub fn response_time(&self) -> &str {
        &self.response_time
    }

    /// Short biography.
    pub fn bio(&self) -> &str {
        &self.bio
    }
}

fn required(field: &'static str, value: String) -> Result<String, EmployeeValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EmployeeValidationError::BlankField { field });
    }
    Ok(trimmed.to_owned())
}

fn string_set(
    field: &'static str,
    values: Vec<String>,
) -> Result<Vec<String>, EmployeeValidationError> {
    let mut set: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmployeeValidationError::BlankSetEntry { field });
        }
        if !set.iter().any(|existing| existing == trimmed) {
            set.push(trimmed.to_owned());
        }
    }
    Ok(set)
}

fn storable_count(field: &'static str, value: u32) -> Result<u32, EmployeeValidationError> {
    i32::try_from(value)
        .map(|_| value)
        .map_err(|_| EmployeeValidationError::CountTooLarge { field, value })
}

impl TryFrom<NewEmployee> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: NewEmployee) -> Result<Self, Self::Error> {
        let NewEmployee {
            name,
            email,
            phone,
            role,
            department,
            specialties,
            languages,
            experience,
            rating,
            total_reviews,
            availability,
            status,
            response_time,
            bio,
        } = value;

        Ok(Self {
            name: required("name", name)?,
            email: EmailAddress::new(email)?,
            phone: required("phone", phone)?,
            role: required("role", role)?,
            department: required("department", department)?,
            specialties: string_set("specialties", specialties)?,
            languages: string_set("languages", languages)?,
            experience: storable_count("experience", experience)?,
            rating: Rating::new(rating)?,
            total_reviews: storable_count("totalReviews", total_reviews)?,
            availability: required("availability", availability)?,
            status,
            response_time: required("responseTime", response_time)?,
            bio: required("bio", bio)?,
        })
    }
}

impl From<Employee> for NewEmployee {
    fn from(value: Employee) -> Self {
        Self {
            name: value.name,
            email: value.email.into(),
            phone: value.phone,
            role: value.role,
            department: value.department,
            specialties: value.specialties,
            languages: value.languages,
            experience: value.experience,
            rating: value.rating.value(),
            total_reviews: value.total_reviews,
            availability: value.availability,
            status: value.status,
            response_time: value.response_time,
            bio: value.bio,
        }
    }
}

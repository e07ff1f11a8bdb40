//! Support roster loading and structural validation.
//!
//! A roster is a versioned JSON document holding the staff records that the
//! seeding binary writes into the employee directory. The bundled fixture is
//! compiled into the crate; overrides can be loaded from disk.

use std::collections::HashMap;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::RosterError;
use crate::record::StaffRecordSeed;
use crate::validation::{is_plausible_email, normalise_email};

/// Current supported roster version.
const SUPPORTED_VERSION: u32 = 1;

/// Roster fixture shipped with the crate.
const BUNDLED_ROSTER: &str = include_str!("../fixtures/support-staff.json");

/// An ordered, validated list of support-staff records.
///
/// # Example
///
/// ```
/// use support_roster::SupportRoster;
///
/// let json = r#"{
///     "version": 1,
///     "employees": [{
///         "name": "Ada Lovelace",
///         "email": "ada@example.com",
///         "phone": "+44-20-0000",
///         "role": "Travel Consultant",
///         "department": "Customer Support",
///         "specialties": ["Rail Journeys"],
///         "languages": ["English"],
///         "experience": 3,
///         "rating": 4.5,
///         "totalReviews": 10,
///         "availability": "Weekdays",
///         "status": "available",
///         "responseTime": "< 5 minutes",
///         "bio": "Loves trains."
///     }]
/// }"#;
///
/// let roster = SupportRoster::from_json(json).expect("valid roster");
/// assert_eq!(roster.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SupportRoster {
    version: u32,
    employees: Vec<StaffRecordSeed>,
}

impl SupportRoster {
    /// Returns the roster compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the bundled fixture fails validation, which
    /// only happens when the fixture itself has been edited incorrectly.
    pub fn bundled() -> Result<Self, RosterError> {
        Self::from_json(BUNDLED_ROSTER)
    }

    /// Parses a roster from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if:
    /// - The JSON is malformed or has missing/unknown fields
    /// - The version is unsupported
    /// - The employees array is empty
    /// - An email is implausible or appears twice
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let raw: RawRoster = serde_json::from_str(json).map_err(|e| RosterError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a roster from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IoError`] if the file cannot be read, or any
    /// parse error raised by [`SupportRoster::from_json`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, RosterError> {
        let io_error = |message: String| RosterError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("roster path must be a file".to_owned()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawRoster) -> Result<Self, RosterError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RosterError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.employees.is_empty() {
            return Err(RosterError::EmptyRoster);
        }

        let mut seen: HashMap<String, usize> = HashMap::with_capacity(raw.employees.len());
        for (index, record) in raw.employees.iter().enumerate() {
            if !is_plausible_email(record.email.trim()) {
                return Err(RosterError::InvalidEmail {
                    index,
                    value: record.email.clone(),
                });
            }
            let email = normalise_email(&record.email);
            if let Some(first) = seen.get(&email) {
                return Err(RosterError::DuplicateEmail {
                    email,
                    first: *first,
                    second: index,
                });
            }
            seen.insert(email, index);
        }

        Ok(Self {
            version: raw.version,
            employees: raw.employees,
        })
    }

    /// Returns the roster version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the staff records in fixture order.
    #[must_use]
    pub fn employees(&self) -> &[StaffRecordSeed] {
        &self.employees
    }

    /// Returns the number of staff records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` when the roster holds no records.
    ///
    /// Validated rosters are never empty; this exists for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Finds a record by email, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&StaffRecordSeed> {
        let wanted = normalise_email(email);
        self.employees
            .iter()
            .find(|record| normalise_email(&record.email) == wanted)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawRoster {
    version: u32,
    employees: Vec<StaffRecordSeed>,
}

//! Support-staff seed records.
//!
//! These types mirror the JSON fixture one-to-one and stay independent of the
//! backend's domain `Employee` so the backend can depend on this crate without
//! a cycle.

use serde::{Deserialize, Serialize};

/// Availability status recorded for a staff member.
///
/// Mirrors the backend's `EmployeeStatus` enum without creating a dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatusSeed {
    /// Ready to take new conversations.
    #[default]
    Available,
    /// Currently handling other travellers.
    Busy,
    /// Outside working hours.
    Offline,
}

/// A single support-staff record as stored in the roster fixture.
///
/// # Example
///
/// ```
/// use support_roster::{StaffRecordSeed, StaffStatusSeed};
///
/// let record = StaffRecordSeed {
///     name: "Ada Lovelace".to_owned(),
///     email: "ada@example.com".to_owned(),
///     phone: "+44-20-0000".to_owned(),
///     role: "Travel Consultant".to_owned(),
///     department: "Customer Support".to_owned(),
///     specialties: vec!["Rail Journeys".to_owned()],
///     languages: vec!["English".to_owned()],
///     experience: 3,
///     rating: 4.5,
///     total_reviews: 10,
///     availability: "Weekdays".to_owned(),
///     status: StaffStatusSeed::Available,
///     response_time: "< 5 minutes".to_owned(),
///     bio: "Loves trains.".to_owned(),
/// };
///
/// assert_eq!(record.status, StaffStatusSeed::Available);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StaffRecordSeed {
    /// Full name.
    pub name: String,
    /// Directory email address; unique within the roster.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Job title.
    pub role: String,
    /// Owning department.
    pub department: String,
    /// Areas of expertise.
    pub specialties: Vec<String>,
    /// Spoken languages.
    pub languages: Vec<String>,
    /// Years of experience.
    pub experience: u32,
    /// Average review rating on a 0–5 scale.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub total_reviews: u32,
    /// Free-text working schedule.
    pub availability: String,
    /// Current availability status.
    pub status: StaffStatusSeed,
    /// Free-text typical response latency.
    pub response_time: String,
    /// Short biography.
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_seed_serializes_lowercase() {
        let busy = serde_json::to_string(&StaffStatusSeed::Busy).expect("serialize");
        assert_eq!(busy, "\"busy\"");
    }

    #[test]
    fn status_seed_rejects_unknown_values() {
        let result: Result<StaffStatusSeed, _> = serde_json::from_str("\"on_break\"");
        assert!(result.is_err());
    }
}

//! Integration tests for roster loading.
//!
//! These tests exercise the public API the backend seeding binary relies on:
//! the bundled fixture, overrides read from disk, and the structural checks
//! applied to both.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use camino::Utf8Path;
use rstest::rstest;
use support_roster::{RosterError, StaffStatusSeed, SupportRoster};
use test_support::{unique_temp_path, write_roster};

const SINGLE_RECORD_JSON: &str = r#"{
    "version": 1,
    "employees": [{
        "name": "Grace Hopper",
        "email": "grace.hopper@travelplanner.com",
        "phone": "+1-555-0199",
        "role": "Night Shift Consultant",
        "department": "Customer Support",
        "specialties": ["Red-eye Flights"],
        "languages": ["English"],
        "experience": 2,
        "rating": 3.5,
        "totalReviews": 7,
        "availability": "Nightly, 10:00 PM - 6:00 AM EST",
        "status": "busy",
        "responseTime": "< 10 minutes",
        "bio": "Keeps overnight travellers company."
    }]
}"#;

fn record_json(email: &str) -> String {
    format!(
        r#"{{
            "name": "Staff Member",
            "email": "{email}",
            "phone": "+1-555-0000",
            "role": "Consultant",
            "department": "Support",
            "specialties": ["Planning"],
            "languages": ["English"],
            "experience": 1,
            "rating": 4.0,
            "totalReviews": 1,
            "availability": "Weekdays",
            "status": "available",
            "responseTime": "< 5 minutes",
            "bio": "Helpful."
        }}"#
    )
}

#[test]
fn bundled_roster_emails_are_unique() {
    let roster = SupportRoster::bundled().expect("bundled roster is valid");
    let mut emails: Vec<String> = roster
        .employees()
        .iter()
        .map(|record| record.email.to_lowercase())
        .collect();
    emails.sort();
    emails.dedup();

    assert_eq!(emails.len(), roster.len());
}

#[test]
fn loads_roster_override_from_disk() {
    let path = unique_temp_path("override", "staff.json").expect("temp path");
    write_roster(&path, SINGLE_RECORD_JSON).expect("write roster");

    let roster = SupportRoster::from_path(&path).expect("roster loads");

    assert_eq!(roster.len(), 1);
    let record = roster.employees().first().expect("one record");
    assert_eq!(record.name, "Grace Hopper");
    assert_eq!(record.status, StaffStatusSeed::Busy);
    assert_eq!(record.total_reviews, 7);
}

#[test]
fn missing_file_reports_io_error() {
    let path = unique_temp_path("missing", "absent.json").expect("temp path");

    let result = SupportRoster::from_path(&path);

    assert!(matches!(result, Err(RosterError::IoError { .. })));
}

#[test]
fn directory_path_without_file_name_is_rejected() {
    let result = SupportRoster::from_path(Utf8Path::new("/"));

    assert!(matches!(result, Err(RosterError::IoError { .. })));
}

#[test]
fn duplicate_emails_are_rejected_case_insensitively() {
    let json = format!(
        r#"{{"version": 1, "employees": [{}, {}]}}"#,
        record_json("sam@travelplanner.com"),
        record_json("SAM@travelplanner.com")
    );

    let result = SupportRoster::from_json(&json);

    assert_eq!(
        result,
        Err(RosterError::DuplicateEmail {
            email: "sam@travelplanner.com".to_owned(),
            first: 0,
            second: 1,
        })
    );
}

#[rstest]
#[case("not-an-email")]
#[case("two@@travelplanner.com")]
fn implausible_emails_are_rejected(#[case] email: &str) {
    let json = format!(r#"{{"version": 1, "employees": [{}]}}"#, record_json(email));

    let result = SupportRoster::from_json(&json);

    assert_eq!(
        result,
        Err(RosterError::InvalidEmail {
            index: 0,
            value: email.to_owned(),
        })
    );
}

#[test]
fn unknown_status_is_a_parse_error() {
    let json = SINGLE_RECORD_JSON.replace("\"busy\"", "\"on_holiday\"");

    let result = SupportRoster::from_json(&json);

    assert!(matches!(result, Err(RosterError::ParseError { .. })));
}

#[test]
fn negative_experience_is_a_parse_error() {
    let json = SINGLE_RECORD_JSON.replace("\"experience\": 2", "\"experience\": -2");

    let result = SupportRoster::from_json(&json);

    assert!(matches!(result, Err(RosterError::ParseError { .. })));
}

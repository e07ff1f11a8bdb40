//! Error types for the support-roster crate.
//!
//! Registry-style failures are reported as semantic `thiserror` enums so
//! callers can log a specific cause before giving up.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating a support roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file at '{path}': {message}")]
    IoError {
        /// Path to the roster file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The roster JSON is malformed or missing required fields.
    #[error("invalid roster JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The roster version is not supported.
    #[error("unsupported roster version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the roster.
        actual: u32,
    },

    /// The roster contains no employee records.
    #[error("roster contains no employee records")]
    EmptyRoster,

    /// A record's email does not look like a mailbox address.
    #[error("employee record {index} has an invalid email: '{value}'")]
    InvalidEmail {
        /// Index of the offending record.
        index: usize,
        /// The rejected email value.
        value: String,
    },

    /// Two records share the same email address.
    #[error("duplicate employee email '{email}' at records {first} and {second}")]
    DuplicateEmail {
        /// Normalised email shared by both records.
        email: String,
        /// Index of the first record using the email.
        first: usize,
        /// Index of the repeated record.
        second: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = RosterError::IoError {
            path: Utf8PathBuf::from("/tmp/staff.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read roster file at '/tmp/staff.json': file not found"
        );
    }

    #[test]
    fn version_error_formats_correctly() {
        let err = RosterError::UnsupportedVersion {
            expected: 1,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "unsupported roster version: expected 1, found 3"
        );
    }

    #[test]
    fn duplicate_email_formats_correctly() {
        let err = RosterError::DuplicateEmail {
            email: "ada@example.com".to_owned(),
            first: 0,
            second: 4,
        };
        assert_eq!(
            err.to_string(),
            "duplicate employee email 'ada@example.com' at records 0 and 4"
        );
    }
}

//! Bundled support-staff roster for the travel planner.
//!
//! This crate owns the fixed list of support-staff records that the backend's
//! `seed-employees` binary writes into the employee directory. It is kept
//! independent of backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading the roster compiled into the crate, or an override from disk
//! - Structural validation (version, non-empty, plausible and unique emails)
//! - Closed status values mirroring the backend's employee status
//!
//! # Example
//!
//! ```
//! use support_roster::SupportRoster;
//!
//! let roster = SupportRoster::bundled().expect("bundled roster is valid");
//! assert_eq!(roster.len(), 8);
//! ```

mod error;
mod record;
mod roster;
mod validation;

pub use error::RosterError;
pub use record::{StaffRecordSeed, StaffStatusSeed};
pub use roster::SupportRoster;
pub use validation::is_plausible_email;

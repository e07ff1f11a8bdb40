//! Support-staff seeding orchestration.
//!
//! Converts the bundled support roster into validated domain employees, then
//! replaces the directory contents through the [`EmployeeDirectory`] port.

use std::fmt;
use std::sync::Arc;

use support_roster::{StaffRecordSeed, StaffStatusSeed, SupportRoster};
use thiserror::Error;

use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError};
use crate::domain::{Employee, EmployeeStatus, EmployeeValidationError, NewEmployee};

/// How the directory contents are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceMode {
    /// Delete, then insert, as two separate operations.
    ///
    /// A failed insert leaves the directory empty.
    #[default]
    Sequential,
    /// Delete and insert inside one transaction.
    Atomic,
}

impl ReplaceMode {
    /// Pick the mode from the `atomic` setting.
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic { Self::Atomic } else { Self::Sequential }
    }

    /// Label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Atomic => "atomic",
        }
    }
}

impl fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful roster replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeSeedOutcome {
    /// Rows deleted before inserting.
    pub removed: u64,
    /// Rows inserted from the roster.
    pub inserted: u64,
    /// Mode used for the replacement.
    pub mode: ReplaceMode,
}

/// Errors raised while preparing or applying the roster.
#[derive(Debug, Error)]
pub enum EmployeeSeedingError {
    /// A roster record failed domain validation; nothing was written.
    #[error("roster record {index} ({email}) is invalid: {source}")]
    InvalidRecord {
        index: usize,
        email: String,
        #[source]
        source: EmployeeValidationError,
    },
    /// Clearing the directory failed; no insert was attempted.
    #[error("failed to clear employee directory: {0}")]
    Delete(#[source] EmployeeDirectoryError),
    /// Inserting the roster failed after the directory was cleared.
    #[error("failed to insert employees: {0}")]
    Insert(#[source] EmployeeDirectoryError),
    /// The transactional replacement failed and was rolled back.
    #[error("failed to replace employee directory: {0}")]
    Replace(#[source] EmployeeDirectoryError),
}

/// Service that replaces the employee directory with the support roster.
#[derive(Clone)]
pub struct EmployeeSeeder<D> {
    directory: Arc<D>,
}

impl<D> EmployeeSeeder<D> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> EmployeeSeeder<D>
where
    D: EmployeeDirectory,
{
    /// Replace every stored employee with the roster's records.
    ///
    /// Every record is validated before the directory is touched.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeSeedingError`] if a record is invalid or a directory
    /// operation fails. In [`ReplaceMode::Sequential`] a delete failure stops
    /// before the insert.
    pub async fn replace_roster(
        &self,
        roster: &SupportRoster,
        mode: ReplaceMode,
    ) -> Result<EmployeeSeedOutcome, EmployeeSeedingError> {
        let employees = roster_employees(roster)?;

        match mode {
            ReplaceMode::Sequential => {
                let removed = self
                    .directory
                    .delete_all()
                    .await
                    .map_err(EmployeeSeedingError::Delete)?;
                let inserted = self
                    .directory
                    .insert_all(employees)
                    .await
                    .map_err(EmployeeSeedingError::Insert)?;
                Ok(EmployeeSeedOutcome {
                    removed,
                    inserted,
                    mode,
                })
            }
            ReplaceMode::Atomic => {
                let summary = self
                    .directory
                    .replace_all(employees)
                    .await
                    .map_err(EmployeeSeedingError::Replace)?;
                Ok(EmployeeSeedOutcome {
                    removed: summary.removed,
                    inserted: summary.inserted,
                    mode,
                })
            }
        }
    }
}

/// Validate every roster record into a domain [`Employee`].
///
/// # Errors
///
/// Returns [`EmployeeSeedingError::InvalidRecord`] for the first record that
/// fails validation.
pub fn roster_employees(roster: &SupportRoster) -> Result<Vec<Employee>, EmployeeSeedingError> {
    roster
        .employees()
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            Employee::try_from(convert_seed(seed.clone())).map_err(|source| {
                EmployeeSeedingError::InvalidRecord {
                    index,
                    email: seed.email.clone(),
                    source,
                }
            })
        })
        .collect()
}

fn convert_seed(seed: StaffRecordSeed) -> NewEmployee {
    NewEmployee {
        name: seed.name,
        email: seed.email,
        phone: seed.phone,
        role: seed.role,
        department: seed.department,
        specialties: seed.specialties,
        languages: seed.languages,
        experience: seed.experience,
        rating: seed.rating,
        total_reviews: seed.total_reviews,
        availability: seed.availability,
        status: map_status(seed.status),
        response_time: seed.response_time,
        bio: seed.bio,
    }
}

fn map_status(status: StaffStatusSeed) -> EmployeeStatus {
    match status {
        StaffStatusSeed::Available => EmployeeStatus::Available,
        StaffStatusSeed::Busy => EmployeeStatus::Busy,
        StaffStatusSeed::Offline => EmployeeStatus::Offline,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for support-staff seeding orchestration.

    use super::*;
    use crate::domain::ports::{MockEmployeeDirectory, ReplaceSummary};
    use rstest::{fixture, rstest};

    #[fixture]
    fn roster() -> SupportRoster {
        SupportRoster::bundled().expect("bundled roster is valid")
    }

    #[rstest]
    #[tokio::test]
    async fn sequential_deletes_then_inserts(roster: SupportRoster) {
        let mut directory = MockEmployeeDirectory::new();
        let mut seq = mockall::Sequence::new();
        directory
            .expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(3));
        directory
            .expect_insert_all()
            .withf(|employees| employees.len() == 8)
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|employees| Ok(employees.len() as u64));
        directory.expect_replace_all().never();

        let seeder = EmployeeSeeder::new(Arc::new(directory));
        let outcome = seeder
            .replace_roster(&roster, ReplaceMode::Sequential)
            .await
            .expect("seed succeeds");

        assert_eq!(
            outcome,
            EmployeeSeedOutcome {
                removed: 3,
                inserted: 8,
                mode: ReplaceMode::Sequential
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn delete_failure_skips_insert(roster: SupportRoster) {
        let mut directory = MockEmployeeDirectory::new();
        directory
            .expect_delete_all()
            .times(1)
            .return_once(|| Err(EmployeeDirectoryError::connection("refused")));
        directory.expect_insert_all().never();

        let seeder = EmployeeSeeder::new(Arc::new(directory));
        let error = seeder
            .replace_roster(&roster, ReplaceMode::Sequential)
            .await
            .expect_err("delete fails");

        assert!(matches!(error, EmployeeSeedingError::Delete(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn insert_failure_is_reported(roster: SupportRoster) {
        let mut directory = MockEmployeeDirectory::new();
        directory.expect_delete_all().return_once(|| Ok(8));
        directory
            .expect_insert_all()
            .return_once(|_| Err(EmployeeDirectoryError::query("unique violation")));

        let seeder = EmployeeSeeder::new(Arc::new(directory));
        let error = seeder
            .replace_roster(&roster, ReplaceMode::Sequential)
            .await
            .expect_err("insert fails");

        assert_eq!(
            error.to_string(),
            "failed to insert employees: employee directory query failed: unique violation"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn atomic_uses_replace_all(roster: SupportRoster) {
        let mut directory = MockEmployeeDirectory::new();
        directory.expect_delete_all().never();
        directory.expect_insert_all().never();
        directory.expect_replace_all().times(1).return_once(|employees| {
            Ok(ReplaceSummary {
                removed: 8,
                inserted: employees.len() as u64,
            })
        });

        let seeder = EmployeeSeeder::new(Arc::new(directory));
        let outcome = seeder
            .replace_roster(&roster, ReplaceMode::Atomic)
            .await
            .expect("seed succeeds");

        assert_eq!(outcome.mode, ReplaceMode::Atomic);
        assert_eq!(outcome.inserted, 8);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_record_fails_before_any_directory_call() {
        let json = r#"{
            "version": 1,
            "employees": [{
                "name": "   ",
                "email": "blank.name@travelplanner.com",
                "phone": "+1-555-0199",
                "role": "Consultant",
                "department": "Support",
                "specialties": [],
                "languages": ["English"],
                "experience": 1,
                "rating": 4.0,
                "totalReviews": 3,
                "availability": "Mon-Fri",
                "status": "available",
                "responseTime": "< 1 hour",
                "bio": "New starter."
            }]
        }"#;
        let roster = SupportRoster::from_json(json).expect("structurally valid roster");
        let mut directory = MockEmployeeDirectory::new();
        directory.expect_delete_all().never();
        directory.expect_insert_all().never();

        let seeder = EmployeeSeeder::new(Arc::new(directory));
        let error = seeder
            .replace_roster(&roster, ReplaceMode::Sequential)
            .await
            .expect_err("validation fails");

        assert!(matches!(
            error,
            EmployeeSeedingError::InvalidRecord { index: 0, .. }
        ));
    }

    #[rstest]
    fn bundled_roster_satisfies_employee_invariants(roster: SupportRoster) {
        let employees = roster_employees(&roster).expect("bundled roster converts");
        assert_eq!(employees.len(), 8);
        for employee in &employees {
            assert!((0.0..=5.0).contains(&employee.rating().value()));
        }
    }

    #[rstest]
    #[case(false, ReplaceMode::Sequential)]
    #[case(true, ReplaceMode::Atomic)]
    fn mode_follows_atomic_flag(#[case] atomic: bool, #[case] expected: ReplaceMode) {
        assert_eq!(ReplaceMode::from_atomic(atomic), expected);
    }
}

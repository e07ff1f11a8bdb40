//! Port abstraction for the support-staff employee directory.
//!
//! The seeding service clears and refills the directory in bulk. Adapters
//! decide how the rows are stored; the only per-row constraint they must
//! enforce is email uniqueness.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::Employee;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee directory adapters.
    pub enum EmployeeDirectoryError {
        /// Directory connection could not be established.
        Connection { message: String } => "employee directory connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee directory query failed: {message}",
    }
}

/// Row counts reported by [`EmployeeDirectory::replace_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceSummary {
    /// Rows deleted before the insert.
    pub removed: u64,
    /// Rows inserted.
    pub inserted: u64,
}

/// Port for bulk maintenance of the employee directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Delete every employee, returning the number of rows removed.
    async fn delete_all(&self) -> Result<u64, EmployeeDirectoryError>;

    /// Insert all employees in one batch, returning the number inserted.
    ///
    /// The batch is all-or-nothing: a failure leaves no partial rows.
    async fn insert_all(&self, employees: Vec<Employee>) -> Result<u64, EmployeeDirectoryError>;

    /// Delete and insert inside a single transaction.
    ///
    /// On failure the previous contents must survive.
    async fn replace_all(
        &self,
        employees: Vec<Employee>,
    ) -> Result<ReplaceSummary, EmployeeDirectoryError>;

    /// Number of employees currently stored.
    async fn count(&self) -> Result<u64, EmployeeDirectoryError>;
}

#[derive(Debug, Default)]
struct FixtureState {
    employees: Vec<Employee>,
    delete_failure: Option<EmployeeDirectoryError>,
    insert_failure: Option<EmployeeDirectoryError>,
    delete_calls: usize,
    insert_calls: usize,
}

/// In-memory directory for tests and dry runs.
///
/// Failures can be injected for the delete and insert steps. Call counters
/// let callers check which steps actually ran.
#[derive(Debug, Default)]
pub struct FixtureEmployeeDirectory {
    state: Mutex<FixtureState>,
}

impl FixtureEmployeeDirectory {
    /// Start with the given rows already stored.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            state: Mutex::new(FixtureState {
                employees,
                ..FixtureState::default()
            }),
        }
    }

    /// Make every subsequent delete fail with `error`.
    pub fn fail_delete_with(self, error: EmployeeDirectoryError) -> Self {
        self.update(|state| state.delete_failure = Some(error))
    }

    /// Make every subsequent insert fail with `error`.
    pub fn fail_insert_with(self, error: EmployeeDirectoryError) -> Self {
        self.update(|state| state.insert_failure = Some(error))
    }

    /// Snapshot of the stored rows.
    pub fn employees(&self) -> Vec<Employee> {
        self.lock().employees.clone()
    }

    /// Number of delete attempts, including failed ones.
    pub fn delete_calls(&self) -> usize {
        self.lock().delete_calls
    }

    /// Number of insert attempts, including failed ones.
    pub fn insert_calls(&self) -> usize {
        self.lock().insert_calls
    }

    fn update(self, apply: impl FnOnce(&mut FixtureState)) -> Self {
        apply(&mut self.lock());
        self
    }

    // A poisoned lock still exposes the recorded state.
    fn lock(&self) -> MutexGuard<'_, FixtureState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_unique(
    existing: &[Employee],
    incoming: &[Employee],
) -> Result<(), EmployeeDirectoryError> {
    for (index, employee) in incoming.iter().enumerate() {
        let clash_stored = existing.iter().any(|row| row.email() == employee.email());
        let clash_batch = incoming
            .iter()
            .take(index)
            .any(|row| row.email() == employee.email());
        if clash_stored || clash_batch {
            return Err(EmployeeDirectoryError::query(format!(
                "duplicate key value violates unique constraint on email: {}",
                employee.email()
            )));
        }
    }
    Ok(())
}

fn as_count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[async_trait]
impl EmployeeDirectory for FixtureEmployeeDirectory {
    async fn delete_all(&self) -> Result<u64, EmployeeDirectoryError> {
        let mut state = self.lock();
        state.delete_calls += 1;
        if let Some(error) = state.delete_failure.clone() {
            return Err(error);
        }
        let removed = as_count(state.employees.len());
        state.employees.clear();
        Ok(removed)
    }

    async fn insert_all(&self, employees: Vec<Employee>) -> Result<u64, EmployeeDirectoryError> {
        let mut state = self.lock();
        state.insert_calls += 1;
        if let Some(error) = state.insert_failure.clone() {
            return Err(error);
        }
        check_unique(&state.employees, &employees)?;
        let inserted = as_count(employees.len());
        state.employees.extend(employees);
        Ok(inserted)
    }

    async fn replace_all(
        &self,
        employees: Vec<Employee>,
    ) -> Result<ReplaceSummary, EmployeeDirectoryError> {
        let mut state = self.lock();
        state.delete_calls += 1;
        if let Some(error) = state.delete_failure.clone() {
            return Err(error);
        }
        state.insert_calls += 1;
        if let Some(error) = state.insert_failure.clone() {
            return Err(error);
        }
        check_unique(&[], &employees)?;
        let removed = as_count(state.employees.len());
        let inserted = as_count(employees.len());
        state.employees = employees;
        Ok(ReplaceSummary { removed, inserted })
    }

    async fn count(&self) -> Result<u64, EmployeeDirectoryError> {
        Ok(as_count(self.lock().employees.len()))
    }
}

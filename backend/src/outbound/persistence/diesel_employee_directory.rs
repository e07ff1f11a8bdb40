//! PostgreSQL-backed employee directory adapter.
//!
//! Implements the `EmployeeDirectory` port over the `employees` table. Batch
//! inserts are a single statement, so a failed insert leaves no partial rows;
//! `replace_all` wraps the delete and insert in one transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::Employee;
use crate::domain::ports::{EmployeeDirectory, EmployeeDirectoryError, ReplaceSummary};

use super::models::NewEmployeeRow;
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel-backed implementation of the employee directory.
#[derive(Clone)]
pub struct DieselEmployeeDirectory {
    pool: DbPool,
}

impl DieselEmployeeDirectory {
    /// Create a new directory adapter with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use travel_backend::outbound::persistence::{
    ///     DbPool, DieselEmployeeDirectory, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel_planner")).await?;
    /// let directory = DieselEmployeeDirectory::new(pool);
    /// # let _ = directory;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeDirectoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeeDirectoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeDirectoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            EmployeeDirectoryError::connection(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            EmployeeDirectoryError::query(format!("duplicate employee email: {}", info.message()))
        }
        DieselError::DatabaseError(_, info) => {
            EmployeeDirectoryError::query(info.message().to_owned())
        }
        _ => EmployeeDirectoryError::query(error_message),
    }
}

fn to_i32(field: &'static str, value: u32) -> Result<i32, EmployeeDirectoryError> {
    i32::try_from(value)
        .map_err(|_| EmployeeDirectoryError::query(format!("{field} value {value} overflows")))
}

fn row_count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}

fn employee_rows(staff: &[Employee]) -> Result<Vec<NewEmployeeRow<'_>>, EmployeeDirectoryError> {
    staff
        .iter()
        .map(|employee| {
            Ok(NewEmployeeRow {
                name: employee.name(),
                email: employee.email().as_ref(),
                phone: employee.phone(),
                role: employee.role(),
                department: employee.department(),
                specialties: employee.specialties(),
                languages: employee.languages(),
                experience: to_i32("experience", employee.experience())?,
                rating: employee.rating().value(),
                total_reviews: to_i32("totalReviews", employee.total_reviews())?,
                availability: employee.availability(),
                status: employee.status().as_str(),
                response_time: employee.response_time(),
                bio: employee.bio(),
            })
        })
        .collect()
}

#[async_trait]
impl EmployeeDirectory for DieselEmployeeDirectory {
    async fn delete_all(&self) -> Result<u64, EmployeeDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(employees::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_count(removed))
    }

    async fn insert_all(&self, staff: Vec<Employee>) -> Result<u64, EmployeeDirectoryError> {
        let rows = employee_rows(&staff)?;
        if rows.is_empty() {
            return Ok(0);
        }
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let inserted = diesel::insert_into(employees::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_count(inserted))
    }

    async fn replace_all(
        &self,
        staff: Vec<Employee>,
    ) -> Result<ReplaceSummary, EmployeeDirectoryError> {
        let rows = employee_rows(&staff)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (removed, inserted) = conn
            .transaction(|conn| {
                async move {
                    let removed = diesel::delete(employees::table).execute(conn).await?;
                    if rows.is_empty() {
                        return Ok((removed, 0));
                    }
                    let inserted = diesel::insert_into(employees::table)
                        .values(&rows)
                        .execute(conn)
                        .await?;
                    Ok((removed, inserted))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(ReplaceSummary {
            removed: row_count(removed),
            inserted: row_count(inserted),
        })
    }

    async fn count(&self) -> Result<u64, EmployeeDirectoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = employees::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total)
            .map_err(|_| EmployeeDirectoryError::query(format!("negative row count {total}")))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row mapping and error translation.
    use super::*;
    use crate::domain::{EmployeeStatus, NewEmployee};
    use rstest::rstest;

    fn employee() -> Employee {
        Employee::try_from(NewEmployee {
            name: "Carlos Mendoza".to_owned(),
            email: "Carlos.Mendoza@TravelPlanner.com".to_owned(),
            phone: "+1-555-0104".to_owned(),
            role: "Adventure Travel Specialist".to_owned(),
            department: "Latin America".to_owned(),
            specialties: vec!["Trekking".to_owned()],
            languages: vec!["Spanish".to_owned(), "English".to_owned()],
            experience: 10,
            rating: 4.8,
            total_reviews: 289,
            availability: "Mon-Sat".to_owned(),
            status: EmployeeStatus::Offline,
            response_time: "< 30 minutes".to_owned(),
            bio: "Patagonia and the Andes.".to_owned(),
        })
        .expect("fixture employee is valid")
    }

    #[rstest]
    fn rows_borrow_normalised_domain_values() {
        let employees = vec![employee()];
        let rows = employee_rows(&employees).expect("rows map");
        let row = rows.as_slice().first().expect("one row");

        assert_eq!(row.email, "carlos.mendoza@travelplanner.com");
        assert_eq!(row.status, "offline");
        assert_eq!(row.experience, 10);
        assert_eq!(row.total_reviews, 289);
        assert_eq!(row.languages, ["Spanish".to_owned(), "English".to_owned()]);
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let error = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(error, EmployeeDirectoryError::Connection { .. }));
        assert!(error.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(error, EmployeeDirectoryError::Query { .. }));
    }

    #[rstest]
    fn rollback_error_maps_to_query_error() {
        let error = map_diesel_error(diesel::result::Error::RollbackTransaction);
        assert!(matches!(error, EmployeeDirectoryError::Query { .. }));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(8, 8)]
    fn row_count_converts_usize(#[case] rows: usize, #[case] expected: u64) {
        assert_eq!(row_count(rows), expected);
    }
}

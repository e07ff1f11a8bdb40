//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters implement domain ports on top of `diesel-async` with `bb8`
//! pooling. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay internal; only adapters, the pool and the migration runner are
//! exported.
//!
//! # Example
//!
//! ```no_run
//! use travel_backend::outbound::persistence::{DbPool, DieselEmployeeDirectory, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel_planner")).await?;
//! let directory = DieselEmployeeDirectory::new(pool);
//! # let _ = directory;
//! # Ok(())
//! # }
//! ```

mod diesel_employee_directory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_directory::DieselEmployeeDirectory;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DbPool, PoolConfig, PoolError};

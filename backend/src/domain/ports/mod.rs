//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
pub use employee_directory::{
    EmployeeDirectory, EmployeeDirectoryError, FixtureEmployeeDirectory, ReplaceSummary,
};

//! Replace the support-staff directory with the bundled roster.
//!
//! Exits 0 when every record was written and 1 on any failure. Logs go to
//! stderr as JSON at `info` unless `RUST_LOG` says otherwise.
//!
//! # Examples
//! ```sh
//! SEED_DATABASE_URL=postgres://localhost:5432/travel_planner \
//!     cargo run --manifest-path backend/Cargo.toml --bin seed-employees
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::process::ExitCode;

use tokio::runtime::Builder;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use travel_backend::employee_seed::{SeedExitStatus, SeedRunError, load_settings, run_seed};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let result = seed();
    match &result {
        Ok(()) => info!("employee seeding complete"),
        Err(err) => error!(error = %err, "employee seeding failed"),
    }
    SeedExitStatus::from_result(&result).into()
}

fn seed() -> Result<(), SeedRunError> {
    let settings = load_settings(std::env::args_os())?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| SeedRunError::Runtime {
            message: err.to_string(),
        })?;
    runtime.block_on(run_seed(&settings))?;
    Ok(())
}

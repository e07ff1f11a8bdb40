//! Wiring for the `seed-employees` binary.
//!
//! Loads [`SeedSettings`], resolves the database URL and roster, then
//! replaces the employee directory through the domain seeder.

mod config;
mod run;

pub use config::{DEFAULT_DATABASE_URL, SeedSettings};
pub use run::{
    SeedExitStatus, SeedRunError, load_roster, load_settings, resolve_database_url,
    run_seed, seed_directory,
};

//! One-shot seeding run: resolve settings, connect, replace the directory.

use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use support_roster::{RosterError, SupportRoster};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::EmployeeDirectory;
use crate::domain::{EmployeeSeedOutcome, EmployeeSeeder, EmployeeSeedingError, ReplaceMode};
use crate::outbound::persistence::{
    DbPool, DieselEmployeeDirectory, MigrationError, PoolConfig, PoolError,
    run_pending_migrations,
};

use super::config::{DEFAULT_DATABASE_URL, SeedSettings};

/// Errors that end a seeding run.
#[derive(Debug, Error)]
pub enum SeedRunError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings { message: String },
    /// A setting was present but unusable.
    #[error("invalid {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },
    /// The async runtime could not start.
    #[error("failed to start runtime: {message}")]
    Runtime { message: String },
    /// The roster could not be loaded or failed structural checks.
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),
    /// Embedded migrations failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// Validation or a directory operation failed.
    #[error(transparent)]
    Seeding(#[from] EmployeeSeedingError),
}

/// Process exit status for the seeding binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SeedExitStatus {
    /// Every record was written.
    Success = 0,
    /// Anything failed.
    Failure = 1,
}

impl SeedExitStatus {
    /// Map a run result onto an exit status.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::employee_seed::SeedExitStatus;
    ///
    /// let failed: Result<(), &str> = Err("connection refused");
    /// assert_eq!(SeedExitStatus::from_result(&failed).code(), 1);
    /// ```
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<SeedExitStatus> for ExitCode {
    fn from(value: SeedExitStatus) -> Self {
        ExitCode::from(value.code())
    }
}

/// Load [`SeedSettings`] from CLI arguments, environment and config files.
///
/// # Errors
///
/// Returns [`SeedRunError::Settings`] when OrthoConfig rejects the sources.
pub fn load_settings<I, T>(args: I) -> Result<SeedSettings, SeedRunError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    use ortho_config::OrthoConfig;

    SeedSettings::load_from_iter(args).map_err(|err| SeedRunError::Settings {
        message: err.to_string(),
    })
}

/// Pick the database URL: explicit setting, then `DATABASE_URL`, then the
/// local default.
///
/// # Errors
///
/// Returns [`SeedRunError::InvalidSetting`] when the explicit URL is blank.
pub fn resolve_database_url(
    explicit: Option<&str>,
    ambient: Option<String>,
) -> Result<String, SeedRunError> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(SeedRunError::InvalidSetting {
                name: "SEED_DATABASE_URL",
                message: "must not be empty when provided".to_owned(),
            });
        }
        return Ok(value.to_owned());
    }

    match ambient.filter(|value| !value.trim().is_empty()) {
        Some(value) => Ok(value),
        None => {
            debug!(url = DEFAULT_DATABASE_URL, "no database URL set; using local default");
            Ok(DEFAULT_DATABASE_URL.to_owned())
        }
    }
}

/// Load the roster override when configured, otherwise the bundled roster.
///
/// # Errors
///
/// Returns [`SeedRunError`] if the path is not UTF-8 or the roster is
/// unreadable or invalid.
pub fn load_roster(path: Option<&std::path::Path>) -> Result<SupportRoster, SeedRunError> {
    let Some(path) = path else {
        return Ok(SupportRoster::bundled()?);
    };
    let utf8 = Utf8PathBuf::from_path_buf(path.to_path_buf()).map_err(|raw| {
        SeedRunError::InvalidSetting {
            name: "SEED_ROSTER_PATH",
            message: format!("{} is not valid UTF-8", raw.display()),
        }
    })?;
    let roster = SupportRoster::from_path(&utf8)?;
    info!(path = %utf8, employees = roster.len(), "loaded roster override");
    Ok(roster)
}

/// Replace the directory contents with `roster` and log the outcome.
///
/// # Errors
///
/// Returns [`SeedRunError::Seeding`] if validation or a directory call fails.
pub async fn seed_directory<D>(
    directory: Arc<D>,
    roster: &SupportRoster,
    mode: ReplaceMode,
) -> Result<EmployeeSeedOutcome, SeedRunError>
where
    D: EmployeeDirectory,
{
    info!(%mode, employees = roster.len(), "replacing employee directory");
    let outcome = EmployeeSeeder::new(directory)
        .replace_roster(roster, mode)
        .await?;
    info!(
        %mode,
        removed = outcome.removed,
        inserted = outcome.inserted,
        "employee directory seeded"
    );
    Ok(outcome)
}

/// Run the whole seeding procedure against PostgreSQL.
///
/// The roster is loaded and validated before any connection is opened.
///
/// # Errors
///
/// Returns [`SeedRunError`] for any configuration, roster, connection or
/// directory failure. Nothing is retried.
pub async fn run_seed(settings: &SeedSettings) -> Result<EmployeeSeedOutcome, SeedRunError> {
    let database_url = resolve_database_url(
        settings.database_url.as_deref(),
        std::env::var("DATABASE_URL").ok(),
    )?;
    let roster = load_roster(settings.roster_path.as_deref())?;

    if settings.run_migrations {
        run_pending_migrations(&database_url).await?;
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_connection_timeout(settings.connect_timeout()),
    )
    .await?;
    let directory = Arc::new(DieselEmployeeDirectory::new(pool));
    seed_directory(directory, &roster, settings.replace_mode()).await
}

#[cfg(test)]
mod tests {
    //! Unit tests for run helpers that do not need a database.

    use super::*;
    use crate::domain::ports::{EmployeeDirectoryError, FixtureEmployeeDirectory};
    use cap_std::{ambient_authority, fs::Dir};
    use rstest::rstest;

    #[rstest]
    #[case::explicit_wins(Some("postgres://a/db"), Some("postgres://b/db"), "postgres://a/db")]
    #[case::ambient_fallback(None, Some("postgres://b/db"), "postgres://b/db")]
    #[case::local_default(None, None, DEFAULT_DATABASE_URL)]
    #[case::blank_ambient_ignored(None, Some("  "), DEFAULT_DATABASE_URL)]
    fn database_url_resolution(
        #[case] explicit: Option<&str>,
        #[case] ambient: Option<&str>,
        #[case] expected: &str,
    ) {
        let url = resolve_database_url(explicit, ambient.map(str::to_owned)).expect("resolves");
        assert_eq!(url, expected);
    }

    #[rstest]
    fn blank_explicit_url_is_rejected() {
        let result = resolve_database_url(Some(" "), Some("postgres://b/db".to_owned()));
        assert!(matches!(
            result,
            Err(SeedRunError::InvalidSetting {
                name: "SEED_DATABASE_URL",
                ..
            })
        ));
    }

    #[rstest]
    fn missing_roster_path_uses_bundled_roster() {
        let roster = load_roster(None).expect("bundled roster loads");
        assert_eq!(roster.len(), 8);
    }

    #[rstest]
    fn unreadable_roster_path_is_a_roster_error() {
        let path = std::path::Path::new("/nonexistent/travel/roster.json");
        assert!(matches!(load_roster(Some(path)), Err(SeedRunError::Roster(_))));
    }

    #[rstest]
    fn roster_override_is_read_from_disk() {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = Dir::open_ambient_dir(temp.path(), ambient_authority()).expect("open temp dir");
        dir.write(
            "roster.json",
            r#"{
                "version": 1,
                "employees": [{
                    "name": "Ines Duarte",
                    "email": "ines.duarte@travelplanner.com",
                    "phone": "+351-555-0199",
                    "role": "Night Desk Agent",
                    "department": "Customer Support",
                    "specialties": ["Rebooking"],
                    "languages": ["Portuguese", "English"],
                    "experience": 3,
                    "rating": 4.2,
                    "totalReviews": 57,
                    "availability": "Daily, 10:00 PM - 6:00 AM WET",
                    "status": "busy",
                    "responseTime": "< 15 minutes",
                    "bio": "Ines keeps overnight travellers moving when flights slip."
                }]
            }"#,
        )
        .expect("write roster");

        let roster = load_roster(Some(&temp.path().join("roster.json"))).expect("override loads");

        assert_eq!(roster.len(), 1);
        assert!(roster.find_by_email("ines.duarte@travelplanner.com").is_some());
    }

    #[rstest]
    #[case(0, SeedExitStatus::Success)]
    #[case(1, SeedExitStatus::Failure)]
    fn exit_codes_are_stable(#[case] code: u8, #[case] status: SeedExitStatus) {
        assert_eq!(status.code(), code);
    }

    #[rstest]
    #[tokio::test]
    async fn seed_directory_fills_an_empty_directory() {
        let directory = Arc::new(FixtureEmployeeDirectory::default());
        let roster = SupportRoster::bundled().expect("bundled roster");

        let result = seed_directory(directory.clone(), &roster, ReplaceMode::Sequential).await;

        assert_eq!(SeedExitStatus::from_result(&result), SeedExitStatus::Success);
        assert_eq!(directory.employees().len(), 8);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_failure_maps_to_failure_status() {
        let directory = Arc::new(
            FixtureEmployeeDirectory::default()
                .fail_delete_with(EmployeeDirectoryError::connection("refused")),
        );
        let roster = SupportRoster::bundled().expect("bundled roster");

        let result = seed_directory(directory.clone(), &roster, ReplaceMode::Sequential).await;

        assert_eq!(SeedExitStatus::from_result(&result), SeedExitStatus::Failure);
        assert_eq!(directory.insert_calls(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_database_fails_the_run() {
        let settings = SeedSettings {
            database_url: Some("postgres://seed@127.0.0.1:1/travel_planner".to_owned()),
            roster_path: None,
            atomic: false,
            run_migrations: false,
            connect_timeout_secs: 1,
        };

        let result = run_seed(&settings).await;

        assert!(
            matches!(result, Err(SeedRunError::Seeding(_) | SeedRunError::Pool(_))),
            "unexpected result: {result:?}"
        );
        assert_eq!(SeedExitStatus::from_result(&result), SeedExitStatus::Failure);
    }
}

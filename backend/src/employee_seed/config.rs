//! Seeding configuration loaded via OrthoConfig.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ReplaceMode;

/// Database used when neither `SEED_DATABASE_URL` nor `DATABASE_URL` is set.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/travel_planner";

/// Configuration values controlling the `seed-employees` binary.
///
/// Every field can be set through a `SEED_`-prefixed environment variable,
/// e.g. `SEED_ATOMIC=true`. The two switches have no CLI flag, so an absent
/// flag cannot mask the environment value.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEED")]
pub struct SeedSettings {
    /// Database connection URL; falls back to `DATABASE_URL`.
    pub database_url: Option<String>,
    /// Optional JSON roster replacing the bundled one.
    pub roster_path: Option<PathBuf>,
    /// Replace the directory inside one transaction.
    #[ortho_config(default = false, skip_cli)]
    pub atomic: bool,
    /// Apply embedded migrations before seeding.
    #[ortho_config(default = false, skip_cli)]
    pub run_migrations: bool,
    /// Pool checkout timeout in seconds.
    #[ortho_config(default = 30)]
    pub connect_timeout_secs: u64,
}

impl SeedSettings {
    /// Replacement strategy selected by `atomic`.
    pub fn replace_mode(&self) -> ReplaceMode {
        ReplaceMode::from_atomic(self.atomic)
    }

    /// Pool checkout timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

// The URL may embed credentials.
impl std::fmt::Debug for SeedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedSettings")
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("roster_path", &self.roster_path)
            .field("atomic", &self.atomic)
            .field("run_migrations", &self.run_migrations)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

//! Configuration types for the seed run.

use serde::{Deserialize, Serialize};

/// The development database, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dev.db";

/// Salt the application falls back to when none is configured.
///
/// The admin code hashes were produced with this salt.
pub const DEFAULT_SALT: &str = "fallback-salt";

/// Configuration for seeding operations.
///
/// The `seed` binary always runs with [`SeedConfig::default`]; the builder
/// methods exist for library callers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// SQLite URL or plain path of the development database.
    pub database_url: String,

    /// Salt appended to codes before hashing.
    pub salt: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            salt: DEFAULT_SALT.to_string(),
        }
    }
}

impl SeedConfig {
    /// Overrides the database location.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Overrides the hashing salt.
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }
}

//! Connection settings for callers that need to open the database the store
//! works against.

use std::time::Duration;

use rusqlite::Connection;
use serde::Deserialize;

use crate::error::{Result, StoreError};

/// Path SQLite treats as a private in-memory database.
pub const IN_MEMORY_PATH: &str = ":memory:";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub db_path: String,
    /// How long a connection waits on a locked database before failing.
    #[serde(rename = "busy_timeout_ms", with = "millis")]
    pub busy_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl StoreConfig {
    /// Create a config for the database file at `db_path`.
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_PATH)
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Open a connection. The caller owns it; [`crate::ParcelStore`] only
    /// borrows it.
    pub fn open(&self) -> Result<Connection> {
        let open_err = |source: rusqlite::Error| StoreError::Open {
            path: self.db_path.clone(),
            source,
        };
        let opened = if self.db_path == IN_MEMORY_PATH {
            Connection::open_in_memory()
        } else {
            Connection::open(&self.db_path)
        };
        let connection = opened.map_err(open_err)?;
        connection.busy_timeout(self.busy_timeout).map_err(open_err)?;
        log::debug!("opened SQLite database at {}", self.db_path);
        Ok(connection)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

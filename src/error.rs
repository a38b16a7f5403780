//! Error types for parcel persistence.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Errors surfaced by [`crate::ParcelStore`] and its helpers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No parcel row carries the requested number.
    #[error("parcel {number} not found")]
    NotFound {
        /// Number that was looked up.
        number: i64,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    Open {
        /// Location passed to the connection.
        path: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A status string did not match any known [`crate::ParcelStatus`].
    #[error("unknown parcel status {value:?}")]
    UnknownStatus {
        /// The rejected value.
        value: String,
    },
    /// Any other statement failure, passed through untouched.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    /// Whether this error means the requested parcel does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

//! SQLite persistence for parcel tracking records.
//!
//! # Intention
//!
//! - Provide a narrow API for storing and updating parcels.
//! - Keep SQLite statements, row mapping, and error handling in one place.
//!
//! # Architectural Boundaries
//!
//! - Only parcel persistence belongs here.
//! - Callers own the connection and decide status transitions.

pub mod config;
pub mod error;
pub mod parcel;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use parcel::{Parcel, ParcelStatus};
pub use store::ParcelStore;

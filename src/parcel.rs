//! The parcel record and its known status values.

use std::{fmt, str::FromStr};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Known parcel lifecycle states.
///
/// The store persists status as plain text and does not restrict it to these
/// values; they are the constants callers are expected to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParcelStatus {
    Registered,
    Sent,
    Delivered,
}

impl ParcelStatus {
    pub const ALL: [ParcelStatus; 3] = [Self::Registered, Self::Sent, Self::Delivered];

    /// Text stored in the `status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// The state a parcel normally moves to next, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl AsRef<str> for ParcelStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParcelStatus {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| StoreError::UnknownStatus {
                value: value.to_string(),
            })
    }
}

/// A tracked shipment row.
///
/// `number` is assigned by the database; a value of `0` marks a parcel that has
/// not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    pub number: i64,
    pub client: i64,
    pub status: String,
    pub address: String,
    pub created_at: String,
}

impl Parcel {
    /// Build an unsaved, freshly registered parcel stamped with the current
    /// UTC time.
    pub fn new(client: i64, address: impl Into<String>) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered.to_string(),
            address: address.into(),
            created_at: timestamp_now(),
        }
    }

    /// Return the parcel with its number populated.
    pub fn with_number(mut self, number: i64) -> Self {
        self.number = number;
        self
    }
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

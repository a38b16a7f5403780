//! Data access for the `parcel` table.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, StoreError};
use crate::parcel::Parcel;

const SELECT_BY_NUMBER: &str =
    "SELECT number, client, status, address, created_at FROM parcel WHERE number = ?1";
const SELECT_BY_CLIENT: &str =
    "SELECT number, client, status, address, created_at FROM parcel WHERE client = ?1";

/// CRUD operations over parcel rows, issued against a borrowed connection.
///
/// The store neither opens nor closes the connection and does no locking of
/// its own. Updates and deletes that match no row succeed without effect.
///
/// # Examples
/// ```
/// use parcel_store::{schema, Parcel, ParcelStatus, ParcelStore};
/// use rusqlite::Connection;
///
/// let conn = Connection::open_in_memory().expect("open in-memory database");
/// schema::create_parcel_table(&conn).expect("create parcel table");
/// let store = ParcelStore::new(&conn);
///
/// let parcel = Parcel::new(1000, "test");
/// let number = store.add(&parcel).expect("add parcel");
/// store.set_status(number, ParcelStatus::Sent).expect("set status");
///
/// let stored = store.get(number).expect("get parcel");
/// assert_eq!(stored.status, "sent");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParcelStore<'conn> {
    connection: &'conn Connection,
}

impl<'conn> ParcelStore<'conn> {
    pub fn new(connection: &'conn Connection) -> Self {
        Self { connection }
    }

    /// Insert `parcel` and return the number the database assigned to it.
    /// Any number already set on `parcel` is ignored.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.connection.execute(
            "INSERT INTO parcel (client, status, address, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                parcel.client,
                parcel.status,
                parcel.address,
                parcel.created_at
            ],
        )?;
        let number = self.connection.last_insert_rowid();
        log::debug!("added parcel {number} for client {}", parcel.client);
        Ok(number)
    }

    /// Fetch the parcel with the given number.
    ///
    /// Returns [`StoreError::NotFound`] when no such row exists.
    pub fn get(&self, number: i64) -> Result<Parcel> {
        log::trace!("loading parcel {number}");
        self.connection
            .prepare_cached(SELECT_BY_NUMBER)?
            .query_row([number], parcel_from_row)
            .optional()?
            .ok_or(StoreError::NotFound { number })
    }

    /// Fetch every parcel owned by `client`, in no particular order.
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut statement = self.connection.prepare_cached(SELECT_BY_CLIENT)?;
        let parcels = statement
            .query_map([client], parcel_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        log::trace!("loaded {} parcels for client {client}", parcels.len());
        Ok(parcels)
    }

    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        let changed = self.connection.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2",
            params![address, number],
        )?;
        log::debug!("set address of parcel {number} ({changed} rows changed)");
        Ok(())
    }

    /// Overwrite the status of a parcel. Pass a [`crate::ParcelStatus`];
    /// the text is stored as given and transitions are not checked.
    pub fn set_status(&self, number: i64, status: impl AsRef<str>) -> Result<()> {
        let status = status.as_ref();
        let changed = self.connection.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2",
            params![status, number],
        )?;
        log::debug!("set status of parcel {number} to {status} ({changed} rows changed)");
        Ok(())
    }

    pub fn delete(&self, number: i64) -> Result<()> {
        let changed = self
            .connection
            .execute("DELETE FROM parcel WHERE number = ?1", [number])?;
        log::debug!("deleted parcel {number} ({changed} rows changed)");
        Ok(())
    }
}

fn parcel_from_row(row: &Row<'_>) -> rusqlite::Result<Parcel> {
    Ok(Parcel {
        number: row.get(0)?,
        client: row.get(1)?,
        status: row.get(2)?,
        address: row.get(3)?,
        created_at: row.get(4)?,
    })
}

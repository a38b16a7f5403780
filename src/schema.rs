//! Table definition backing [`crate::ParcelStore`].

use rusqlite::Connection;

use crate::error::Result;

/// DDL for the `parcel` table. `AUTOINCREMENT` keeps numbers of deleted
/// parcels from being handed out again.
pub const PARCEL_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS parcel (
    number INTEGER PRIMARY KEY AUTOINCREMENT,
    client INTEGER,
    status TEXT,
    address TEXT,
    created_at TEXT
)";

/// Create the `parcel` table if it does not exist yet.
///
/// # Examples
/// ```
/// use rusqlite::Connection;
/// use parcel_store::schema::create_parcel_table;
///
/// let conn = Connection::open_in_memory().expect("open in-memory database");
/// create_parcel_table(&conn).expect("create parcel table");
/// create_parcel_table(&conn).expect("second call is a no-op");
/// ```
pub fn create_parcel_table(connection: &Connection) -> Result<()> {
    connection.execute_batch(PARCEL_TABLE_DDL)?;
    Ok(())
}

use std::time::Duration;

use parcel_store::{schema, Parcel, ParcelStore, StoreConfig};
use tempfile::TempDir;

const WRITERS: i64 = 4;
const PARCELS_PER_WRITER: usize = 5;

// Each writer owns its connection; SQLite's locking serialises the inserts.
fn write_parcels(config: StoreConfig, client: i64) -> parcel_store::Result<Vec<i64>> {
    let conn = config.open()?;
    let store = ParcelStore::new(&conn);
    (0..PARCELS_PER_WRITER)
        .map(|i| store.add(&Parcel::new(client, format!("street {i}"))))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_each_get_unique_numbers() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("parcels.db");
    let config =
        StoreConfig::new(path.to_string_lossy()).with_busy_timeout(Duration::from_secs(10));
    {
        let conn = config.open().expect("open database");
        schema::create_parcel_table(&conn).expect("create parcel table");
    }

    let handles: Vec<_> = (0..WRITERS)
        .map(|client| {
            let config = config.clone();
            tokio::task::spawn_blocking(move || write_parcels(config, client))
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.extend(handle.await.expect("writer task").expect("writer inserts"));
    }
    numbers.sort_unstable();
    numbers.dedup();
    assert_eq!(numbers.len(), WRITERS as usize * PARCELS_PER_WRITER);

    let conn = config.open().expect("open database");
    let store = ParcelStore::new(&conn);
    for client in 0..WRITERS {
        let parcels = store.get_by_client(client).expect("query client");
        assert_eq!(parcels.len(), PARCELS_PER_WRITER);
        assert!(parcels.iter().all(|parcel| parcel.client == client));
    }
}

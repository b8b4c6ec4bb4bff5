// src/db/mod.rs
//
// Persistence module
//
// Provides:
// - Connection pooling
// - The dataset document and its sample seed
// - Snapshot storage (whole-document, single key)
// - The in-memory data store

pub mod connection;
pub mod dataset;
pub mod sample_data;
pub mod snapshot;
pub mod store;

pub use connection::{
    create_connection_pool, create_connection_pool_at, get_connection, get_database_path,
    ConnectionPool, PooledConn,
};

pub use dataset::Dataset;
pub use sample_data::sample_dataset;
pub use snapshot::{MemorySnapshotStore, SnapshotStore, SqliteSnapshotStore, SNAPSHOT_KEY};
pub use store::DataStore;

// src/db/store.rs
//
// In-memory source of truth
//
// CRITICAL RULES:
// - The dataset is loaded (or seeded) exactly once, at construction
// - All access goes through read()/mutate(); the lock is never exposed
// - Every mutation is followed by a full snapshot save while the write lock
//   is still held, so no two mutations interleave mid-commit
// - A failed save does NOT roll back the in-memory mutation and does NOT
//   propagate: it is logged and emitted as SnapshotPersistFailed, and the
//   in-memory dataset stays authoritative for the rest of the session

use std::sync::{Arc, RwLock};

use log::{error, info};

use crate::db::dataset::Dataset;
use crate::db::sample_data::sample_dataset;
use crate::db::snapshot::SnapshotStore;
use crate::error::AppResult;
use crate::events::{EventBus, SnapshotPersistFailed};

pub struct DataStore {
    snapshots: Arc<dyn SnapshotStore>,
    events: EventBus,
    data: RwLock<Dataset>,
}

impl DataStore {
    /// Open the store: load the persisted snapshot, or seed sample data when
    /// none exists (or it cannot be read)
    pub fn open(snapshots: Arc<dyn SnapshotStore>, events: EventBus) -> Self {
        let data = match snapshots.load() {
            Ok(Some(dataset)) => dataset,
            Ok(None) => {
                info!("No usable snapshot found, seeding sample data");
                sample_dataset()
            }
            Err(e) => {
                error!("Failed to read snapshot, seeding sample data: {}", e);
                sample_dataset()
            }
        };

        Self {
            snapshots,
            events,
            data: RwLock::new(data),
        }
    }

    /// Read from the dataset
    ///
    /// The closure must return owned data; references into the dataset cannot
    /// escape the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Dataset) -> R) -> R {
        let guard = self.data.read().unwrap();
        f(&guard)
    }

    /// Mutate the dataset and persist the full snapshot
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Dataset) -> R) -> R {
        let mut guard = self.data.write().unwrap();
        let result = f(&mut guard);
        let saved = self.snapshots.save(&guard);
        drop(guard);

        // Handlers may read the store again; report outside the lock
        if let Err(e) = saved {
            error!("Failed to persist dataset snapshot: {}", e);
            self.events.emit(SnapshotPersistFailed::new(e.to_string()));
        }

        result
    }

    /// Mutate the dataset, persisting only when the closure succeeds
    ///
    /// A failed closure leaves both the persisted snapshot and the emission
    /// log untouched (the closure itself must not mutate on its error path).
    pub fn try_mutate<R>(
        &self,
        f: impl FnOnce(&mut Dataset) -> AppResult<R>,
    ) -> AppResult<R> {
        let mut guard = self.data.write().unwrap();
        let result = f(&mut guard)?;
        let saved = self.snapshots.save(&guard);
        drop(guard);

        if let Err(e) = saved {
            error!("Failed to persist dataset snapshot: {}", e);
            self.events.emit(SnapshotPersistFailed::new(e.to_string()));
        }

        Ok(result)
    }

    /// The event bus this store reports on
    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

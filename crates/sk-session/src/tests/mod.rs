
use crate::{FixedClock, MockCredentialVerifier, SessionStore};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sk_storage::{KeyValueStore, MemoryStore, StorageError, StorageResult};

/// 2023-11-14T22:13:20Z
pub(crate) const START_MILLIS: i64 = 1_700_000_000_000;

pub(crate) fn store_over(
    storage: Arc<dyn KeyValueStore>,
    clock: Arc<FixedClock>,
    latency: Duration,
) -> SessionStore {
    let verifier = Arc::new(MockCredentialVerifier::new(clock.clone()));
    SessionStore::new(storage, verifier, clock, latency)
}

pub(crate) fn fresh_store() -> (SessionStore, Arc<MemoryStore>, Arc<FixedClock>) {
    let storage = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::at_millis(START_MILLIS));
    let store = store_over(storage.clone(), clock.clone(), Duration::ZERO);
    (store, storage, clock)
}

/// Storage whose every operation fails.
pub(crate) struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::poisoned())
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::poisoned())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::poisoned())
    }
}

/// Storage that reads as empty and fails every write with a retryable error.
pub(crate) struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(read_only_error())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(read_only_error())
    }
}

fn read_only_error() -> StorageError {
    StorageError::file_write(
        PathBuf::from("storage.json"),
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
    )
}

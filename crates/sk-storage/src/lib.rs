//! Durable key/value storage used by the session and locale stores.
//!
//! The stores only need get/set/remove on string keys; [`FileStore`] keeps
//! them across process restarts and [`MemoryStore`] serves tests and
//! throwaway runs.

mod error;
mod file_store;
mod key_value_store;
mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;

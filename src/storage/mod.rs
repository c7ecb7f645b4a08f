// Persistent key-value storage capability
pub mod memory;
pub mod sqlite;

use thiserror::Error;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String key-value persistence shared by the auth flag and lecture
/// progress. Implementations must be safe to call from the tick task.
pub trait KeyValueStore: Send + Sync {
    fn get_string(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_string(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_string(&self, key: &str) -> Result<(), StorageError>;
}

pub mod memory;
pub mod sqlite;

use crate::error::Result;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Trait for synchronous string key-value persistence
pub trait KeyValueStorage: Send + Sync {
    /// Get the value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{EngineError, Result};
use crate::storage::KeyValueStorage;

/// In-process storage, lost on drop
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| EngineError::Storage("memory storage lock poisoned".to_string()))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| EngineError::Storage("memory storage lock poisoned".to_string()))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

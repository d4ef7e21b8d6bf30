//! Key-value settings collaborator.
//!
//! Hosts own persistence; the editor crates only read and write JSON values under their own
//! section keys (`"ert.services"`, `"ert.grid"`).

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// A persisted key-value store supplied by the host.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
}

/// In-memory store for hosts without persistence, and for tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        let values = self.values.read().ok()?;
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        // A poisoned lock only means a writer panicked mid-insert; the map is still usable.
        let mut values = match self.values.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.to_string(), value);
    }
}

//! Preferences store used to prefill the RFQ form

use std::collections::HashMap;
use std::sync::RwLock;

/// Key holding the last submitted email
pub const RFQ_EMAIL_KEY: &str = "rfq_email";
/// Key holding the last submitted name
pub const RFQ_NAME_KEY: &str = "rfq_name";

/// Persistent string key-value storage.
///
/// Writes are best effort; a store that cannot persist drops the value.
pub trait PreferencesStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferencesStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

//! In-memory lead store for router tests

use super::{Lead, LeadStore, StoreError};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryLeadStore {
    leads: Mutex<Vec<Lead>>,
    fail: bool,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails
    pub fn failing() -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn leads(&self) -> Vec<Lead> {
        self.leads.lock().await.clone()
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("write refused".to_string()));
        }
        self.leads.lock().await.push(lead.clone());
        Ok(())
    }
}

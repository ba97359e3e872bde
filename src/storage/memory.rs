use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store, the default backend. State is lost on restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn set_many(&self, entries: &[(String, String)]) {
        let mut guard = self.entries.write().await;
        for (key, value) in entries {
            guard.insert(key.clone(), value.clone());
        }
    }

    pub async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn delete_many(&self, keys: &[String]) {
        let mut guard = self.entries.write().await;
        for key in keys {
            guard.remove(key);
        }
    }
}

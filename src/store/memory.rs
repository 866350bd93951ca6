use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::store::{Collection, WorkspaceStore};

/// In-memory workspace store backed by a concurrent map. One value per
/// (collection, key); concurrent writers race and the last one wins, same as
/// the flat local-storage layout this mirrors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<(Collection, String), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    async fn get(&self, collection: Collection, key: &str) -> Option<Value> {
        self.entries
            .get(&(collection, key.to_string()))
            .map(|entry| entry.value().clone())
    }

    async fn set(&self, collection: Collection, key: &str, value: Value) {
        self.entries.insert((collection, key.to_string()), value);
    }

    async fn delete(&self, collection: Collection, key: &str) -> bool {
        self.entries.remove(&(collection, key.to_string())).is_some()
    }

    async fn keys(&self, collection: Collection) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.key().0 == collection)
            .map(|entry| entry.key().1.clone())
            .collect()
    }
}

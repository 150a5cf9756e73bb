//! Document store interface for the watchlist and chat history.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::ChatLogRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("watchlist entry has no string `symbol` field")]
    MissingSymbol,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert the entry, or merge its fields into the entry with the same
    /// symbol.
    async fn upsert_watchlist(&self, entry: &Value) -> Result<(), StoreError>;

    /// All watchlist entries ordered by symbol.
    async fn list_watchlist(&self) -> Result<Vec<Value>, StoreError>;

    /// Remove an entry. Unknown symbols are ignored.
    async fn delete_watchlist(&self, symbol: &str) -> Result<(), StoreError>;

    async fn append_chat_log(&self, record: &ChatLogRecord) -> Result<(), StoreError>;
}

/// The `symbol` key of a watchlist entry.
pub fn entry_symbol(entry: &Value) -> Result<&str, StoreError> {
    entry
        .get("symbol")
        .and_then(Value::as_str)
        .ok_or(StoreError::MissingSymbol)
}

/// Field-level merge: keys of `update` overwrite those of `existing`.
pub fn merge_entry(existing: Option<Value>, update: &Value) -> Value {
    let mut merged = match existing {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    if let Value::Object(fields) = update {
        for (key, value) in fields {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}

/// Process-local store, used when running without Redis in tests.
#[derive(Default)]
pub struct MemoryStore {
    watchlist: RwLock<BTreeMap<String, Value>>,
    chat_log: RwLock<Vec<ChatLogRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn chat_log(&self) -> Vec<ChatLogRecord> {
        self.chat_log.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn upsert_watchlist(&self, entry: &Value) -> Result<(), StoreError> {
        let symbol = entry_symbol(entry)?.to_string();
        let mut watchlist = self.watchlist.write().await;
        let merged = merge_entry(watchlist.remove(&symbol), entry);
        watchlist.insert(symbol, merged);
        Ok(())
    }

    async fn list_watchlist(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.watchlist.read().await.values().cloned().collect())
    }

    async fn delete_watchlist(&self, symbol: &str) -> Result<(), StoreError> {
        self.watchlist.write().await.remove(symbol);
        Ok(())
    }

    async fn append_chat_log(&self, record: &ChatLogRecord) -> Result<(), StoreError> {
        self.chat_log.write().await.push(record.clone());
        Ok(())
    }
}

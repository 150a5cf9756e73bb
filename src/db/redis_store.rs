//! Redis-backed document store.
//!
//! The watchlist is a hash keyed by symbol holding JSON documents; chat
//! history is an append-only list of JSON records.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::store::{entry_symbol, merge_entry, DocumentStore, StoreError};
use crate::models::ChatLogRecord;

pub const WATCHLIST_KEY: &str = "watchlist";
pub const CHAT_HISTORY_KEY: &str = "chat_history";

pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        Ok(Self { manager })
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn upsert_watchlist(&self, entry: &Value) -> Result<(), StoreError> {
        let symbol = entry_symbol(entry)?;
        let mut conn = self.manager.clone();

        let existing: Option<String> = conn.hget(WATCHLIST_KEY, symbol).await?;
        let existing = existing
            .map(|raw| serde_json::from_str::<Value>(&raw))
            .transpose()?;
        let merged = serde_json::to_string(&merge_entry(existing, entry))?;

        conn.hset::<_, _, _, ()>(WATCHLIST_KEY, symbol, merged).await?;
        debug!(symbol = %symbol, "watchlist entry upserted");
        Ok(())
    }

    async fn list_watchlist(&self) -> Result<Vec<Value>, StoreError> {
        let mut conn = self.manager.clone();
        let entries: BTreeMap<String, String> = conn.hgetall(WATCHLIST_KEY).await?;
        entries
            .values()
            .map(|raw| serde_json::from_str(raw).map_err(StoreError::from))
            .collect()
    }

    async fn delete_watchlist(&self, symbol: &str) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        conn.hdel::<_, _, ()>(WATCHLIST_KEY, symbol).await?;
        Ok(())
    }

    async fn append_chat_log(&self, record: &ChatLogRecord) -> Result<(), StoreError> {
        let mut conn = self.manager.clone();
        let raw = serde_json::to_string(record)?;
        conn.rpush::<_, _, ()>(CHAT_HISTORY_KEY, raw).await?;
        Ok(())
    }
}

//! Watchlist and chat-log persistence.

pub mod redis_store;
pub mod store;

pub use redis_store::RedisStore;
pub use store::{DocumentStore, MemoryStore, StoreError};

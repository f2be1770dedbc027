//! Key/value persistence for candidate profiles and interview sessions.
//!
//! Handlers never touch a backend directly; they go through `Arc<dyn KvStore>`
//! carried in `AppState`. `MemoryStore` is used when no `REDIS_URL` is set.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("stored value could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Minimal get/set/delete interface over string values.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Returns `true` when a value was present and removed.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;

    /// Human-readable backend name, reported by `/health`.
    fn backend(&self) -> &'static str;
}

/// Reads a JSON value stored under `key`.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes `value` as JSON and stores it under `key`, replacing any previous value.
pub async fn set_json<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}

pub fn candidate_key(candidate_id: &uuid::Uuid) -> String {
    format!("candidate:{candidate_id}")
}

/// Session ids of one candidate's interviews, oldest first.
pub fn candidate_sessions_key(candidate_id: &uuid::Uuid) -> String {
    format!("candidate:{candidate_id}:sessions")
}

pub fn session_key(session_id: &uuid::Uuid) -> String {
    format!("session:{session_id}")
}

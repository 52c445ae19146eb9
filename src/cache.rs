use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// Object-safe side-cache interface so handlers can run against Redis in
/// production and an in-memory map in tests.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: String, ttl: Duration) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}

pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> anyhow::Result<redis::aio::Connection> {
        Ok(self.client.get_async_connection().await?)
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> anyhow::Result<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
        Ok(())
    }
}

/// In-memory cache used by `AppState::fake()` and unit tests. TTLs are
/// recorded but never enforced; tests exercise hit/miss paths, not expiry.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String, _ttl: Duration) -> anyhow::Result<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A cache that fails every operation, for exercising graceful degradation.
#[cfg(test)]
pub struct BrokenCache;

#[cfg(test)]
#[async_trait]
impl CacheStore for BrokenCache {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("connection refused")
    }
    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
    async fn ping(&self) -> anyhow::Result<()> {
        anyhow::bail!("connection refused")
    }
}

/// Cache-aside lookup: serve from cache on hit, otherwise run `load`, store
/// its result under `key` and return it. `Ok(None)` from `load` means the
/// backing row does not exist and nothing is cached.
///
/// Cache failures (connect, decode) are logged and treated as misses; they
/// never surface to the caller. Concurrent misses for the same key may each
/// load and write; last writer wins.
pub async fn get_or_populate<T, F, Fut>(
    cache: &dyn CacheStore,
    key: &str,
    ttl: Duration,
    load: F,
) -> anyhow::Result<Option<T>>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                return Ok(Some(value));
            }
            Err(e) => warn!(key, error = %e, "cache entry undecodable, falling through"),
        },
        Ok(None) => debug!(key, "cache miss"),
        Err(e) => warn!(key, error = %e, "cache get failed, falling through"),
    }

    let Some(value) = load().await? else {
        return Ok(None);
    };

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set(key, raw, ttl).await {
                warn!(key, error = %e, "cache set failed, serving uncached");
            }
        }
        Err(e) => warn!(key, error = %e, "cache serialize failed, serving uncached"),
    }
    Ok(Some(value))
}

//! Redis implementation of the sorted-set wire contract.
//!
//! A single multiplexed [`ConnectionManager`] is shared by every caller;
//! cloning it is cheap and each command clones its own handle, so the client
//! can be used from any number of concurrent tasks. Atomicity of score
//! increments comes from the server, not from anything done here.

use std::time::Duration;

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client};
use tracing::{debug, info};

use super::settings::RedisSettings;
use crate::adapter::outbound::sorted_set::store::SortedSetAffinityStore;
use crate::port::outbound::sorted_set::{SortedSetClient, SortedSetResult};

/// Affinity store backed by Redis.
pub type RedisAffinityStore = SortedSetAffinityStore<RedisClient>;

/// Sorted-set client over a managed Redis connection.
#[derive(Clone)]
pub struct RedisClient {
    connection: ConnectionManager,
}

impl RedisClient {
    /// Open a managed connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`](crate::error::StoreError) when the
    /// server cannot be reached within the configured timeout, or
    /// [`StoreError::Command`](crate::error::StoreError) for a malformed URL.
    pub async fn connect(settings: &RedisSettings) -> SortedSetResult<Self> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(settings.retries)
            .set_connection_timeout(Duration::from_millis(settings.connection_timeout_ms));

        let client = Client::open(settings.url.as_str())?;
        let connection = client.get_connection_manager_with_config(config).await?;

        info!(
            timeout_ms = settings.connection_timeout_ms,
            retries = settings.retries,
            "Connected to Redis"
        );

        Ok(Self { connection })
    }

    fn connection(&self) -> ConnectionManager {
        self.connection.clone()
    }
}

impl SortedSetClient for RedisClient {
    async fn zincrby(&self, key: &str, member: &str, delta: f64) -> SortedSetResult<f64> {
        let mut conn = self.connection();
        let score: f64 = conn.zincr(key, member, delta).await?;
        Ok(score)
    }

    async fn zrevrange_withscores(&self, key: &str) -> SortedSetResult<Vec<(String, f64)>> {
        let mut conn = self.connection();
        let members: Vec<(String, f64)> = conn.zrevrange_withscores(key, 0, -1).await?;
        debug!(key, members = members.len(), "Read sorted set");
        Ok(members)
    }

    async fn zscore(&self, key: &str, member: &str) -> SortedSetResult<Option<f64>> {
        let mut conn = self.connection();
        let score: Option<f64> = conn.zscore(key, member).await?;
        Ok(score)
    }

    async fn zunionstore(&self, destination: &str, keys: &[String]) -> SortedSetResult<usize> {
        let mut conn = self.connection();
        let size: usize = conn.zunionstore(destination, keys).await?;
        Ok(size)
    }

    async fn zrem(&self, key: &str, members: &[String]) -> SortedSetResult<usize> {
        let mut conn = self.connection();
        let removed: usize = conn.zrem(key, members).await?;
        Ok(removed)
    }

    async fn del(&self, key: &str) -> SortedSetResult<usize> {
        let mut conn = self.connection();
        let removed: usize = conn.del(key).await?;
        Ok(removed)
    }

    async fn ping(&self) -> SortedSetResult<()> {
        let mut conn = self.connection();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

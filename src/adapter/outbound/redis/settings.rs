//! Connection settings for the Redis sorted-set service.

use serde::{Deserialize, Serialize};

/// Redis connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisSettings {
    /// Connection URL (`redis://`, `rediss://`, or `unix://`).
    #[serde(default = "default_url")]
    pub url: String,
    /// Timeout for establishing a connection, in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
    /// Reconnect attempts the connection manager makes before giving up.
    #[serde(default = "default_retries")]
    pub retries: usize,
}

fn default_url() -> String {
    "redis://127.0.0.1:6379/0".into()
}

const fn default_connection_timeout_ms() -> u64 {
    1_000
}

const fn default_retries() -> usize {
    1
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            connection_timeout_ms: default_connection_timeout_ms(),
            retries: default_retries(),
        }
    }
}

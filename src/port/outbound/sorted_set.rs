//! Wire contract of the external sorted-set service.
//!
//! Mirrors the handful of sorted-set commands the affinity store needs.
//! Keys and members are plain strings; scores are floats as the service
//! stores them.

use std::future::Future;

use crate::error::StoreError;

/// Result type for raw sorted-set commands.
pub type SortedSetResult<T> = std::result::Result<T, StoreError>;

/// Minimal sorted-set command surface.
pub trait SortedSetClient: Send + Sync {
    /// Atomically add `delta` to `member`'s score in `key`. Returns the new score.
    fn zincrby(
        &self,
        key: &str,
        member: &str,
        delta: f64,
    ) -> impl Future<Output = SortedSetResult<f64>> + Send;

    /// All members of `key` with scores, highest score first.
    ///
    /// Equal scores come back in the service's native order.
    fn zrevrange_withscores(
        &self,
        key: &str,
    ) -> impl Future<Output = SortedSetResult<Vec<(String, f64)>>> + Send;

    /// Score of `member` in `key`, if present.
    fn zscore(
        &self,
        key: &str,
        member: &str,
    ) -> impl Future<Output = SortedSetResult<Option<f64>>> + Send;

    /// Store the score-summed union of `keys` into `destination`.
    /// Returns the cardinality of the result.
    fn zunionstore(
        &self,
        destination: &str,
        keys: &[String],
    ) -> impl Future<Output = SortedSetResult<usize>> + Send;

    /// Remove `members` from `key`. Returns how many were present.
    fn zrem(
        &self,
        key: &str,
        members: &[String],
    ) -> impl Future<Output = SortedSetResult<usize>> + Send;

    /// Delete `key` entirely. Returns how many keys were removed.
    fn del(&self, key: &str) -> impl Future<Output = SortedSetResult<usize>> + Send;

    /// Round-trip check against the service.
    fn ping(&self) -> impl Future<Output = SortedSetResult<()>> + Send;
}

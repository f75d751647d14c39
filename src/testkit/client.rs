//! Fault-injecting [`SortedSetClient`] wrapper.
//!
//! Wraps any client (usually [`MemorySortedSets`](crate::adapter::outbound::memory::MemorySortedSets)),
//! counts calls per command, and fails selected commands with
//! [`StoreError::Unavailable`] to simulate an unreachable store.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::port::outbound::sorted_set::{SortedSetClient, SortedSetResult};

/// Sorted-set commands that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Increment,
    Range,
    Score,
    Union,
    Remove,
    Delete,
    Ping,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Increment => "ZINCRBY",
            Op::Range => "ZREVRANGE",
            Op::Score => "ZSCORE",
            Op::Union => "ZUNIONSTORE",
            Op::Remove => "ZREM",
            Op::Delete => "DEL",
            Op::Ping => "PING",
        };
        f.write_str(name)
    }
}

const ALL_OPS: [Op; 7] = [
    Op::Increment,
    Op::Range,
    Op::Score,
    Op::Union,
    Op::Remove,
    Op::Delete,
    Op::Ping,
];

/// Scripted behavior shared by every clone of one [`FaultyClient`].
#[derive(Debug, Default)]
struct Script {
    failing: Mutex<HashSet<Op>>,
    stalled: Mutex<HashSet<Op>>,
    fail_after_increments: Mutex<Option<usize>>,
    increments: AtomicUsize,
    calls: AtomicUsize,
}

/// Client wrapper with scripted failures and call counters.
///
/// Clones share the script and counters, so a clone handed to a background
/// task is still observed by the test.
#[derive(Debug, Default, Clone)]
pub struct FaultyClient<C> {
    inner: C,
    script: Arc<Script>,
}

impl<C: SortedSetClient> FaultyClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            script: Arc::new(Script::default()),
        }
    }

    /// The wrapped client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Make every future call of `op` fail.
    pub fn fail_on(&self, op: Op) {
        self.script.failing.lock().insert(op);
    }

    /// Make every command fail, as if the store went away.
    pub fn fail_all(&self) {
        self.script.failing.lock().extend(ALL_OPS);
    }

    /// Make every future call of `op` hang without ever answering.
    pub fn stall_on(&self, op: Op) {
        self.script.stalled.lock().insert(op);
    }

    /// Let `count` more increments through, then fail the rest.
    pub fn fail_after_increments(&self, count: usize) {
        *self.script.fail_after_increments.lock() = Some(count);
    }

    /// Clear all scripted failures and stalls.
    pub fn heal(&self) {
        self.script.failing.lock().clear();
        self.script.stalled.lock().clear();
        *self.script.fail_after_increments.lock() = None;
    }

    /// Successful `ZINCRBY` calls so far.
    pub fn increments(&self) -> usize {
        self.script.increments.load(Ordering::SeqCst)
    }

    /// Commands attempted so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }

    async fn check(&self, op: Op) -> SortedSetResult<()> {
        self.script.calls.fetch_add(1, Ordering::SeqCst);

        if op == Op::Increment {
            let mut budget = self.script.fail_after_increments.lock();
            if let Some(remaining) = budget.as_mut() {
                if *remaining == 0 {
                    return Err(fault(op));
                }
                *remaining -= 1;
            }
        }

        if self.script.failing.lock().contains(&op) {
            return Err(fault(op));
        }

        let stalled = self.script.stalled.lock().contains(&op);
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(())
    }
}

fn fault(op: Op) -> StoreError {
    StoreError::Unavailable(format!("injected fault on {op}"))
}

impl<C: SortedSetClient> SortedSetClient for FaultyClient<C> {
    async fn zincrby(&self, key: &str, member: &str, delta: f64) -> SortedSetResult<f64> {
        self.check(Op::Increment).await?;
        let score = self.inner.zincrby(key, member, delta).await?;
        self.script.increments.fetch_add(1, Ordering::SeqCst);
        Ok(score)
    }

    async fn zrevrange_withscores(&self, key: &str) -> SortedSetResult<Vec<(String, f64)>> {
        self.check(Op::Range).await?;
        self.inner.zrevrange_withscores(key).await
    }

    async fn zscore(&self, key: &str, member: &str) -> SortedSetResult<Option<f64>> {
        self.check(Op::Score).await?;
        self.inner.zscore(key, member).await
    }

    async fn zunionstore(&self, destination: &str, keys: &[String]) -> SortedSetResult<usize> {
        self.check(Op::Union).await?;
        self.inner.zunionstore(destination, keys).await
    }

    async fn zrem(&self, key: &str, members: &[String]) -> SortedSetResult<usize> {
        self.check(Op::Remove).await?;
        self.inner.zrem(key, members).await
    }

    async fn del(&self, key: &str) -> SortedSetResult<usize> {
        self.check(Op::Delete).await?;
        self.inner.del(key).await
    }

    async fn ping(&self) -> SortedSetResult<()> {
        self.check(Op::Ping).await?;
        self.inner.ping().await
    }
}

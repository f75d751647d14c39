//! In-process sorted sets for tests and embedding.
//!
//! Follows the remote service's semantics where callers could notice:
//! equal scores list in reverse member order on descending reads, and a
//! union that produces nothing leaves no destination key behind.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::adapter::outbound::sorted_set::store::SortedSetAffinityStore;
use crate::port::outbound::sorted_set::{SortedSetClient, SortedSetResult};

/// Affinity store held entirely in memory.
pub type MemoryAffinityStore = SortedSetAffinityStore<MemorySortedSets>;

impl MemoryAffinityStore {
    /// Create an empty in-memory affinity store.
    pub fn in_memory() -> Self {
        SortedSetAffinityStore::new(MemorySortedSets::new())
    }
}

/// In-memory sorted-set service.
///
/// Clones share the same sets, like handles to one server.
#[derive(Debug, Default, Clone)]
pub struct MemorySortedSets {
    sets: Arc<RwLock<HashMap<String, HashMap<String, f64>>>>,
}

impl MemorySortedSets {
    /// Create an empty set collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `key` currently exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.sets.read().contains_key(key)
    }

    /// All keys currently held, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.sets.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

fn descending(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.0.cmp(&a.0))
}

impl SortedSetClient for MemorySortedSets {
    async fn zincrby(&self, key: &str, member: &str, delta: f64) -> SortedSetResult<f64> {
        let mut sets = self.sets.write();
        let score = sets
            .entry(key.to_string())
            .or_default()
            .entry(member.to_string())
            .or_insert(0.0);
        *score += delta;
        Ok(*score)
    }

    async fn zrevrange_withscores(&self, key: &str) -> SortedSetResult<Vec<(String, f64)>> {
        let sets = self.sets.read();
        let mut members: Vec<(String, f64)> = sets
            .get(key)
            .map(|set| set.iter().map(|(m, s)| (m.clone(), *s)).collect())
            .unwrap_or_default();
        members.sort_by(descending);
        Ok(members)
    }

    async fn zscore(&self, key: &str, member: &str) -> SortedSetResult<Option<f64>> {
        Ok(self
            .sets
            .read()
            .get(key)
            .and_then(|set| set.get(member).copied()))
    }

    async fn zunionstore(&self, destination: &str, keys: &[String]) -> SortedSetResult<usize> {
        let mut sets = self.sets.write();

        let mut union: HashMap<String, f64> = HashMap::new();
        for key in keys {
            if let Some(set) = sets.get(key) {
                for (member, score) in set {
                    *union.entry(member.clone()).or_insert(0.0) += score;
                }
            }
        }

        let size = union.len();
        if union.is_empty() {
            sets.remove(destination);
        } else {
            sets.insert(destination.to_string(), union);
        }
        Ok(size)
    }

    async fn zrem(&self, key: &str, members: &[String]) -> SortedSetResult<usize> {
        let mut sets = self.sets.write();
        let Some(set) = sets.get_mut(key) else {
            return Ok(0);
        };

        let removed = members.iter().filter(|m| set.remove(*m).is_some()).count();
        if set.is_empty() {
            sets.remove(key);
        }
        Ok(removed)
    }

    async fn del(&self, key: &str) -> SortedSetResult<usize> {
        Ok(usize::from(self.sets.write().remove(key).is_some()))
    }

    async fn ping(&self) -> SortedSetResult<()> {
        Ok(())
    }
}

//! Recommenders over in-memory stores, ready for tests.

use crate::adapter::outbound::catalog::StaticCatalog;
use crate::adapter::outbound::memory::{MemoryAffinityStore, MemorySortedSets};
use crate::adapter::outbound::sorted_set::store::SortedSetAffinityStore;
use crate::application::recommender::Recommender;

use super::client::FaultyClient;
use super::domain::catalog;

pub type MemoryRecommender = Recommender<MemoryAffinityStore, StaticCatalog>;

pub type FaultyRecommender =
    Recommender<SortedSetAffinityStore<FaultyClient<MemorySortedSets>>, StaticCatalog>;

/// Recommender over an empty in-memory store with a generated catalog.
pub fn memory_recommender(products: &[u64]) -> MemoryRecommender {
    Recommender::new(MemoryAffinityStore::in_memory(), catalog(products))
}

/// Recommender whose store client can be told to fail or stall.
pub fn faulty_recommender(products: &[u64]) -> FaultyRecommender {
    let client = FaultyClient::new(MemorySortedSets::new());
    Recommender::new(SortedSetAffinityStore::new(client), catalog(products))
}

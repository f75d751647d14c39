//! Live Redis round trips. Run with `--features integration-tests` and
//! `COPURCHASE_REDIS_URL` pointing at a disposable database.

#![cfg(feature = "integration-tests")]

use copurchase::adapter::outbound::catalog::StaticCatalog;
use copurchase::adapter::outbound::redis::client::{RedisAffinityStore, RedisClient};
use copurchase::adapter::outbound::redis::settings::RedisSettings;
use copurchase::adapter::outbound::sorted_set::store::SortedSetAffinityStore;
use copurchase::application::recommender::Recommender;
use copurchase::port::outbound::sorted_set::SortedSetClient;
use copurchase::testkit::domain::{basket, catalog, ids, pid};

// Ids well away from anything a shared dev database is likely to hold.
const BASE: u64 = 9_000_000;

async fn live(products: &[u64]) -> Recommender<RedisAffinityStore, StaticCatalog> {
    let url = std::env::var("COPURCHASE_REDIS_URL")
        .unwrap_or_else(|_| "redis://127.0.0.1:6379/15".to_string());
    let settings = RedisSettings {
        url,
        ..RedisSettings::default()
    };
    let client = RedisClient::connect(&settings).await.expect("redis reachable");
    let ids: Vec<u64> = products.iter().map(|p| BASE + p).collect();
    let recommender = Recommender::new(SortedSetAffinityStore::new(client), catalog(&ids));
    recommender.clear_all().await.expect("reset test entries");
    recommender
}

fn shifted(raw: &[u64]) -> Vec<u64> {
    raw.iter().map(|p| BASE + p).collect()
}

#[tokio::test]
async fn ping_round_trips() {
    let recommender = live(&[]).await;
    recommender.store().client().ping().await.unwrap();
}

#[tokio::test]
async fn recorded_baskets_rank_on_live_redis() {
    let recommender = live(&[1, 2, 3]).await;

    recommender
        .record_co_purchase(&basket(&shifted(&[1, 2, 3])))
        .await
        .unwrap();
    recommender
        .record_co_purchase(&basket(&shifted(&[1, 3])))
        .await
        .unwrap();

    assert_eq!(
        recommender.suggest(&ids(&shifted(&[1])), 10).await.unwrap(),
        ids(&shifted(&[3, 2]))
    );
    assert_eq!(
        recommender.score(pid(BASE + 1), pid(BASE + 3)).await.unwrap(),
        2
    );

    recommender.clear_all().await.unwrap();
}

#[tokio::test]
async fn live_union_excludes_inputs_and_cleans_up() {
    let recommender = live(&[1, 2, 3, 4]).await;
    recommender
        .record_co_purchase(&basket(&shifted(&[1, 2, 3])))
        .await
        .unwrap();
    recommender
        .record_co_purchase(&basket(&shifted(&[2, 4])))
        .await
        .unwrap();

    let found = recommender
        .suggest(&ids(&shifted(&[1, 2])), 10)
        .await
        .unwrap();
    assert_eq!(found, ids(&shifted(&[3, 4])));

    let scratch = format!("tmp:purchased_with:{}_{}", BASE + 1, BASE + 2);
    let leftover = recommender
        .store()
        .client()
        .zrevrange_withscores(&scratch)
        .await
        .unwrap();
    assert!(leftover.is_empty());

    recommender.clear_all().await.unwrap();
}

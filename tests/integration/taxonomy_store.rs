//! Rank taxonomy workflow integration tests.
//!
//! Tests the save → load → revert cycle through the provider, and that
//! lookups always produce a five-tier taxonomy.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use literacy_metrics::error::{AppError, TaxonomyError};
use literacy_metrics::scoring::{rank_label, Rank};
use literacy_metrics::storage::{InMemoryRankStore, SqliteStorage};
use literacy_metrics::taxonomy::{RankDefinition, RankTaxonomyProvider, TIER_COUNT};
use pretty_assertions::assert_eq;
use serial_test::serial;

use super::fixtures::ORG;

fn renamed(org_id: &str, names: [&str; 5]) -> RankDefinition {
    let mut definition = RankDefinition::system_default(org_id);
    for (tier, name) in definition.ranks.iter_mut().zip(names) {
        tier.name = name.to_string();
    }
    definition
}

// ============================================================================
// SQLite-Backed Workflow
// ============================================================================

#[tokio::test]
#[serial]
async fn test_sqlite_customize_and_revert() {
    let storage = SqliteStorage::new_in_memory().await.unwrap();
    let provider = RankTaxonomyProvider::new(storage.clone());

    let before = provider.get_rank_definition(ORG).await;
    assert_eq!(before, RankDefinition::system_default(ORG));

    let custom = renamed(ORG, ["Seed", "Sprout", "Sapling", "Tree", "Forest"]);
    provider.save_rank_definition(&custom).await.unwrap();

    let after = provider.get_rank_definition(ORG).await;
    assert_eq!(after, custom);
    assert_eq!(rank_label(62, &after), "Tree");
    assert_eq!(storage.list_customized_orgs().await.unwrap(), vec![ORG]);

    assert!(storage.delete_rank_definition(ORG).await.unwrap());
    let reverted = provider.get_rank_definition(ORG).await;
    assert_eq!(rank_label(62, &reverted), "Advance");
}

#[tokio::test]
#[serial]
async fn test_sqlite_resave_keeps_created_at() {
    let storage = SqliteStorage::new_in_memory().await.unwrap();
    let provider = RankTaxonomyProvider::new(storage.clone());

    provider
        .save_rank_definition(&RankDefinition::system_default(ORG))
        .await
        .unwrap();
    let first = storage.get_rank_definition(ORG).await.unwrap().unwrap();

    let custom = renamed(ORG, ["A", "B", "C", "D", "E"]);
    provider.save_rank_definition(&custom).await.unwrap();
    let second = storage.get_rank_definition(ORG).await.unwrap().unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(second.definition, custom);
}

#[tokio::test]
#[serial]
async fn test_sqlite_rejects_four_tiers_and_keeps_previous() {
    let storage = SqliteStorage::new_in_memory().await.unwrap();
    let provider = RankTaxonomyProvider::new(storage);

    let custom = renamed(ORG, ["A", "B", "C", "D", "E"]);
    provider.save_rank_definition(&custom).await.unwrap();

    let mut broken = custom.clone();
    broken.ranks.pop();
    let err = provider.save_rank_definition(&broken).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Taxonomy(TaxonomyError::InvalidTierCount {
            expected: 5,
            actual: 4
        })
    ));

    assert_eq!(provider.get_rank_definition(ORG).await, custom);
}

// ============================================================================
// Tenant Isolation
// ============================================================================

#[tokio::test]
async fn test_tenants_are_isolated() {
    let provider = RankTaxonomyProvider::new(InMemoryRankStore::new());
    provider
        .save_rank_definition(&renamed("north", ["N1", "N2", "N3", "N4", "N5"]))
        .await
        .unwrap();

    let north = provider.get_rank_definition("north").await;
    let south = provider.get_rank_definition("south").await;

    let top = Rank::HIGHEST;
    assert_eq!(north.label_for(top), "N5");
    assert_eq!(south.label_for(top), "Expert");
    assert_eq!(south.org_id, "south");
}

#[tokio::test]
async fn test_shared_store_across_tasks() {
    let provider = Arc::new(RankTaxonomyProvider::new(Arc::new(InMemoryRankStore::new())));

    let mut handles = Vec::new();
    for i in 0..8 {
        let provider = Arc::clone(&provider);
        handles.push(tokio::spawn(async move {
            let org = format!("org-{i}");
            provider
                .save_rank_definition(&RankDefinition::system_default(org.as_str()))
                .await
                .unwrap();
            provider.get_rank_definition(&org).await
        }));
    }

    for handle in handles {
        let definition = handle.await.unwrap();
        assert_eq!(definition.ranks.len(), TIER_COUNT);
    }
    assert_eq!(provider.store().len(), 8);
}

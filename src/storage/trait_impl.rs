//! `RankDefinitionStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use async_trait::async_trait;

use crate::error::StorageError;
use crate::taxonomy::RankDefinition;
use crate::traits::RankDefinitionStore;

use super::core::SqliteStorage;

#[async_trait]
impl RankDefinitionStore for SqliteStorage {
    async fn load(&self, org_id: &str) -> Result<Option<RankDefinition>, StorageError> {
        let stored = self.get_rank_definition(org_id).await?;
        Ok(stored.map(|s| s.definition))
    }

    async fn store(&self, definition: &RankDefinition) -> Result<(), StorageError> {
        self.upsert_rank_definition(definition).await
    }
}

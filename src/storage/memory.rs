//! In-process rank definition store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::taxonomy::RankDefinition;
use crate::traits::RankDefinitionStore;

/// A [`RankDefinitionStore`] backed by a lock-guarded map.
///
/// Suitable for tests and for callers that keep taxonomies in memory.
#[derive(Debug, Default)]
pub struct InMemoryRankStore {
    definitions: RwLock<HashMap<String, RankDefinition>>,
}

impl InMemoryRankStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of organizations with a stored taxonomy.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.read().map_or(0, |map| map.len())
    }

    /// Whether no taxonomy is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> StorageError {
        StorageError::Internal {
            message: "rank definition map lock poisoned".to_string(),
        }
    }
}

#[async_trait]
impl RankDefinitionStore for InMemoryRankStore {
    async fn load(&self, org_id: &str) -> Result<Option<RankDefinition>, StorageError> {
        let map = self.definitions.read().map_err(|_| Self::poisoned())?;
        Ok(map.get(org_id).cloned())
    }

    async fn store(&self, definition: &RankDefinition) -> Result<(), StorageError> {
        let mut map = self.definitions.write().map_err(|_| Self::poisoned())?;
        map.insert(definition.org_id.clone(), definition.clone());
        Ok(())
    }
}

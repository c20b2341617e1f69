//! Storage row types.

use chrono::{DateTime, Utc};

use crate::taxonomy::RankDefinition;

/// A persisted tenant taxonomy with its bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRankDefinition {
    /// The taxonomy as stored.
    pub definition: RankDefinition,
    /// First time the organization saved a taxonomy.
    pub created_at: DateTime<Utc>,
    /// Last time the taxonomy was replaced.
    pub updated_at: DateTime<Utc>,
}

impl StoredRankDefinition {
    /// Wrap a definition with explicit timestamps.
    #[must_use]
    pub const fn with_timestamps(
        definition: RankDefinition,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            definition,
            created_at,
            updated_at,
        }
    }

    /// Owning organization.
    #[must_use]
    pub fn org_id(&self) -> &str {
        &self.definition.org_id
    }
}

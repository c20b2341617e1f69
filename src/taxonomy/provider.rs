//! Tenant taxonomy lookup with default fallback.

use crate::error::{AppError, TaxonomyError};
use crate::traits::RankDefinitionStore;

use super::RankDefinition;

/// Resolves the rank taxonomy of an organization.
///
/// Lookup is two-tiered: the tenant's stored definition if it exists and is
/// well formed, otherwise [`RankDefinition::system_default`]. Consumers can
/// therefore rely on always receiving exactly five tiers.
#[derive(Debug, Clone)]
pub struct RankTaxonomyProvider<S> {
    store: S,
}

impl<S: RankDefinitionStore> RankTaxonomyProvider<S> {
    /// Create a provider over a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Get the taxonomy of an organization.
    ///
    /// Never fails: a missing, malformed or unreadable tenant definition
    /// yields the system default.
    pub async fn get_rank_definition(&self, org_id: &str) -> RankDefinition {
        match self.store.load(org_id).await {
            Ok(Some(definition)) => match definition.validate() {
                Ok(()) => definition,
                Err(e) => {
                    tracing::warn!(org_id, error = %e, "Stored rank definition is malformed, using default");
                    RankDefinition::system_default(org_id)
                }
            },
            Ok(None) => {
                tracing::debug!(org_id, "No custom rank definition, using default");
                RankDefinition::system_default(org_id)
            }
            Err(e) => {
                tracing::warn!(org_id, error = %e, "Rank definition lookup failed, using default");
                RankDefinition::system_default(org_id)
            }
        }
    }

    /// Persist a tenant's edited taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Taxonomy`] if the definition names no organization
    /// or does not have exactly five well-formed tiers, or [`AppError::Storage`]
    /// if the write fails.
    pub async fn save_rank_definition(&self, definition: &RankDefinition) -> Result<(), AppError> {
        if definition.org_id.trim().is_empty() {
            return Err(TaxonomyError::MissingOrganization.into());
        }
        definition.validate()?;
        self.store.store(definition).await?;
        tracing::info!(org_id = %definition.org_id, "Saved rank definition");
        Ok(())
    }
}

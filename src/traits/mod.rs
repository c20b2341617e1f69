//! Trait definitions for mockable dependencies.
//!
//! This module defines:
//! - [`RankDefinitionStore`]: persistence seam for tenant rank taxonomies
//!
//! # Mocking
//!
//! Traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::taxonomy::RankDefinition;

/// Storage for per-organization rank taxonomies.
///
/// Implementations hand back whatever they hold; shape validation and the
/// fallback to the system default happen in
/// [`RankTaxonomyProvider`](crate::taxonomy::RankTaxonomyProvider).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RankDefinitionStore: Send + Sync {
    /// Load the stored taxonomy of an organization.
    ///
    /// Returns `None` if the organization has no customized taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    async fn load(&self, org_id: &str) -> Result<Option<RankDefinition>, StorageError>;

    /// Insert or replace the taxonomy of `definition.org_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    async fn store(&self, definition: &RankDefinition) -> Result<(), StorageError>;
}

/// Blanket implementation for `Arc<S>` to allow sharing a store across threads.
#[async_trait]
impl<S: RankDefinitionStore + ?Sized> RankDefinitionStore for Arc<S> {
    async fn load(&self, org_id: &str) -> Result<Option<RankDefinition>, StorageError> {
        self.as_ref().load(org_id).await
    }

    async fn store(&self, definition: &RankDefinition) -> Result<(), StorageError> {
        self.as_ref().store(definition).await
    }
}

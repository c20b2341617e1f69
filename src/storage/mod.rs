//! Storage backends for tenant rank taxonomies.
//!
//! This module provides:
//! - [`SqliteStorage`]: `SQLite` persistence via `sqlx`
//! - [`InMemoryRankStore`]: a map-backed store for tests and embedding callers
//!
//! Both implement [`RankDefinitionStore`](crate::traits::RankDefinitionStore).
//!
//! The `SQLite` implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `rank_definition`: Rank definition CRUD operations
//! - `trait_impl`: `RankDefinitionStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use literacy_metrics::storage::SqliteStorage;
//! use literacy_metrics::taxonomy::RankTaxonomyProvider;
//!
//! let storage = SqliteStorage::new("./data/literacy.db").await?;
//! let provider = RankTaxonomyProvider::new(storage);
//! let definition = provider.get_rank_definition("org-1").await;
//! ```

mod core;
mod memory;
mod rank_definition;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use memory::InMemoryRankStore;
pub use types::StoredRankDefinition;

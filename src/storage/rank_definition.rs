//! Rank definition storage operations.

#![allow(clippy::missing_errors_doc)]

use chrono::Utc;
use sqlx::Row;

use crate::error::StorageError;
use crate::taxonomy::{RankDefinition, RankTier};

use super::core::SqliteStorage;
use super::types::StoredRankDefinition;

impl SqliteStorage {
    /// Insert or replace the taxonomy of `definition.org_id`.
    ///
    /// `created_at` is kept from the first save.
    pub async fn upsert_rank_definition(
        &self,
        definition: &RankDefinition,
    ) -> Result<(), StorageError> {
        let ranks = serde_json::to_string(&definition.ranks).map_err(|e| StorageError::Internal {
            message: format!("Failed to serialize rank tiers: {e}"),
        })?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO rank_definitions (org_id, ranks, created_at, updated_at) VALUES (?, ?, ?, ?)
             ON CONFLICT(org_id) DO UPDATE SET ranks = excluded.ranks, updated_at = excluded.updated_at",
        )
        .bind(&definition.org_id)
        .bind(&ranks)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("UPSERT rank_definitions", format!("{e}")))?;

        Ok(())
    }

    /// Get the stored taxonomy of an organization.
    pub async fn get_rank_definition(
        &self,
        org_id: &str,
    ) -> Result<Option<StoredRankDefinition>, StorageError> {
        let row = sqlx::query(
            "SELECT org_id, ranks, created_at, updated_at FROM rank_definitions WHERE org_id = ?",
        )
        .bind(org_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT rank_definitions", format!("{e}")))?;

        match row {
            Some(row) => {
                let org_id: String = row.get("org_id");
                let ranks_json: String = row.get("ranks");
                let created_at_str: String = row.get("created_at");
                let updated_at_str: String = row.get("updated_at");

                let ranks: Vec<RankTier> =
                    serde_json::from_str(&ranks_json).map_err(|e| StorageError::Internal {
                        message: format!("Corrupt rank tiers for org '{org_id}': {e}"),
                    })?;

                Ok(Some(StoredRankDefinition::with_timestamps(
                    RankDefinition { org_id, ranks },
                    Self::parse_datetime(&created_at_str)?,
                    Self::parse_datetime(&updated_at_str)?,
                )))
            }
            None => Ok(None),
        }
    }

    /// Delete an organization's taxonomy, reverting it to the default.
    ///
    /// Returns whether a row was removed.
    pub async fn delete_rank_definition(&self, org_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM rank_definitions WHERE org_id = ?")
            .bind(org_id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE rank_definitions", format!("{e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Organizations with a customized taxonomy, ordered by id.
    pub async fn list_customized_orgs(&self) -> Result<Vec<String>, StorageError> {
        let rows = sqlx::query("SELECT org_id FROM rank_definitions ORDER BY org_id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT rank_definitions", format!("{e}")))?;

        Ok(rows.iter().map(|row| row.get("org_id")).collect())
    }
}

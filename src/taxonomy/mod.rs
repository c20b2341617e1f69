//! Rank taxonomy.
//!
//! A [`RankDefinition`] names and describes the five proficiency tiers for one
//! organization. Tier positions are significant (position 0 is the lowest tier)
//! and tier ids are the stable strings `rank1..rank5`, which rank self-assessment
//! answers use as lookup keys.
//!
//! Organizations without a customized taxonomy use [`DEFAULT_TIERS`], exposed as
//! a constant rather than a process-wide mutable value.
//!
//! # Example
//!
//! ```
//! use literacy_metrics::taxonomy::RankDefinition;
//! use literacy_metrics::scoring::Rank;
//!
//! let definition = RankDefinition::system_default("org-1");
//! assert!(definition.validate().is_ok());
//! assert_eq!(definition.label_for(Rank::new(5).unwrap()), "Expert");
//! ```

mod provider;

pub use provider::RankTaxonomyProvider;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::scoring::Rank;

/// Number of tiers every taxonomy carries.
pub const TIER_COUNT: usize = 5;

/// Stable tier ids, lowest tier first.
pub const TIER_IDS: [&str; TIER_COUNT] = ["rank1", "rank2", "rank3", "rank4", "rank5"];

/// A built-in tier of the system default taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTier {
    /// Stable tier id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Descriptive bullets.
    pub descriptions: &'static [&'static str],
}

/// The system default taxonomy, lowest tier first.
pub const DEFAULT_TIERS: [DefaultTier; TIER_COUNT] = [
    DefaultTier {
        id: "rank1",
        name: "Beginner",
        descriptions: &[
            "Has barely used generative AI",
            "Not confident with basic AI terminology",
            "Has rarely used AI at work",
            "Has not attended any AI training",
            "Cannot yet picture what AI could be used for",
        ],
    },
    DefaultTier {
        id: "rank2",
        name: "Basic",
        descriptions: &[
            "Knows about AI and has tried it",
            "Has experimented with tools such as ChatGPT",
            "Roughly understands terms like prompt",
            "Knows common uses such as text and image generation",
            "AI use at work is not yet a habit",
        ],
    },
    DefaultTier {
        id: "rank3",
        name: "Practice",
        descriptions: &[
            "Has started using AI at work",
            "Uses AI weekly for drafting mail or summarizing",
            "Can refine simple prompts",
            "Has seen results from AI on small tasks",
            "Has joined small projects or improvements using AI",
        ],
    },
    DefaultTier {
        id: "rank4",
        name: "Advance",
        descriptions: &[
            "Gets results from AI in daily work",
            "Builds custom prompts and workflows",
            "Has combined several tools or API integrations",
            "Has clear outcomes such as saved hours or better quality",
            "Acts as the go-to AI adviser in the department",
        ],
    },
    DefaultTier {
        id: "rank5",
        name: "Expert",
        descriptions: &[
            "Creates value through advanced AI use",
            "Understands and applies RAG and fine-tuning",
            "Can build complex automation and system integrations",
            "Can design new services and business processes",
            "Can teach and run AI training inside and outside the company",
        ],
    },
];

/// One tier of a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    /// Stable tier id (`rank1..rank5`).
    pub id: String,
    /// Tenant-editable display name.
    pub name: String,
    /// Tenant-editable descriptive bullets.
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl From<&DefaultTier> for RankTier {
    fn from(tier: &DefaultTier) -> Self {
        Self {
            id: tier.id.to_string(),
            name: tier.name.to_string(),
            descriptions: tier.descriptions.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}

/// The five-tier taxonomy of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankDefinition {
    /// Owning organization.
    pub org_id: String,
    /// Tiers, lowest first.
    pub ranks: Vec<RankTier>,
}

impl RankDefinition {
    /// Build the system default taxonomy for an organization.
    #[must_use]
    pub fn system_default(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            ranks: DEFAULT_TIERS.iter().map(RankTier::from).collect(),
        }
    }

    /// Check the tier count, tier ids and tier names.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError`] describing the first violation found.
    pub fn validate(&self) -> Result<(), TaxonomyError> {
        if self.ranks.len() != TIER_COUNT {
            return Err(TaxonomyError::InvalidTierCount {
                expected: TIER_COUNT,
                actual: self.ranks.len(),
            });
        }

        for (position, (tier, expected)) in self.ranks.iter().zip(TIER_IDS).enumerate() {
            if tier.id != expected {
                return Err(TaxonomyError::UnexpectedTierId {
                    position,
                    expected: expected.to_string(),
                    actual: tier.id.clone(),
                });
            }
            if tier.name.trim().is_empty() {
                return Err(TaxonomyError::EmptyTierName {
                    tier_id: tier.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Whether [`Self::validate`] passes.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Resolve a tier id (e.g. `rank3`) to its rank.
    ///
    /// Looks the id up among this taxonomy's tiers first, then falls back to
    /// the stable `rankN` naming so a partially customized taxonomy still maps.
    #[must_use]
    pub fn rank_of_tier(&self, tier_id: &str) -> Option<Rank> {
        let tier_id = tier_id.trim();
        self.ranks
            .iter()
            .position(|t| t.id == tier_id)
            .filter(|&p| p < TIER_COUNT)
            .or_else(|| TIER_IDS.iter().position(|id| *id == tier_id))
            .and_then(|p| u8::try_from(p + 1).ok())
            .and_then(Rank::new)
    }

    /// The tier for a rank, if present.
    #[must_use]
    pub fn tier(&self, rank: Rank) -> Option<&RankTier> {
        self.ranks.get(rank.index())
    }

    /// Display label of a rank, or `Rank {n}` when the taxonomy lacks the tier.
    #[must_use]
    pub fn label_for(&self, rank: Rank) -> String {
        self.tier(rank)
            .map(|t| t.name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| format!("Rank {}", rank.get()), str::to_string)
    }
}

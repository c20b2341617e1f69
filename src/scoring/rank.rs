//! Rank classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::taxonomy::RankDefinition;

/// Minimum overall score of ranks 2, 3, 4 and 5.
///
/// The only threshold table in the crate: numeric ranks and rank labels are
/// both derived from it.
pub const RANK_THRESHOLDS: [u8; 4] = [20, 40, 60, 80];

/// A rank outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Rank must be between 1 and 5, got {0}")]
pub struct InvalidRank(pub u8);

/// An ordinal proficiency tier, 1 (lowest) to 5 (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    /// The lowest rank.
    pub const LOWEST: Self = Self(1);
    /// The highest rank.
    pub const HIGHEST: Self = Self(5);

    /// Create a rank, or `None` outside `1..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 5 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value, 1 to 5.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based tier position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All ranks, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=5).map(Self)
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidRank(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classify an overall score.
///
/// `>= 80` is rank 5, `>= 60` rank 4, `>= 40` rank 3, `>= 20` rank 2,
/// anything lower rank 1.
#[must_use]
pub fn rank_from_score(score: u8) -> Rank {
    Rank(
        RANK_THRESHOLDS
            .iter()
            .fold(1, |rank, &threshold| if score >= threshold { rank + 1 } else { rank }),
    )
}

/// Display label for an overall score under a taxonomy.
#[must_use]
pub fn rank_label(score: u8, definition: &RankDefinition) -> String {
    definition.label_for(rank_from_score(score))
}

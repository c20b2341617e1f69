//! Rank distribution and rank summary.

use serde::{Deserialize, Serialize};

use crate::scoring::{round_one_decimal, Rank};

/// Count of responses per rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankDistribution {
    /// Rank 1 count.
    pub rank1: u32,
    /// Rank 2 count.
    pub rank2: u32,
    /// Rank 3 count.
    pub rank3: u32,
    /// Rank 4 count.
    pub rank4: u32,
    /// Rank 5 count.
    pub rank5: u32,
}

impl RankDistribution {
    /// Count ranks.
    #[must_use]
    pub fn from_ranks(ranks: impl IntoIterator<Item = Rank>) -> Self {
        let mut distribution = Self::default();
        for rank in ranks {
            distribution.add(rank);
        }
        distribution
    }

    /// Count one more response at `rank`.
    pub fn add(&mut self, rank: Rank) {
        match rank.get() {
            1 => self.rank1 += 1,
            2 => self.rank2 += 1,
            3 => self.rank3 += 1,
            4 => self.rank4 += 1,
            _ => self.rank5 += 1,
        }
    }

    /// Count at one rank.
    #[must_use]
    pub const fn count(&self, rank: Rank) -> u32 {
        match rank.get() {
            1 => self.rank1,
            2 => self.rank2,
            3 => self.rank3,
            4 => self.rank4,
            _ => self.rank5,
        }
    }

    /// Number of counted responses.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.rank1 + self.rank2 + self.rank3 + self.rank4 + self.rank5
    }

    /// Mean rank rounded to one decimal, or `None` when empty.
    #[must_use]
    pub fn average_rank(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: u32 = Rank::all().map(|r| u32::from(r.get()) * self.count(r)).sum();
        Some(round_one_decimal(f64::from(sum) / f64::from(total)))
    }
}

/// Organization-level rank overview over the latest response of each respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSummary {
    /// Respondents per rank.
    pub distribution: RankDistribution,
    /// Mean rank, one decimal; `None` without respondents.
    pub average_rank: Option<f64>,
    /// Distinct respondents.
    pub respondent_count: u32,
    /// Respondents as a whole percentage of members; `None` when the member
    /// count is unknown or zero.
    pub response_rate: Option<u32>,
}

impl RankSummary {
    /// Summarize the ranks of distinct respondents.
    #[must_use]
    pub fn new(ranks: impl IntoIterator<Item = Rank>, member_count: Option<u32>) -> Self {
        let distribution = RankDistribution::from_ranks(ranks);
        let respondent_count = distribution.total();
        Self {
            distribution,
            average_rank: distribution.average_rank(),
            respondent_count,
            response_rate: member_count.and_then(|members| response_rate(respondent_count, members)),
        }
    }
}

/// `respondents / members` as a percentage rounded half up.
#[must_use]
pub fn response_rate(respondents: u32, members: u32) -> Option<u32> {
    if members == 0 {
        return None;
    }
    let scaled = u64::from(respondents) * 200 + u64::from(members);
    u32::try_from(scaled / (2 * u64::from(members))).ok()
}

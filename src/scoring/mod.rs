//! Scoring pipeline.
//!
//! `SurveyResponse -> LiteracyScores -> overall score -> Rank`:
//! - [`normalize`]: type-independent answer extraction
//! - [`dimensions`]: the question-to-axis rule table and [`score_response`]
//! - [`overall`]: [`overall_score`]
//! - [`rank`]: [`rank_from_score`] and the threshold table
//! - [`questions`]: the default questionnaire and its token vocabularies
//!
//! Every function here is pure and total.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use literacy_metrics::scoring::{assess, Rank};
//! use literacy_metrics::survey::{Answer, SurveyResponse};
//! use literacy_metrics::taxonomy::RankDefinition;
//!
//! let response = SurveyResponse::new("r-1", "s-1", "org-1", "Alice", Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap())
//!     .with_answer(Answer::rank("q8", "rank4"))
//!     .with_answer(Answer::radio("q1", "daily"));
//! let assessment = assess(&response, &RankDefinition::system_default("org-1"));
//! assert_eq!(assessment.scores.basics, 80.0);
//! assert!(assessment.rank >= Rank::LOWEST);
//! ```

pub mod dimensions;
pub mod normalize;
pub mod overall;
pub mod questions;
pub mod rank;

pub use dimensions::{score_response, Axis, SCORING_RULES};
pub use normalize::{extract_labeled_value, extract_value, NormalizedValue};
pub use overall::overall_score;
pub use rank::{rank_from_score, rank_label, InvalidRank, Rank, RANK_THRESHOLDS};

use serde::{Deserialize, Serialize};

use crate::survey::SurveyResponse;
use crate::taxonomy::RankDefinition;

/// Scores on the five proficiency axes, each within 0-100.
///
/// Per-response scores are whole numbers; cohort means may be fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiteracyScores {
    /// Foundational knowledge.
    pub basics: f64,
    /// Prompt crafting and breadth of use.
    pub prompting: f64,
    /// Responsible use.
    pub ethics: f64,
    /// Tool adoption.
    pub tools: f64,
    /// Integration into routine work.
    pub automation: f64,
}

impl LiteracyScores {
    /// Build from values in [`Axis::ALL`] order.
    #[must_use]
    pub const fn from_axes(values: [f64; 5]) -> Self {
        let [basics, prompting, ethics, tools, automation] = values;
        Self {
            basics,
            prompting,
            ethics,
            tools,
            automation,
        }
    }

    /// Values in [`Axis::ALL`] order.
    #[must_use]
    pub const fn axes(&self) -> [f64; 5] {
        [
            self.basics,
            self.prompting,
            self.ethics,
            self.tools,
            self.automation,
        ]
    }

    /// Value of one axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Basics => self.basics,
            Axis::Prompting => self.prompting,
            Axis::Ethics => self.ethics,
            Axis::Tools => self.tools,
            Axis::Automation => self.automation,
        }
    }

    /// Set one axis, clamped to 0-100.
    pub fn set(&mut self, axis: Axis, value: f64) {
        let value = if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        };
        match axis {
            Axis::Basics => self.basics = value,
            Axis::Prompting => self.prompting = value,
            Axis::Ethics => self.ethics = value,
            Axis::Tools => self.tools = value,
            Axis::Automation => self.automation = value,
        }
    }

    /// Per-axis mean, or `None` for an empty input.
    #[must_use]
    pub fn mean<'a>(scores: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        let mut sums = [0.0; 5];
        let mut count = 0u32;
        for s in scores {
            for (sum, value) in sums.iter_mut().zip(s.axes()) {
                *sum += value;
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Self::from_axes(sums.map(|sum| sum / f64::from(count))))
    }

    /// Copy with every axis rounded to one decimal place.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self::from_axes(self.axes().map(round_one_decimal))
    }
}

/// Round half up to one decimal place.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Scores, overall score and rank of one response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// Axis scores.
    pub scores: LiteracyScores,
    /// Overall score.
    pub overall_score: u8,
    /// Rank of the overall score.
    pub rank: Rank,
}

impl Assessment {
    /// Derive overall score and rank from axis scores.
    #[must_use]
    pub fn from_scores(scores: LiteracyScores) -> Self {
        let overall_score = overall_score(&scores);
        Self {
            scores,
            overall_score,
            rank: rank_from_score(overall_score),
        }
    }
}

/// Run the full pipeline on one response.
#[must_use]
pub fn assess(response: &SurveyResponse, definition: &RankDefinition) -> Assessment {
    Assessment::from_scores(score_response(response, definition))
}

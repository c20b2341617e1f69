//! Aggregation and temporal analytics over response sets.
//!
//! - [`cohort`]: scope grouping with explicit [`DedupMode`]
//! - [`attributes`]: department / position cohorts and filters
//! - [`window`]: date windows and `YYYY-MM` month buckets
//! - [`distribution`]: rank distribution and rank summary
//! - [`rank_change`]: NEW / UP / MAINTAIN / DOWN classification
//! - [`growth`]: growth rates, respondent history, monthly trend
//! - [`narrative`]: structured context for narrative generation
//!
//! Inputs are borrowed response sets; nothing here performs I/O or keeps state.

pub mod attributes;
pub mod cohort;
pub mod distribution;
pub mod growth;
pub mod narrative;
pub mod rank_change;
pub mod window;

pub use attributes::{
    attribute_value, filter_by_attributes, AttributeFilter, AttributeKind, AttributeQuestions,
    ByAttribute,
};
pub use cohort::{
    aggregate, latest_per_respondent, ByMonth, ByOrganization, CohortAggregate, DedupMode,
    ScopeExtractor,
};
pub use distribution::{response_rate, RankDistribution, RankSummary};
pub use growth::{
    cohort_growth_rate, growth_rate, monthly_trend, respondent_growth, respondent_history,
    MonthlyTrendPoint, RespondentGrowth, ScorePoint,
};
pub use narrative::{insight_context, Insight, InsightContext, ResponseAggregation, SampleSettings};
pub use rank_change::{rank_change_stats, rank_changes, ChangeType, RankChangeRecord, RankChangeStats};
pub use window::{month_key, parse_month, DateWindow};

use crate::scoring::{assess, Assessment};
use crate::survey::SurveyResponse;
use crate::taxonomy::RankDefinition;

/// A response paired with its assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResponse<'a> {
    /// The response.
    pub response: &'a SurveyResponse,
    /// Its scores, overall score and rank.
    pub assessment: Assessment,
}

impl<'a> ScoredResponse<'a> {
    /// Score a response.
    #[must_use]
    pub fn new(response: &'a SurveyResponse, definition: &RankDefinition) -> Self {
        Self {
            response,
            assessment: assess(response, definition),
        }
    }
}

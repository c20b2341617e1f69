//! Structured context for narrative generation.
//!
//! The text-generation collaborator receives an [`Insight`]: either an
//! [`InsightContext`] built from aggregated answers, or an explicit
//! insufficient-data value when too few responses exist.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cohort::count_u32;
use super::distribution::RankDistribution;
use super::ScoredResponse;
use crate::config::Config;
use crate::scoring::questions::{
    Choice, ScoredChoice, FEEDBACK_QUESTION, FREQUENCY_CHOICES, FREQUENCY_QUESTION, NEEDS_QUESTION,
    NEED_CHOICES, PAID_TOOLS_QUESTION, PAID_TOOL_CHOICES, TIME_SAVED_CHOICES, TIME_SAVED_QUESTION,
    TOOLS_QUESTION, TOOL_CHOICES, USAGE_DETAIL_QUESTION, USE_CASES_QUESTION, USE_CASE_CHOICES,
};
use crate::scoring::{extract_value, rank_label, LiteracyScores, Rank};
use crate::survey::{QuestionType, SurveyResponse};
use crate::taxonomy::RankDefinition;

/// How free-text samples are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSettings {
    /// Samples kept per category.
    pub limit: usize,
    /// Characters kept per sample.
    pub max_chars: usize,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            limit: crate::config::DEFAULT_TEXT_SAMPLE_LIMIT,
            max_chars: crate::config::DEFAULT_TEXT_SAMPLE_MAX_CHARS,
        }
    }
}

impl From<&Config> for SampleSettings {
    fn from(config: &Config) -> Self {
        Self {
            limit: config.text_sample_limit,
            max_chars: config.text_sample_max_chars,
        }
    }
}

/// Answer counts and samples across a response set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAggregation {
    /// Responses aggregated.
    pub total_respondents: u32,
    /// Usage frequency token counts.
    pub usage_frequency: BTreeMap<String, u32>,
    /// Tool token counts.
    pub tool_usage: BTreeMap<String, u32>,
    /// Paid tool token counts.
    pub paid_tool_status: BTreeMap<String, u32>,
    /// Use case token counts.
    pub use_cases: BTreeMap<String, u32>,
    /// Time saved token counts.
    pub time_reduction: BTreeMap<String, u32>,
    /// Requested support token counts.
    pub needs: BTreeMap<String, u32>,
    /// Self-assessed tiers.
    pub rank_distribution: RankDistribution,
    /// Free-text usage samples.
    pub free_text_samples: Vec<String>,
    /// Feedback samples.
    pub feedback_samples: Vec<String>,
}

fn zeroed(tokens: impl IntoIterator<Item = &'static str>) -> BTreeMap<String, u32> {
    tokens.into_iter().map(|t| (t.to_string(), 0)).collect()
}

fn scored_tokens(table: &'static [ScoredChoice]) -> impl Iterator<Item = &'static str> {
    table.iter().map(|c| c.token)
}

fn choice_tokens(vocabulary: &'static [Choice]) -> impl Iterator<Item = &'static str> {
    vocabulary.iter().map(|c| c.token)
}

/// Count the recognized tokens of one question; unknown tokens are ignored.
fn tally(counts: &mut BTreeMap<String, u32>, response: &SurveyResponse, question_id: &str) {
    for token in extract_value(response, question_id).tokens() {
        if let Some(count) = counts.get_mut(token) {
            *count += 1;
        }
    }
}

fn sample(
    samples: &mut Vec<String>,
    response: &SurveyResponse,
    question_id: &str,
    settings: SampleSettings,
) {
    if samples.len() >= settings.limit {
        return;
    }
    if let Some(text) = extract_value(response, question_id).as_text() {
        samples.push(text.chars().take(settings.max_chars).collect());
    }
}

impl ResponseAggregation {
    /// Aggregate the answers of a response set.
    #[must_use]
    pub fn from_responses<'a>(
        responses: impl IntoIterator<Item = &'a SurveyResponse>,
        definition: &RankDefinition,
        settings: SampleSettings,
    ) -> Self {
        let mut agg = Self {
            total_respondents: 0,
            usage_frequency: zeroed(scored_tokens(&FREQUENCY_CHOICES)),
            tool_usage: zeroed(choice_tokens(&TOOL_CHOICES)),
            paid_tool_status: zeroed(scored_tokens(&PAID_TOOL_CHOICES)),
            use_cases: zeroed(choice_tokens(&USE_CASE_CHOICES)),
            time_reduction: zeroed(scored_tokens(&TIME_SAVED_CHOICES)),
            needs: zeroed(choice_tokens(&NEED_CHOICES)),
            rank_distribution: RankDistribution::default(),
            free_text_samples: Vec::new(),
            feedback_samples: Vec::new(),
        };

        let mut total = 0usize;
        for response in responses {
            total += 1;
            tally(&mut agg.usage_frequency, response, FREQUENCY_QUESTION);
            tally(&mut agg.tool_usage, response, TOOLS_QUESTION);
            tally(&mut agg.paid_tool_status, response, PAID_TOOLS_QUESTION);
            tally(&mut agg.use_cases, response, USE_CASES_QUESTION);
            tally(&mut agg.time_reduction, response, TIME_SAVED_QUESTION);
            tally(&mut agg.needs, response, NEEDS_QUESTION);

            let self_rank = response
                .first_answer_of_type(QuestionType::Rank)
                .and_then(|answer| {
                    let value = extract_value(response, &answer.question_id);
                    value.as_token().and_then(|tier| definition.rank_of_tier(tier))
                });
            if let Some(rank) = self_rank {
                agg.rank_distribution.add(rank);
            }

            sample(&mut agg.free_text_samples, response, USAGE_DETAIL_QUESTION, settings);
            sample(&mut agg.feedback_samples, response, FEEDBACK_QUESTION, settings);
        }
        agg.total_respondents = count_u32(total);
        agg
    }
}

/// Structured input for narrative generation about one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightContext {
    /// Organization or cohort name.
    pub subject: String,
    /// Mean axis scores.
    pub scores: LiteracyScores,
    /// Overall score of the mean axes.
    pub overall_score: u8,
    /// Rank of the overall score.
    pub rank: Rank,
    /// Taxonomy label of that rank.
    pub rank_label: String,
    /// Answer counts and samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<ResponseAggregation>,
}

/// Narrative context, or why there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Insight {
    /// Enough responses.
    Ready(InsightContext),
    /// Fewer responses than required.
    #[serde(rename_all = "camelCase")]
    InsufficientData {
        /// Responses available.
        current: u32,
        /// Responses required.
        required: u32,
    },
}

impl Insight {
    /// The context, if ready.
    #[must_use]
    pub const fn context(&self) -> Option<&InsightContext> {
        match self {
            Self::Ready(context) => Some(context),
            Self::InsufficientData { .. } => None,
        }
    }
}

/// Build narrative context over every response of a subject.
///
/// Gated on the raw response count reaching `min_required`.
#[must_use]
pub fn insight_context(
    subject: &str,
    responses: &[&SurveyResponse],
    definition: &RankDefinition,
    settings: SampleSettings,
    min_required: u32,
) -> Insight {
    let current = count_u32(responses.len());
    if current < min_required || responses.is_empty() {
        tracing::debug!(
            subject,
            current,
            required = min_required,
            "Not enough responses for insight"
        );
        return Insight::InsufficientData {
            current,
            required: min_required,
        };
    }

    let assessments: Vec<_> = responses
        .iter()
        .map(|r| ScoredResponse::new(r, definition).assessment)
        .collect();
    let scores = LiteracyScores::mean(assessments.iter().map(|a| &a.scores)).unwrap_or_default();
    let overall_score = crate::scoring::overall_score(&scores);

    Insight::Ready(InsightContext {
        subject: subject.to_string(),
        scores,
        overall_score,
        rank: crate::scoring::rank_from_score(overall_score),
        rank_label: rank_label(overall_score, definition),
        aggregation: Some(ResponseAggregation::from_responses(
            responses.iter().copied(),
            definition,
            settings,
        )),
    })
}

//! Growth rates and score trends.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cohort::{aggregate, count_u32, oldest_first, ByMonth, DedupMode};
use super::window::DateWindow;
use super::ScoredResponse;
use crate::scoring::{round_one_decimal, LiteracyScores, Rank};
use crate::survey::SurveyResponse;
use crate::taxonomy::RankDefinition;

/// Percentage change from the first to the last score, one decimal.
///
/// `None` with fewer than two scores or a first score of 0; that means
/// "not enough data", never "no growth".
#[must_use]
pub fn growth_rate(ordered_scores: &[u8]) -> Option<f64> {
    let (&first, &last) = (ordered_scores.first()?, ordered_scores.last()?);
    if ordered_scores.len() < 2 || first == 0 {
        return None;
    }
    let first = f64::from(first);
    Some(round_one_decimal((f64::from(last) - first) / first * 100.0))
}

/// One scored response of a respondent's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    /// Submission time.
    pub date: DateTime<Utc>,
    /// Axis scores.
    pub scores: LiteracyScores,
    /// Overall score.
    pub overall_score: u8,
    /// Rank of the overall score.
    pub rank: Rank,
}

impl From<&ScoredResponse<'_>> for ScorePoint {
    fn from(scored: &ScoredResponse<'_>) -> Self {
        Self {
            date: scored.response.submitted_at,
            scores: scored.assessment.scores,
            overall_score: scored.assessment.overall_score,
            rank: scored.assessment.rank,
        }
    }
}

/// A respondent's scored responses within a window, oldest first.
#[must_use]
pub fn respondent_history<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    respondent_name: &str,
    window: &DateWindow,
    definition: &RankDefinition,
) -> Vec<ScorePoint> {
    let mut points: Vec<ScorePoint> = responses
        .into_iter()
        .filter(|r| r.respondent_name == respondent_name && window.contains(r.submitted_at))
        .map(|r| ScorePoint::from(&ScoredResponse::new(r, definition)))
        .collect();
    oldest_first(&mut points, |p| p.date);
    points
}

/// First-to-last score change of one respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondentGrowth {
    /// Respondent identity key.
    pub respondent_name: String,
    /// Overall score of the earliest response in the window.
    pub first_score: u8,
    /// Overall score of the latest response in the window.
    pub last_score: u8,
    /// Growth rate; `None` when it cannot be computed.
    pub growth_rate: Option<f64>,
    /// Responses in the window.
    pub response_count: u32,
}

/// Growth of every respondent with a response in the window.
///
/// Sorted by growth rate descending with absent rates last, then by name.
#[must_use]
pub fn respondent_growth<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    window: &DateWindow,
    definition: &RankDefinition,
) -> Vec<RespondentGrowth> {
    let mut by_respondent: BTreeMap<&'a str, Vec<(DateTime<Utc>, u8)>> = BTreeMap::new();
    for response in responses {
        if window.contains(response.submitted_at) {
            let scored = ScoredResponse::new(response, definition);
            by_respondent
                .entry(response.respondent_name.as_str())
                .or_default()
                .push((response.submitted_at, scored.assessment.overall_score));
        }
    }

    let mut rows: Vec<RespondentGrowth> = by_respondent
        .into_iter()
        .filter_map(|(name, mut points)| {
            oldest_first(&mut points, |(date, _)| *date);
            let scores: Vec<u8> = points.into_iter().map(|(_, score)| score).collect();
            Some(RespondentGrowth {
                respondent_name: name.to_string(),
                first_score: *scores.first()?,
                last_score: *scores.last()?,
                growth_rate: growth_rate(&scores),
                response_count: count_u32(scores.len()),
            })
        })
        .collect();

    rows.sort_by(|a, b| match (a.growth_rate, b.growth_rate) {
        (Some(x), Some(y)) => y
            .total_cmp(&x)
            .then_with(|| a.respondent_name.cmp(&b.respondent_name)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.respondent_name.cmp(&b.respondent_name),
    });
    rows
}

/// One month of the organization trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// `YYYY-MM` bucket.
    pub month: String,
    /// Overall score of the month's mean axes.
    pub overall_score: u8,
    /// Mean rank of the month's responses, one decimal.
    pub average_rank: f64,
    /// Responses in the month.
    pub response_count: u32,
}

/// Month-by-month scores over every response in the window, oldest first.
#[must_use]
pub fn monthly_trend<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    window: &DateWindow,
    definition: &RankDefinition,
) -> Vec<MonthlyTrendPoint> {
    let in_window = responses
        .into_iter()
        .filter(|r| window.contains(r.submitted_at));
    aggregate(in_window, &ByMonth, definition, DedupMode::AllResponses)
        .into_values()
        .map(|cohort| MonthlyTrendPoint {
            month: cohort.scope_key,
            overall_score: cohort.overall_score,
            average_rank: cohort.average_rank,
            response_count: cohort.response_count,
        })
        .collect()
}

/// Growth of a cohort across its monthly trend.
#[must_use]
pub fn cohort_growth_rate(trend: &[MonthlyTrendPoint]) -> Option<f64> {
    let scores: Vec<u8> = trend.iter().map(|p| p.overall_score).collect();
    growth_rate(&scores)
}

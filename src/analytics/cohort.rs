//! Cohort aggregation.
//!
//! [`aggregate`] groups responses by a caller-supplied scope key and averages
//! their scores. Whether each respondent counts once (latest response) or
//! every response counts is an explicit [`DedupMode`]; both modes share the
//! same aggregation core.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::distribution::RankDistribution;
use super::window::month_key;
use super::ScoredResponse;
use crate::scoring::{overall_score, rank_from_score, LiteracyScores, Rank};
use crate::survey::SurveyResponse;
use crate::taxonomy::RankDefinition;

/// Which responses an aggregation counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DedupMode {
    /// Only the most recent response of each respondent.
    LatestPerRespondent,
    /// Every response.
    AllResponses,
}

/// Maps a response to the scope it belongs to.
///
/// Returning `None` leaves the response out of every group.
pub trait ScopeExtractor {
    /// Scope key of a response.
    fn scope_key(&self, response: &SurveyResponse) -> Option<String>;
}

impl<F> ScopeExtractor for F
where
    F: Fn(&SurveyResponse) -> Option<String>,
{
    fn scope_key(&self, response: &SurveyResponse) -> Option<String> {
        self(response)
    }
}

/// Scope by organization id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByOrganization;

impl ScopeExtractor for ByOrganization {
    fn scope_key(&self, response: &SurveyResponse) -> Option<String> {
        Some(response.org_id.clone())
    }
}

/// Scope by `YYYY-MM` submission month (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct ByMonth;

impl ScopeExtractor for ByMonth {
    fn scope_key(&self, response: &SurveyResponse) -> Option<String> {
        Some(month_key(response.submitted_at))
    }
}

/// Mean scores of one scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortAggregate {
    /// Scope key (org id, attribute label or month).
    pub scope_key: String,
    /// Per-axis mean.
    pub scores: LiteracyScores,
    /// Overall score of the mean axes.
    pub overall_score: u8,
    /// Rank of `overall_score`.
    pub rank: Rank,
    /// Distinct respondents.
    pub member_count: u32,
    /// Counted responses.
    pub response_count: u32,
    /// Mean of the per-response ranks, one decimal.
    pub average_rank: f64,
    /// Per-response rank counts.
    pub rank_distribution: RankDistribution,
}

impl CohortAggregate {
    /// Aggregate a non-empty group; `None` for an empty one.
    fn from_group(scope_key: String, group: &[ScoredResponse<'_>]) -> Option<Self> {
        let scores = LiteracyScores::mean(group.iter().map(|s| &s.assessment.scores))?;
        let overall = overall_score(&scores);
        let rank_distribution =
            RankDistribution::from_ranks(group.iter().map(|s| s.assessment.rank));
        let members: BTreeSet<&str> = group
            .iter()
            .map(|s| s.response.respondent_name.as_str())
            .collect();
        Some(Self {
            scope_key,
            scores,
            overall_score: overall,
            rank: rank_from_score(overall),
            member_count: count_u32(members.len()),
            response_count: count_u32(group.len()),
            average_rank: rank_distribution.average_rank()?,
            rank_distribution,
        })
    }
}

pub(crate) fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Order one respondent's items oldest first.
///
/// Among equal timestamps the item seen first ends up last, so the newest
/// item agrees with [`latest_per_respondent`].
pub(crate) fn oldest_first<T>(items: &mut [T], submitted_at: impl Fn(&T) -> DateTime<Utc>) {
    items.reverse();
    items.sort_by_key(|item| submitted_at(item));
}

/// The most recent response of each respondent, ordered by respondent name.
///
/// On equal timestamps the response seen first wins.
#[must_use]
pub fn latest_per_respondent<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
) -> Vec<&'a SurveyResponse> {
    let mut latest: BTreeMap<&'a str, &'a SurveyResponse> = BTreeMap::new();
    for response in responses {
        match latest.entry(response.respondent_name.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(response);
            }
            Entry::Occupied(mut slot) => {
                if response.submitted_at > slot.get().submitted_at {
                    slot.insert(response);
                }
            }
        }
    }
    latest.into_values().collect()
}

/// Apply a [`DedupMode`] to a response set.
#[must_use]
pub fn select<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    mode: DedupMode,
) -> Vec<&'a SurveyResponse> {
    match mode {
        DedupMode::LatestPerRespondent => latest_per_respondent(responses),
        DedupMode::AllResponses => responses.into_iter().collect(),
    }
}

/// Group responses by scope and compute each group's mean scores.
///
/// Responses are de-duplicated per `mode` before grouping. Groups are keyed
/// and ordered by scope key; empty groups never appear.
#[must_use]
pub fn aggregate<'a, E>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    extractor: &E,
    definition: &RankDefinition,
    mode: DedupMode,
) -> BTreeMap<String, CohortAggregate>
where
    E: ScopeExtractor + ?Sized,
{
    let mut groups: BTreeMap<String, Vec<ScoredResponse<'a>>> = BTreeMap::new();
    for response in select(responses, mode) {
        if let Some(key) = extractor.scope_key(response) {
            groups
                .entry(key)
                .or_default()
                .push(ScoredResponse::new(response, definition));
        }
    }

    tracing::debug!(groups = groups.len(), ?mode, "Aggregated cohorts");

    groups
        .into_iter()
        .filter_map(|(key, group)| {
            CohortAggregate::from_group(key.clone(), &group).map(|aggregate| (key, aggregate))
        })
        .collect()
}

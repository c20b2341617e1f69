//! Temporal rank tracking.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cohort::oldest_first;
use super::ScoredResponse;
use crate::scoring::Rank;
use crate::survey::SurveyResponse;
use crate::taxonomy::RankDefinition;

/// Movement between a respondent's two most recent responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    /// Only one response.
    New,
    /// Higher rank than before.
    Up,
    /// Same rank as before.
    Maintain,
    /// Lower rank than before.
    Down,
}

impl ChangeType {
    /// Classify a transition.
    #[must_use]
    pub fn classify(current: Rank, previous: Option<Rank>) -> Self {
        match previous {
            None => Self::New,
            Some(previous) if current > previous => Self::Up,
            Some(previous) if current < previous => Self::Down,
            Some(_) => Self::Maintain,
        }
    }
}

/// Rank transition of one respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChangeRecord {
    /// Respondent identity key.
    pub respondent_name: String,
    /// Rank of the latest response.
    pub current_rank: Rank,
    /// Rank of the response before it.
    pub previous_rank: Option<Rank>,
    /// Classification of the transition.
    pub change_type: ChangeType,
    /// Submission time of the latest response.
    pub date: DateTime<Utc>,
}

/// Counts of UP, MAINTAIN and DOWN records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankChangeStats {
    /// Moved up.
    pub up: u32,
    /// Stayed.
    pub maintain: u32,
    /// Moved down.
    pub down: u32,
}

/// One record per distinct respondent, newest first.
///
/// Records are ordered by `date` descending, then respondent name.
#[must_use]
pub fn rank_changes<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    definition: &RankDefinition,
) -> Vec<RankChangeRecord> {
    let mut by_respondent: BTreeMap<&'a str, Vec<&'a SurveyResponse>> = BTreeMap::new();
    for response in responses {
        by_respondent
            .entry(response.respondent_name.as_str())
            .or_default()
            .push(response);
    }

    let mut records: Vec<RankChangeRecord> = by_respondent
        .into_iter()
        .filter_map(|(name, mut history)| {
            oldest_first(&mut history, |r| r.submitted_at);
            let (&current, earlier) = history.split_last()?;
            let current = ScoredResponse::new(current, definition);
            let previous = earlier
                .last()
                .map(|r| ScoredResponse::new(r, definition).assessment.rank);
            let current_rank = current.assessment.rank;
            Some(RankChangeRecord {
                respondent_name: name.to_string(),
                current_rank,
                previous_rank: previous,
                change_type: ChangeType::classify(current_rank, previous),
                date: current.response.submitted_at,
            })
        })
        .collect();

    records.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.respondent_name.cmp(&b.respondent_name))
    });
    records
}

/// Count UP, MAINTAIN and DOWN records; NEW records are not counted.
#[must_use]
pub fn rank_change_stats(records: &[RankChangeRecord]) -> RankChangeStats {
    records
        .iter()
        .fold(RankChangeStats::default(), |mut stats, record| {
            match record.change_type {
                ChangeType::Up => stats.up += 1,
                ChangeType::Maintain => stats.maintain += 1,
                ChangeType::Down => stats.down += 1,
                ChangeType::New => {}
            }
            stats
        })
}

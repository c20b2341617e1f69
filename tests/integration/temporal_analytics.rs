//! Temporal analytics workflow integration tests.
//!
//! Tests the multi-month flow: responses over several months →
//! cohorts and monthly buckets → rank changes → growth rates.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use literacy_metrics::analytics::{
    aggregate, cohort_growth_rate, monthly_trend, rank_change_stats, rank_changes,
    respondent_growth, respondent_history, AttributeKind, AttributeQuestions, ByOrganization,
    ChangeType, DateWindow, DedupMode, RankChangeStats,
};
use literacy_metrics::scoring::Rank;
use literacy_metrics::survey::SurveyResponse;
use literacy_metrics::taxonomy::RankDefinition;
use pretty_assertions::assert_eq;

use super::fixtures::{at, beginner, in_team, practitioner, survey, ORG};

fn definition() -> RankDefinition {
    RankDefinition::system_default(ORG)
}

fn rank(n: u8) -> Rank {
    Rank::new(n).unwrap()
}

/// Aiko improves, Ben holds, Chiara slips, Dev answers once.
fn quarter() -> Vec<SurveyResponse> {
    vec![
        beginner("Aiko", at(2024, 1, 10)),
        practitioner("Ben", at(2024, 1, 12)),
        practitioner("Chiara", at(2024, 1, 15)),
        practitioner("Aiko", at(2024, 2, 10)),
        practitioner("Ben", at(2024, 2, 12)),
        beginner("Chiara", at(2024, 3, 15)),
        beginner("Dev", at(2024, 3, 20)),
    ]
}

// ============================================================================
// Rank Changes
// ============================================================================

#[test]
fn test_improving_respondent_moves_up() {
    let responses = vec![
        beginner("A", at(2024, 1, 10)),
        practitioner("A", at(2024, 2, 10)),
    ];
    let records = rank_changes(&responses, &definition());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].previous_rank, Some(rank(2)));
    assert_eq!(records[0].current_rank, rank(4));
    assert_eq!(records[0].change_type, ChangeType::Up);

    let growth = respondent_growth(&responses, &DateWindow::all(), &definition());
    assert_eq!(growth[0].growth_rate, Some(77.1));
}

#[test]
fn test_quarter_change_stats() {
    let records = rank_changes(&quarter(), &definition());

    let by_name = |name: &str| {
        records
            .iter()
            .find(|r| r.respondent_name == name)
            .unwrap()
            .change_type
    };
    assert_eq!(by_name("Aiko"), ChangeType::Up);
    assert_eq!(by_name("Ben"), ChangeType::Maintain);
    assert_eq!(by_name("Chiara"), ChangeType::Down);
    assert_eq!(by_name("Dev"), ChangeType::New);

    assert_eq!(
        rank_change_stats(&records),
        RankChangeStats {
            up: 1,
            maintain: 1,
            down: 1
        }
    );

    let dates: Vec<_> = records.iter().map(|r| r.date).collect();
    let mut newest_first = dates.clone();
    newest_first.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, newest_first);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut shuffled = quarter();
    shuffled.reverse();
    assert_eq!(
        rank_changes(&shuffled, &definition()),
        rank_changes(&quarter(), &definition())
    );
}

// ============================================================================
// Cohorts
// ============================================================================

#[test]
fn test_dedup_counts_members_raw_counts_responses() {
    let responses = vec![
        beginner("A", at(2024, 1, 10)),
        practitioner("A", at(2024, 2, 10)),
        beginner("B", at(2024, 1, 20)),
    ];

    let dedup = aggregate(
        &responses,
        &ByOrganization,
        &definition(),
        DedupMode::LatestPerRespondent,
    );
    let raw = aggregate(
        &responses,
        &ByOrganization,
        &definition(),
        DedupMode::AllResponses,
    );

    assert_eq!(dedup[ORG].member_count, 2);
    assert_eq!(dedup[ORG].response_count, 2);
    assert_eq!(raw[ORG].member_count, 2);
    assert_eq!(raw[ORG].response_count, 3);
}

#[test]
fn test_department_cohorts_use_option_labels() {
    let responses = vec![
        in_team(beginner("Aiko", at(2024, 1, 10)), "sales", "staff"),
        in_team(practitioner("Aiko", at(2024, 2, 10)), "sales", "staff"),
        in_team(practitioner("Ben", at(2024, 1, 12)), "eng", "manager"),
        beginner("Dev", at(2024, 3, 20)),
    ];
    let surveys = [survey()];
    let questions = AttributeQuestions::detect(&surveys);

    let departments = aggregate(
        &responses,
        &questions.extractor(AttributeKind::Department),
        &definition(),
        DedupMode::LatestPerRespondent,
    );

    let keys: Vec<_> = departments.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Engineering", "Sales"]);
    assert_eq!(departments["Sales"].overall_score, 62);
    assert_eq!(departments["Sales"].response_count, 1);
}

// ============================================================================
// Monthly Trend and Growth
// ============================================================================

#[test]
fn test_monthly_trend_buckets() {
    let trend = monthly_trend(&quarter(), &DateWindow::all(), &definition());

    let months: Vec<_> = trend.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, ["2024-01", "2024-02", "2024-03"]);
    assert_eq!(trend[0].response_count, 3);
    assert_eq!(trend[0].overall_score, 53);
    assert_eq!(trend[1].overall_score, 62);
    assert_eq!(trend[2].overall_score, 35);
    assert_eq!(cohort_growth_rate(&trend), Some(-34.0));
}

#[test]
fn test_window_limits_trend_and_history() {
    let window = DateWindow::from_months(Some("2024-02"), Some("2024-03")).unwrap();

    let trend = monthly_trend(&quarter(), &window, &definition());
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].month, "2024-02");

    let history = respondent_history(&quarter(), "Aiko", &window, &definition());
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].overall_score, 62);
}

#[test]
fn test_growth_ordering() {
    let growth = respondent_growth(&quarter(), &DateWindow::all(), &definition());

    let order: Vec<_> = growth
        .iter()
        .map(|g| (g.respondent_name.as_str(), g.growth_rate))
        .collect();
    assert_eq!(
        order,
        [
            ("Aiko", Some(77.1)),
            ("Ben", Some(0.0)),
            ("Chiara", Some(-43.5)),
            ("Dev", None),
        ]
    );
}

//! Scoring pipeline integration tests.
//!
//! Drives survey exports through normalization, axis scoring, the overall
//! score and rank classification using the public API only.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use literacy_metrics::scoring::{assess, rank_label, Axis, LiteracyScores, Rank};
use literacy_metrics::survey::SurveyResponse;
use literacy_metrics::taxonomy::RankDefinition;
use pretty_assertions::assert_eq;

use super::fixtures::{at, beginner, practitioner, ORG};

// ============================================================================
// Fixture Responses
// ============================================================================

#[test]
fn test_beginner_axes() {
    let assessment = assess(
        &beginner("Aiko", at(2024, 1, 10)),
        &RankDefinition::system_default(ORG),
    );

    assert_eq!(assessment.scores.get(Axis::Basics), 40.0);
    assert_eq!(assessment.scores.get(Axis::Prompting), 28.0);
    assert_eq!(assessment.scores.get(Axis::Ethics), 40.0);
    assert_eq!(assessment.scores.get(Axis::Tools), 30.0);
    assert_eq!(assessment.scores.get(Axis::Automation), 38.0);
    assert_eq!(assessment.overall_score, 35);
    assert_eq!(assessment.rank, Rank::new(2).unwrap());
}

#[test]
fn test_practitioner_axes() {
    let assessment = assess(
        &practitioner("Aiko", at(2024, 2, 10)),
        &RankDefinition::system_default(ORG),
    );

    assert_eq!(
        assessment.scores,
        LiteracyScores::from_axes([60.0, 58.0, 60.0, 70.0, 62.0])
    );
    assert_eq!(assessment.overall_score, 62);
    assert_eq!(assessment.rank, Rank::new(4).unwrap());
}

// ============================================================================
// Wire Format
// ============================================================================

#[test]
fn test_exported_json_scores_like_builder() {
    let json = r#"{
        "id": "r-1",
        "surveyId": "literacy-2024",
        "orgId": "acme",
        "respondentName": "Aiko",
        "submittedAt": "2024-02-10T12:00:00Z",
        "answers": [
            { "questionId": "q8", "type": "rank", "value": "rank3" },
            { "questionId": "q1", "type": "radio", "value": "weekly" },
            { "questionId": "q6", "type": "radio", "value": "5_to_10" },
            { "questionId": "q2", "type": "checkbox", "value": ["chatgpt", "claude"] },
            { "questionId": "q3", "type": "radio", "value": "personal" },
            { "questionId": "q4", "type": "checkbox", "value": ["document", "research"] },
            { "questionId": "q5", "type": "textarea", "value": "Drafting customer emails" }
        ]
    }"#;
    let parsed: SurveyResponse = serde_json::from_str(json).unwrap();
    let definition = RankDefinition::system_default(ORG);

    assert_eq!(
        assess(&parsed, &definition),
        assess(&practitioner("Aiko", at(2024, 2, 10)), &definition)
    );
}

#[test]
fn test_unknown_and_blank_answers_score_zero() {
    let json = r#"{
        "id": "r-2",
        "surveyId": "literacy-2024",
        "orgId": "acme",
        "submittedAt": "2024-02-10T12:00:00Z",
        "answers": [
            { "questionId": "q1", "type": "radio", "value": "hourly" },
            { "questionId": "q2", "type": "checkbox", "value": [] },
            { "questionId": "q4", "type": "checkbox", "value": ["not_a_use_case"] },
            { "questionId": "q5", "type": "textarea", "value": "   " }
        ]
    }"#;
    let parsed: SurveyResponse = serde_json::from_str(json).unwrap();
    let assessment = assess(&parsed, &RankDefinition::system_default(ORG));

    assert_eq!(assessment.scores, LiteracyScores::default());
    assert_eq!(assessment.overall_score, 0);
    assert_eq!(assessment.rank, Rank::LOWEST);
}

// ============================================================================
// Rank Labels
// ============================================================================

#[test]
fn test_rank_label_uses_tenant_names() {
    let mut definition = RankDefinition::system_default(ORG);
    definition.ranks[3].name = "Navigator".to_string();

    let overall = assess(&practitioner("Aiko", at(2024, 2, 10)), &definition).overall_score;
    assert_eq!(rank_label(overall, &definition), "Navigator");
    assert_eq!(rank_label(overall, &RankDefinition::system_default(ORG)), "Advance");
}

#[test]
fn test_score_and_label_agree_at_every_boundary() {
    let definition = RankDefinition::system_default(ORG);
    let boundaries = [
        (0, "Beginner"),
        (19, "Beginner"),
        (20, "Basic"),
        (40, "Practice"),
        (60, "Advance"),
        (80, "Expert"),
        (100, "Expert"),
    ];
    for (score, expected) in boundaries {
        assert_eq!(rank_label(score, &definition), expected, "score {score}");
    }
}

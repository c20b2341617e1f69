//! Test utilities and fixture factories.
//!
//! This module provides shared testing infrastructure:
//! - Response fixtures with known overall scores
//! - Survey fixtures with attribute questions
//! - Mock store factories
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};

use crate::error::StorageError;
use crate::scoring::questions::default_survey;
use crate::survey::{Answer, Question, QuestionType, Survey, SurveyResponse};
use crate::taxonomy::RankDefinition;
use crate::traits::MockRankDefinitionStore;

/// Organization used by fixtures.
pub const TEST_ORG: &str = "org-1";

/// Survey used by fixtures.
pub const TEST_SURVEY: &str = "survey-1";

/// Midday UTC on a calendar date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// A response in [`TEST_ORG`] with the given answers.
pub fn response_for(
    name: &str,
    submitted_at: DateTime<Utc>,
    answers: Vec<Answer>,
) -> SurveyResponse {
    answers.into_iter().fold(
        SurveyResponse::new(
            format!("{name}-{}", submitted_at.timestamp()),
            TEST_SURVEY,
            TEST_ORG,
            name,
            submitted_at,
        ),
        SurveyResponse::with_answer,
    )
}

/// A response scoring overall 35 (rank 2).
pub fn low_response(name: &str, submitted_at: DateTime<Utc>) -> SurveyResponse {
    response_for(
        name,
        submitted_at,
        vec![
            Answer::rank("q8", "rank2"),
            Answer::radio("q1", "monthly"),
            Answer::radio("q6", "less_than_5"),
            Answer::checkbox("q2", ["chatgpt"]),
            Answer::checkbox("q4", ["document", "research"]),
        ],
    )
}

/// A response scoring overall 62 (rank 4).
pub fn high_response(name: &str, submitted_at: DateTime<Utc>) -> SurveyResponse {
    response_for(
        name,
        submitted_at,
        vec![
            Answer::rank("q8", "rank3"),
            Answer::radio("q1", "weekly"),
            Answer::radio("q6", "5_to_10"),
            Answer::checkbox("q2", ["chatgpt", "claude"]),
            Answer::radio("q3", "personal"),
            Answer::checkbox("q4", ["document", "research"]),
            Answer::textarea("q5", "Drafting customer emails"),
        ],
    )
}

/// A response scoring overall 0 (rank 1).
pub fn empty_response(name: &str, submitted_at: DateTime<Utc>) -> SurveyResponse {
    response_for(name, submitted_at, vec![])
}

/// Add department and position answers to a response.
pub fn with_attributes(
    response: SurveyResponse,
    department: &str,
    position: &str,
) -> SurveyResponse {
    response
        .with_answer(Answer::radio("dept", department))
        .with_answer(Answer::radio("role", position))
}

/// The default questionnaire plus department and position questions.
pub fn test_survey() -> Survey {
    let mut survey = default_survey(TEST_SURVEY, TEST_ORG);
    survey.questions.push(
        Question::new("dept", "Department", QuestionType::Radio)
            .with_option("sales", "Sales")
            .with_option("eng", "Engineering"),
    );
    survey.questions.push(
        Question::new("role", "Position", QuestionType::Radio)
            .with_option("staff", "Staff")
            .with_option("manager", "Manager"),
    );
    survey
}

/// A mock store that returns `definition` for every organization.
pub fn mock_store_with(definition: RankDefinition) -> MockRankDefinitionStore {
    let mut mock = MockRankDefinitionStore::new();
    mock.expect_load()
        .returning(move |_| Ok(Some(definition.clone())));
    mock.expect_store().returning(|_| Ok(()));
    mock
}

/// A mock store whose reads fail with `error`.
pub fn mock_store_error(error: StorageError) -> MockRankDefinitionStore {
    let mut mock = MockRankDefinitionStore::new();
    mock.expect_load().returning(move |_| Err(error.clone()));
    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::assess;
    use crate::traits::RankDefinitionStore;

    #[test]
    fn test_fixture_scores() {
        let definition = RankDefinition::system_default(TEST_ORG);
        assert_eq!(assess(&low_response("A", at(2024, 1, 1)), &definition).overall_score, 35);
        assert_eq!(assess(&high_response("A", at(2024, 2, 1)), &definition).overall_score, 62);
        assert_eq!(assess(&empty_response("A", at(2024, 3, 1)), &definition).overall_score, 0);
    }

    #[test]
    fn test_response_ids_are_unique_per_instant() {
        let a = low_response("A", at(2024, 1, 1));
        let b = low_response("A", at(2024, 1, 2));
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_mock_store_with() {
        let mock = mock_store_with(RankDefinition::system_default("custom"));
        let loaded = mock.load("org-9").await.unwrap().unwrap();
        assert_eq!(loaded.org_id, "custom");
    }

    #[tokio::test]
    async fn test_mock_store_error() {
        let mock = mock_store_error(StorageError::Internal {
            message: "boom".to_string(),
        });
        assert!(mock.load("org-1").await.is_err());
    }
}

//! Shared fixtures for workflow tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, TimeZone, Utc};
use literacy_metrics::scoring::questions::default_survey;
use literacy_metrics::survey::{Answer, Question, QuestionType, Survey, SurveyResponse};

pub const ORG: &str = "acme";
pub const SURVEY: &str = "literacy-2024";

/// Midday UTC on a calendar date.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn response(name: &str, submitted_at: DateTime<Utc>, answers: Vec<Answer>) -> SurveyResponse {
    answers.into_iter().fold(
        SurveyResponse::new(
            format!("{name}-{}", submitted_at.timestamp()),
            SURVEY,
            ORG,
            name,
            submitted_at,
        ),
        SurveyResponse::with_answer,
    )
}

/// Overall 35, rank 2.
pub fn beginner(name: &str, submitted_at: DateTime<Utc>) -> SurveyResponse {
    response(
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

/// Overall 62, rank 4.
pub fn practitioner(name: &str, submitted_at: DateTime<Utc>) -> SurveyResponse {
    response(
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

/// Department and position answers.
pub fn in_team(response: SurveyResponse, department: &str, position: &str) -> SurveyResponse {
    response
        .with_answer(Answer::radio("dept", department))
        .with_answer(Answer::radio("role", position))
}

/// Default questionnaire with department and position questions.
pub fn survey() -> Survey {
    let mut survey = default_survey(SURVEY, ORG);
    survey.questions.push(
        Question::new("dept", "Which department are you in?", QuestionType::Radio)
            .with_option("sales", "Sales")
            .with_option("eng", "Engineering"),
    );
    survey.questions.push(
        Question::new("role", "Job title", QuestionType::Radio)
            .with_option("staff", "Staff")
            .with_option("manager", "Manager"),
    );
    survey
}

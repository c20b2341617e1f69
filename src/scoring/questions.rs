//! The default questionnaire and its answer vocabularies.
//!
//! Token tables here are shared by the dimension scorer and the narrative
//! aggregation, so a token always means the same thing in both.

use crate::survey::{Question, QuestionType, Survey};
use crate::taxonomy::DEFAULT_TIERS;

/// How often the respondent uses generative AI (radio).
pub const FREQUENCY_QUESTION: &str = "q1";
/// Tools used (checkbox).
pub const TOOLS_QUESTION: &str = "q2";
/// Whether paid tools are used (radio).
pub const PAID_TOOLS_QUESTION: &str = "q3";
/// Work use cases (checkbox).
pub const USE_CASES_QUESTION: &str = "q4";
/// Free-text description of concrete usage (textarea).
pub const USAGE_DETAIL_QUESTION: &str = "q5";
/// Weekly time saved (radio).
pub const TIME_SAVED_QUESTION: &str = "q6";
/// Support the respondent would like (checkbox).
pub const NEEDS_QUESTION: &str = "q7";
/// Self-assessed proficiency tier (rank).
pub const SELF_RANK_QUESTION: &str = "q8";
/// Free-form feedback (textarea).
pub const FEEDBACK_QUESTION: &str = "q9";

/// An answer token with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Stored token.
    pub token: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// An answer token with the 0-100 score it contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredChoice {
    /// Stored token.
    pub token: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Contribution on a 0-100 scale.
    pub score: u8,
}

/// Usage frequency, most frequent first.
pub const FREQUENCY_CHOICES: [ScoredChoice; 5] = [
    ScoredChoice { token: "daily", label: "Almost every day", score: 100 },
    ScoredChoice { token: "weekly", label: "A few times a week", score: 75 },
    ScoredChoice { token: "monthly", label: "A few times a month", score: 50 },
    ScoredChoice { token: "used_before", label: "Tried it before", score: 25 },
    ScoredChoice { token: "never", label: "Never used", score: 0 },
];

/// Tools in use.
pub const TOOL_CHOICES: [Choice; 7] = [
    Choice { token: "chatgpt", label: "ChatGPT" },
    Choice { token: "claude", label: "Claude" },
    Choice { token: "gemini", label: "Gemini" },
    Choice { token: "internal", label: "In-house AI tool" },
    Choice { token: "image_gen", label: "Image generation AI" },
    Choice { token: "video_audio", label: "Video or audio generation AI" },
    Choice { token: "other", label: "Other" },
];

/// Paid tool usage.
pub const PAID_TOOL_CHOICES: [ScoredChoice; 3] = [
    ScoredChoice { token: "personal", label: "Paying personally", score: 100 },
    ScoredChoice { token: "company_subsidy", label: "Company subsidy", score: 100 },
    ScoredChoice { token: "free_only", label: "Free plans only", score: 50 },
];

/// Work use cases.
pub const USE_CASE_CHOICES: [Choice; 7] = [
    Choice { token: "document", label: "Writing and summarizing documents" },
    Choice { token: "brainstorming", label: "Brainstorming" },
    Choice { token: "research", label: "Research" },
    Choice { token: "coding", label: "Coding" },
    Choice { token: "media_gen", label: "Image or video generation" },
    Choice { token: "ad_copy", label: "Ad copy" },
    Choice { token: "other", label: "Other" },
];

/// Weekly time saved, largest first.
pub const TIME_SAVED_CHOICES: [ScoredChoice; 5] = [
    ScoredChoice { token: "more_than_20", label: "More than 20 hours", score: 100 },
    ScoredChoice { token: "10_to_20", label: "10 to 20 hours", score: 75 },
    ScoredChoice { token: "5_to_10", label: "5 to 10 hours", score: 50 },
    ScoredChoice { token: "less_than_5", label: "Less than 5 hours", score: 25 },
    ScoredChoice { token: "no_effect", label: "No noticeable effect", score: 0 },
];

/// Requested support.
pub const NEED_CHOICES: [Choice; 6] = [
    Choice { token: "use_cases", label: "Concrete use cases" },
    Choice { token: "training", label: "Training" },
    Choice { token: "tool_subsidy", label: "Tool subsidy" },
    Choice { token: "specialized_support", label: "Specialist support" },
    Choice { token: "security_rules", label: "Security rules" },
    Choice { token: "other", label: "Other" },
];

/// Score of `token` in a scored table.
#[must_use]
pub fn score_of(table: &[ScoredChoice], token: &str) -> Option<u8> {
    table.iter().find(|c| c.token == token).map(|c| c.score)
}

/// Whether `token` belongs to a vocabulary.
#[must_use]
pub fn is_known(vocabulary: &[Choice], token: &str) -> bool {
    vocabulary.iter().any(|c| c.token == token)
}

fn choice_question(id: &str, title: &str, kind: QuestionType, choices: &[Choice]) -> Question {
    choices
        .iter()
        .fold(Question::new(id, title, kind), |q, c| q.with_option(c.token, c.label))
}

fn scored_question(id: &str, title: &str, choices: &[ScoredChoice]) -> Question {
    choices.iter().fold(Question::new(id, title, QuestionType::Radio), |q, c| {
        q.with_option(c.token, c.label)
    })
}

/// The default questionnaire built from the vocabularies above.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    let mut self_rank = Question::new(
        SELF_RANK_QUESTION,
        "Which description best matches your current AI skills?",
        QuestionType::Rank,
    );
    self_rank.rank_descriptions = Some(
        DEFAULT_TIERS
            .iter()
            .map(|t| {
                (
                    t.id.to_string(),
                    t.descriptions.iter().map(|d| (*d).to_string()).collect(),
                )
            })
            .collect(),
    );
    let self_rank = DEFAULT_TIERS
        .iter()
        .fold(self_rank, |q, t| q.with_option(t.id, t.name));

    vec![
        scored_question(
            FREQUENCY_QUESTION,
            "How often do you use generative AI?",
            &FREQUENCY_CHOICES,
        ),
        choice_question(
            TOOLS_QUESTION,
            "Which AI tools do you use?",
            QuestionType::Checkbox,
            &TOOL_CHOICES,
        ),
        scored_question(
            PAID_TOOLS_QUESTION,
            "Do you use paid AI tools?",
            &PAID_TOOL_CHOICES,
        ),
        choice_question(
            USE_CASES_QUESTION,
            "What do you use AI for at work?",
            QuestionType::Checkbox,
            &USE_CASE_CHOICES,
        ),
        Question::new(
            USAGE_DETAIL_QUESTION,
            "Describe how you use AI in your work.",
            QuestionType::Textarea,
        ),
        scored_question(
            TIME_SAVED_QUESTION,
            "How much time does AI save you per week?",
            &TIME_SAVED_CHOICES,
        ),
        choice_question(
            NEEDS_QUESTION,
            "What support would help you use AI more?",
            QuestionType::Checkbox,
            &NEED_CHOICES,
        ),
        self_rank,
        Question::new(
            FEEDBACK_QUESTION,
            "Any other comments?",
            QuestionType::Textarea,
        ),
    ]
}

/// The default questionnaire as a survey owned by `org_id`.
#[must_use]
pub fn default_survey(id: impl Into<String>, org_id: impl Into<String>) -> Survey {
    Survey {
        id: id.into(),
        title: "AI literacy survey".to_string(),
        org_id: org_id.into(),
        questions: default_questions(),
        is_active: true,
    }
}

//! Answer normalization.
//!
//! [`extract_value`] reads one answer out of a response as a
//! [`NormalizedValue`], whatever the question type. Missing or blank answers
//! come back as [`NormalizedValue::Absent`] so scorers can apply a neutral
//! default instead of branching on errors.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::survey::{AnswerValue, Question, SurveyResponse};

/// A type-independent view of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum NormalizedValue {
    /// One token (radio and rank answers).
    Token(String),
    /// A non-empty set of tokens (checkbox answers).
    Tokens(BTreeSet<String>),
    /// Trimmed, non-blank free text.
    Text(String),
    /// No usable answer.
    Absent,
}

impl NormalizedValue {
    /// Whether the answer is missing or blank.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The single token, if this is a scalar answer.
    #[must_use]
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// The selected tokens; a scalar answer counts as a one-element selection.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Token(token) => vec![token.as_str()],
            Self::Tokens(tokens) => tokens.iter().map(String::as_str).collect(),
            Self::Text(_) | Self::Absent => Vec::new(),
        }
    }

    /// The free text, if this is a text answer.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    fn token(raw: &str) -> Self {
        let token = raw.trim();
        if token.is_empty() {
            Self::Absent
        } else {
            Self::Token(token.to_string())
        }
    }

    fn text(raw: &str) -> Self {
        match Self::token(raw) {
            Self::Token(text) => Self::Text(text),
            other => other,
        }
    }

    fn tokens_of<'a>(raw: impl IntoIterator<Item = &'a String>) -> Self {
        let tokens: BTreeSet<String> = raw
            .into_iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if tokens.is_empty() {
            Self::Absent
        } else {
            Self::Tokens(tokens)
        }
    }
}

/// Extract the answer to `question_id` from a response.
#[must_use]
pub fn extract_value(response: &SurveyResponse, question_id: &str) -> NormalizedValue {
    response
        .answer(question_id)
        .map_or(NormalizedValue::Absent, |answer| normalize(&answer.value))
}

/// Extract the answer to `question`, resolving option tokens to their labels.
///
/// Tokens that are not options of the question are kept as they are.
#[must_use]
pub fn extract_labeled_value(response: &SurveyResponse, question: &Question) -> NormalizedValue {
    let label = |token: &str| question.option_label(token).unwrap_or(token).to_string();
    match extract_value(response, &question.id) {
        NormalizedValue::Token(token) => NormalizedValue::Token(label(&token)),
        NormalizedValue::Tokens(tokens) => {
            NormalizedValue::Tokens(tokens.iter().map(|t| label(t)).collect())
        }
        other => other,
    }
}

fn normalize(value: &AnswerValue) -> NormalizedValue {
    match value {
        AnswerValue::Radio(token) | AnswerValue::Rank(token) => NormalizedValue::token(token),
        AnswerValue::Checkbox(tokens) => NormalizedValue::tokens_of(tokens),
        AnswerValue::Text(text) | AnswerValue::Textarea(text) => NormalizedValue::text(text),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::survey::{Answer, QuestionType};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn response() -> SurveyResponse {
        SurveyResponse::new(
            "r-1",
            "s-1",
            "org-1",
            "Alice",
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        )
        .with_answer(Answer::radio("q1", " daily "))
        .with_answer(Answer::checkbox("q2", ["claude", " ", "chatgpt"]))
        .with_answer(Answer::checkbox("q4", Vec::<String>::new()))
        .with_answer(Answer::textarea("q5", "  summaries  "))
        .with_answer(Answer::textarea("q9", "   "))
        .with_answer(Answer::rank("q8", "rank3"))
    }

    #[test]
    fn test_extract_radio_is_trimmed() {
        assert_eq!(
            extract_value(&response(), "q1"),
            NormalizedValue::Token("daily".to_string())
        );
    }

    #[test]
    fn test_extract_checkbox_drops_blank_tokens() {
        let value = extract_value(&response(), "q2");
        assert_eq!(value.tokens(), vec!["chatgpt", "claude"]);
    }

    #[test]
    fn test_extract_empty_checkbox_is_absent() {
        assert!(extract_value(&response(), "q4").is_absent());
    }

    #[test]
    fn test_extract_text() {
        let r = response();
        assert_eq!(extract_value(&r, "q5").as_text(), Some("summaries"));
        assert!(extract_value(&r, "q9").is_absent());
    }

    #[test]
    fn test_extract_rank_token() {
        assert_eq!(extract_value(&response(), "q8").as_token(), Some("rank3"));
    }

    #[test]
    fn test_extract_missing_is_absent() {
        assert_eq!(extract_value(&response(), "q42"), NormalizedValue::Absent);
    }

    #[test]
    fn test_extract_labeled_value() {
        let question = Question::new("q2", "Tools", QuestionType::Checkbox)
            .with_option("claude", "Claude")
            .with_option("chatgpt", "ChatGPT");
        let value = extract_labeled_value(&response(), &question);
        assert_eq!(value.tokens(), vec!["ChatGPT", "Claude"]);

        let unknown = Question::new("q1", "Frequency", QuestionType::Radio);
        assert_eq!(
            extract_labeled_value(&response(), &unknown).as_token(),
            Some("daily")
        );
    }
}

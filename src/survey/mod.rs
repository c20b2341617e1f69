//! Survey data model.
//!
//! This module defines the records the engine reads:
//! - [`SurveyResponse`]: one immutable submission by a respondent
//! - [`Answer`] / [`AnswerValue`]: a typed answer, tagged by [`QuestionType`]
//! - [`Survey`] / [`Question`] / [`QuestionOption`]: survey definitions, used for
//!   option label resolution and attribute question detection
//!
//! Records are owned by the persistence collaborator; the engine only borrows them.
//! JSON uses the camelCase field names of the stored documents.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Respondent name used when a stored response carries none.
pub const ANONYMOUS_RESPONDENT: &str = "Anonymous";

/// Question type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Single choice.
    Radio,
    /// Multiple choice.
    Checkbox,
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    Textarea,
    /// Five-tier self assessment keyed by `rank1..rank5`.
    Rank,
}

impl QuestionType {
    /// Wire name of the type tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Rank => "rank",
        }
    }
}

/// The value of an answer, shaped by its question type.
///
/// Checkbox answers always carry a set; every other type carries a single
/// token or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Selected option token.
    Radio(String),
    /// Selected option tokens.
    Checkbox(BTreeSet<String>),
    /// Free text.
    Text(String),
    /// Multi-line free text.
    Textarea(String),
    /// Selected tier id.
    Rank(String),
}

impl AnswerValue {
    /// The type tag matching this value.
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        match self {
            Self::Radio(_) => QuestionType::Radio,
            Self::Checkbox(_) => QuestionType::Checkbox,
            Self::Text(_) => QuestionType::Text,
            Self::Textarea(_) => QuestionType::Textarea,
            Self::Rank(_) => QuestionType::Rank,
        }
    }
}

/// A single answer within a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnswer", into = "RawAnswer")]
pub struct Answer {
    /// Question this answer belongs to.
    pub question_id: String,
    /// Typed answer value.
    pub value: AnswerValue,
}

impl Answer {
    /// Create a radio answer.
    #[must_use]
    pub fn radio(question_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Radio(token.into()),
        }
    }

    /// Create a checkbox answer.
    #[must_use]
    pub fn checkbox<I, T>(question_id: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Checkbox(tokens.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a single-line text answer.
    #[must_use]
    pub fn text(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Text(text.into()),
        }
    }

    /// Create a multi-line text answer.
    #[must_use]
    pub fn textarea(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Textarea(text.into()),
        }
    }

    /// Create a rank self-assessment answer.
    #[must_use]
    pub fn rank(question_id: impl Into<String>, tier_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Rank(tier_id.into()),
        }
    }

    /// The type tag of this answer.
    #[must_use]
    pub const fn question_type(&self) -> QuestionType {
        self.value.question_type()
    }
}

/// Answer shape as stored: `{questionId, value, type}` where `value` is a
/// string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnswer {
    question_id: String,
    #[serde(default)]
    value: Option<RawValue>,
    #[serde(rename = "type")]
    question_type: QuestionType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(String),
    Many(Vec<String>),
}

impl RawValue {
    fn into_scalar(self) -> String {
        match self {
            Self::One(s) => s,
            Self::Many(items) => items.join(", "),
        }
    }

    fn into_set(self) -> BTreeSet<String> {
        match self {
            Self::One(s) if s.trim().is_empty() => BTreeSet::new(),
            Self::One(s) => BTreeSet::from([s]),
            Self::Many(items) => items.into_iter().collect(),
        }
    }
}

impl From<RawAnswer> for Answer {
    fn from(raw: RawAnswer) -> Self {
        let RawAnswer {
            question_id,
            value,
            question_type,
        } = raw;
        let scalar = |v: Option<RawValue>| v.map(RawValue::into_scalar).unwrap_or_default();
        let value = match question_type {
            QuestionType::Checkbox => {
                AnswerValue::Checkbox(value.map(RawValue::into_set).unwrap_or_default())
            }
            QuestionType::Radio => AnswerValue::Radio(scalar(value)),
            QuestionType::Text => AnswerValue::Text(scalar(value)),
            QuestionType::Textarea => AnswerValue::Textarea(scalar(value)),
            QuestionType::Rank => AnswerValue::Rank(scalar(value)),
        };
        Self { question_id, value }
    }
}

impl From<Answer> for RawAnswer {
    fn from(answer: Answer) -> Self {
        let question_type = answer.question_type();
        let value = match answer.value {
            AnswerValue::Checkbox(set) => RawValue::Many(set.into_iter().collect()),
            AnswerValue::Radio(s)
            | AnswerValue::Text(s)
            | AnswerValue::Textarea(s)
            | AnswerValue::Rank(s) => RawValue::One(s),
        };
        Self {
            question_id: answer.question_id,
            value: Some(value),
            question_type,
        }
    }
}

fn anonymous() -> String {
    ANONYMOUS_RESPONDENT.to_string()
}

/// Null and blank names fall back to [`ANONYMOUS_RESPONDENT`].
fn respondent_or_anonymous<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(anonymous))
}

/// A submitted survey response.
///
/// Two responses with the same `respondent_name` belong to the same respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    /// Response identifier.
    pub id: String,
    /// Survey this response answers.
    pub survey_id: String,
    /// Owning organization.
    pub org_id: String,
    /// Free-text respondent identity key.
    #[serde(default = "anonymous", deserialize_with = "respondent_or_anonymous")]
    pub respondent_name: String,
    /// Submission instant.
    pub submitted_at: DateTime<Utc>,
    /// Answers, unique per question id.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl SurveyResponse {
    /// Create a response without answers.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        survey_id: impl Into<String>,
        org_id: impl Into<String>,
        respondent_name: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            survey_id: survey_id.into(),
            org_id: org_id.into(),
            respondent_name: respondent_name.into(),
            submitted_at,
            answers: Vec::new(),
        }
    }

    /// Add an answer, replacing any earlier answer to the same question.
    #[must_use]
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
        self
    }

    /// Find the answer for a question.
    #[must_use]
    pub fn answer(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    /// Find the first answer of a given type.
    #[must_use]
    pub fn first_answer_of_type(&self, question_type: QuestionType) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|a| a.question_type() == question_type)
    }
}

/// A selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Option identifier.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Token stored in answers.
    pub value: String,
}

/// A survey question definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question identifier.
    pub id: String,
    /// Question title.
    pub title: String,
    /// Answer type.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Whether an answer is mandatory.
    #[serde(default)]
    pub required: bool,
    /// Options for choice questions.
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// Per-tier bullet text for rank questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_descriptions: Option<BTreeMap<String, Vec<String>>>,
}

impl Question {
    /// Create a question without options.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            question_type,
            required: false,
            options: Vec::new(),
            rank_descriptions: None,
        }
    }

    /// Add an option whose id is derived from its value.
    #[must_use]
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        let value = value.into();
        self.options.push(QuestionOption {
            id: format!("opt-{value}"),
            label: label.into(),
            value,
        });
        self
    }

    /// Display label of an option token, if the token is a known option.
    #[must_use]
    pub fn option_label(&self, token: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == token)
            .map(|o| o.label.as_str())
    }
}

/// A survey definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// Survey identifier.
    pub id: String,
    /// Survey title.
    pub title: String,
    /// Owning organization.
    pub org_id: String,
    /// Questions in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Whether the survey accepts responses.
    #[serde(default)]
    pub is_active: bool,
}

impl Survey {
    /// Find a question by id.
    #[must_use]
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

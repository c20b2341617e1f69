//! Attribute cohorts (department, position).
//!
//! Surveys do not mark which question asks for a respondent's department or
//! position, so the question is detected by keyword on its title or id. The
//! answer, resolved to its option label, becomes the scope key.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cohort::ScopeExtractor;
use crate::scoring::{extract_labeled_value, NormalizedValue};
use crate::survey::{Question, Survey, SurveyResponse};

/// A respondent attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Department or business unit.
    Department,
    /// Job title or role.
    Position,
}

impl AttributeKind {
    /// Both attributes.
    pub const ALL: [Self; 2] = [Self::Department, Self::Position];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    const fn title_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Department => &["department", "dept", "部署", "所属", "事業部"],
            Self::Position => &["position", "role", "役職", "職位", "職種", "役割"],
        }
    }

    const fn id_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Department => &["department", "dept"],
            Self::Position => &["position", "role"],
        }
    }

    /// Whether a question asks for this attribute.
    #[must_use]
    pub fn matches(self, question: &Question) -> bool {
        let title = question.title.to_lowercase();
        let id = question.id.to_lowercase();
        self.title_keywords().iter().any(|k| title.contains(k))
            || self.id_keywords().iter().any(|k| id.contains(k))
    }
}

/// The attribute answer of a response as a single label.
///
/// Multi-select answers are joined with `", "`.
#[must_use]
pub fn attribute_value(response: &SurveyResponse, question: &Question) -> Option<String> {
    match extract_labeled_value(response, question) {
        NormalizedValue::Token(label) | NormalizedValue::Text(label) => Some(label),
        NormalizedValue::Tokens(labels) => {
            Some(labels.into_iter().collect::<Vec<_>>().join(", "))
        }
        NormalizedValue::Absent => None,
    }
}

/// Attribute questions detected in a set of surveys.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeQuestions<'a> {
    department: Option<&'a Question>,
    position: Option<&'a Question>,
}

impl<'a> AttributeQuestions<'a> {
    /// Detect attribute questions; the first match in survey order wins.
    #[must_use]
    pub fn detect(surveys: &'a [Survey]) -> Self {
        let find = |kind: AttributeKind| {
            surveys
                .iter()
                .flat_map(|s| s.questions.iter())
                .find(|q| kind.matches(q))
        };
        let detected = Self {
            department: find(AttributeKind::Department),
            position: find(AttributeKind::Position),
        };
        tracing::debug!(
            department = detected.department.map(|q| q.id.as_str()),
            position = detected.position.map(|q| q.id.as_str()),
            "Detected attribute questions"
        );
        detected
    }

    /// The question detected for an attribute.
    #[must_use]
    pub const fn question(&self, kind: AttributeKind) -> Option<&'a Question> {
        match kind {
            AttributeKind::Department => self.department,
            AttributeKind::Position => self.position,
        }
    }

    /// A response's value for an attribute.
    #[must_use]
    pub fn value_of(&self, response: &SurveyResponse, kind: AttributeKind) -> Option<String> {
        self.question(kind).and_then(|q| attribute_value(response, q))
    }

    /// Scope extractor grouping by an attribute.
    #[must_use]
    pub const fn extractor(&self, kind: AttributeKind) -> ByAttribute<'a> {
        ByAttribute {
            question: self.question(kind),
        }
    }

    /// Distinct values of an attribute across responses, sorted.
    ///
    /// Joined multi-select values are split back into their labels.
    #[must_use]
    pub fn options<'r>(
        &self,
        responses: impl IntoIterator<Item = &'r SurveyResponse>,
        kind: AttributeKind,
    ) -> Vec<String> {
        let values: BTreeSet<String> = responses
            .into_iter()
            .filter_map(|r| self.value_of(r, kind))
            .flat_map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        values.into_iter().collect()
    }
}

/// Scope by the label of an attribute answer.
///
/// Without a detected question every response is unscoped.
#[derive(Debug, Clone, Copy)]
pub struct ByAttribute<'a> {
    question: Option<&'a Question>,
}

impl ScopeExtractor for ByAttribute<'_> {
    fn scope_key(&self, response: &SurveyResponse) -> Option<String> {
        self.question.and_then(|q| attribute_value(response, q))
    }
}

/// Required attribute values; `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeFilter {
    /// Required department label.
    pub department: Option<String>,
    /// Required position label.
    pub position: Option<String>,
}

impl AttributeFilter {
    fn wanted(&self, kind: AttributeKind) -> Option<&str> {
        match kind {
            AttributeKind::Department => self.department.as_deref(),
            AttributeKind::Position => self.position.as_deref(),
        }
    }
}

/// Keep responses whose attribute labels equal the filter's values.
///
/// A constraint on an attribute with no detected question is ignored.
#[must_use]
pub fn filter_by_attributes<'a>(
    responses: impl IntoIterator<Item = &'a SurveyResponse>,
    questions: &AttributeQuestions<'_>,
    filter: &AttributeFilter,
) -> Vec<&'a SurveyResponse> {
    let constraints: Vec<(&Question, &str)> = AttributeKind::ALL
        .into_iter()
        .filter_map(|kind| Some((questions.question(kind)?, filter.wanted(kind)?)))
        .collect();

    responses
        .into_iter()
        .filter(|response| {
            constraints.iter().all(|(question, wanted)| {
                attribute_value(response, question).is_some_and(|value| value == *wanted)
            })
        })
        .collect()
}

//! Dimension scoring.
//!
//! Each axis is a weighted sum of 0-100 signals read from one response. The
//! table [`SCORING_RULES`] is the whole business rule; weights of an axis sum
//! to 1, so every axis stays within 0-100 before clamping. A signal whose
//! source question is unanswered contributes 0.

use serde::{Deserialize, Serialize};

use super::normalize::extract_value;
use super::overall::round_score;
use super::questions::{
    is_known, score_of, Choice, ScoredChoice, FREQUENCY_CHOICES, FREQUENCY_QUESTION,
    PAID_TOOLS_QUESTION, PAID_TOOL_CHOICES, TIME_SAVED_CHOICES, TIME_SAVED_QUESTION,
    TOOLS_QUESTION, TOOL_CHOICES, USAGE_DETAIL_QUESTION, USE_CASES_QUESTION, USE_CASE_CHOICES,
};
use super::LiteracyScores;
use crate::survey::{QuestionType, SurveyResponse};
use crate::taxonomy::RankDefinition;

/// A proficiency axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Foundational knowledge.
    Basics,
    /// Prompt crafting and breadth of use.
    Prompting,
    /// Responsible use.
    Ethics,
    /// Tool adoption.
    Tools,
    /// Integration of AI into routine work.
    Automation,
}

impl Axis {
    /// All axes in field order.
    pub const ALL: [Self; 5] = [
        Self::Basics,
        Self::Prompting,
        Self::Ethics,
        Self::Tools,
        Self::Automation,
    ];

    /// Field name of the axis.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Prompting => "prompting",
            Self::Ethics => "ethics",
            Self::Tools => "tools",
            Self::Automation => "automation",
        }
    }
}

/// A 0-100 reading taken from one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Score of the selected token in a scored table.
    Choice {
        /// Source question.
        question_id: &'static str,
        /// Token scores.
        table: &'static [ScoredChoice],
    },
    /// `per_token` for every recognized token selected, capped at 100.
    Breadth {
        /// Source question.
        question_id: &'static str,
        /// Recognized tokens.
        vocabulary: &'static [Choice],
        /// Points per recognized token.
        per_token: u8,
    },
    /// 100 when the free text is non-blank.
    TextPresence {
        /// Source question.
        question_id: &'static str,
    },
    /// The self-assessed tier mapped to 20, 40, 60, 80 or 100.
    ///
    /// Read from the first rank-type answer of the response.
    SelfRank,
}

impl Signal {
    /// Read the signal, or `None` when its source is unanswered or unrecognized.
    #[must_use]
    pub fn evaluate(&self, response: &SurveyResponse, definition: &RankDefinition) -> Option<f64> {
        match *self {
            Self::Choice { question_id, table } => extract_value(response, question_id)
                .as_token()
                .and_then(|token| score_of(table, token))
                .map(f64::from),
            Self::Breadth {
                question_id,
                vocabulary,
                per_token,
            } => {
                let value = extract_value(response, question_id);
                if value.is_absent() {
                    return None;
                }
                let recognized = value
                    .tokens()
                    .into_iter()
                    .filter(|token| is_known(vocabulary, token))
                    .count();
                #[allow(clippy::cast_precision_loss)]
                let points = recognized as f64 * f64::from(per_token);
                Some(points.min(100.0))
            }
            Self::TextPresence { question_id } => extract_value(response, question_id)
                .as_text()
                .map(|_| 100.0),
            Self::SelfRank => {
                let answer = response.first_answer_of_type(QuestionType::Rank)?;
                let value = extract_value(response, &answer.question_id);
                let rank = definition.rank_of_tier(value.as_token()?)?;
                Some(f64::from(rank.get()) * 20.0)
            }
        }
    }
}

/// A weighted signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// The reading.
    pub signal: Signal,
    /// Its weight within the axis.
    pub weight: f64,
}

/// The terms of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRule {
    /// Target axis.
    pub axis: Axis,
    /// Weighted signals.
    pub terms: &'static [Term],
}

impl AxisRule {
    /// Integer axis score for one response.
    #[must_use]
    pub fn score(&self, response: &SurveyResponse, definition: &RankDefinition) -> f64 {
        let total: f64 = self
            .terms
            .iter()
            .map(|term| term.weight * term.signal.evaluate(response, definition).unwrap_or(0.0))
            .sum();
        f64::from(round_score(total))
    }
}

const FREQUENCY: Signal = Signal::Choice {
    question_id: FREQUENCY_QUESTION,
    table: &FREQUENCY_CHOICES,
};
const TIME_SAVED: Signal = Signal::Choice {
    question_id: TIME_SAVED_QUESTION,
    table: &TIME_SAVED_CHOICES,
};
const PAID_TOOLS: Signal = Signal::Choice {
    question_id: PAID_TOOLS_QUESTION,
    table: &PAID_TOOL_CHOICES,
};
const TOOL_BREADTH: Signal = Signal::Breadth {
    question_id: TOOLS_QUESTION,
    vocabulary: &TOOL_CHOICES,
    per_token: 25,
};
const USE_CASE_BREADTH: Signal = Signal::Breadth {
    question_id: USE_CASES_QUESTION,
    vocabulary: &USE_CASE_CHOICES,
    per_token: 20,
};
const USAGE_DETAIL: Signal = Signal::TextPresence {
    question_id: USAGE_DETAIL_QUESTION,
};

const THIRD: f64 = 1.0 / 3.0;

/// The canonical question-to-axis weighting table.
pub const SCORING_RULES: [AxisRule; 5] = [
    AxisRule {
        axis: Axis::Basics,
        terms: &[Term { signal: Signal::SelfRank, weight: 1.0 }],
    },
    AxisRule {
        axis: Axis::Prompting,
        terms: &[
            Term { signal: USE_CASE_BREADTH, weight: 0.7 },
            Term { signal: USAGE_DETAIL, weight: 0.3 },
        ],
    },
    AxisRule {
        axis: Axis::Ethics,
        terms: &[Term { signal: Signal::SelfRank, weight: 1.0 }],
    },
    AxisRule {
        axis: Axis::Tools,
        terms: &[
            Term { signal: FREQUENCY, weight: 0.4 },
            Term { signal: TOOL_BREADTH, weight: 0.4 },
            Term { signal: PAID_TOOLS, weight: 0.2 },
        ],
    },
    AxisRule {
        axis: Axis::Automation,
        terms: &[
            Term { signal: Signal::SelfRank, weight: THIRD },
            Term { signal: FREQUENCY, weight: THIRD },
            Term { signal: TIME_SAVED, weight: THIRD },
        ],
    },
];

/// Score one response on the five axes.
///
/// Pure: the same response and taxonomy always give the same scores.
#[must_use]
pub fn score_response(response: &SurveyResponse, definition: &RankDefinition) -> LiteracyScores {
    let mut scores = LiteracyScores::default();
    for rule in &SCORING_RULES {
        scores.set(rule.axis, rule.score(response, definition));
    }
    scores
}

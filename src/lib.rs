//! AI literacy survey metrics
//!
//! Turns raw survey answers into comparable metrics: per-respondent
//! proficiency scores on five axes, ordinal ranks, tenant-customizable rank
//! taxonomies, cohort aggregates and temporal rank analytics.
//!
//! # Features
//!
//! - Declarative question-to-axis scoring table
//! - Fixed quintile rank thresholds shared by ranks and rank labels
//! - Cohort aggregation by organization, department, position or month,
//!   with explicit "latest response per respondent" de-duplication
//! - Rank change tracking (NEW / UP / MAINTAIN / DOWN) and growth rates
//! - `SQLite` persistence for tenant rank taxonomies
//!
//! # Pipeline
//!
//! ```text
//! SurveyResponse ─▶ LiteracyScores ─▶ overall score ─▶ Rank
//!        │                                              │
//!        └──────────────▶ cohorts / rank changes / growth ◀┘
//!                                   ▲
//!                    RankDefinition ┘ (tenant override or default)
//! ```
//!
//! Everything except [`storage`] and the taxonomy provider is pure and
//! synchronous, so it can be called from any number of threads at once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod storage;
pub mod survey;
pub mod taxonomy;
pub mod traits;

#[cfg(test)]
mod test_utils;

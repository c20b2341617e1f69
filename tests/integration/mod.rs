//! Integration tests for the literacy metrics engine.
//!
//! These tests verify end-to-end workflows including:
//! - Scoring pipeline over realistic survey exports
//! - Rank taxonomy persistence and default fallback
//! - Cohort aggregation and temporal rank analytics

mod fixtures;
mod scoring_pipeline;
mod taxonomy_store;
mod temporal_analytics;

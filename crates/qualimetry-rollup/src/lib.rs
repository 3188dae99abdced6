//! Qualimetry Roll-up
//!
//! Aggregates metric scores into criterion, evaluation and project scores and
//! classifies the results into qualitative levels.
//!
//! # Overview
//!
//! ```text
//! metric weighted values ─avg × importance─→ criterion final scores
//! criterion final scores ─sum──────────────→ evaluation score ─→ level + grade
//! evaluation scores ──────avg──────────────→ project score ────→ level + grade
//! ```
//!
//! The pure functions ([`aggregate_criterion`], [`aggregate_evaluation`],
//! [`aggregate_project`], [`classify_score`]) are the whole computation.
//! [`EvaluationPipeline`] drives them over an
//! [`EvaluationPlan`](qualimetry_domain::EvaluationPlan) and commits results
//! through a [`ScoreStore`](qualimetry_domain::traits::ScoreStore).
//!
//! # Usage
//!
//! ```
//! use qualimetry_rollup::{aggregate_criterion, aggregate_evaluation, classify_score};
//! use qualimetry_domain::ScoreLevel;
//!
//! let usability = aggregate_criterion(&[8.0, 9.0], 40.0).unwrap();
//! let reliability = aggregate_criterion(&[7.0], 60.0).unwrap();
//! let score = aggregate_evaluation(&[usability, reliability]).unwrap();
//! assert_eq!(score, 7.6);
//!
//! let class = classify_score(score, 80.0).unwrap();
//! assert_eq!(class.score_level, ScoreLevel::TargetRange);
//! ```
//!
//! # Configuration
//!
//! ```toml
//! failure_policy = "stop_on_first_error"
//! enforce_importance_sum = true
//! importance_tolerance = 0.01
//! recompute_project = true
//! ```

#![warn(missing_docs)]

mod aggregate;
mod classify;
mod config;
mod error;
mod memory;
mod pipeline;

pub use aggregate::{aggregate_criterion, aggregate_evaluation, aggregate_project, validate_importance, SCORE_DECIMALS};
pub use classify::{classify_score, ScoreBands};
pub use config::{FailurePolicy, RollupConfig};
pub use error::AggregationError;
pub use memory::{InMemoryStore, StoreError};
pub use pipeline::{EvaluationOutcome, EvaluationPipeline, MetricFailure, MetricReport, Recomputation};

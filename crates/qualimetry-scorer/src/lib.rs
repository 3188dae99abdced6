//! Qualimetry Metric Scorer
//!
//! Turns a metric's formula, its measured variables and its threshold pair
//! into a [`MetricScore`](qualimetry_domain::MetricScore): the raw
//! `calculated_value` and the `weighted_value` normalized to 0–10.
//!
//! # Architecture
//!
//! ```text
//! thresholds → ThresholdClassifier → ThresholdCase ─┐
//!                                                    ├→ case policy → MetricScore
//! formula + variables → FormulaEvaluator → value ───┘
//! ```
//!
//! The scorer owns its collaborators explicitly; there is no global state.
//! Each call returns a [`ScoreReport`] describing which case applied and
//! whether the shortcut or clamping kicked in, alongside `tracing` events.
//!
//! # Example
//!
//! ```
//! use qualimetry_domain::VariableBinding;
//! use qualimetry_scorer::MetricScorer;
//!
//! let scorer = MetricScorer::default();
//! let report = scorer
//!     .score("A", &[VariableBinding::new("A", 8.0)], Some(">=10/20min"), Some("0/20min"))
//!     .unwrap();
//! assert_eq!(report.score.weighted_value, 8.0);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod policy;
mod scorer;

pub use config::ScorerConfig;
pub use error::ScoringError;
pub use scorer::{score_metric, MetricScorer, ScoreReport};

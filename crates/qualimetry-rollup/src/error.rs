//! Roll-up error types

use qualimetry_domain::{EvaluationId, ProjectId};
use qualimetry_scorer::ScoringError;
use thiserror::Error;

/// Errors that can occur while aggregating or classifying scores
///
/// Missing children are precondition failures: lower levels must be
/// computed first. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    /// A criterion has no metric results
    #[error("Criterion has no metric results")]
    NoMetricResults,

    /// An evaluation has no criterion results
    #[error("Evaluation has no criterion results")]
    NoCriteria,

    /// A project has no evaluation results
    #[error("Project has no evaluation results")]
    NoEvaluations,

    /// Importance percentage outside [0, 100]
    #[error("Importance percentage {0} is outside [0, 100]")]
    InvalidImportance(f64),

    /// Importance percentages of an evaluation do not sum to 100
    #[error("Criteria importance sums to {total}, expected 100")]
    ImportanceSum {
        /// Actual sum
        total: f64,
    },

    /// Minimum threshold outside (0, 100]
    #[error("Minimum threshold {0} is outside (0, 100]")]
    InvalidMinimumThreshold(f64),

    /// Score is NaN or infinite
    #[error("Score {0} is not a finite number")]
    InvalidScore(f64),

    /// A metric failed under stop-on-first-error
    #[error("Metric '{metric}' failed: {source}")]
    Metric {
        /// Metric name
        metric: String,
        /// Underlying scoring failure
        #[source]
        source: ScoringError,
    },

    /// No plan is stored for the evaluation
    #[error("Unknown evaluation {0}")]
    UnknownEvaluation(EvaluationId),

    /// No minimum threshold is stored for the project
    #[error("Unknown project {0}")]
    UnknownProject(ProjectId),

    /// Store error while loading or committing
    #[error("Store error: {0}")]
    Store(String),
}

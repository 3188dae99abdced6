//! Scoring error types

use qualimetry_formula::FormulaError;
use qualimetry_threshold::{ThresholdCaseType, ThresholdError};
use thiserror::Error;

/// Errors that can occur while scoring a metric
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Formula could not be parsed or evaluated
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),

    /// Thresholds could not be parsed or classified
    #[error("Threshold error: {0}")]
    Threshold(#[from] ThresholdError),

    /// A ratio case needs a measured variable but none was bound
    #[error("{0} requires at least one variable")]
    MissingVariable(ThresholdCaseType),

    /// The case formula would divide by a zero threshold
    #[error("{case} cannot divide by a zero {threshold} threshold")]
    ZeroThreshold {
        /// Case being scored
        case: ThresholdCaseType,
        /// Which threshold is zero ("desired" or "worst-case")
        threshold: &'static str,
    },

    /// The weighted value is NaN or infinite
    #[error("{0} produced a non-finite weighted value")]
    NonFinite(ThresholdCaseType),
}

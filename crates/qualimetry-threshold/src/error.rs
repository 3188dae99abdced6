//! Threshold error types

use thiserror::Error;

/// Errors that can occur while parsing or classifying thresholds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    /// Threshold string is present but blank
    #[error("Threshold is empty")]
    Empty,

    /// Threshold string does not match the grammar
    #[error("Malformed threshold '{0}'")]
    Malformed(String),

    /// Ratio with a zero denominator
    #[error("Threshold '{0}' has a zero denominator")]
    ZeroDenominator(String),

    /// No scoring case matches the pair and the policy forbids the fallback
    #[error("No scoring case matches desired {desired:?} and worst case {worst:?}")]
    Unclassifiable {
        /// Desired threshold text
        desired: Option<String>,
        /// Worst-case threshold text
        worst: Option<String>,
    },
}

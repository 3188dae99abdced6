//! Error types for the CLI application.

use qualimetry_formula::FormulaError;
use qualimetry_rollup::AggregationError;
use qualimetry_scorer::ScoringError;
use qualimetry_threshold::ThresholdError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Project document error
    #[error("Project error: {0}")]
    Project(String),

    /// Formula error
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),

    /// Threshold error
    #[error("Threshold error: {0}")]
    Threshold(#[from] ThresholdError),

    /// Scoring error
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Aggregation error
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

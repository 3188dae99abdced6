//! Qualimetry Domain Layer
//!
//! Core value types shared by every stage of the quality-score engine.
//! This crate holds no computation beyond trivial accessors; the formula
//! evaluator, threshold classifier, metric scorer and roll-up pipeline live
//! in their own crates and depend on the types defined here.
//!
//! ## Key Concepts
//!
//! - **Variable binding**: a `(symbol, value)` pair fed into a metric formula
//! - **Metric score**: `calculated_value` plus its 0–10 `weighted_value`
//! - **Results**: metric → criterion → evaluation → project, each produced
//!   by exactly one aggregation step
//! - **Score level / satisfaction grade**: qualitative labels relative to a
//!   project's minimum threshold
//!
//! ## Architecture
//!
//! Persistence is an external collaborator. The [`traits::ScoreStore`]
//! trait is the only boundary the engine needs from it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ids;
pub mod level;
pub mod plan;
pub mod results;
pub mod traits;
pub mod variable;

// Re-exports for convenience
pub use ids::{CriterionId, EvaluationId, MetricId, ProjectId};
pub use level::{SatisfactionGrade, ScoreClassification, ScoreLevel};
pub use plan::{CriterionPlan, EvaluationPlan, MetricPlan};
pub use results::{
    CriterionResult, EvaluationRecords, EvaluationResult, MetricResult, MetricScore, ProjectResult,
};
pub use variable::VariableBinding;

/// Upper bound of every normalized score in the engine
pub const MAX_SCORE: f64 = 10.0;

/// Round `value` to `decimals` places, half away from zero
///
/// Magnitudes too large to scale are returned unchanged; they carry no
/// fractional digits anyway.
///
/// ```
/// use qualimetry_domain::round_to;
///
/// assert_eq!(round_to(10.0 / 3.0, 4), 3.3333);
/// assert_eq!(round_to(23.254, 2), 23.25);
/// assert_eq!(round_to(1e306, 4), 1e306);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.345678, 2), 2.35);
        assert_eq!(round_to(-2.345678, 2), -2.35);
    }

    #[test]
    fn test_round_to_keeps_huge_values_finite() {
        assert_eq!(round_to(1e306, 4), 1e306);
        assert_eq!(round_to(-f64::MAX, 2), -f64::MAX);
    }
}

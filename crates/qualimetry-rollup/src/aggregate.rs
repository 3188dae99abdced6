//! Pure aggregation steps

use crate::AggregationError;
use qualimetry_domain::round_to;

/// Decimal places every aggregated score is rounded to
pub const SCORE_DECIMALS: u32 = 2;

/// Criterion final score: mean weighted value scaled by importance
///
/// ```
/// use qualimetry_rollup::aggregate_criterion;
///
/// assert_eq!(aggregate_criterion(&[77.5], 30.0).unwrap(), 23.25);
/// ```
pub fn aggregate_criterion(weighted_values: &[f64], importance_percentage: f64) -> Result<f64, AggregationError> {
    if weighted_values.is_empty() {
        return Err(AggregationError::NoMetricResults);
    }
    check_importance(importance_percentage)?;

    let average = mean(weighted_values)?;
    Ok(round_to(average * (importance_percentage / 100.0), SCORE_DECIMALS))
}

/// Evaluation score: the sum of criterion final scores
///
/// Importance weights already encode each criterion's share, so this is a
/// sum rather than an average.
pub fn aggregate_evaluation(criteria_final_scores: &[f64]) -> Result<f64, AggregationError> {
    if criteria_final_scores.is_empty() {
        return Err(AggregationError::NoCriteria);
    }
    let total: f64 = criteria_final_scores.iter().sum();
    finite(total)?;
    Ok(round_to(total, SCORE_DECIMALS))
}

/// Project score: the mean of evaluation scores
pub fn aggregate_project(evaluation_scores: &[f64]) -> Result<f64, AggregationError> {
    if evaluation_scores.is_empty() {
        return Err(AggregationError::NoEvaluations);
    }
    Ok(round_to(mean(evaluation_scores)?, SCORE_DECIMALS))
}

/// Check that every importance is in [0, 100] and that they sum to 100
pub fn validate_importance(importances: &[f64], tolerance: f64) -> Result<(), AggregationError> {
    for &importance in importances {
        check_importance(importance)?;
    }
    let total: f64 = importances.iter().sum();
    if (total - 100.0).abs() > tolerance {
        return Err(AggregationError::ImportanceSum { total });
    }
    Ok(())
}

fn check_importance(importance: f64) -> Result<(), AggregationError> {
    if !importance.is_finite() || !(0.0..=100.0).contains(&importance) {
        return Err(AggregationError::InvalidImportance(importance));
    }
    Ok(())
}

fn mean(values: &[f64]) -> Result<f64, AggregationError> {
    let average = values.iter().sum::<f64>() / values.len() as f64;
    finite(average)?;
    Ok(average)
}

fn finite(value: f64) -> Result<(), AggregationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AggregationError::InvalidScore(value))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: recomputing on unchanged inputs is bitwise identical
        #[test]
        fn test_aggregation_is_idempotent(
            values in prop::collection::vec(0.0f64..10.0, 1..20),
            importance in 0.0f64..=100.0,
        ) {
            let first = aggregate_criterion(&values, importance).unwrap();
            let second = aggregate_criterion(&values, importance).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());

            prop_assert_eq!(
                aggregate_evaluation(&values).unwrap().to_bits(),
                aggregate_evaluation(&values).unwrap().to_bits()
            );
            prop_assert_eq!(
                aggregate_project(&values).unwrap().to_bits(),
                aggregate_project(&values).unwrap().to_bits()
            );
        }

        /// Property: a criterion never exceeds its importance share of 10
        #[test]
        fn test_criterion_bounded_by_importance(
            values in prop::collection::vec(0.0f64..=10.0, 1..20),
            importance in 0.0f64..=100.0,
        ) {
            let score = aggregate_criterion(&values, importance).unwrap();
            prop_assert!(score <= importance / 10.0 + 0.005);
            prop_assert!(score >= 0.0);
        }
    }
}

//! Per-case conversion of a calculated value into a 0–10 weighted value
//!
//! `D` is the desired threshold's magnitude and `W` the worst case's, where
//! the magnitude of a ratio is its numerator.

use crate::ScoringError;
use qualimetry_domain::MAX_SCORE;
use qualimetry_threshold::{ThresholdCase, ThresholdCaseType};

const EQ_EPSILON: f64 = 1e-9;

/// Weighted value of `calculated` under `case`, before clamping
pub(crate) fn weighted_value(case: &ThresholdCase, calculated: f64) -> Result<f64, ScoringError> {
    let kind = case.case_type();
    let x = calculated;

    let weighted = match case {
        ThresholdCase::SimpleBinary { .. } => x * MAX_SCORE,

        ThresholdCase::RatioWithMinThreshold { desired, .. } => {
            let d = desired.magnitude();
            if x >= d {
                MAX_SCORE
            } else {
                fraction(x, d, kind, "desired")? * MAX_SCORE
            }
        }

        ThresholdCase::InverseRatioWithMax { worst, .. } => {
            let w = worst.magnitude();
            if x > w {
                0.0
            } else {
                (1.0 - fraction(x, w, kind, "worst-case")?) * MAX_SCORE
            }
        }

        ThresholdCase::TimeThreshold { desired, worst } => {
            if x > worst.magnitude() {
                0.0
            } else {
                fraction(x, desired.magnitude(), kind, "desired")? * MAX_SCORE
            }
        }

        ThresholdCase::ZeroWithMaxThreshold { worst, .. } => {
            let w = worst.magnitude();
            if x > w {
                0.0
            } else {
                (1.0 - fraction(x, w, kind, "worst-case")?) * MAX_SCORE
            }
        }

        ThresholdCase::PercentageWithMax { worst, .. } => {
            let w = worst.magnitude();
            if x >= w {
                0.0
            } else if approx_eq(x, 1.0) {
                MAX_SCORE
            } else {
                (1.0 - fraction(x, w, kind, "worst-case")?) * MAX_SCORE
            }
        }

        ThresholdCase::NumericWithMax { desired, worst } => {
            let w = worst.magnitude();
            if x >= w {
                0.0
            } else if approx_eq(x, desired.magnitude()) {
                MAX_SCORE
            } else {
                (1.0 - fraction(x, w, kind, "worst-case")?) * MAX_SCORE
            }
        }

        ThresholdCase::NumericWithMin { desired, worst } => {
            let d = desired.magnitude();
            if approx_eq(x, worst.magnitude()) {
                0.0
            } else if x >= d {
                MAX_SCORE
            } else {
                fraction(x, d, kind, "desired")? * MAX_SCORE
            }
        }
    };

    if weighted.is_finite() {
        Ok(weighted)
    } else {
        Err(ScoringError::NonFinite(kind))
    }
}

fn fraction(
    numerator: f64,
    denominator: f64,
    case: ThresholdCaseType,
    threshold: &'static str,
) -> Result<f64, ScoringError> {
    if denominator == 0.0 {
        return Err(ScoringError::ZeroThreshold { case, threshold });
    }
    Ok(numerator / denominator)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EQ_EPSILON
}

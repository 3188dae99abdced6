//! Threshold-proportional score classification
//!
//! Cut points are multiples of the project's minimum threshold on the 0–10
//! scale. At an 80% threshold (T = 8) they land on 2.75, 5 and 8.75.

use crate::AggregationError;
use qualimetry_domain::{SatisfactionGrade, ScoreClassification, ScoreLevel};
use serde::Serialize;

const UNACCEPTABLE_FACTOR: f64 = 0.34375;
const MINIMAL_FACTOR: f64 = 0.625;
const TARGET_FACTOR: f64 = 1.09375;

/// Cut points derived from one minimum threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBands {
    /// Minimum threshold on the 0–10 scale
    pub scaled_threshold: f64,

    /// Scores below this are Unacceptable
    pub unacceptable_below: f64,

    /// Scores below this are at most Minimally Acceptable and Unsatisfactory
    pub minimal_below: f64,

    /// Scores below this are at most Target Range and Satisfactory
    pub target_below: f64,
}

impl ScoreBands {
    /// Derive the bands from a minimum threshold percentage in (0, 100]
    pub fn for_threshold(minimum_threshold_percent: f64) -> Result<Self, AggregationError> {
        if !minimum_threshold_percent.is_finite()
            || minimum_threshold_percent <= 0.0
            || minimum_threshold_percent > 100.0
        {
            return Err(AggregationError::InvalidMinimumThreshold(minimum_threshold_percent));
        }

        let t = minimum_threshold_percent / 10.0;
        Ok(Self {
            scaled_threshold: t,
            unacceptable_below: UNACCEPTABLE_FACTOR * t,
            minimal_below: MINIMAL_FACTOR * t,
            target_below: TARGET_FACTOR * t,
        })
    }

    /// Classify a score; each band's upper boundary belongs to the next band
    pub fn classify(&self, score: f64) -> ScoreClassification {
        let score_level = if score < self.unacceptable_below {
            ScoreLevel::Unacceptable
        } else if score < self.minimal_below {
            ScoreLevel::MinimallyAcceptable
        } else if score < self.target_below {
            ScoreLevel::TargetRange
        } else {
            ScoreLevel::ExceedsRequirements
        };

        let satisfaction_grade = if score < self.minimal_below {
            SatisfactionGrade::Unsatisfactory
        } else if score < self.target_below {
            SatisfactionGrade::Satisfactory
        } else {
            SatisfactionGrade::VerySatisfactory
        };

        ScoreClassification {
            score_level,
            satisfaction_grade,
        }
    }
}

/// Classify a 0–10 score against a minimum threshold percentage
pub fn classify_score(score: f64, minimum_threshold_percent: f64) -> Result<ScoreClassification, AggregationError> {
    if !score.is_finite() {
        return Err(AggregationError::InvalidScore(score));
    }
    Ok(ScoreBands::for_threshold(minimum_threshold_percent)?.classify(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(score: f64, threshold: f64) -> (ScoreLevel, SatisfactionGrade) {
        let c = classify_score(score, threshold).unwrap();
        (c.score_level, c.satisfaction_grade)
    }

    #[test]
    fn test_legacy_cut_points_at_eighty_percent() {
        let bands = ScoreBands::for_threshold(80.0).unwrap();
        assert_eq!(bands.unacceptable_below, 2.75);
        assert_eq!(bands.minimal_below, 5.0);
        assert_eq!(bands.target_below, 8.75);
    }

    #[test]
    fn test_upper_boundary_is_inclusive() {
        assert_eq!(
            levels(8.75, 80.0),
            (ScoreLevel::ExceedsRequirements, SatisfactionGrade::VerySatisfactory)
        );
        assert_eq!(levels(5.0, 80.0), (ScoreLevel::TargetRange, SatisfactionGrade::Satisfactory));
        assert_eq!(
            levels(2.75, 80.0),
            (ScoreLevel::MinimallyAcceptable, SatisfactionGrade::Unsatisfactory)
        );
    }

    #[test]
    fn test_just_below_boundaries() {
        assert_eq!(levels(2.74, 80.0), (ScoreLevel::Unacceptable, SatisfactionGrade::Unsatisfactory));
        assert_eq!(
            levels(4.99, 80.0),
            (ScoreLevel::MinimallyAcceptable, SatisfactionGrade::Unsatisfactory)
        );
        assert_eq!(levels(8.74, 80.0), (ScoreLevel::TargetRange, SatisfactionGrade::Satisfactory));
    }

    #[test]
    fn test_bands_scale_with_threshold() {
        assert_eq!(levels(5.2, 70.0).0, ScoreLevel::TargetRange);
        assert_eq!(levels(5.2, 80.0).0, ScoreLevel::TargetRange);
        assert_eq!(levels(5.2, 90.0).0, ScoreLevel::MinimallyAcceptable);

        assert_eq!(levels(7.8, 70.0).0, ScoreLevel::ExceedsRequirements);
        assert_eq!(levels(7.8, 80.0).0, ScoreLevel::TargetRange);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            classify_score(5.0, 0.0),
            Err(AggregationError::InvalidMinimumThreshold(0.0))
        );
        assert!(classify_score(5.0, 120.0).is_err());
        assert!(matches!(classify_score(f64::NAN, 80.0), Err(AggregationError::InvalidScore(_))));
    }
}

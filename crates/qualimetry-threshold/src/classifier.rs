//! Decision table from parsed threshold shapes to scoring cases

use crate::{ThresholdCase, ThresholdError, ThresholdSpec, Unit};
use serde::{Deserialize, Serialize};

/// What to do with a threshold pair that matches none of the eight rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPairPolicy {
    /// Score as `SimpleBinary` using only the desired threshold
    #[default]
    FallbackBinary,
    /// Fail with [`ThresholdError::Unclassifiable`]
    Reject,
}

/// Classifies desired/worst-case threshold pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdClassifier {
    unmatched: UnmatchedPairPolicy,
}

impl ThresholdClassifier {
    /// Create a classifier with the given policy for unmatched pairs
    pub fn new(unmatched: UnmatchedPairPolicy) -> Self {
        Self { unmatched }
    }

    /// Parse and classify a threshold pair
    ///
    /// `None` means the threshold is absent. A present but blank string is
    /// a parse error, as is any string outside the threshold grammar.
    pub fn classify(
        &self,
        desired: Option<&str>,
        worst: Option<&str>,
    ) -> Result<ThresholdCase, ThresholdError> {
        let desired_spec = desired.map(ThresholdSpec::parse).transpose()?;
        let worst_spec = worst.map(ThresholdSpec::parse).transpose()?;

        match match_rules(desired_spec, worst_spec) {
            Some(case) => Ok(case),
            None => match self.unmatched {
                UnmatchedPairPolicy::FallbackBinary => Ok(ThresholdCase::SimpleBinary {
                    desired: desired_spec,
                    fallback: true,
                }),
                UnmatchedPairPolicy::Reject => Err(ThresholdError::Unclassifiable {
                    desired: desired.map(str::to_string),
                    worst: worst.map(str::to_string),
                }),
            },
        }
    }
}

/// Classify with the default policy (fall back to `SimpleBinary`)
pub fn classify_thresholds(
    desired: Option<&str>,
    worst: Option<&str>,
) -> Result<ThresholdCase, ThresholdError> {
    ThresholdClassifier::default().classify(desired, worst)
}

fn match_rules(desired: Option<ThresholdSpec>, worst: Option<ThresholdSpec>) -> Option<ThresholdCase> {
    let desired = desired?;

    let Some(worst) = worst else {
        return is_binary(&desired).then_some(ThresholdCase::SimpleBinary {
            desired: Some(desired),
            fallback: false,
        });
    };

    if desired.is_ratio() {
        if desired.has_operator() && worst.is_ratio() && !worst.has_operator() && worst.is_zero() {
            return Some(ThresholdCase::RatioWithMinThreshold { desired, worst });
        }
        if !desired.has_operator() && desired.is_zero() && !worst.is_ratio() && worst.has_operator() {
            return Some(ThresholdCase::InverseRatioWithMax { desired, worst });
        }
        return None;
    }

    if worst.is_ratio() {
        return None;
    }

    let unit_pair = (desired.unit, worst.unit);
    match unit_pair {
        (Some(Unit::Minutes), Some(Unit::Minutes))
            if !desired.has_operator() && worst.has_operator() =>
        {
            Some(ThresholdCase::TimeThreshold { desired, worst })
        }
        (Some(Unit::Seconds), Some(Unit::Seconds))
            if !desired.has_operator() && desired.is_zero() && worst.has_operator() =>
        {
            Some(ThresholdCase::ZeroWithMaxThreshold { desired, worst })
        }
        (Some(Unit::Percent), Some(Unit::Percent))
            if !desired.has_operator() && desired.is_zero() && worst.has_operator() =>
        {
            Some(ThresholdCase::PercentageWithMax { desired, worst })
        }
        (None, None) if worst.has_operator() => Some(ThresholdCase::NumericWithMax { desired, worst }),
        (None, None) if worst.is_zero() => Some(ThresholdCase::NumericWithMin { desired, worst }),
        _ => None,
    }
}

/// Plain `0` or `1` with no operator or unit
fn is_binary(spec: &ThresholdSpec) -> bool {
    !spec.is_ratio()
        && !spec.has_operator()
        && spec.unit.is_none()
        && (spec.value == 0.0 || spec.value == 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThresholdCaseType;

    fn case_of(desired: Option<&str>, worst: Option<&str>) -> ThresholdCaseType {
        classify_thresholds(desired, worst).unwrap().case_type()
    }

    #[test]
    fn test_simple_binary() {
        assert_eq!(case_of(Some("1"), None), ThresholdCaseType::SimpleBinary);
        assert_eq!(case_of(Some("0"), None), ThresholdCaseType::SimpleBinary);
        assert!(!classify_thresholds(Some("1"), None).unwrap().is_fallback());
    }

    #[test]
    fn test_ratio_with_min_threshold() {
        let case = classify_thresholds(Some(">=10/20min"), Some("0/20min")).unwrap();
        assert_eq!(case.case_type(), ThresholdCaseType::RatioWithMinThreshold);
        assert_eq!(case.desired().unwrap().magnitude(), 10.0);
        assert_eq!(case.worst().unwrap().magnitude(), 0.0);
    }

    #[test]
    fn test_inverse_ratio_with_max() {
        assert_eq!(
            case_of(Some("0/20min"), Some(">=5min")),
            ThresholdCaseType::InverseRatioWithMax
        );
    }

    #[test]
    fn test_time_threshold() {
        assert_eq!(case_of(Some("5min"), Some(">=15min")), ThresholdCaseType::TimeThreshold);
    }

    #[test]
    fn test_zero_with_max_threshold() {
        assert_eq!(
            case_of(Some("0seg"), Some(">=30seg")),
            ThresholdCaseType::ZeroWithMaxThreshold
        );
    }

    #[test]
    fn test_percentage_with_max() {
        assert_eq!(case_of(Some("0%"), Some(">=20%")), ThresholdCaseType::PercentageWithMax);
    }

    #[test]
    fn test_numeric_with_max() {
        assert_eq!(case_of(Some("2"), Some(">=10")), ThresholdCaseType::NumericWithMax);
    }

    #[test]
    fn test_numeric_with_min() {
        assert_eq!(case_of(Some("4"), Some("0")), ThresholdCaseType::NumericWithMin);
        // "1"/"0" has a worst case, so it is not binary
        assert_eq!(case_of(Some("1"), Some("0")), ThresholdCaseType::NumericWithMin);
    }

    #[test]
    fn test_desired_operator_allowed_for_numeric_cases() {
        assert_eq!(case_of(Some(">=80"), Some("0")), ThresholdCaseType::NumericWithMin);
        assert_eq!(case_of(Some("<=2"), Some(">=10")), ThresholdCaseType::NumericWithMax);
    }

    #[test]
    fn test_unmatched_pair_falls_back_to_binary() {
        let case = classify_thresholds(Some("5seg"), Some("3%")).unwrap();
        assert_eq!(case.case_type(), ThresholdCaseType::SimpleBinary);
        assert!(case.is_fallback());
        assert_eq!(case.desired().unwrap().value, 5.0);
        assert!(case.worst().is_none());
    }

    #[test]
    fn test_absent_desired_falls_back() {
        let case = classify_thresholds(None, Some(">=3")).unwrap();
        assert!(case.is_fallback());
        assert!(case.desired().is_none());
    }

    #[test]
    fn test_unmatched_pair_rejected_when_strict() {
        let classifier = ThresholdClassifier::new(UnmatchedPairPolicy::Reject);
        let err = classifier.classify(Some("7"), None).unwrap_err();
        assert_eq!(
            err,
            ThresholdError::Unclassifiable {
                desired: Some("7".to_string()),
                worst: None,
            }
        );
        // Matching pairs are unaffected by the policy
        assert!(classifier.classify(Some("1"), None).is_ok());
    }

    #[test]
    fn test_parse_errors_surface_before_fallback() {
        assert_eq!(classify_thresholds(Some(""), None), Err(ThresholdError::Empty));
        assert!(matches!(
            classify_thresholds(Some("1"), Some("lots")),
            Err(ThresholdError::Malformed(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: classification never fails on well-formed input under the fallback policy
        #[test]
        fn test_well_formed_pairs_always_classify(
            d in 0u32..100,
            w in 0u32..100,
            unit in prop::sample::select(vec!["", "min", "seg", "%"]),
            op in prop::sample::select(vec!["", ">=", "<", "="]),
        ) {
            let desired = format!("{}{}", d, unit);
            let worst = format!("{}{}{}", op, w, unit);
            prop_assert!(classify_thresholds(Some(&desired), Some(&worst)).is_ok());
        }

        /// Property: a desired ratio with operator against a zero ratio is always case 2
        #[test]
        fn test_ratio_pairs(n in 1u32..1000, d in 1u32..1000) {
            let desired = format!(">={}/{}", n, d);
            let worst = format!("0/{}", d);
            let case = classify_thresholds(Some(&desired), Some(&worst)).unwrap();
            prop_assert_eq!(case.case_type(), crate::ThresholdCaseType::RatioWithMinThreshold);
        }
    }
}

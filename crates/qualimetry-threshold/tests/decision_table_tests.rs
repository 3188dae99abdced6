//! Decision-table coverage for the threshold classifier

use qualimetry_threshold::{
    classify_thresholds, ThresholdCase, ThresholdCaseType, ThresholdClassifier, ThresholdError,
    UnmatchedPairPolicy, Unit,
};

#[test]
fn test_every_case_has_a_representative_pair() {
    let table = [
        (Some("1"), None, ThresholdCaseType::SimpleBinary),
        (Some(">=10/20min"), Some("0/20min"), ThresholdCaseType::RatioWithMinThreshold),
        (Some("0/20min"), Some(">=5min"), ThresholdCaseType::InverseRatioWithMax),
        (Some("10min"), Some(">=30min"), ThresholdCaseType::TimeThreshold),
        (Some("0seg"), Some(">=60seg"), ThresholdCaseType::ZeroWithMaxThreshold),
        (Some("0%"), Some(">=25%"), ThresholdCaseType::PercentageWithMax),
        (Some("3"), Some(">=12"), ThresholdCaseType::NumericWithMax),
        (Some("4"), Some("0"), ThresholdCaseType::NumericWithMin),
    ];

    for (desired, worst, expected) in table {
        let case = classify_thresholds(desired, worst).unwrap();
        assert_eq!(case.case_type(), expected, "{:?} / {:?}", desired, worst);
        assert!(!case.is_fallback());
    }
}

#[test]
fn test_parsed_thresholds_travel_with_the_case() {
    match classify_thresholds(Some("0%"), Some(">=25%")).unwrap() {
        ThresholdCase::PercentageWithMax { desired, worst } => {
            assert_eq!(desired.value, 0.0);
            assert_eq!(worst.magnitude(), 25.0);
            assert_eq!(worst.unit, Some(Unit::Percent));
        }
        other => panic!("unexpected case {:?}", other),
    }
}

#[test]
fn test_fallback_keeps_only_desired() {
    let case = classify_thresholds(Some(">=3min"), Some("0seg")).unwrap();
    assert!(case.is_fallback());
    assert_eq!(case.desired().unwrap().magnitude(), 3.0);
    assert_eq!(case.worst(), None);
}

#[test]
fn test_strict_policy_rejects_unclassifiable_pairs() {
    let strict = ThresholdClassifier::new(UnmatchedPairPolicy::Reject);
    assert!(matches!(
        strict.classify(Some(">=3min"), Some("0seg")),
        Err(ThresholdError::Unclassifiable { .. })
    ));
}

#[test]
fn test_zero_denominator_is_a_parse_error() {
    assert!(matches!(
        classify_thresholds(Some(">=1/0"), Some("0/0")),
        Err(ThresholdError::ZeroDenominator(_))
    ));
}

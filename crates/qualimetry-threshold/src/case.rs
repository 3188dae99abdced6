//! The eight scoring cases a threshold pair can fall into

use crate::ThresholdSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of a [`ThresholdCase`] without its parsed thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdCaseType {
    /// Pass/fail formula scored as 0 or 10
    SimpleBinary,
    /// Higher numerator is better, floor at 0
    RatioWithMinThreshold,
    /// Lower numerator is better, ceiling at the worst case
    InverseRatioWithMax,
    /// Elapsed time measured directly
    TimeThreshold,
    /// Zero seconds is ideal, worst case is the failure ceiling
    ZeroWithMaxThreshold,
    /// Zero percent is ideal
    PercentageWithMax,
    /// Lower is better, ceiling at the worst case
    NumericWithMax,
    /// Higher is better, floor at 0
    NumericWithMin,
}

impl ThresholdCaseType {
    /// Every case, in decision-table order
    pub const ALL: [ThresholdCaseType; 8] = [
        ThresholdCaseType::SimpleBinary,
        ThresholdCaseType::RatioWithMinThreshold,
        ThresholdCaseType::InverseRatioWithMax,
        ThresholdCaseType::TimeThreshold,
        ThresholdCaseType::ZeroWithMaxThreshold,
        ThresholdCaseType::PercentageWithMax,
        ThresholdCaseType::NumericWithMax,
        ThresholdCaseType::NumericWithMin,
    ];

    /// Case name as stored and logged
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdCaseType::SimpleBinary => "SIMPLE_BINARY",
            ThresholdCaseType::RatioWithMinThreshold => "RATIO_WITH_MIN_THRESHOLD",
            ThresholdCaseType::InverseRatioWithMax => "INVERSE_RATIO_WITH_MAX",
            ThresholdCaseType::TimeThreshold => "TIME_THRESHOLD",
            ThresholdCaseType::ZeroWithMaxThreshold => "ZERO_WITH_MAX_THRESHOLD",
            ThresholdCaseType::PercentageWithMax => "PERCENTAGE_WITH_MAX",
            ThresholdCaseType::NumericWithMax => "NUMERIC_WITH_MAX",
            ThresholdCaseType::NumericWithMin => "NUMERIC_WITH_MIN",
        }
    }

    /// Parse a case from its stored name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|case| case.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for ThresholdCaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified threshold pair carrying its parsed thresholds
///
/// Every variant except `SimpleBinary` has both thresholds present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "case_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdCase {
    /// Pass/fail; also the fallback for unmatched pairs
    SimpleBinary {
        /// Desired threshold, if any
        desired: Option<ThresholdSpec>,
        /// Whether this case was chosen because no rule matched
        fallback: bool,
    },
    /// `>=N/D` against `0/D`
    RatioWithMinThreshold {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `0/D` against `>=N`
    InverseRatioWithMax {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `Dmin` against `>=Wmin`
    TimeThreshold {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `0seg` against `>=Wseg`
    ZeroWithMaxThreshold {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `0%` against `>=W%`
    PercentageWithMax {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `D` against `>=W`
    NumericWithMax {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
    /// `D` against `0`
    NumericWithMin {
        /// Desired threshold
        desired: ThresholdSpec,
        /// Worst-case threshold
        worst: ThresholdSpec,
    },
}

impl ThresholdCase {
    /// Tag of this case
    pub fn case_type(&self) -> ThresholdCaseType {
        match self {
            ThresholdCase::SimpleBinary { .. } => ThresholdCaseType::SimpleBinary,
            ThresholdCase::RatioWithMinThreshold { .. } => ThresholdCaseType::RatioWithMinThreshold,
            ThresholdCase::InverseRatioWithMax { .. } => ThresholdCaseType::InverseRatioWithMax,
            ThresholdCase::TimeThreshold { .. } => ThresholdCaseType::TimeThreshold,
            ThresholdCase::ZeroWithMaxThreshold { .. } => ThresholdCaseType::ZeroWithMaxThreshold,
            ThresholdCase::PercentageWithMax { .. } => ThresholdCaseType::PercentageWithMax,
            ThresholdCase::NumericWithMax { .. } => ThresholdCaseType::NumericWithMax,
            ThresholdCase::NumericWithMin { .. } => ThresholdCaseType::NumericWithMin,
        }
    }

    /// Desired threshold
    pub fn desired(&self) -> Option<&ThresholdSpec> {
        match self {
            ThresholdCase::SimpleBinary { desired, .. } => desired.as_ref(),
            ThresholdCase::RatioWithMinThreshold { desired, .. }
            | ThresholdCase::InverseRatioWithMax { desired, .. }
            | ThresholdCase::TimeThreshold { desired, .. }
            | ThresholdCase::ZeroWithMaxThreshold { desired, .. }
            | ThresholdCase::PercentageWithMax { desired, .. }
            | ThresholdCase::NumericWithMax { desired, .. }
            | ThresholdCase::NumericWithMin { desired, .. } => Some(desired),
        }
    }

    /// Worst-case threshold
    pub fn worst(&self) -> Option<&ThresholdSpec> {
        match self {
            ThresholdCase::SimpleBinary { .. } => None,
            ThresholdCase::RatioWithMinThreshold { worst, .. }
            | ThresholdCase::InverseRatioWithMax { worst, .. }
            | ThresholdCase::TimeThreshold { worst, .. }
            | ThresholdCase::ZeroWithMaxThreshold { worst, .. }
            | ThresholdCase::PercentageWithMax { worst, .. }
            | ThresholdCase::NumericWithMax { worst, .. }
            | ThresholdCase::NumericWithMin { worst, .. } => Some(worst),
        }
    }

    /// Whether the pair matched no rule and fell back to `SimpleBinary`
    pub fn is_fallback(&self) -> bool {
        matches!(self, ThresholdCase::SimpleBinary { fallback: true, .. })
    }
}

//! Qualimetry Threshold Classifier
//!
//! Every metric carries a *desired* and a *worst-case* threshold written by
//! hand, e.g. `">=10/20min"` and `"0/20min"`. This crate parses those
//! strings and classifies the pair into one of eight scoring policies.
//!
//! # Grammar
//!
//! ```text
//! spec     → operator? (ratio | number) unit?
//! operator → ">=" | "<=" | ">" | "<" | "="
//! ratio    → number "/" number
//! unit     → "min" | "seg" | "%"
//! ```
//!
//! Whitespace is tolerated between tokens.
//!
//! # Cases
//!
//! | Case | Desired | Worst |
//! |------|---------|-------|
//! | `SIMPLE_BINARY` | `0` or `1` | absent |
//! | `RATIO_WITH_MIN_THRESHOLD` | `>=N/D` | `0/D` |
//! | `INVERSE_RATIO_WITH_MAX` | `0/D` | `>=N` |
//! | `TIME_THRESHOLD` | `Dmin` | `>=Wmin` |
//! | `ZERO_WITH_MAX_THRESHOLD` | `0seg` | `>=Wseg` |
//! | `PERCENTAGE_WITH_MAX` | `0%` | `>=W%` |
//! | `NUMERIC_WITH_MAX` | `D` | `>=W` |
//! | `NUMERIC_WITH_MIN` | `D` | `0` |
//!
//! ```
//! use qualimetry_threshold::{classify_thresholds, ThresholdCaseType};
//!
//! let case = classify_thresholds(Some(">=10/20min"), Some("0/20min")).unwrap();
//! assert_eq!(case.case_type(), ThresholdCaseType::RatioWithMinThreshold);
//! ```

#![warn(missing_docs)]

mod case;
mod classifier;
mod error;
mod spec;

pub use case::{ThresholdCase, ThresholdCaseType};
pub use classifier::{classify_thresholds, ThresholdClassifier, UnmatchedPairPolicy};
pub use error::ThresholdError;
pub use spec::{Comparison, ThresholdSpec, Unit};

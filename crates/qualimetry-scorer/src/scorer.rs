//! Metric scoring

use crate::policy::weighted_value;
use crate::{ScorerConfig, ScoringError};
use qualimetry_domain::{round_to, MetricScore, VariableBinding, MAX_SCORE};
use qualimetry_formula::{FormulaError, FormulaEvaluator};
use qualimetry_threshold::{ThresholdCase, ThresholdCaseType, ThresholdClassifier};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of scoring one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Case the threshold pair was classified into
    pub case: ThresholdCase,

    /// Calculated and weighted values
    pub score: MetricScore,

    /// Whether the bare-symbol shortcut replaced formula evaluation
    pub shortcut: bool,

    /// Whether clamping changed the weighted value
    pub clamped: bool,
}

/// Scores metrics by combining a formula evaluator and a threshold classifier
#[derive(Debug, Clone)]
pub struct MetricScorer {
    evaluator: FormulaEvaluator,
    classifier: ThresholdClassifier,
    config: ScorerConfig,
}

impl Default for MetricScorer {
    fn default() -> Self {
        Self::from_config(ScorerConfig::default())
    }
}

impl MetricScorer {
    /// Create a scorer from explicit collaborators
    ///
    /// The evaluator and classifier are used as given; only the scorer's own
    /// settings (`clamp_weighted`, `single_symbol_shortcut`) are read from
    /// `config`.
    pub fn new(evaluator: FormulaEvaluator, classifier: ThresholdClassifier, config: ScorerConfig) -> Self {
        Self {
            evaluator,
            classifier,
            config,
        }
    }

    /// Create a scorer whose collaborators are built from `config`
    pub fn from_config(config: ScorerConfig) -> Self {
        let evaluator = FormulaEvaluator::new(config.formula.clone());
        let classifier = ThresholdClassifier::new(config.unmatched_pair);
        Self::new(evaluator, classifier, config)
    }

    /// Get the scorer configuration
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Get the threshold classifier
    pub fn classifier(&self) -> &ThresholdClassifier {
        &self.classifier
    }

    /// Get the formula evaluator
    pub fn evaluator(&self) -> &FormulaEvaluator {
        &self.evaluator
    }

    /// Classify the thresholds and score the metric
    pub fn score(
        &self,
        formula: &str,
        variables: &[VariableBinding],
        desired: Option<&str>,
        worst: Option<&str>,
    ) -> Result<ScoreReport, ScoringError> {
        let case = self.classifier.classify(desired, worst)?;
        if case.is_fallback() {
            warn!(
                desired = desired.unwrap_or("<none>"),
                worst = worst.unwrap_or("<none>"),
                "No threshold rule matched; scoring as SIMPLE_BINARY"
            );
        }
        self.score_case(case, formula, variables)
    }

    /// Score a metric whose thresholds are already classified
    pub fn score_case(
        &self,
        case: ThresholdCase,
        formula: &str,
        variables: &[VariableBinding],
    ) -> Result<ScoreReport, ScoringError> {
        let kind = case.case_type();

        let (calculated, shortcut) = match kind {
            ThresholdCaseType::RatioWithMinThreshold | ThresholdCaseType::InverseRatioWithMax => {
                (self.ratio_variable(kind, variables)?, false)
            }
            ThresholdCaseType::PercentageWithMax
            | ThresholdCaseType::NumericWithMax
            | ThresholdCaseType::NumericWithMin => self.shortcut_or_evaluate(formula, variables)?,
            ThresholdCaseType::SimpleBinary
            | ThresholdCaseType::TimeThreshold
            | ThresholdCaseType::ZeroWithMaxThreshold => {
                (self.evaluator.evaluate(formula, variables)?, false)
            }
        };

        let raw = weighted_value(&case, calculated)?;
        let bounded = if self.config.clamp_weighted {
            raw.clamp(0.0, MAX_SCORE)
        } else {
            raw
        };
        let clamped = bounded != raw;
        let weighted = round_to(bounded, self.evaluator.config().decimals);

        debug!(
            case = %kind,
            calculated,
            weighted,
            shortcut,
            clamped,
            "Metric scored"
        );

        Ok(ScoreReport {
            case,
            score: MetricScore::new(calculated, weighted),
            shortcut,
            clamped,
        })
    }

    /// Ratio cases read the measured numerator directly: the binding named
    /// `A` when present, otherwise the first binding.
    fn ratio_variable(&self, kind: ThresholdCaseType, variables: &[VariableBinding]) -> Result<f64, ScoringError> {
        let binding = variables
            .iter()
            .find(|v| v.symbol == "A")
            .or_else(|| variables.first())
            .ok_or(ScoringError::MissingVariable(kind))?;

        if !binding.value.is_finite() {
            return Err(FormulaError::NonFiniteVariable(binding.symbol.clone()).into());
        }
        Ok(round_to(binding.value, self.evaluator.config().decimals))
    }

    fn shortcut_or_evaluate(&self, formula: &str, variables: &[VariableBinding]) -> Result<(f64, bool), ScoringError> {
        if self.config.single_symbol_shortcut {
            if let Some(value) = single_symbol_value(formula, variables) {
                if !value.is_finite() {
                    return Err(FormulaError::NonFiniteVariable(formula.trim().to_string()).into());
                }
                return Ok((round_to(value, self.evaluator.config().decimals), true));
            }
        }
        Ok((self.evaluator.evaluate(formula, variables)?, false))
    }
}

/// Value of a bare single-letter formula bound to exactly one variable
fn single_symbol_value(formula: &str, variables: &[VariableBinding]) -> Option<f64> {
    let symbol = formula.trim();
    let mut chars = symbol.chars();
    let is_single_letter = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic());

    match variables {
        [only] if is_single_letter && only.symbol == symbol => Some(only.value),
        _ => None,
    }
}

/// Score a metric with the default configuration
pub fn score_metric(
    formula: &str,
    variables: &[VariableBinding],
    desired: Option<&str>,
    worst: Option<&str>,
) -> Result<MetricScore, ScoringError> {
    MetricScorer::default()
        .score(formula, variables, desired, worst)
        .map(|report| report.score)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: with clamping on, every case yields a weighted value in [0, 10]
        #[test]
        fn test_weighted_is_bounded(
            x in 0.0f64..200.0,
            pair in prop::sample::select(vec![
                ("1", None),
                (">=10/20min", Some("0/20min")),
                ("0/20min", Some(">=5min")),
                ("10min", Some(">=30min")),
                ("0seg", Some(">=60seg")),
                ("0%", Some(">=20%")),
                ("2", Some(">=10")),
                ("4", Some("0")),
            ]),
        ) {
            let score = score_metric("A", &[VariableBinding::new("A", x)], Some(pair.0), pair.1).unwrap();
            prop_assert!((0.0..=MAX_SCORE).contains(&score.weighted_value));
        }

        /// Property: the shortcut and the full evaluator agree
        #[test]
        fn test_shortcut_is_equivalent(x in -1.0e4f64..1.0e4) {
            let vars = [VariableBinding::new("A", x)];
            let with = MetricScorer::default().score("A", &vars, Some("2"), Some(">=10")).unwrap();
            let without = MetricScorer::from_config(ScorerConfig {
                single_symbol_shortcut: false,
                ..ScorerConfig::default()
            })
            .score("A", &vars, Some("2"), Some(">=10"))
            .unwrap();
            prop_assert_eq!(with.score, without.score);
        }
    }
}

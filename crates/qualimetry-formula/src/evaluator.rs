//! Formula evaluation entry points

use crate::guard::{check_charset, check_forbidden};
use crate::parser::Parser;
use crate::substitute::{binding_table, substitute};
use crate::{FormulaConfig, FormulaError};
use qualimetry_domain::{round_to, VariableBinding};

/// Evaluates metric formulas over variable bindings
#[derive(Debug, Clone, Default)]
pub struct FormulaEvaluator {
    config: FormulaConfig,
}

impl FormulaEvaluator {
    /// Create a new evaluator with the given configuration
    pub fn new(config: FormulaConfig) -> Self {
        Self { config }
    }

    /// Get the evaluator's configuration
    pub fn config(&self) -> &FormulaConfig {
        &self.config
    }

    /// Evaluate `formula` with `variables` bound, rounded to the configured decimals
    ///
    /// # Errors
    ///
    /// Returns a parse-class [`FormulaError`] for empty formulas, forbidden
    /// tokens, unbound symbols, disallowed characters and malformed syntax,
    /// and an evaluation-class one for division by zero or overflow.
    pub fn evaluate(&self, formula: &str, variables: &[VariableBinding]) -> Result<f64, FormulaError> {
        let expression = self.substitute(formula, variables)?;
        let value = Parser::new(&expression, self.config.max_nesting).evaluate()?;
        let rounded = round_to(value, self.config.decimals);
        if !rounded.is_finite() {
            return Err(FormulaError::NonFiniteResult);
        }
        Ok(rounded)
    }

    /// Produce the purely numeric expression that [`Self::evaluate`] parses
    ///
    /// ```
    /// use qualimetry_domain::VariableBinding;
    /// use qualimetry_formula::FormulaEvaluator;
    ///
    /// let evaluator = FormulaEvaluator::default();
    /// let vars = [VariableBinding::new("A", 3.0), VariableBinding::new("B", 4.0)];
    /// assert_eq!(evaluator.substitute("(A/B)*100", &vars).unwrap(), "(3/4)*100");
    /// ```
    pub fn substitute(&self, formula: &str, variables: &[VariableBinding]) -> Result<String, FormulaError> {
        check_forbidden(formula)?;
        let table = binding_table(variables)?;
        let expression = substitute(formula, &table)?;
        check_charset(&expression)?;
        Ok(expression)
    }
}

/// Evaluate a formula with the default configuration
pub fn evaluate_formula(formula: &str, variables: &[VariableBinding]) -> Result<f64, FormulaError> {
    FormulaEvaluator::default().evaluate(formula, variables)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: evaluation is deterministic for a fixed formula and bindings
        #[test]
        fn test_evaluation_is_deterministic(
            a in -1.0e6f64..1.0e6,
            b in 1.0f64..1.0e3,
        ) {
            let v = vec![VariableBinding::new("A", a), VariableBinding::new("B", b)];
            let first = evaluate_formula("(A/B)*100 - A", &v);
            let second = evaluate_formula("(A/B)*100 - A", &v);
            prop_assert_eq!(first, second);
        }

        /// Property: results never carry more than four decimals
        #[test]
        fn test_result_is_rounded(a in 0.0f64..1.0e4, b in 1.0f64..1.0e4) {
            let v = vec![VariableBinding::new("A", a), VariableBinding::new("B", b)];
            let value = evaluate_formula("A/B", &v).unwrap();
            prop_assert_eq!(value, round_to(value, 4));
        }

        /// Property: a single bound symbol evaluates to its rounded value
        #[test]
        fn test_single_symbol_identity(a in -1.0e6f64..1.0e6) {
            let v = vec![VariableBinding::new("X", a)];
            prop_assert_eq!(evaluate_formula("X", &v).unwrap(), round_to(a, 4));
        }
    }
}

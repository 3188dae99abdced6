//! Formula error types

use thiserror::Error;

/// Errors raised while parsing or evaluating a formula
///
/// Every variant is deterministic for a given formula and binding set, so
/// none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    /// Formula is empty or only whitespace
    #[error("Formula is empty")]
    Empty,

    /// Formula contains a blacklisted token
    #[error("Formula contains forbidden token '{0}'")]
    ForbiddenToken(String),

    /// A symbol in the formula has no binding
    #[error("Variable '{0}' has no value")]
    UnboundVariable(String),

    /// The same symbol was bound twice
    #[error("Variable '{0}' is bound more than once")]
    DuplicateVariable(String),

    /// A binding value is NaN or infinite
    #[error("Variable '{0}' has a non-finite value")]
    NonFiniteVariable(String),

    /// A character outside digits, '.', parentheses and + - * / remains
    #[error("Disallowed character '{0}' in formula")]
    DisallowedCharacter(char),

    /// Parentheses do not pair up
    #[error("Unbalanced parentheses in formula")]
    UnbalancedParentheses,

    /// A token appeared where the grammar does not allow it
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken {
        /// The offending character
        found: char,
        /// Byte offset in the formula, or in the substituted expression
        position: usize,
    },

    /// The expression ended where an operand was expected
    #[error("Unexpected end of formula")]
    UnexpectedEnd,

    /// A numeric literal could not be read
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),

    /// Nesting of parentheses or unary signs exceeds the configured limit
    #[error("Formula nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    /// Right-hand side of a division evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Evaluation overflowed to infinity or produced NaN
    #[error("Formula result is not a finite number")]
    NonFiniteResult,
}

impl FormulaError {
    /// Whether this is an evaluation failure rather than a parse failure
    ///
    /// ```
    /// use qualimetry_formula::FormulaError;
    ///
    /// assert!(FormulaError::DivisionByZero.is_evaluation_error());
    /// assert!(!FormulaError::Empty.is_evaluation_error());
    /// ```
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, FormulaError::DivisionByZero | FormulaError::NonFiniteResult)
    }
}

//! Qualimetry Formula Evaluator
//!
//! Evaluates the restricted arithmetic formulas attached to metrics, such as
//! `(A/B)*100` or `B-A`, after binding their symbols to measured values.
//!
//! # Pipeline
//!
//! ```text
//! formula → guard (forbidden tokens) → substitute symbols → charset check → parse + evaluate → round
//! ```
//!
//! No general-purpose code evaluation is involved: the only accepted
//! grammar is
//!
//! ```text
//! expression → term (('+' | '-') term)*
//! term       → factor (('*' | '/') factor)*
//! factor     → number | '(' expression ')' | ('+' | '-') factor
//! ```
//!
//! # Example
//!
//! ```
//! use qualimetry_domain::VariableBinding;
//! use qualimetry_formula::evaluate_formula;
//!
//! let vars = [VariableBinding::new("a", 10.0), VariableBinding::new("b", 3.0)];
//! assert_eq!(evaluate_formula("a/b", &vars).unwrap(), 3.3333);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;
mod guard;
mod parser;
mod substitute;

pub use config::FormulaConfig;
pub use error::FormulaError;
pub use evaluator::{evaluate_formula, FormulaEvaluator};

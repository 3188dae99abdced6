//! Formula variable bindings

use serde::{Deserialize, Serialize};

/// A named placeholder in a metric formula bound to a measured value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBinding {
    /// Case-sensitive symbol as it appears in the formula
    pub symbol: String,

    /// Measured value
    pub value: f64,
}

impl VariableBinding {
    /// Create a new binding
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for VariableBinding {
    fn from((symbol, value): (S, f64)) -> Self {
        Self::new(symbol, value)
    }
}

//! Configuration for the formula evaluator

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::FormulaEvaluator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    /// Decimal places the final result is rounded to
    pub decimals: u32,

    /// Maximum depth of nested parentheses and unary signs
    pub max_nesting: usize,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            decimals: 4,
            max_nesting: 64,
        }
    }
}

impl FormulaConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.decimals > 12 {
            return Err("decimals must be at most 12".to_string());
        }
        if self.max_nesting == 0 {
            return Err("max_nesting must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FormulaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_nesting_is_invalid() {
        let config = FormulaConfig {
            max_nesting: 0,
            ..FormulaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FormulaConfig = toml::from_str("decimals = 2").unwrap();
        assert_eq!(config.decimals, 2);
        assert_eq!(config.max_nesting, 64);
    }
}

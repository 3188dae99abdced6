//! Configuration for the metric scorer

use qualimetry_formula::FormulaConfig;
use qualimetry_threshold::UnmatchedPairPolicy;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::MetricScorer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Clamp weighted values into [0, 10]
    pub clamp_weighted: bool,

    /// Read a bare single-letter formula straight from its only binding
    pub single_symbol_shortcut: bool,

    /// Policy for threshold pairs no rule matches
    pub unmatched_pair: UnmatchedPairPolicy,

    /// Formula evaluator settings
    pub formula: FormulaConfig,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            clamp_weighted: true,
            single_symbol_shortcut: true,
            unmatched_pair: UnmatchedPairPolicy::FallbackBinary,
            formula: FormulaConfig::default(),
        }
    }
}

impl ScorerConfig {
    /// Strict preset: unclassifiable threshold pairs are errors
    pub fn strict() -> Self {
        Self {
            unmatched_pair: UnmatchedPairPolicy::Reject,
            ..Self::default()
        }
    }

    /// Lenient preset: trust the case guards and report raw weighted values
    pub fn lenient() -> Self {
        Self {
            clamp_weighted: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.formula.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

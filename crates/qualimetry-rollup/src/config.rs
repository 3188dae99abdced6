//! Configuration for the roll-up pipeline

use serde::{Deserialize, Serialize};

/// How metric failures inside one evaluation are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Abort the whole recomputation on the first failing metric
    #[default]
    StopOnFirstError,
    /// Leave failing metrics out of their criterion and report them
    SkipFailedMetrics,
}

/// Configuration for [`crate::EvaluationPipeline`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollupConfig {
    /// Handling of per-metric scoring failures
    pub failure_policy: FailurePolicy,

    /// Reject evaluations whose criteria importance does not sum to 100
    pub enforce_importance_sum: bool,

    /// Allowed deviation from 100 when enforcing the importance sum
    pub importance_tolerance: f64,

    /// Recompute the project score after committing an evaluation
    pub recompute_project: bool,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::StopOnFirstError,
            enforce_importance_sum: true,
            importance_tolerance: 0.01,
            recompute_project: true,
        }
    }
}

impl RollupConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.importance_tolerance.is_finite() || self.importance_tolerance < 0.0 {
            return Err("importance_tolerance must be a non-negative number".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

//! Pre-loaded configuration for one evaluation
//!
//! The persistence layer assembles a plan from its projects, criteria,
//! metrics and measurements; the engine never reads storage directly.

use crate::{CriterionId, EvaluationId, MetricId, ProjectId, VariableBinding};
use serde::{Deserialize, Serialize};

/// Everything needed to score one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPlan {
    /// Evaluation being scored
    pub evaluation_id: EvaluationId,

    /// Owning project
    pub project_id: ProjectId,

    /// Project's minimum acceptable threshold as a percentage (0–100)
    pub minimum_threshold: f64,

    /// Criteria selected for this evaluation
    pub criteria: Vec<CriterionPlan>,
}

/// A criterion and the metrics measured under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionPlan {
    /// Criterion identifier
    pub criterion_id: CriterionId,

    /// Display name
    pub name: String,

    /// Relative weight within the evaluation (0–100)
    pub importance_percentage: f64,

    /// Metrics measured for this criterion
    pub metrics: Vec<MetricPlan>,
}

/// A metric definition together with its measured variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPlan {
    /// Metric identifier
    pub metric_id: MetricId,

    /// Display name
    pub name: String,

    /// Arithmetic formula over the variable symbols
    pub formula: String,

    /// Desired threshold text (e.g. `">=10/20min"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_threshold: Option<String>,

    /// Worst-case threshold text (e.g. `"0/20min"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_case: Option<String>,

    /// Measured values for the formula's symbols
    pub variables: Vec<VariableBinding>,
}

impl EvaluationPlan {
    /// Total number of metrics across all criteria
    pub fn metric_count(&self) -> usize {
        self.criteria.iter().map(|c| c.metrics.len()).sum()
    }

    /// Sum of the criteria importance percentages
    pub fn importance_sum(&self) -> f64 {
        self.criteria.iter().map(|c| c.importance_percentage).sum()
    }
}

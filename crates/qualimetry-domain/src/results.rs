//! Result records produced by each stage of the roll-up
//!
//! Every record is immutable once produced and owned by the single step that
//! computes it. Recomputation replaces records wholesale.

use crate::{
    CriterionId, EvaluationId, MetricId, ProjectId, ScoreClassification,
};
use serde::{Deserialize, Serialize};

/// Score of a single metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    /// Raw value produced by the formula (or the bound variable)
    pub calculated_value: f64,

    /// Value normalized to the 0–10 scale by the threshold case
    pub weighted_value: f64,
}

impl MetricScore {
    /// Create a new metric score
    pub fn new(calculated_value: f64, weighted_value: f64) -> Self {
        Self {
            calculated_value,
            weighted_value,
        }
    }
}

/// Persisted score of one metric within one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Metric that was scored
    pub metric_id: MetricId,

    /// Criterion the metric belongs to
    pub criterion_id: CriterionId,

    /// Evaluation the measurement belongs to
    pub evaluation_id: EvaluationId,

    /// The computed score
    pub score: MetricScore,
}

/// Weighted score of one criterion within one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Criterion that was aggregated
    pub criterion_id: CriterionId,

    /// Evaluation the criterion belongs to
    pub evaluation_id: EvaluationId,

    /// Importance percentage used for weighting (0–100)
    pub importance_percentage: f64,

    /// Average weighted metric value scaled by importance
    pub final_score: f64,
}

/// Score of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Evaluation that was aggregated
    pub evaluation_id: EvaluationId,

    /// Project the evaluation belongs to
    pub project_id: ProjectId,

    /// Sum of criterion final scores
    pub evaluation_score: f64,

    /// Level and grade relative to the project's minimum threshold
    pub classification: ScoreClassification,
}

/// Score of a project across all its evaluations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    /// Project that was aggregated
    pub project_id: ProjectId,

    /// Average of evaluation scores
    pub final_project_score: f64,

    /// Number of evaluations that contributed
    pub evaluation_count: usize,

    /// Level and grade relative to the project's minimum threshold
    pub classification: ScoreClassification,
}

/// Full result set of one evaluation recomputation
///
/// Stores must persist this as one unit so a partially computed result set
/// is never visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecords {
    /// Metric-level results
    pub metrics: Vec<MetricResult>,

    /// Criterion-level results
    pub criteria: Vec<CriterionResult>,

    /// Evaluation-level result
    pub evaluation: EvaluationResult,
}

//! Trait definitions for external interactions
//!
//! Persistence and transactions belong to the caller. These traits define
//! the boundary the roll-up pipeline reads plans from and commits results to.

use crate::{EvaluationId, EvaluationPlan, EvaluationRecords, EvaluationResult, ProjectId, ProjectResult};

/// Trait for loading evaluation plans and storing computed results
///
/// Implementations must make each `commit_*` call atomic: either the whole
/// record set replaces the previous one or nothing changes.
pub trait ScoreStore {
    /// Error type for store operations
    type Error;

    /// Load the plan for an evaluation
    fn load_plan(&self, evaluation_id: EvaluationId) -> Result<Option<EvaluationPlan>, Self::Error>;

    /// Replace every stored result of an evaluation
    fn commit_evaluation(&mut self, records: EvaluationRecords) -> Result<(), Self::Error>;

    /// Get the committed evaluation results of a project
    fn evaluation_results(&self, project_id: ProjectId) -> Result<Vec<EvaluationResult>, Self::Error>;

    /// Get a project's minimum threshold percentage
    fn minimum_threshold(&self, project_id: ProjectId) -> Result<Option<f64>, Self::Error>;

    /// Replace the stored result of a project
    fn commit_project(&mut self, result: ProjectResult) -> Result<(), Self::Error>;
}

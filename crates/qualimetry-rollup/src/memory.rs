//! In-memory score store

use qualimetry_domain::traits::ScoreStore;
use qualimetry_domain::{
    EvaluationId, EvaluationPlan, EvaluationRecords, EvaluationResult, MetricResult,
    ProjectId, ProjectResult,
};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur in [`InMemoryStore`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Project was never registered
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Records reference an evaluation the store has no plan for
    #[error("Evaluation not found: {0}")]
    EvaluationNotFound(EvaluationId),

    /// Records are internally inconsistent
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// [`ScoreStore`] backed by hash maps
///
/// Each commit replaces the previous record set of the same evaluation or
/// project wholesale, so repeated recomputation leaves exactly one result
/// per entity.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    thresholds: HashMap<ProjectId, f64>,
    plans: HashMap<EvaluationId, EvaluationPlan>,
    evaluations: HashMap<EvaluationId, EvaluationRecords>,
    projects: HashMap<ProjectId, ProjectResult>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project and its minimum threshold percentage
    pub fn add_project(&mut self, project_id: ProjectId, minimum_threshold: f64) {
        self.thresholds.insert(project_id, minimum_threshold);
    }

    /// Register an evaluation plan, replacing any previous plan
    ///
    /// The plan's project is registered with the plan's threshold if it is
    /// not known yet.
    pub fn add_plan(&mut self, plan: EvaluationPlan) {
        self.thresholds
            .entry(plan.project_id)
            .or_insert(plan.minimum_threshold);
        self.plans.insert(plan.evaluation_id, plan);
    }

    /// Get the committed records of an evaluation
    pub fn records(&self, evaluation_id: EvaluationId) -> Option<&EvaluationRecords> {
        self.evaluations.get(&evaluation_id)
    }

    /// Get the committed metric results of an evaluation
    pub fn metric_results(&self, evaluation_id: EvaluationId) -> &[MetricResult] {
        self.evaluations
            .get(&evaluation_id)
            .map(|r| r.metrics.as_slice())
            .unwrap_or_default()
    }

    /// Get the committed result of a project
    pub fn project_result(&self, project_id: ProjectId) -> Option<&ProjectResult> {
        self.projects.get(&project_id)
    }

    /// Number of evaluations with committed records
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }
}

impl ScoreStore for InMemoryStore {
    type Error = StoreError;

    fn load_plan(&self, evaluation_id: EvaluationId) -> Result<Option<EvaluationPlan>, Self::Error> {
        Ok(self.plans.get(&evaluation_id).cloned())
    }

    fn commit_evaluation(&mut self, records: EvaluationRecords) -> Result<(), Self::Error> {
        let evaluation_id = records.evaluation.evaluation_id;
        let project_id = records.evaluation.project_id;

        if !self.thresholds.contains_key(&project_id) {
            return Err(StoreError::ProjectNotFound(project_id));
        }
        if !self.plans.contains_key(&evaluation_id) {
            return Err(StoreError::EvaluationNotFound(evaluation_id));
        }
        let foreign = records
            .metrics
            .iter()
            .map(|m| m.evaluation_id)
            .chain(records.criteria.iter().map(|c| c.evaluation_id))
            .find(|id| *id != evaluation_id);
        if let Some(other) = foreign {
            return Err(StoreError::InvalidData(format!(
                "record for evaluation {} in commit of {}",
                other, evaluation_id
            )));
        }

        self.evaluations.insert(evaluation_id, records);
        Ok(())
    }

    fn evaluation_results(&self, project_id: ProjectId) -> Result<Vec<EvaluationResult>, Self::Error> {
        let mut results: Vec<EvaluationResult> = self
            .evaluations
            .values()
            .filter(|r| r.evaluation.project_id == project_id)
            .map(|r| r.evaluation.clone())
            .collect();
        // Stable order keeps floating-point sums reproducible
        results.sort_by_key(|r| r.evaluation_id);
        Ok(results)
    }

    fn minimum_threshold(&self, project_id: ProjectId) -> Result<Option<f64>, Self::Error> {
        Ok(self.thresholds.get(&project_id).copied())
    }

    fn commit_project(&mut self, result: ProjectResult) -> Result<(), Self::Error> {
        if !self.thresholds.contains_key(&result.project_id) {
            return Err(StoreError::ProjectNotFound(result.project_id));
        }
        self.projects.insert(result.project_id, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualimetry_domain::{SatisfactionGrade, ScoreClassification, ScoreLevel};

    fn classification() -> ScoreClassification {
        ScoreClassification {
            score_level: ScoreLevel::TargetRange,
            satisfaction_grade: SatisfactionGrade::Satisfactory,
        }
    }

    fn plan(project_id: ProjectId) -> EvaluationPlan {
        EvaluationPlan {
            evaluation_id: EvaluationId::new(),
            project_id,
            minimum_threshold: 80.0,
            criteria: Vec::new(),
        }
    }

    fn records(plan: &EvaluationPlan, score: f64) -> EvaluationRecords {
        EvaluationRecords {
            metrics: Vec::new(),
            criteria: Vec::new(),
            evaluation: EvaluationResult {
                evaluation_id: plan.evaluation_id,
                project_id: plan.project_id,
                evaluation_score: score,
                classification: classification(),
            },
        }
    }

    #[test]
    fn test_add_plan_registers_project() {
        let mut store = InMemoryStore::new();
        let plan = plan(ProjectId::new());
        let project_id = plan.project_id;
        let evaluation_id = plan.evaluation_id;
        store.add_plan(plan);

        assert_eq!(store.minimum_threshold(project_id).unwrap(), Some(80.0));
        assert!(store.load_plan(evaluation_id).unwrap().is_some());
        assert!(store.load_plan(EvaluationId::new()).unwrap().is_none());
    }

    #[test]
    fn test_commit_overwrites() {
        let mut store = InMemoryStore::new();
        let plan = plan(ProjectId::new());
        store.add_plan(plan.clone());

        store.commit_evaluation(records(&plan, 5.0)).unwrap();
        store.commit_evaluation(records(&plan, 7.0)).unwrap();

        let results = store.evaluation_results(plan.project_id).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].evaluation_score, 7.0);
        assert_eq!(store.evaluation_count(), 1);
    }

    #[test]
    fn test_commit_requires_plan() {
        let mut store = InMemoryStore::new();
        let project_id = ProjectId::new();
        store.add_project(project_id, 80.0);
        let orphan = plan(project_id);

        assert_eq!(
            store.commit_evaluation(records(&orphan, 5.0)),
            Err(StoreError::EvaluationNotFound(orphan.evaluation_id))
        );
    }

    #[test]
    fn test_results_sorted_by_evaluation() {
        let mut store = InMemoryStore::new();
        let project_id = ProjectId::new();
        let plans: Vec<_> = (0..5).map(|_| plan(project_id)).collect();
        for p in plans.iter().rev() {
            store.add_plan(p.clone());
            store.commit_evaluation(records(p, 1.0)).unwrap();
        }

        let ids: Vec<_> = store
            .evaluation_results(project_id)
            .unwrap()
            .iter()
            .map(|r| r.evaluation_id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_commit_project_unknown() {
        let mut store = InMemoryStore::new();
        let result = ProjectResult {
            project_id: ProjectId::new(),
            final_project_score: 5.0,
            evaluation_count: 1,
            classification: classification(),
        };
        assert!(matches!(
            store.commit_project(result),
            Err(StoreError::ProjectNotFound(_))
        ));
    }
}

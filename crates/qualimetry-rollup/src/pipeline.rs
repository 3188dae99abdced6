//! Recomputation of evaluation and project results
//!
//! [`EvaluationPipeline::compute`] is pure: it scores every metric of a plan
//! and aggregates upward without touching storage. [`EvaluationPipeline::recompute`]
//! wraps it with one load and one atomic commit per level.

use crate::aggregate::{aggregate_criterion, aggregate_evaluation, aggregate_project, validate_importance};
use crate::classify::ScoreBands;
use crate::{AggregationError, FailurePolicy, RollupConfig};
use qualimetry_domain::traits::ScoreStore;
use qualimetry_domain::{
    CriterionId, CriterionPlan, CriterionResult, EvaluationId, EvaluationPlan, EvaluationRecords,
    EvaluationResult, MetricId, MetricResult, ProjectId, ProjectResult,
};
use qualimetry_scorer::{MetricScorer, ScoreReport, ScoringError};
use serde::Serialize;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Scoring report of one metric, kept alongside the committed records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    /// Metric that was scored
    pub metric_id: MetricId,

    /// Criterion the metric belongs to
    pub criterion_id: CriterionId,

    /// Metric display name
    pub name: String,

    /// Case, score and flags from the scorer
    pub report: ScoreReport,
}

/// A metric left out under [`FailurePolicy::SkipFailedMetrics`]
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFailure {
    /// Metric that failed
    pub metric_id: MetricId,

    /// Criterion the metric belongs to
    pub criterion_id: CriterionId,

    /// Metric display name
    pub metric_name: String,

    /// Why scoring failed
    pub error: ScoringError,
}

/// Everything computed for one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationOutcome {
    /// Records to commit as one unit
    pub records: EvaluationRecords,

    /// Per-metric scoring reports in plan order
    pub reports: Vec<MetricReport>,

    /// Metrics skipped because they failed to score
    pub failures: Vec<MetricFailure>,

    /// Criteria omitted because every one of their metrics failed
    pub skipped_criteria: Vec<CriterionId>,
}

impl EvaluationOutcome {
    /// Whether every metric scored
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of [`EvaluationPipeline::recompute`]
#[derive(Debug, Clone, PartialEq)]
pub struct Recomputation {
    /// The committed evaluation outcome
    pub outcome: EvaluationOutcome,

    /// The committed project result, when project recomputation is enabled
    pub project: Option<ProjectResult>,
}

/// Drives scoring and aggregation for whole evaluations
#[derive(Debug, Clone, Default)]
pub struct EvaluationPipeline {
    scorer: MetricScorer,
    config: RollupConfig,
}

impl EvaluationPipeline {
    /// Create a pipeline from a scorer and a roll-up configuration
    pub fn new(scorer: MetricScorer, config: RollupConfig) -> Self {
        Self { scorer, config }
    }

    /// Get the roll-up configuration
    pub fn config(&self) -> &RollupConfig {
        &self.config
    }

    /// Get the metric scorer
    pub fn scorer(&self) -> &MetricScorer {
        &self.scorer
    }

    /// Score and aggregate one evaluation without persisting anything
    pub fn compute(&self, plan: &EvaluationPlan) -> Result<EvaluationOutcome, AggregationError> {
        let bands = ScoreBands::for_threshold(plan.minimum_threshold)?;
        if plan.criteria.is_empty() {
            return Err(AggregationError::NoCriteria);
        }
        if self.config.enforce_importance_sum {
            let importances: Vec<f64> = plan.criteria.iter().map(|c| c.importance_percentage).collect();
            validate_importance(&importances, self.config.importance_tolerance)?;
        }

        let mut metrics = Vec::with_capacity(plan.metric_count());
        let mut reports = Vec::with_capacity(plan.metric_count());
        let mut failures = Vec::new();
        let mut criteria = Vec::with_capacity(plan.criteria.len());
        let mut skipped_criteria = Vec::new();

        for criterion in &plan.criteria {
            if criterion.metrics.is_empty() {
                return Err(AggregationError::NoMetricResults);
            }

            let weighted = self.score_criterion(
                plan.evaluation_id,
                criterion,
                &mut metrics,
                &mut reports,
                &mut failures,
            )?;

            if weighted.is_empty() {
                warn!(
                    criterion = %criterion.name,
                    "Every metric of the criterion failed; leaving it out of the evaluation"
                );
                skipped_criteria.push(criterion.criterion_id);
                continue;
            }

            let final_score = aggregate_criterion(&weighted, criterion.importance_percentage)?;
            debug!(
                criterion = %criterion.name,
                metrics = weighted.len(),
                importance = criterion.importance_percentage,
                final_score,
                "Criterion aggregated"
            );
            criteria.push(CriterionResult {
                criterion_id: criterion.criterion_id,
                evaluation_id: plan.evaluation_id,
                importance_percentage: criterion.importance_percentage,
                final_score,
            });
        }

        let finals: Vec<f64> = criteria.iter().map(|c| c.final_score).collect();
        let evaluation_score = aggregate_evaluation(&finals)?;
        let classification = bands.classify(evaluation_score);

        info!(
            evaluation = %plan.evaluation_id,
            score = evaluation_score,
            level = %classification.score_level,
            grade = %classification.satisfaction_grade,
            failures = failures.len(),
            "Evaluation computed"
        );

        Ok(EvaluationOutcome {
            records: EvaluationRecords {
                metrics,
                criteria,
                evaluation: EvaluationResult {
                    evaluation_id: plan.evaluation_id,
                    project_id: plan.project_id,
                    evaluation_score,
                    classification,
                },
            },
            reports,
            failures,
            skipped_criteria,
        })
    }

    /// Score the metrics of one criterion, returning the weighted values
    /// that made it through the failure policy
    fn score_criterion(
        &self,
        evaluation_id: EvaluationId,
        criterion: &CriterionPlan,
        metrics: &mut Vec<MetricResult>,
        reports: &mut Vec<MetricReport>,
        failures: &mut Vec<MetricFailure>,
    ) -> Result<Vec<f64>, AggregationError> {
        let mut weighted = Vec::with_capacity(criterion.metrics.len());

        for metric in &criterion.metrics {
            let scored = self.scorer.score(
                &metric.formula,
                &metric.variables,
                metric.desired_threshold.as_deref(),
                metric.worst_case.as_deref(),
            );

            let report = match scored {
                Ok(report) => report,
                Err(error) => match self.config.failure_policy {
                    FailurePolicy::StopOnFirstError => {
                        return Err(AggregationError::Metric {
                            metric: metric.name.clone(),
                            source: error,
                        });
                    }
                    FailurePolicy::SkipFailedMetrics => {
                        warn!(metric = %metric.name, error = %error, "Skipping metric that failed to score");
                        failures.push(MetricFailure {
                            metric_id: metric.metric_id,
                            criterion_id: criterion.criterion_id,
                            metric_name: metric.name.clone(),
                            error,
                        });
                        continue;
                    }
                },
            };

            weighted.push(report.score.weighted_value);
            metrics.push(MetricResult {
                metric_id: metric.metric_id,
                criterion_id: criterion.criterion_id,
                evaluation_id,
                score: report.score,
            });
            reports.push(MetricReport {
                metric_id: metric.metric_id,
                criterion_id: criterion.criterion_id,
                name: metric.name.clone(),
                report,
            });
        }

        Ok(weighted)
    }

    /// Recompute an evaluation from its stored plan and commit the results
    ///
    /// The evaluation's records are committed in a single call. When
    /// `recompute_project` is set, the project result is then recomputed
    /// from every committed evaluation of the project.
    pub fn recompute<S>(&self, store: &mut S, evaluation_id: EvaluationId) -> Result<Recomputation, AggregationError>
    where
        S: ScoreStore,
        S::Error: Display,
    {
        let mut plan = store
            .load_plan(evaluation_id)
            .map_err(|e| AggregationError::Store(format!("Failed to load plan: {}", e)))?
            .ok_or(AggregationError::UnknownEvaluation(evaluation_id))?;

        // Evaluation and project are graded against the project's stored threshold
        let minimum_threshold = project_threshold(store, plan.project_id)?;
        if minimum_threshold != plan.minimum_threshold {
            warn!(
                evaluation = %evaluation_id,
                plan_threshold = plan.minimum_threshold,
                project_threshold = minimum_threshold,
                "Plan threshold differs from the project's; using the project's"
            );
            plan.minimum_threshold = minimum_threshold;
        }

        let outcome = self.compute(&plan)?;
        store
            .commit_evaluation(outcome.records.clone())
            .map_err(|e| AggregationError::Store(format!("Failed to commit evaluation: {}", e)))?;

        let project = if self.config.recompute_project {
            Some(self.recompute_project(store, plan.project_id)?)
        } else {
            None
        };

        Ok(Recomputation { outcome, project })
    }

    /// Recompute a project's score from its committed evaluation results
    pub fn recompute_project<S>(&self, store: &mut S, project_id: ProjectId) -> Result<ProjectResult, AggregationError>
    where
        S: ScoreStore,
        S::Error: Display,
    {
        let minimum_threshold = project_threshold(store, project_id)?;
        let bands = ScoreBands::for_threshold(minimum_threshold)?;

        let evaluations = store
            .evaluation_results(project_id)
            .map_err(|e| AggregationError::Store(format!("Failed to load evaluations: {}", e)))?;
        let scores: Vec<f64> = evaluations.iter().map(|e| e.evaluation_score).collect();
        let final_project_score = aggregate_project(&scores)?;

        let result = ProjectResult {
            project_id,
            final_project_score,
            evaluation_count: scores.len(),
            classification: bands.classify(final_project_score),
        };

        store
            .commit_project(result.clone())
            .map_err(|e| AggregationError::Store(format!("Failed to commit project: {}", e)))?;

        info!(
            project = %project_id,
            score = final_project_score,
            evaluations = scores.len(),
            "Project recomputed"
        );
        Ok(result)
    }
}

fn project_threshold<S>(store: &S, project_id: ProjectId) -> Result<f64, AggregationError>
where
    S: ScoreStore,
    S::Error: Display,
{
    store
        .minimum_threshold(project_id)
        .map_err(|e| AggregationError::Store(format!("Failed to load project: {}", e)))?
        .ok_or(AggregationError::UnknownProject(project_id))
}

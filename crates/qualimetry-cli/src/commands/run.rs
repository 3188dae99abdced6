//! Run command implementation.

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::project::ProjectDocument;
use qualimetry_domain::{EvaluationId, EvaluationPlan, ProjectId, ProjectResult, ScoreClassification};
use qualimetry_rollup::{EvaluationOutcome, EvaluationPipeline, FailurePolicy, InMemoryStore};
use qualimetry_scorer::MetricScorer;
use qualimetry_threshold::ThresholdCaseType;
use serde::Serialize;

/// Scores of a whole project document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Project name
    pub project: String,

    /// Identifier assigned for this run
    pub project_id: ProjectId,

    /// Per-evaluation summaries in document order
    pub evaluations: Vec<EvaluationSummary>,

    /// Project roll-up
    pub result: ProjectResult,
}

/// Scores of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    /// Evaluation name
    pub name: String,

    /// Identifier assigned for this run
    pub evaluation_id: EvaluationId,

    /// Evaluation score
    pub score: f64,

    /// Level and grade of the evaluation score
    pub classification: ScoreClassification,

    /// Per-criterion breakdown
    pub criteria: Vec<CriterionSummary>,

    /// Metrics left out because they failed to score
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailureSummary>,
}

/// Scores of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionSummary {
    /// Criterion name
    pub name: String,

    /// Importance percentage
    pub importance: f64,

    /// Final score, absent when every metric failed
    pub final_score: Option<f64>,

    /// Scored metrics
    pub metrics: Vec<MetricSummary>,
}

/// Score of one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    /// Metric name
    pub name: String,

    /// Threshold case applied
    pub case: ThresholdCaseType,

    /// Raw formula value
    pub calculated: f64,

    /// Normalized 0-10 value
    pub weighted: f64,

    /// Whether clamping changed the weighted value
    pub clamped: bool,
}

/// A metric that failed to score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureSummary {
    /// Metric name
    pub metric: String,

    /// Failure message
    pub error: String,
}

/// Score every evaluation of `document` and roll them up into a project score.
pub fn run_project(document: &ProjectDocument, config: &Config, skip_failed: bool) -> Result<RunReport> {
    let plans = document.to_plans();

    let mut store = InMemoryStore::new();
    store.add_project(plans.project_id, document.minimum_threshold);
    for (_, plan) in &plans.evaluations {
        store.add_plan(plan.clone());
    }

    let mut rollup = config.rollup.clone();
    if skip_failed {
        rollup.failure_policy = FailurePolicy::SkipFailedMetrics;
    }
    // The project is rolled up once after every evaluation is committed
    rollup.recompute_project = false;
    let pipeline = EvaluationPipeline::new(MetricScorer::from_config(config.scorer.clone()), rollup);

    let mut evaluations = Vec::with_capacity(plans.evaluations.len());
    for (name, plan) in &plans.evaluations {
        let recomputation = pipeline.recompute(&mut store, plan.evaluation_id)?;
        evaluations.push(summarize(name, plan, &recomputation.outcome));
    }

    let result = pipeline.recompute_project(&mut store, plans.project_id)?;

    Ok(RunReport {
        project: document.name.clone(),
        project_id: plans.project_id,
        evaluations,
        result,
    })
}

fn summarize(name: &str, plan: &EvaluationPlan, outcome: &EvaluationOutcome) -> EvaluationSummary {
    let criteria = plan
        .criteria
        .iter()
        .map(|criterion| {
            let final_score = outcome
                .records
                .criteria
                .iter()
                .find(|c| c.criterion_id == criterion.criterion_id)
                .map(|c| c.final_score);
            let metrics = outcome
                .reports
                .iter()
                .filter(|m| m.criterion_id == criterion.criterion_id)
                .map(|m| MetricSummary {
                    name: m.name.clone(),
                    case: m.report.case.case_type(),
                    calculated: m.report.score.calculated_value,
                    weighted: m.report.score.weighted_value,
                    clamped: m.report.clamped,
                })
                .collect();

            CriterionSummary {
                name: criterion.name.clone(),
                importance: criterion.importance_percentage,
                final_score,
                metrics,
            }
        })
        .collect();

    EvaluationSummary {
        name: name.to_string(),
        evaluation_id: plan.evaluation_id,
        score: outcome.records.evaluation.evaluation_score,
        classification: outcome.records.evaluation.classification,
        criteria,
        failures: outcome
            .failures
            .iter()
            .map(|f| FailureSummary {
                metric: f.metric_name.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    }
}

/// Execute the run command.
pub fn execute_run(args: RunArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let document = ProjectDocument::from_path(&args.file)?;
    let report = run_project(&document, config, args.skip_failed)?;

    println!("{}", formatter.format_run(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use qualimetry_domain::ScoreLevel;
    use qualimetry_rollup::AggregationError;

    const DOCUMENT: &str = r#"
name = "checkout"
minimum_threshold = 80

[[evaluations]]
name = "q1"

[[evaluations.criteria]]
name = "usability"
importance = 40

[[evaluations.criteria.metrics]]
name = "task time"
formula = "A"
desired = ">=10/20min"
worst = "0/20min"
variables = { A = 8 }

[[evaluations.criteria.metrics]]
name = "completion"
formula = "A"
desired = ">=10/20min"
worst = "0/20min"
variables = { A = 12 }

[[evaluations.criteria]]
name = "reliability"
importance = 60

[[evaluations.criteria.metrics]]
name = "failed requests"
formula = "(A/B)*100"
desired = "0%"
worst = ">=20%"
variables = { A = 3, B = 60 }

[[evaluations]]
name = "q2"

[[evaluations.criteria]]
name = "usability"
importance = 40

[[evaluations.criteria.metrics]]
name = "task time"
formula = "A"
desired = ">=10/20min"
worst = "0/20min"
variables = { A = 6 }

[[evaluations.criteria]]
name = "reliability"
importance = 60

[[evaluations.criteria.metrics]]
name = "failed requests"
formula = "(A/B)*100"
desired = "0%"
worst = ">=20%"
variables = { A = 6, B = 60 }
"#;

    fn document() -> ProjectDocument {
        ProjectDocument::from_toml(DOCUMENT).unwrap()
    }

    #[test]
    fn test_run_project() {
        let report = run_project(&document(), &Config::default(), false).unwrap();

        // q1: usability avg(8, 10) * 0.4 = 3.6, reliability 7.5 * 0.6 = 4.5
        assert_eq!(report.evaluations[0].score, 8.1);
        assert_eq!(report.evaluations[0].criteria[0].final_score, Some(3.6));
        assert_eq!(report.evaluations[0].criteria[0].metrics.len(), 2);
        assert_eq!(
            report.evaluations[0].criteria[1].metrics[0].case,
            ThresholdCaseType::PercentageWithMax
        );

        // q2: usability 6 * 0.4 = 2.4, reliability 5 * 0.6 = 3.0
        assert_eq!(report.evaluations[1].score, 5.4);

        assert_eq!(report.result.final_project_score, 6.75);
        assert_eq!(report.result.evaluation_count, 2);
        assert_eq!(report.result.classification.score_level, ScoreLevel::TargetRange);
    }

    #[test]
    fn test_run_stops_on_failing_metric() {
        let mut document = document();
        document.evaluations[1].criteria[1].metrics[0].variables.insert("B".to_string(), 0.0);

        let err = run_project(&document, &Config::default(), false).unwrap_err();
        assert!(matches!(err, CliError::Aggregation(AggregationError::Metric { .. })));
    }

    #[test]
    fn test_run_skips_failing_metric() {
        let mut document = document();
        document.evaluations[1].criteria[1].metrics[0].variables.insert("B".to_string(), 0.0);

        let report = run_project(&document, &Config::default(), true).unwrap();
        let q2 = &report.evaluations[1];
        assert_eq!(q2.failures.len(), 1);
        assert_eq!(q2.failures[0].metric, "failed requests");
        assert_eq!(q2.criteria[1].final_score, None);
        assert_eq!(q2.score, 2.4);
    }
}

//! Project documents consumed by the `run` command.
//!
//! A project document is a TOML file describing one project, its minimum
//! threshold, and the criteria, metrics and measured variables of each
//! evaluation:
//!
//! ```toml
//! name = "checkout-service"
//! minimum_threshold = 80
//!
//! [[evaluations]]
//! name = "2026-Q1"
//!
//! [[evaluations.criteria]]
//! name = "usability"
//! importance = 40
//!
//! [[evaluations.criteria.metrics]]
//! name = "task completion time"
//! formula = "A"
//! desired = ">=10/20min"
//! worst = "0/20min"
//! variables = { A = 8 }
//! ```

use crate::error::{CliError, Result};
use qualimetry_domain::{
    CriterionId, CriterionPlan, EvaluationId, EvaluationPlan, MetricId, MetricPlan, ProjectId, VariableBinding,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// A project and all its evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Project name
    pub name: String,

    /// Minimum acceptable threshold percentage (0-100)
    pub minimum_threshold: f64,

    /// Evaluations of the project
    #[serde(default)]
    pub evaluations: Vec<EvaluationDocument>,
}

/// One evaluation of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDocument {
    /// Evaluation name
    pub name: String,

    /// Criteria selected for the evaluation
    #[serde(default)]
    pub criteria: Vec<CriterionDocument>,
}

/// A criterion with its importance and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionDocument {
    /// Criterion name
    pub name: String,

    /// Importance percentage (0-100)
    pub importance: f64,

    /// Metrics measured for the criterion
    #[serde(default)]
    pub metrics: Vec<MetricDocument>,
}

/// A metric definition and its measured variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDocument {
    /// Metric name
    pub name: String,

    /// Formula over the variable symbols
    pub formula: String,

    /// Desired threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired: Option<String>,

    /// Worst-case threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst: Option<String>,

    /// Measured values by symbol
    #[serde(default)]
    pub variables: BTreeMap<String, f64>,
}

/// Plans built from a document, with fresh identifiers.
#[derive(Debug, Clone)]
pub struct ProjectPlans {
    /// Identifier assigned to the project
    pub project_id: ProjectId,

    /// Evaluation names paired with their plans, in document order
    pub evaluations: Vec<(String, EvaluationPlan)>,
}

impl ProjectDocument {
    /// Parse a document from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let document: Self = toml::from_str(toml_str)?;
        document.validate()?;
        Ok(document)
    }

    /// Read and parse a document file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Check structural requirements the engine does not check itself.
    pub fn validate(&self) -> Result<()> {
        if self.evaluations.is_empty() {
            return Err(CliError::Project(format!("project '{}' has no evaluations", self.name)));
        }

        let mut names = HashSet::new();
        for evaluation in &self.evaluations {
            if !names.insert(evaluation.name.as_str()) {
                return Err(CliError::Project(format!(
                    "duplicate evaluation name '{}'",
                    evaluation.name
                )));
            }
        }
        Ok(())
    }

    /// Build evaluation plans, assigning new identifiers to every entity.
    pub fn to_plans(&self) -> ProjectPlans {
        let project_id = ProjectId::new();
        let evaluations = self
            .evaluations
            .iter()
            .map(|evaluation| {
                let plan = EvaluationPlan {
                    evaluation_id: EvaluationId::new(),
                    project_id,
                    minimum_threshold: self.minimum_threshold,
                    criteria: evaluation.criteria.iter().map(CriterionDocument::to_plan).collect(),
                };
                (evaluation.name.clone(), plan)
            })
            .collect();

        ProjectPlans {
            project_id,
            evaluations,
        }
    }
}

impl CriterionDocument {
    fn to_plan(&self) -> CriterionPlan {
        CriterionPlan {
            criterion_id: CriterionId::new(),
            name: self.name.clone(),
            importance_percentage: self.importance,
            metrics: self.metrics.iter().map(MetricDocument::to_plan).collect(),
        }
    }
}

impl MetricDocument {
    fn to_plan(&self) -> MetricPlan {
        MetricPlan {
            metric_id: MetricId::new(),
            name: self.name.clone(),
            formula: self.formula.clone(),
            desired_threshold: self.desired.clone(),
            worst_case: self.worst.clone(),
            variables: self
                .variables
                .iter()
                .map(|(symbol, value)| VariableBinding::new(symbol.as_str(), *value))
                .collect(),
        }
    }
}

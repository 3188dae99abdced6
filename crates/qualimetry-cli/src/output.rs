//! Output formatting for the CLI.

use crate::commands::grade::GradeReport;
use crate::commands::run::RunReport;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use qualimetry_domain::{ScoreClassification, ScoreLevel};
use qualimetry_scorer::ScoreReport;
use qualimetry_threshold::ThresholdCase;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a formula result.
    pub fn format_value(&self, formula: &str, value: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "formula": formula,
                "value": value,
            }))?),
            OutputFormat::Table => Ok(format!("{} = {}", formula, self.colorize(&value.to_string(), "cyan"))),
            OutputFormat::Quiet => Ok(value.to_string()),
        }
    }

    /// Format a classified threshold pair.
    pub fn format_case(&self, case: &ThresholdCase) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(case)?),
            OutputFormat::Quiet => Ok(case.case_type().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Case", "Desired", "Worst case"]);
                builder.push_record([
                    case.case_type().to_string(),
                    display_or_dash(case.desired()),
                    display_or_dash(case.worst()),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format a metric score report.
    pub fn format_report(&self, report: &ScoreReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.score.weighted_value.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Case", "Calculated", "Weighted", "Notes"]);
                builder.push_record([
                    report.case.case_type().to_string(),
                    report.score.calculated_value.to_string(),
                    report.score.weighted_value.to_string(),
                    notes(report.shortcut, report.clamped, report.case.is_fallback()),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format a graded score.
    pub fn format_grade(&self, report: &GradeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.classification.score_level.to_string()),
            OutputFormat::Table => {
                let bands = &report.bands;
                let mut builder = Builder::default();
                builder.push_record(["Score", "Threshold", "Level", "Grade"]);
                builder.push_record([
                    report.score.to_string(),
                    format!("{}%", report.minimum_threshold),
                    report.classification.score_level.to_string(),
                    report.classification.satisfaction_grade.to_string(),
                ]);
                let cuts = format!(
                    "Cut points: {:.4} / {:.4} / {:.4}",
                    bands.unacceptable_below, bands.minimal_below, bands.target_below
                );
                Ok(format!(
                    "{}\n{}\n{}",
                    self.render(builder),
                    self.classification_line(report.score, &report.classification),
                    cuts
                ))
            }
        }
    }

    /// Format the scores of a project document.
    pub fn format_run(&self, report: &RunReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.result.final_project_score.to_string()),
            OutputFormat::Table => {
                let mut sections = Vec::with_capacity(report.evaluations.len() + 1);

                for evaluation in &report.evaluations {
                    let mut builder = Builder::default();
                    builder.push_record(["Criterion", "Importance", "Metric", "Case", "Calculated", "Weighted", "Criterion score"]);
                    for criterion in &evaluation.criteria {
                        let final_score = criterion
                            .final_score
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        for metric in &criterion.metrics {
                            builder.push_record([
                                criterion.name.clone(),
                                format!("{}%", criterion.importance),
                                metric.name.clone(),
                                metric.case.to_string(),
                                metric.calculated.to_string(),
                                metric.weighted.to_string(),
                                final_score.clone(),
                            ]);
                        }
                    }

                    let mut section = format!(
                        "{}\n{}\n{}",
                        self.colorize(&format!("Evaluation {}", evaluation.name), "magenta"),
                        self.render(builder),
                        self.classification_line(evaluation.score, &evaluation.classification)
                    );
                    for failure in &evaluation.failures {
                        section.push('\n');
                        section.push_str(&self.warning(&format!("Skipped {}: {}", failure.metric, failure.error)));
                    }
                    sections.push(section);
                }

                sections.push(format!(
                    "{} ({} evaluation(s))\n{}",
                    self.colorize(&format!("Project {}", report.project), "magenta"),
                    report.result.evaluation_count,
                    self.classification_line(report.result.final_project_score, &report.result.classification)
                ));
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn classification_line(&self, score: f64, classification: &ScoreClassification) -> String {
        let color = match classification.score_level {
            ScoreLevel::Unacceptable => "red",
            ScoreLevel::MinimallyAcceptable => "yellow",
            ScoreLevel::TargetRange => "green",
            ScoreLevel::ExceedsRequirements => "cyan",
        };
        self.colorize(
            &format!(
                "Score {} - {} ({})",
                score, classification.score_level, classification.satisfaction_grade
            ),
            color,
        )
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn notes(shortcut: bool, clamped: bool, fallback: bool) -> String {
    let mut notes = Vec::new();
    if fallback {
        notes.push("fallback");
    }
    if shortcut {
        notes.push("shortcut");
    }
    if clamped {
        notes.push("clamped");
    }
    if notes.is_empty() {
        "-".to_string()
    } else {
        notes.join(", ")
    }
}

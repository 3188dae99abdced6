//! Grade command implementation.

use crate::cli::GradeArgs;
use crate::error::Result;
use crate::output::Formatter;
use qualimetry_domain::ScoreClassification;
use qualimetry_rollup::{classify_score, ScoreBands};
use serde::Serialize;

/// A graded score with the bands it was graded against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    /// The graded score
    pub score: f64,

    /// Minimum threshold percentage
    pub minimum_threshold: f64,

    /// Resulting level and grade
    pub classification: ScoreClassification,

    /// Cut points derived from the threshold
    pub bands: ScoreBands,
}

/// Grade `score` against `minimum_threshold`.
pub fn grade(score: f64, minimum_threshold: f64) -> Result<GradeReport> {
    let classification = classify_score(score, minimum_threshold)?;
    let bands = ScoreBands::for_threshold(minimum_threshold)?;
    Ok(GradeReport {
        score,
        minimum_threshold,
        classification,
        bands,
    })
}

/// Execute the grade command.
pub fn execute_grade(args: GradeArgs, formatter: &Formatter) -> Result<()> {
    let report = grade(args.score, args.threshold)?;
    println!("{}", formatter.format_grade(&report)?);
    Ok(())
}

//! Qualitative classifications of a final score
//!
//! Both scales are ordered from worst to best:
//! - Score level: Unacceptable → Minimally Acceptable → Target Range → Exceeds Requirements
//! - Satisfaction grade: Unsatisfactory → Satisfactory → Very Satisfactory

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score level of an evaluation or project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    /// Below roughly a third of the minimum threshold
    Unacceptable,

    /// Below 62.5% of the minimum threshold
    MinimallyAcceptable,

    /// Around the minimum threshold
    TargetRange,

    /// Comfortably above the minimum threshold
    ExceedsRequirements,
}

impl ScoreLevel {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Unacceptable => "Unacceptable",
            ScoreLevel::MinimallyAcceptable => "Minimally Acceptable",
            ScoreLevel::TargetRange => "Target Range",
            ScoreLevel::ExceedsRequirements => "Exceeds Requirements",
        }
    }

    /// Parse a level from its label or snake_case name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "").as_str() {
            "unacceptable" => Some(ScoreLevel::Unacceptable),
            "minimallyacceptable" => Some(ScoreLevel::MinimallyAcceptable),
            "targetrange" => Some(ScoreLevel::TargetRange),
            "exceedsrequirements" => Some(ScoreLevel::ExceedsRequirements),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ScoreLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid score level: {}", s))
    }
}

/// Satisfaction grade of an evaluation or project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatisfactionGrade {
    /// Below 62.5% of the minimum threshold
    Unsatisfactory,

    /// Around the minimum threshold
    Satisfactory,

    /// Comfortably above the minimum threshold
    VerySatisfactory,
}

impl SatisfactionGrade {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SatisfactionGrade::Unsatisfactory => "Unsatisfactory",
            SatisfactionGrade::Satisfactory => "Satisfactory",
            SatisfactionGrade::VerySatisfactory => "Very Satisfactory",
        }
    }

    /// Parse a grade from its label or snake_case name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "").as_str() {
            "unsatisfactory" => Some(SatisfactionGrade::Unsatisfactory),
            "satisfactory" => Some(SatisfactionGrade::Satisfactory),
            "verysatisfactory" => Some(SatisfactionGrade::VerySatisfactory),
            _ => None,
        }
    }
}

impl fmt::Display for SatisfactionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for SatisfactionGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid satisfaction grade: {}", s))
    }
}

/// Pair of qualitative labels produced by the score classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreClassification {
    /// Score level
    pub score_level: ScoreLevel,

    /// Satisfaction grade
    pub satisfaction_grade: SatisfactionGrade,
}

//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use qualimetry_domain::VariableBinding;
use std::path::PathBuf;

/// Qualimetry - Score software quality metrics against their thresholds.
#[derive(Debug, Parser)]
#[command(name = "qualimetry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QUALIMETRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a formula against variable bindings
    Eval(EvalArgs),

    /// Classify a desired / worst-case threshold pair
    Classify(ClassifyArgs),

    /// Score a metric
    Score(ScoreArgs),

    /// Grade a score against a minimum threshold
    Grade(GradeArgs),

    /// Score every evaluation of a project document
    Run(RunArgs),

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the eval command.
#[derive(Debug, Parser)]
pub struct EvalArgs {
    /// Formula (e.g. "(A/B)*100")
    pub formula: String,

    /// Variable binding (format: SYMBOL=VALUE), repeatable
    #[arg(short, long = "bind", value_parser = parse_binding)]
    pub bind: Vec<VariableBinding>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Desired threshold (e.g. ">=10/20min")
    #[arg(short, long, allow_hyphen_values = true)]
    pub desired: Option<String>,

    /// Worst-case threshold (e.g. "0/20min")
    #[arg(short, long, allow_hyphen_values = true)]
    pub worst: Option<String>,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Formula (e.g. "B-A")
    pub formula: String,

    /// Variable binding (format: SYMBOL=VALUE), repeatable
    #[arg(short, long = "bind", value_parser = parse_binding)]
    pub bind: Vec<VariableBinding>,

    /// Desired threshold
    #[arg(short, long, allow_hyphen_values = true)]
    pub desired: Option<String>,

    /// Worst-case threshold
    #[arg(short, long, allow_hyphen_values = true)]
    pub worst: Option<String>,

    /// Reject threshold pairs no rule matches
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the grade command.
#[derive(Debug, Parser)]
pub struct GradeArgs {
    /// Score on the 0-10 scale
    #[arg(allow_hyphen_values = true)]
    pub score: f64,

    /// Project minimum threshold percentage (0-100)
    #[arg(short, long, default_value = "80")]
    pub threshold: f64,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Project document (TOML)
    pub file: PathBuf,

    /// Leave failing metrics out instead of aborting
    #[arg(long)]
    pub skip_failed: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse a `SYMBOL=VALUE` binding.
pub fn parse_binding(s: &str) -> Result<VariableBinding, String> {
    let (symbol, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SYMBOL=VALUE, got '{}'", s))?;
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(format!("missing symbol in '{}'", s));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok(VariableBinding::new(symbol, value))
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

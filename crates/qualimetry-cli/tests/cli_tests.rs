//! Library-level tests of the CLI over files on disk

use clap::Parser;
use qualimetry_cli::commands::run::run_project;
use qualimetry_cli::config::OutputFormat;
use qualimetry_cli::project::ProjectDocument;
use qualimetry_cli::{Cli, Command, Config, Formatter};
use qualimetry_domain::{SatisfactionGrade, ScoreLevel};
use std::fs;
use tempfile::TempDir;

const PROJECT: &str = r#"
name = "payments"
minimum_threshold = 70

[[evaluations]]
name = "baseline"

[[evaluations.criteria]]
name = "performance"
importance = 50

[[evaluations.criteria.metrics]]
name = "response time"
formula = "B-A"
desired = "8min"
worst = ">=20min"
variables = { A = 10, B = 14 }

[[evaluations.criteria]]
name = "maintainability"
importance = 50

[[evaluations.criteria.metrics]]
name = "open defects"
formula = "A"
desired = "4"
worst = "0"
variables = { A = 3 }
"#;

#[test]
fn test_run_project_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("payments.toml");
    fs::write(&path, PROJECT).unwrap();

    let document = ProjectDocument::from_path(&path).unwrap();
    let report = run_project(&document, &Config::default(), false).unwrap();

    // performance 5.0 * 0.5 = 2.5, maintainability 7.5 * 0.5 = 3.75
    let baseline = &report.evaluations[0];
    assert_eq!(baseline.score, 6.25);
    assert_eq!(baseline.classification.score_level, ScoreLevel::TargetRange);
    assert_eq!(baseline.classification.satisfaction_grade, SatisfactionGrade::Satisfactory);
    assert_eq!(report.result.final_project_score, 6.25);
}

#[test]
fn test_run_output_formats() {
    let document = ProjectDocument::from_toml(PROJECT).unwrap();
    let report = run_project(&document, &Config::default(), false).unwrap();

    let quiet = Formatter::new(OutputFormat::Quiet, false).format_run(&report).unwrap();
    assert_eq!(quiet, "6.25");

    let table = Formatter::new(OutputFormat::Table, false).format_run(&report).unwrap();
    assert!(table.contains("Evaluation baseline"));
    assert!(table.contains("Project payments"));
    assert!(table.contains("TIME_THRESHOLD"));

    let json = Formatter::new(OutputFormat::Json, false).format_run(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["result"]["final_project_score"], 6.25);
    assert_eq!(value["evaluations"][0]["criteria"][1]["metrics"][0]["case"], "NUMERIC_WITH_MIN");
}

#[test]
fn test_config_file_drives_scoring() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[scorer]\nunmatched_pair = \"reject\"\n").unwrap();
    let config = Config::load_from(&config_path).unwrap();

    // Mismatched units match no rule
    let mut document = ProjectDocument::from_toml(PROJECT).unwrap();
    let metric = &mut document.evaluations[0].criteria[1].metrics[0];
    metric.desired = Some("4min".to_string());
    metric.worst = Some("0%".to_string());

    assert!(run_project(&document, &config, false).is_err());
    assert!(run_project(&document, &Config::default(), false).is_ok());
}

#[test]
fn test_cli_config_flag() {
    let cli = Cli::parse_from(["qualimetry", "--config", "/tmp/q.toml", "run", "project.toml", "--skip-failed"]);
    assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/q.toml"));
    match cli.command {
        Command::Run(args) => assert!(args.skip_failed),
        _ => panic!("Expected Run command"),
    }
}

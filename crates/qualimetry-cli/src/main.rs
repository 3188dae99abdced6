//! Qualimetry CLI - Command-line interface for the quality-score engine.

use clap::Parser;
use qualimetry_cli::commands;
use qualimetry_cli::config::OutputFormat;
use qualimetry_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", Formatter::new(OutputFormat::Table, false).error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Log to stderr; `-v` overrides `QUALIMETRY_LOG` / `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("QUALIMETRY_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> qualimetry_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Eval(args) => commands::execute_eval(args, &config, &formatter),
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter),
        Command::Score(args) => commands::execute_score(args, &config, &formatter),
        Command::Grade(args) => commands::execute_grade(args, &formatter),
        Command::Run(args) => commands::execute_run(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
    }
}

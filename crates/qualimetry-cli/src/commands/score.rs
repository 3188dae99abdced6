//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qualimetry_scorer::MetricScorer;
use qualimetry_threshold::UnmatchedPairPolicy;

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut scorer_config = config.scorer.clone();
    if args.strict {
        scorer_config.unmatched_pair = UnmatchedPairPolicy::Reject;
    }

    let scorer = MetricScorer::from_config(scorer_config);
    let report = scorer.score(
        &args.formula,
        &args.bind,
        args.desired.as_deref(),
        args.worst.as_deref(),
    )?;

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

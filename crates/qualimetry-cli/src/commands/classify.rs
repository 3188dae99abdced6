//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qualimetry_threshold::ThresholdClassifier;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let classifier = ThresholdClassifier::new(config.scorer.unmatched_pair);
    let case = classifier.classify(args.desired.as_deref(), args.worst.as_deref())?;

    if case.is_fallback() {
        eprintln!("{}", formatter.warning("No threshold rule matched; falling back to SIMPLE_BINARY"));
    }
    println!("{}", formatter.format_case(&case)?);
    Ok(())
}

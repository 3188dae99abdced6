//! Eval command implementation.

use crate::cli::EvalArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qualimetry_formula::FormulaEvaluator;

/// Execute the eval command.
pub fn execute_eval(args: EvalArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let evaluator = FormulaEvaluator::new(config.scorer.formula.clone());
    let value = evaluator.evaluate(&args.formula, &args.bind)?;

    println!("{}", formatter.format_value(&args.formula, value)?);
    Ok(())
}

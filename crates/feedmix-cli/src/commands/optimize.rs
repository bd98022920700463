use crate::cli::{ConfigArgs, OptimizeArgs};
use crate::config;
use crate::error::{CliError, Result};
use crate::report;
use crate::utils::progress::CliProgressHandler;
use feedmix::core::composition::InvalidCompositionError;
use feedmix::engine::progress::ProgressReporter;
use feedmix::workflows;
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: &OptimizeArgs, config_args: &ConfigArgs) -> Result<()> {
    execute(args, config_args, &mut io::stdout().lock())
}

fn execute(args: &OptimizeArgs, config_args: &ConfigArgs, out: &mut impl Write) -> Result<()> {
    let app_config = config::build_config(config_args, Some(&args.mix))?;
    let current = app_config.composition;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the mix search...");
    let outcome =
        workflows::optimize::run(&app_config.feed_table, &app_config.search, &reporter)?;

    if outcome.is_sentinel() {
        warn!("Search found no feasible mix; the active mix stays {}.", current);
    }
    report::write_outcome(out, &outcome, &current)?;

    let active = outcome.apply_to(current);
    if args.report {
        if active.is_zero() {
            writeln!(out)?;
            writeln!(out, "{}", report::ZERO_MIX_WARNING)?;
            return Err(CliError::Composition(InvalidCompositionError));
        }
        let assessment = workflows::evaluate::run(&active, &app_config.feed_table)?;
        writeln!(out)?;
        report::write_assessment(out, &assessment)?;
    }
    Ok(())
}

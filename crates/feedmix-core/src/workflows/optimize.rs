use crate::core::feeds::FeedTable;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::optimizer::{MixOptimizer, OptimizationOutcome};
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "optimize_workflow")]
pub fn run(
    table: &FeedTable,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<OptimizationOutcome, EngineError> {
    info!(
        "Searching {} grass/maize pairs for the best feasible mix.",
        config.total_pairs()
    );

    let outcome = MixOptimizer::new(table, config).find_best(reporter)?;

    match outcome.best() {
        Some((composition, ratio)) => info!(
            "Best mix: {} (utilization {:.1}%, {} of {} candidates feasible).",
            composition,
            ratio * 100.0,
            outcome.candidates_feasible,
            outcome.candidates_evaluated
        ),
        None => warn!(
            "No feasible mix among {} candidates; the search found nothing to improve on.",
            outcome.candidates_evaluated
        ),
    }
    Ok(outcome)
}

/// Searches the default grid against the CVB reference table.
pub fn find_best() -> Result<OptimizationOutcome, EngineError> {
    run(
        &FeedTable::CVB_REFERENCE,
        &SearchConfig::default(),
        &ProgressReporter::new(),
    )
}

use super::config::SearchConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::composition::FeedMixComposition;
use crate::core::feeds::FeedTable;
use crate::core::nutrition::{NutritionModel, RationAssessment};
use tracing::{debug, trace};

/// Result of a mix search.
///
/// When no candidate passes the feasibility check the outcome is the sentinel:
/// the all-zero composition with a zero ratio. Use [`OptimizationOutcome::best`]
/// or [`OptimizationOutcome::is_sentinel`] to tell it apart from a real optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationOutcome {
    pub composition: FeedMixComposition,
    pub utilization_ratio: f64,
    pub candidates_evaluated: usize,
    pub candidates_feasible: usize,
}

impl OptimizationOutcome {
    fn sentinel() -> Self {
        Self {
            composition: FeedMixComposition::ZERO,
            utilization_ratio: 0.0,
            candidates_evaluated: 0,
            candidates_feasible: 0,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.composition.is_zero() && self.utilization_ratio == 0.0
    }

    pub fn best(&self) -> Option<(FeedMixComposition, f64)> {
        (!self.is_sentinel()).then_some((self.composition, self.utilization_ratio))
    }

    /// The mix a caller should make active: the optimum, or `current` unchanged
    /// when the search found nothing.
    pub fn apply_to(&self, current: FeedMixComposition) -> FeedMixComposition {
        self.best().map_or(current, |(composition, _)| composition)
    }
}

/// Exhaustive grid search for the feasible mix with the highest utilization ratio.
pub struct MixOptimizer<'a> {
    model: NutritionModel<'a>,
    config: &'a SearchConfig,
}

impl<'a> MixOptimizer<'a> {
    pub fn new(table: &'a FeedTable, config: &'a SearchConfig) -> Self {
        Self {
            model: NutritionModel::new(table),
            config,
        }
    }

    pub fn is_feasible(&self, assessment: &RationAssessment) -> bool {
        let profile = &assessment.profile;
        profile.true_protein >= self.config.min_true_protein
            && profile.crude_fiber >= self.config.min_crude_fiber
            && profile.crude_protein > 0.0
    }

    /// Visits grass silage shares in ascending order and, for each, maize silage
    /// shares in ascending order. Only a strictly better ratio replaces the
    /// current best, so ties keep the first candidate found.
    pub fn find_best(
        &self,
        reporter: &ProgressReporter,
    ) -> Result<OptimizationOutcome, EngineError> {
        self.config.validate()?;
        reporter.report(Progress::SearchStart {
            total_pairs: self.config.total_pairs(),
        });

        let mut outcome = OptimizationOutcome::sentinel();

        for grass_silage in self.config.grass_silage.values() {
            for maize_silage in self.config.maize_silage.values() {
                let Some(hay) = self.config.hay_share(grass_silage, maize_silage) else {
                    trace!(grass_silage, maize_silage, "Pair outside the grid, skipped.");
                    reporter.report(Progress::PairVisited);
                    continue;
                };

                let candidate = FeedMixComposition::new(grass_silage, maize_silage, hay);
                let assessment = self.model.evaluate(&candidate)?;
                outcome.candidates_evaluated += 1;

                if self.is_feasible(&assessment) {
                    outcome.candidates_feasible += 1;
                    let score = assessment.balance.utilization_ratio;
                    if score > outcome.utilization_ratio {
                        debug!(%candidate, score, "New best candidate.");
                        outcome.composition = candidate;
                        outcome.utilization_ratio = score;
                        reporter.report(Progress::NewBest {
                            composition: candidate,
                            utilization_ratio: score,
                        });
                    }
                }
                reporter.report(Progress::PairVisited);
            }
        }

        reporter.report(Progress::SearchFinish {
            feasible: outcome.candidates_feasible,
        });
        Ok(outcome)
    }
}

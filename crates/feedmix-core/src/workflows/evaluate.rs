use crate::core::composition::{FeedMixComposition, InvalidCompositionError};
use crate::core::feeds::FeedTable;
use crate::core::nutrition::{NutritionModel, RationAssessment};
use tracing::{debug, info, instrument, warn};

#[instrument(skip_all, name = "evaluate_workflow", fields(composition = %composition))]
pub fn run(
    composition: &FeedMixComposition,
    table: &FeedTable,
) -> Result<RationAssessment, InvalidCompositionError> {
    let assessment = NutritionModel::new(table).evaluate(composition).inspect_err(|e| {
        warn!("Refusing to evaluate composition: {}", e);
    })?;

    debug!(
        crude_protein = assessment.profile.crude_protein,
        true_protein = assessment.profile.true_protein,
        crude_fiber = assessment.profile.crude_fiber,
        "Nutrient profile computed."
    );
    info!(
        "Utilization {:.1}%, nitrogen lost {:.0} g/day, verdict: {}.",
        assessment.balance.utilization_ratio * 100.0,
        assessment.balance.nitrogen_lost,
        assessment.verdict.title()
    );
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nutrition::HealthVerdict;

    #[test]
    fn run_returns_assessment_for_valid_mix() {
        let assessment = run(&FeedMixComposition::new(80, 0, 20), &FeedTable::default()).unwrap();
        assert_eq!(assessment.composition, FeedMixComposition::new(80, 0, 20));
        assert_eq!(assessment.verdict, HealthVerdict::Optimal);
    }

    #[test]
    fn run_propagates_invalid_composition() {
        let result = run(&FeedMixComposition::ZERO, &FeedTable::default());
        assert_eq!(result, Err(InvalidCompositionError));
    }

    #[test]
    fn run_matches_direct_model_evaluation() {
        let table = FeedTable::default();
        let composition = FeedMixComposition::default();
        assert_eq!(
            run(&composition, &table),
            NutritionModel::new(&table).evaluate(&composition)
        );
    }
}

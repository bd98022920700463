use super::composition::{FeedMixComposition, InvalidCompositionError};
use super::feeds::FeedTable;

/// Dry-matter intake per cow per day, in kg.
pub const DAILY_DRY_MATTER_INTAKE_KG: f64 = 18.0;
/// Grams of protein per gram of nitrogen.
pub const PROTEIN_TO_NITROGEN: f64 = 6.25;
/// Part of the lost nitrogen excreted via urine (urea, amides); the rest leaves via feces.
pub const URINE_SHARE_OF_LOSS: f64 = 0.8;

/// Lower bound on true protein for a healthy ration, g/kg DM.
pub const MIN_TRUE_PROTEIN: f64 = 90.0;
/// Above this true protein level the ration counts as protein-rich, g/kg DM.
pub const MAX_TRUE_PROTEIN: f64 = 110.0;
/// Lower bound on crude fiber for adequate rumen structure, g/kg DM.
pub const MIN_CRUDE_FIBER: f64 = 200.0;

/// Blended nutrient concentrations of a ration, in g/kg dry matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientProfile {
    pub crude_protein: f64,
    pub true_protein: f64,
    pub crude_fiber: f64,
}

impl NutrientProfile {
    /// Weighted blend of the table's properties, with `fractions` in canonical feed order.
    pub fn blend(table: &FeedTable, fractions: &[f64; 3]) -> Self {
        let mut profile = Self {
            crude_protein: 0.0,
            true_protein: 0.0,
            crude_fiber: 0.0,
        };
        for (feed, props) in table.iter() {
            let weight = fractions[feed.index()];
            profile.crude_protein += props.crude_protein * weight;
            profile.true_protein += props.true_protein * weight;
            profile.crude_fiber += props.crude_fiber * weight;
        }
        profile
    }

    /// True protein over crude protein.
    #[inline]
    pub fn utilization_ratio(&self) -> f64 {
        self.true_protein / self.crude_protein
    }
}

/// Daily protein intake and the fate of the ingested nitrogen, per cow.
///
/// Intakes are in g/day. `nitrogen_via_urine + nitrogen_via_feces` equals
/// `nitrogen_lost` exactly, since feces receive whatever urine does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NitrogenBalance {
    pub crude_protein_intake: f64,
    pub true_protein_intake: f64,
    pub nitrogen_intake: f64,
    pub utilization_ratio: f64,
    pub nitrogen_utilized: f64,
    pub nitrogen_lost: f64,
    pub nitrogen_via_urine: f64,
    pub nitrogen_via_feces: f64,
}

impl NitrogenBalance {
    pub fn from_profile(profile: &NutrientProfile) -> Self {
        let crude_protein_intake = profile.crude_protein * DAILY_DRY_MATTER_INTAKE_KG;
        let true_protein_intake = profile.true_protein * DAILY_DRY_MATTER_INTAKE_KG;
        let nitrogen_intake = crude_protein_intake / PROTEIN_TO_NITROGEN;
        let utilization_ratio = profile.utilization_ratio();
        let nitrogen_utilized = nitrogen_intake * utilization_ratio;
        let nitrogen_lost = nitrogen_intake - nitrogen_utilized;
        let nitrogen_via_urine = nitrogen_lost * URINE_SHARE_OF_LOSS;
        let nitrogen_via_feces = nitrogen_lost - nitrogen_via_urine;

        Self {
            crude_protein_intake,
            true_protein_intake,
            nitrogen_intake,
            utilization_ratio,
            nitrogen_utilized,
            nitrogen_lost,
            nitrogen_via_urine,
            nitrogen_via_feces,
        }
    }
}

/// How urgently a [`HealthVerdict`] asks for attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Good,
    Info,
    Warning,
    Critical,
}

/// Rule-based health classification of a ration's protein and fiber levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthVerdict {
    /// Both true protein and crude fiber are below their minimums.
    SeverelyUnfavorable,
    /// True protein below its minimum, fiber adequate.
    ProteinTooLow,
    /// Crude fiber below its minimum, protein adequate.
    FiberTooLow,
    /// True protein above the upper threshold with adequate fiber.
    HighProteinAdequateStructure,
    /// True protein within bounds and adequate fiber.
    Optimal,
    /// Anything the rules above do not cover.
    Transitional,
}

impl HealthVerdict {
    /// Applies the rules in priority order; the first match wins.
    pub fn classify(true_protein: f64, crude_fiber: f64) -> Self {
        if true_protein < MIN_TRUE_PROTEIN && crude_fiber < MIN_CRUDE_FIBER {
            HealthVerdict::SeverelyUnfavorable
        } else if true_protein < MIN_TRUE_PROTEIN {
            HealthVerdict::ProteinTooLow
        } else if crude_fiber < MIN_CRUDE_FIBER {
            HealthVerdict::FiberTooLow
        } else if true_protein > MAX_TRUE_PROTEIN && crude_fiber >= MIN_CRUDE_FIBER {
            HealthVerdict::HighProteinAdequateStructure
        } else if (MIN_TRUE_PROTEIN..=MAX_TRUE_PROTEIN).contains(&true_protein)
            && crude_fiber >= MIN_CRUDE_FIBER
        {
            HealthVerdict::Optimal
        } else {
            HealthVerdict::Transitional
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            HealthVerdict::SeverelyUnfavorable => Severity::Critical,
            HealthVerdict::ProteinTooLow
            | HealthVerdict::FiberTooLow
            | HealthVerdict::Transitional => Severity::Warning,
            HealthVerdict::HighProteinAdequateStructure => Severity::Info,
            HealthVerdict::Optimal => Severity::Good,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HealthVerdict::SeverelyUnfavorable => "Severely unfavorable",
            HealthVerdict::ProteinTooLow => "True protein too low",
            HealthVerdict::FiberTooLow => "Crude fiber too low",
            HealthVerdict::HighProteinAdequateStructure => "High protein, adequate structure",
            HealthVerdict::Optimal => "Optimal",
            HealthVerdict::Transitional => "Transitional",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            HealthVerdict::SeverelyUnfavorable => {
                "Both true protein and crude fiber are too low. This risks rumen acidosis, \
                 insufficient rumen function and a protein shortage for milk production. Low \
                 crude fiber means less saliva production, poorer rumen fermentation and \
                 reduced feed intake."
            }
            HealthVerdict::ProteinTooLow => {
                "True protein is too low (<90 g/kg DM). There is a risk of amino acid \
                 deficiency, insufficient microbial protein in the rumen and a drop in milk \
                 production."
            }
            HealthVerdict::FiberTooLow => {
                "Crude fiber is too low (<200 g/kg DM). This can cause rumen acidosis, reduced \
                 rumination, poorer fiber fermentation and an unstable rumen pH. Crude fiber is \
                 essential for saliva production and for maintaining rumen motility."
            }
            HealthVerdict::HighProteinAdequateStructure => {
                "High true protein content (>110 g/kg DM) with sufficient structure. Well \
                 utilized as long as enough energy is available, otherwise nitrogen losses are \
                 likely to rise."
            }
            HealthVerdict::Optimal => {
                "The ration is optimal: enough digestible protein and structure for healthy \
                 rumen function and protein utilization. The fiber supports a stable rumen \
                 environment and prevents digestive disorders."
            }
            HealthVerdict::Transitional => {
                "The ration is in a transitional zone. Check the energy supply and protein \
                 quality."
            }
        }
    }
}

/// Everything derived from one composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationAssessment {
    pub composition: FeedMixComposition,
    pub fractions: [f64; 3],
    pub profile: NutrientProfile,
    pub balance: NitrogenBalance,
    pub verdict: HealthVerdict,
}

/// Pure evaluation of feed mixes against a fixed feed table.
#[derive(Debug, Clone, Copy)]
pub struct NutritionModel<'a> {
    table: &'a FeedTable,
}

impl<'a> NutritionModel<'a> {
    pub fn new(table: &'a FeedTable) -> Self {
        Self { table }
    }

    /// Computes the nutrient profile, nitrogen balance and health verdict of a mix.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCompositionError`] when every share is zero.
    pub fn evaluate(
        &self,
        composition: &FeedMixComposition,
    ) -> Result<RationAssessment, InvalidCompositionError> {
        let fractions = composition.fractions()?;
        let profile = NutrientProfile::blend(self.table, &fractions);
        let balance = NitrogenBalance::from_profile(&profile);
        let verdict = HealthVerdict::classify(profile.true_protein, profile.crude_fiber);

        Ok(RationAssessment {
            composition: *composition,
            fractions,
            profile,
            balance,
            verdict,
        })
    }
}

/// Evaluates a mix against the CVB reference table.
pub fn evaluate(
    composition: &FeedMixComposition,
) -> Result<RationAssessment, InvalidCompositionError> {
    NutritionModel::new(&FeedTable::CVB_REFERENCE).evaluate(composition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feeds::{Feed, FeedProperties};

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn table_with(grass: FeedProperties) -> FeedTable {
        FeedTable::new(
            grass,
            FeedProperties::new(80.0, 53.0, 220.0),
            FeedProperties::new(170.0, 92.0, 300.0),
        )
        .unwrap()
    }

    #[test]
    fn evaluate_fails_for_zero_composition() {
        assert_eq!(
            evaluate(&FeedMixComposition::ZERO),
            Err(InvalidCompositionError)
        );
    }

    #[test]
    fn pure_feed_reproduces_its_table_values() {
        let table = FeedTable::default();
        for feed in Feed::ALL {
            let mut composition = FeedMixComposition::ZERO;
            composition.set_share(feed, 100);
            let assessment = evaluate(&composition).unwrap();
            let props = table.get(feed);
            assert_eq!(assessment.profile.crude_protein, props.crude_protein);
            assert_eq!(assessment.profile.true_protein, props.true_protein);
            assert_eq!(assessment.profile.crude_fiber, props.crude_fiber);
        }
    }

    #[test]
    fn reference_mix_blends_and_classifies_as_protein_too_low() {
        let assessment = evaluate(&FeedMixComposition::REFERENCE).unwrap();
        // 160*0.70 + 80*0.15 + 170*0.15
        assert!(f64_approx_equal(assessment.profile.crude_protein, 149.5));
        // 96*0.70 + 53*0.15 + 92*0.15
        assert!(f64_approx_equal(assessment.profile.true_protein, 88.95));
        // 250*0.70 + 220*0.15 + 300*0.15
        assert!(f64_approx_equal(assessment.profile.crude_fiber, 253.0));
        assert_eq!(assessment.verdict, HealthVerdict::ProteinTooLow);
    }

    #[test]
    fn initial_mix_produces_expected_nitrogen_balance() {
        let balance = evaluate(&FeedMixComposition::default()).unwrap().balance;
        assert!(f64_approx_equal(balance.crude_protein_intake, 2484.0));
        assert!(f64_approx_equal(balance.true_protein_intake, 1481.4));
        assert!(f64_approx_equal(balance.nitrogen_intake, 397.44));
        assert!(f64_approx_equal(balance.utilization_ratio, 82.3 / 138.0));
        assert!(f64_approx_equal(balance.nitrogen_utilized, 237.024));
        assert!(f64_approx_equal(balance.nitrogen_lost, 160.416));
        assert!(f64_approx_equal(balance.nitrogen_via_urine, 128.3328));
        assert!(f64_approx_equal(balance.nitrogen_via_feces, 32.0832));
    }

    #[test]
    fn nitrogen_balance_is_conserved() {
        for (g, m, h) in [(50, 30, 20), (70, 15, 15), (1, 2, 3), (0, 0, 9), (40, 60, 0)] {
            let balance = evaluate(&FeedMixComposition::new(g, m, h)).unwrap().balance;
            assert_eq!(
                balance.nitrogen_via_urine + balance.nitrogen_via_feces,
                balance.nitrogen_lost
            );
            assert!(f64_approx_equal(
                balance.nitrogen_utilized + balance.nitrogen_lost,
                balance.nitrogen_intake
            ));
        }
    }

    #[test]
    fn evaluate_is_idempotent() {
        let composition = FeedMixComposition::new(37, 41, 22);
        assert_eq!(evaluate(&composition), evaluate(&composition));
    }

    #[test]
    fn shares_are_normalized_before_blending() {
        let scaled = evaluate(&FeedMixComposition::new(140, 30, 30)).unwrap();
        let reference = evaluate(&FeedMixComposition::REFERENCE).unwrap();
        assert!(f64_approx_equal(
            scaled.profile.true_protein,
            reference.profile.true_protein
        ));
        assert_eq!(scaled.verdict, reference.verdict);
    }

    #[test]
    fn model_uses_the_supplied_table() {
        let table = table_with(FeedProperties::new(200.0, 120.0, 260.0));
        let assessment = NutritionModel::new(&table)
            .evaluate(&FeedMixComposition::new(100, 0, 0))
            .unwrap();
        assert_eq!(assessment.profile.true_protein, 120.0);
        assert_eq!(assessment.verdict, HealthVerdict::HighProteinAdequateStructure);
    }

    #[test]
    fn fiber_poor_table_yields_fiber_too_low() {
        let table = table_with(FeedProperties::new(160.0, 100.0, 150.0));
        let assessment = NutritionModel::new(&table)
            .evaluate(&FeedMixComposition::new(100, 0, 0))
            .unwrap();
        assert_eq!(assessment.verdict, HealthVerdict::FiberTooLow);
    }

    #[test]
    fn classify_follows_rule_priority() {
        assert_eq!(
            HealthVerdict::classify(80.0, 150.0),
            HealthVerdict::SeverelyUnfavorable
        );
        assert_eq!(HealthVerdict::classify(80.0, 250.0), HealthVerdict::ProteinTooLow);
        assert_eq!(HealthVerdict::classify(100.0, 150.0), HealthVerdict::FiberTooLow);
        assert_eq!(HealthVerdict::classify(130.0, 150.0), HealthVerdict::FiberTooLow);
        assert_eq!(
            HealthVerdict::classify(120.0, 250.0),
            HealthVerdict::HighProteinAdequateStructure
        );
        assert_eq!(HealthVerdict::classify(100.0, 250.0), HealthVerdict::Optimal);
    }

    #[test]
    fn classify_treats_threshold_values_as_inclusive() {
        assert_eq!(HealthVerdict::classify(90.0, 200.0), HealthVerdict::Optimal);
        assert_eq!(HealthVerdict::classify(110.0, 200.0), HealthVerdict::Optimal);
        assert_eq!(HealthVerdict::classify(89.999, 200.0), HealthVerdict::ProteinTooLow);
        assert_eq!(HealthVerdict::classify(90.0, 199.999), HealthVerdict::FiberTooLow);
    }

    #[test]
    fn classify_falls_back_to_transitional_for_undefined_levels() {
        assert_eq!(HealthVerdict::classify(f64::NAN, 250.0), HealthVerdict::Transitional);
        assert_eq!(
            HealthVerdict::classify(f64::NAN, f64::NAN),
            HealthVerdict::Transitional
        );
    }

    #[test]
    fn severity_orders_from_good_to_critical() {
        assert_eq!(HealthVerdict::Optimal.severity(), Severity::Good);
        assert_eq!(
            HealthVerdict::HighProteinAdequateStructure.severity(),
            Severity::Info
        );
        assert_eq!(HealthVerdict::ProteinTooLow.severity(), Severity::Warning);
        assert_eq!(
            HealthVerdict::SeverelyUnfavorable.severity(),
            Severity::Critical
        );
        assert!(Severity::Critical > Severity::Warning);
    }
}

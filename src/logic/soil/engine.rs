use super::classify::{assess_organic_matter, assess_ph, assess_pollutants, classify_nutrient};
use super::thresholds::{Nutrient, ORGANIC_MATTER_RICH};
use crate::logic::calculations::{overall_score, soil_health, ScoreFactors};
use crate::models::{
    AnalysisResult, ClimateSuitability, Difficulty, HealthRisk, ImprovementPlanItem, Level,
    NutrientReport, NutrientStatus, OrganicMatterAssessment, PhAssessment, PlantRecommendation,
    SoilMeasurement,
};

pub const DEFAULT_CONFIDENCE: u8 = 90;

/// Deterministic soil scoring and recommendation pipeline.
///
/// Holds no state besides the confidence figure stamped onto every
/// result, so one analyzer can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilAnalyzer {
    confidence: u8,
}

impl SoilAnalyzer {
    /// Confidence is a percentage and is capped at 100.
    pub fn new(confidence: u8) -> Self {
        Self {
            confidence: confidence.min(100),
        }
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    pub fn analyze(&self, m: &SoilMeasurement) -> AnalysisResult {
        let ph = assess_ph(m.ph);
        let nutrients = NutrientReport {
            nitrogen: classify_nutrient(Nutrient::Nitrogen, m.nitrogen),
            phosphorus: classify_nutrient(Nutrient::Phosphorus, m.phosphorus),
            potassium: classify_nutrient(Nutrient::Potassium, m.potassium),
        };
        let organic_matter = assess_organic_matter(m.organic_matter_percent);
        let pollutants = assess_pollutants(m.heavy_metals);

        let factors = ScoreFactors {
            ph_in_range: !ph.correction_needed,
            nitrogen_adequate: nutrients.nitrogen.status == NutrientStatus::Adequate,
            phosphorus_adequate: nutrients.phosphorus.status == NutrientStatus::Adequate,
            organic_matter_rich: m.organic_matter_percent > ORGANIC_MATTER_RICH,
        };
        let overall_score = overall_score(factors);
        let soil_health = soil_health(overall_score);

        tracing::debug!(
            ph = %ph.category,
            nitrogen = %nutrients.nitrogen.status,
            phosphorus = %nutrients.phosphorus.status,
            score = overall_score,
            health = %soil_health,
            "Soil analysis complete"
        );

        let insights = build_insights(overall_score, &ph, &organic_matter);
        let warnings = if pollutants.health_risk != HealthRisk::None {
            vec!["Heavy metal contamination detected".to_string()]
        } else {
            Vec::new()
        };

        AnalysisResult {
            overall_score,
            soil_health,
            confidence: self.confidence,
            recommended_plants: recommended_plants(&ph),
            improvement_plan: improvement_plan(&ph, m.organic_matter_percent),
            nutrients,
            ph,
            organic_matter,
            pollutants,
            insights,
            warnings,
        }
    }
}

impl Default for SoilAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE)
    }
}

/// Analyze a measurement with the default confidence figure.
pub fn analyze(m: &SoilMeasurement) -> AnalysisResult {
    SoilAnalyzer::default().analyze(m)
}

/// The plant list is not personalized; only the tomato suitability reacts
/// to the pH assessment.
fn recommended_plants(ph: &PhAssessment) -> Vec<PlantRecommendation> {
    vec![
        PlantRecommendation {
            name: "Tomatoes".into(),
            difficulty: Difficulty::Moderate,
            yield_time: "75-85 days".into(),
            climate_suitability: if ph.correction_needed {
                ClimateSuitability::Fair
            } else {
                ClimateSuitability::Excellent
            },
            specific_reasons: vec![
                "Good nutrient levels".into(),
                "Adequate soil structure".into(),
            ],
            planting_tips: vec![
                "Start indoors 6-8 weeks before last frost".into(),
                "Provide support structures".into(),
            ],
        },
        PlantRecommendation {
            name: "Leafy Greens".into(),
            difficulty: Difficulty::Easy,
            yield_time: "30-45 days".into(),
            climate_suitability: ClimateSuitability::Good,
            specific_reasons: vec![
                "Tolerates pH variations".into(),
                "Quick growing".into(),
            ],
            planting_tips: vec![
                "Direct seed in cool weather".into(),
                "Succession plant every 2 weeks".into(),
            ],
        },
    ]
}

fn improvement_plan(ph: &PhAssessment, organic_matter_percent: f64) -> Vec<ImprovementPlanItem> {
    vec![
        ImprovementPlanItem {
            priority: if ph.correction_needed {
                Level::High
            } else {
                Level::Medium
            },
            action: ph.recommendation.clone(),
            timeframe: "2-4 weeks".into(),
            expected_outcome: "Improved nutrient availability".into(),
            cost: Level::Low,
        },
        ImprovementPlanItem {
            priority: if organic_matter_percent < ORGANIC_MATTER_RICH {
                Level::High
            } else {
                Level::Low
            },
            action: "Add organic compost".into(),
            timeframe: "Ongoing".into(),
            expected_outcome: "Better soil structure and fertility".into(),
            cost: Level::Medium,
        },
    ]
}

fn build_insights(score: u8, ph: &PhAssessment, om: &OrganicMatterAssessment) -> Vec<String> {
    let ph_note = if ph.correction_needed {
        "pH adjustment is the top priority"
    } else {
        "pH levels are well-balanced"
    };
    let om_note = if om.percentage > 4.0 {
        "is excellent"
    } else {
        "needs improvement"
    };

    vec![
        format!("Your soil has an overall health score of {}/100", score),
        ph_note.to_string(),
        format!("Organic matter at {}% {}", om.percentage, om_note),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HeavyMetalsLevel, OrganicMatterRating, PhCategory, SoilHealth, SoilTexture};

    fn sample(ph: f64, nitrogen: f64, phosphorus: f64, organic_matter: f64) -> SoilMeasurement {
        SoilMeasurement::new(
            ph,
            nitrogen,
            phosphorus,
            30.0,
            HeavyMetalsLevel::Low,
            SoilTexture::Loamy,
        )
        .with_organic_matter(organic_matter)
    }

    #[test]
    fn reference_sample_with_boundary_nutrients() {
        // Nitrogen 25 and phosphorus 20 sit exactly on the adequate/high
        // boundary and therefore count as high; pH 6.5 is neutral.
        let result = analyze(&sample(6.5, 25.0, 20.0, 4.5));

        assert_eq!(result.ph.category, PhCategory::Neutral);
        assert!(!result.ph.correction_needed);
        assert_eq!(result.nutrients.nitrogen.status, NutrientStatus::High);
        assert_eq!(result.nutrients.phosphorus.status, NutrientStatus::High);
        assert_eq!(result.nutrients.potassium.status, NutrientStatus::High);
        assert_eq!(result.organic_matter.rating, OrganicMatterRating::Good);
        assert_eq!(result.overall_score, 73);
        assert_eq!(result.soil_health, SoilHealth::Good);
    }

    #[test]
    fn ideal_sample_is_excellent() {
        let result = analyze(&sample(6.5, 20.0, 15.0, 4.5));

        assert_eq!(result.nutrients.nitrogen.status, NutrientStatus::Adequate);
        assert_eq!(result.nutrients.phosphorus.status, NutrientStatus::Adequate);
        assert_eq!(result.overall_score, 86);
        assert_eq!(result.soil_health, SoilHealth::Excellent);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn acidic_sample_prioritizes_ph() {
        let result = analyze(&sample(4.8, 20.0, 15.0, 4.5));

        assert_eq!(result.ph.category, PhCategory::VeryAcidic);
        assert!(result.ph.correction_needed);
        assert_eq!(result.improvement_plan[0].priority, Level::High);
        assert_eq!(result.improvement_plan[0].action, "Apply lime to raise pH");
        assert_eq!(result.improvement_plan[0].cost, Level::Low);
        assert_eq!(result.insights[1], "pH adjustment is the top priority");
        assert_eq!(
            result.recommended_plants[0].climate_suitability,
            ClimateSuitability::Fair
        );
    }

    #[test]
    fn improvement_plan_has_two_items() {
        let result = analyze(&sample(7.0, 20.0, 15.0, 2.0));
        assert_eq!(result.improvement_plan.len(), 2);
        assert_eq!(result.improvement_plan[0].priority, Level::Medium);
        assert_eq!(result.improvement_plan[0].action, "pH is optimal");
        assert_eq!(result.improvement_plan[1].priority, Level::High);
        assert_eq!(result.improvement_plan[1].action, "Add organic compost");

        let rich = analyze(&sample(7.0, 20.0, 15.0, 3.0));
        assert_eq!(rich.improvement_plan[1].priority, Level::Low);
    }

    #[test]
    fn organic_matter_at_threshold_does_not_score() {
        let at = analyze(&sample(7.0, 20.0, 15.0, 3.0));
        let above = analyze(&sample(7.0, 20.0, 15.0, 3.01));
        assert_eq!(at.overall_score, 80);
        assert_eq!(above.overall_score, 86);
    }

    #[test]
    fn insights_mention_score_and_organic_matter() {
        let result = analyze(&sample(6.8, 20.0, 15.0, 4.5));
        assert_eq!(
            result.insights,
            vec![
                "Your soil has an overall health score of 86/100".to_string(),
                "pH levels are well-balanced".to_string(),
                "Organic matter at 4.5% is excellent".to_string(),
            ]
        );

        let poor = analyze(&sample(6.8, 20.0, 15.0, 4.0));
        assert_eq!(poor.insights[2], "Organic matter at 4% needs improvement");
    }

    #[test]
    fn heavy_metals_produce_warning() {
        let mut m = sample(6.8, 20.0, 15.0, 4.5);
        m.heavy_metals = HeavyMetalsLevel::Moderate;
        let result = analyze(&m);
        assert_eq!(result.warnings, vec!["Heavy metal contamination detected"]);
        assert_eq!(result.pollutants.health_risk, HealthRisk::Moderate);
    }

    #[test]
    fn analysis_is_idempotent() {
        let m = sample(7.9, 12.0, 22.0, 1.5);
        assert_eq!(analyze(&m), analyze(&m));
    }

    #[test]
    fn out_of_domain_values_use_extreme_buckets() {
        let result = analyze(&sample(20.0, -5.0, 1000.0, 0.0));
        assert_eq!(result.ph.category, PhCategory::VeryAlkaline);
        assert_eq!(result.nutrients.nitrogen.status, NutrientStatus::Deficient);
        assert_eq!(result.nutrients.phosphorus.status, NutrientStatus::Excessive);
        assert_eq!(result.organic_matter.rating, OrganicMatterRating::VeryLow);
        assert_eq!(result.overall_score, 58);
        assert_eq!(result.soil_health, SoilHealth::Fair);
    }

    #[test]
    fn score_range_over_sample_grid() {
        for ph in [3.0, 5.5, 6.0, 6.9, 7.5, 8.5, 11.0] {
            for n in [0.0, 12.0, 20.0, 30.0, 60.0] {
                for p in [0.0, 8.0, 15.0, 25.0, 50.0] {
                    for om in [0.0, 3.0, 5.0] {
                        let score = analyze(&sample(ph, n, p, om)).overall_score;
                        assert!((50..=90).contains(&score));
                    }
                }
            }
        }
    }

    #[test]
    fn confidence_is_pinned() {
        let m = sample(6.8, 20.0, 15.0, 4.5);
        assert_eq!(analyze(&m).confidence, DEFAULT_CONFIDENCE);
        assert_eq!(SoilAnalyzer::new(97).analyze(&m).confidence, 97);
        assert_eq!(SoilAnalyzer::new(250).confidence(), 100);
    }
}

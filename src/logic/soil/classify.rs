use super::thresholds::{
    Nutrient, ORGANIC_MATTER_LADDER, ORGANIC_MATTER_RICH, ORGANIC_MATTER_SUFFICIENT, PH_LADDER,
    PH_OPTIMAL_RANGE, PH_TARGET_RANGE,
};
use crate::models::{
    HealthRisk, HeavyMetalsLevel, NutrientClassification, NutrientStatus,
    OrganicMatterAssessment, PhAssessment, PollutantAssessment,
};

pub fn assess_ph(ph: f64) -> PhAssessment {
    let (low, high) = PH_TARGET_RANGE;
    let correction_needed = ph < low || ph > high;

    let suitability = if ph >= PH_OPTIMAL_RANGE.0 && ph <= PH_OPTIMAL_RANGE.1 {
        "Optimal for most crops"
    } else {
        "May limit plant nutrient uptake"
    };

    let recommendation = if ph < low {
        "Apply lime to raise pH"
    } else if ph > high {
        "Add sulfur to lower pH"
    } else {
        "pH is optimal"
    };

    PhAssessment {
        level: ph,
        category: PH_LADDER.classify(ph),
        suitability: suitability.to_string(),
        correction_needed,
        recommendation: recommendation.to_string(),
    }
}

pub fn classify_nutrient(nutrient: Nutrient, level: f64) -> NutrientClassification {
    let status = nutrient.ladder().classify(level);
    let name = nutrient.as_str();
    let lower = name.to_lowercase();

    let (recommendation, impact) = match status {
        NutrientStatus::Deficient => (
            format!("Add {}-rich fertilizer immediately", lower),
            format!("Severe {} deficiency will limit plant growth", lower),
        ),
        NutrientStatus::Low => (
            format!("Apply {} fertilizer", lower),
            format!("Low {} may reduce yields", lower),
        ),
        NutrientStatus::Adequate => (
            "Monitor and maintain current levels".to_string(),
            format!("{} levels support healthy growth", name),
        ),
        NutrientStatus::High => (
            format!("Reduce {} inputs", lower),
            format!("High {} may cause nutrient imbalances", lower),
        ),
        NutrientStatus::Excessive => (
            format!("Stop {} applications", lower),
            format!("Excessive {} can harm plants and environment", lower),
        ),
    };

    NutrientClassification {
        level,
        status,
        recommendation,
        impact,
    }
}

pub fn assess_organic_matter(percentage: f64) -> OrganicMatterAssessment {
    let benefits = if percentage > ORGANIC_MATTER_RICH {
        vec![
            "Improves soil structure",
            "Enhances water retention",
            "Provides slow-release nutrients",
        ]
    } else {
        vec!["Soil needs organic matter improvement"]
    };

    let improvement_suggestions = if percentage < ORGANIC_MATTER_SUFFICIENT {
        vec![
            "Add compost regularly",
            "Use cover crops",
            "Apply well-aged manure",
        ]
    } else {
        vec!["Maintain current organic matter practices"]
    };

    OrganicMatterAssessment {
        percentage,
        rating: ORGANIC_MATTER_LADDER.classify(percentage),
        benefits: to_strings(&benefits),
        improvement_suggestions: to_strings(&improvement_suggestions),
    }
}

pub fn assess_pollutants(level: HeavyMetalsLevel) -> PollutantAssessment {
    const REMEDIATION: [&str; 3] = [
        "Consider soil replacement",
        "Use phytoremediation plants",
        "Avoid growing edible crops",
    ];

    let (contaminants, health_risk, remediation) = match level {
        HeavyMetalsLevel::Low => (vec![], HealthRisk::None, vec!["No remediation needed"]),
        HeavyMetalsLevel::Moderate => (
            vec!["Zinc", "Copper"],
            HealthRisk::Moderate,
            REMEDIATION.to_vec(),
        ),
        HeavyMetalsLevel::High => (
            vec!["Lead", "Cadmium", "Mercury"],
            HealthRisk::High,
            REMEDIATION.to_vec(),
        ),
    };

    PollutantAssessment {
        heavy_metals_level: level,
        contaminants: to_strings(&contaminants),
        health_risk,
        remediation: to_strings(&remediation),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

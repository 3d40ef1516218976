use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Deficient,
    Low,
    Adequate,
    High,
    Excessive,
}

impl NutrientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::Deficient => "deficient",
            NutrientStatus::Low => "low",
            NutrientStatus::Adequate => "adequate",
            NutrientStatus::High => "high",
            NutrientStatus::Excessive => "excessive",
        }
    }
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientClassification {
    pub level: f64,
    pub status: NutrientStatus,
    pub recommendation: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReport {
    pub nitrogen: NutrientClassification,
    pub phosphorus: NutrientClassification,
    pub potassium: NutrientClassification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhCategory {
    #[serde(rename = "Very Acidic")]
    VeryAcidic,
    Acidic,
    #[serde(rename = "Slightly Acidic")]
    SlightlyAcidic,
    Neutral,
    #[serde(rename = "Slightly Alkaline")]
    SlightlyAlkaline,
    Alkaline,
    #[serde(rename = "Very Alkaline")]
    VeryAlkaline,
}

impl PhCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhCategory::VeryAcidic => "Very Acidic",
            PhCategory::Acidic => "Acidic",
            PhCategory::SlightlyAcidic => "Slightly Acidic",
            PhCategory::Neutral => "Neutral",
            PhCategory::SlightlyAlkaline => "Slightly Alkaline",
            PhCategory::Alkaline => "Alkaline",
            PhCategory::VeryAlkaline => "Very Alkaline",
        }
    }
}

impl std::fmt::Display for PhCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhAssessment {
    pub level: f64,
    pub category: PhCategory,
    pub suitability: String,
    pub correction_needed: bool,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrganicMatterRating {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl OrganicMatterRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganicMatterRating::VeryLow => "Very Low",
            OrganicMatterRating::Low => "Low",
            OrganicMatterRating::Moderate => "Moderate",
            OrganicMatterRating::Good => "Good",
            OrganicMatterRating::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for OrganicMatterRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganicMatterAssessment {
    pub percentage: f64,
    pub rating: OrganicMatterRating,
    pub benefits: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthRisk {
    None,
    Low,
    Moderate,
    High,
}

impl HealthRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthRisk::None => "None",
            HealthRisk::Low => "Low",
            HealthRisk::Moderate => "Moderate",
            HealthRisk::High => "High",
        }
    }
}

impl std::fmt::Display for HealthRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantAssessment {
    pub heavy_metals_level: super::HeavyMetalsLevel,
    pub contaminants: Vec<String>,
    pub health_risk: HealthRisk,
    pub remediation: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateSuitability {
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecommendation {
    pub name: String,
    pub difficulty: Difficulty,
    pub yield_time: String,
    pub climate_suitability: ClimateSuitability,
    pub specific_reasons: Vec<String>,
    pub planting_tips: Vec<String>,
}

/// Shared by plan priority and cost, which use the same three labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementPlanItem {
    pub priority: Level,
    pub action: String,
    pub timeframe: String,
    pub expected_outcome: String,
    pub cost: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilHealth {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SoilHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilHealth::Poor => "poor",
            SoilHealth::Fair => "fair",
            SoilHealth::Good => "good",
            SoilHealth::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for SoilHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub soil_health: SoilHealth,
    pub confidence: u8,
    pub nutrients: NutrientReport,
    #[serde(rename = "phAnalysis")]
    pub ph: PhAssessment,
    #[serde(rename = "organicMatterAnalysis")]
    pub organic_matter: OrganicMatterAssessment,
    #[serde(rename = "pollutantAnalysis")]
    pub pollutants: PollutantAssessment,
    pub recommended_plants: Vec<PlantRecommendation>,
    pub improvement_plan: Vec<ImprovementPlanItem>,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
}

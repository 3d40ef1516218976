use crate::error::{GardenOpsError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeavyMetalsLevel {
    Low,
    #[serde(alias = "medium")]
    Moderate,
    High,
}

impl HeavyMetalsLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeavyMetalsLevel::Low => "low",
            HeavyMetalsLevel::Moderate => "moderate",
            HeavyMetalsLevel::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(HeavyMetalsLevel::Low),
            "moderate" | "medium" => Some(HeavyMetalsLevel::Moderate),
            "high" => Some(HeavyMetalsLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeavyMetalsLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilTexture {
    Clay,
    #[serde(alias = "sand")]
    Sandy,
    #[serde(alias = "loam")]
    Loamy,
    #[serde(alias = "silt")]
    Silty,
}

impl SoilTexture {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilTexture::Clay => "clay",
            SoilTexture::Sandy => "sandy",
            SoilTexture::Loamy => "loamy",
            SoilTexture::Silty => "silty",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Some(SoilTexture::Clay),
            "sandy" | "sand" => Some(SoilTexture::Sandy),
            "loamy" | "loam" => Some(SoilTexture::Loamy),
            "silty" | "silt" => Some(SoilTexture::Silty),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional lab values that are carried with a measurement but not scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Micronutrients {
    pub calcium: Option<f64>,
    pub magnesium: Option<f64>,
    pub sulfur: Option<f64>,
    pub iron: Option<f64>,
    pub zinc: Option<f64>,
    pub manganese: Option<f64>,
    pub boron: Option<f64>,
    pub moisture: Option<f64>,
    pub temperature: Option<f64>,
    #[serde(alias = "electricalConductivity")]
    pub electrical_conductivity: Option<f64>,
}

impl Micronutrients {
    pub fn is_empty(&self) -> bool {
        *self == Micronutrients::default()
    }
}

/// A validated soil sample. Values are not range checked: out-of-domain
/// readings fall into the outermost classification buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilMeasurement {
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub organic_matter_percent: f64,
    pub heavy_metals: HeavyMetalsLevel,
    pub texture: SoilTexture,
    #[serde(default, skip_serializing_if = "Micronutrients::is_empty")]
    pub micronutrients: Micronutrients,
}

impl SoilMeasurement {
    pub fn new(
        ph: f64,
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        heavy_metals: HeavyMetalsLevel,
        texture: SoilTexture,
    ) -> Self {
        Self {
            ph,
            nitrogen,
            phosphorus,
            potassium,
            organic_matter_percent: 0.0,
            heavy_metals,
            texture,
            micronutrients: Micronutrients::default(),
        }
    }

    pub fn with_organic_matter(mut self, percent: f64) -> Self {
        self.organic_matter_percent = percent;
        self
    }
}

/// Unvalidated measurement as read from a sample file or CLI flags.
///
/// Accepts both snake_case keys and the camelCase keys used by exported
/// lab reports (`organicMatter`, `heavyMetals`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MeasurementInput {
    pub ph: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    #[serde(alias = "organicMatter", alias = "organic_matter_percent")]
    pub organic_matter: Option<f64>,
    #[serde(alias = "heavyMetals")]
    pub heavy_metals: Option<HeavyMetalsLevel>,
    pub texture: Option<SoilTexture>,
    #[serde(flatten)]
    pub micronutrients: Micronutrients,
}

impl MeasurementInput {
    /// Values present in `overrides` replace the ones already set.
    pub fn with_overrides(self, overrides: MeasurementInput) -> Self {
        Self {
            ph: overrides.ph.or(self.ph),
            nitrogen: overrides.nitrogen.or(self.nitrogen),
            phosphorus: overrides.phosphorus.or(self.phosphorus),
            potassium: overrides.potassium.or(self.potassium),
            organic_matter: overrides.organic_matter.or(self.organic_matter),
            heavy_metals: overrides.heavy_metals.or(self.heavy_metals),
            texture: overrides.texture.or(self.texture),
            micronutrients: if overrides.micronutrients.is_empty() {
                self.micronutrients
            } else {
                overrides.micronutrients
            },
        }
    }

    /// Checks required fields in a fixed order and reports the first one
    /// that is missing or not a finite number.
    pub fn validate(&self) -> Result<SoilMeasurement> {
        let ph = require_number("ph", self.ph)?;
        let nitrogen = require_number("nitrogen", self.nitrogen)?;
        let phosphorus = require_number("phosphorus", self.phosphorus)?;
        let potassium = require_number("potassium", self.potassium)?;
        let organic_matter_percent = match self.organic_matter {
            Some(value) => finite("organic_matter", value)?,
            None => 0.0,
        };
        let heavy_metals = self
            .heavy_metals
            .ok_or_else(|| GardenOpsError::missing("heavy_metals"))?;
        let texture = self
            .texture
            .ok_or_else(|| GardenOpsError::missing("texture"))?;

        Ok(SoilMeasurement {
            ph,
            nitrogen,
            phosphorus,
            potassium,
            organic_matter_percent,
            heavy_metals,
            texture,
            micronutrients: self.micronutrients.clone(),
        })
    }
}

fn require_number(field: &'static str, value: Option<f64>) -> Result<f64> {
    let value = value.ok_or_else(|| GardenOpsError::missing(field))?;
    finite(field, value)
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GardenOpsError::InvalidInput {
            field,
            reason: format!("expected a finite number, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> MeasurementInput {
        MeasurementInput {
            ph: Some(6.8),
            nitrogen: Some(20.0),
            phosphorus: Some(15.0),
            potassium: Some(25.0),
            organic_matter: Some(3.5),
            heavy_metals: Some(HeavyMetalsLevel::Low),
            texture: Some(SoilTexture::Loamy),
            micronutrients: Micronutrients::default(),
        }
    }

    fn missing_field(input: &MeasurementInput) -> &'static str {
        match input.validate() {
            Err(GardenOpsError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn validate_complete_input() {
        let m = complete_input().validate().unwrap();
        assert_eq!(m.ph, 6.8);
        assert_eq!(m.organic_matter_percent, 3.5);
        assert_eq!(m.heavy_metals, HeavyMetalsLevel::Low);
        assert_eq!(m.texture, SoilTexture::Loamy);
    }

    #[test]
    fn validate_names_missing_field() {
        let mut input = complete_input();
        input.phosphorus = None;
        assert_eq!(missing_field(&input), "phosphorus");

        let mut input = complete_input();
        input.texture = None;
        assert_eq!(missing_field(&input), "texture");
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let input = MeasurementInput::default();
        assert_eq!(missing_field(&input), "ph");
    }

    #[test]
    fn validate_defaults_organic_matter_to_zero() {
        let mut input = complete_input();
        input.organic_matter = None;
        assert_eq!(input.validate().unwrap().organic_matter_percent, 0.0);
    }

    #[test]
    fn validate_accepts_zero_and_out_of_range_values() {
        let mut input = complete_input();
        input.ph = Some(0.0);
        input.nitrogen = Some(-5.0);
        assert!(input.validate().is_ok());

        input.ph = Some(20.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite() {
        let mut input = complete_input();
        input.potassium = Some(f64::NAN);
        assert_eq!(missing_field(&input), "potassium");
    }

    #[test]
    fn overrides_replace_only_present_values() {
        let overrides = MeasurementInput {
            ph: Some(5.2),
            ..Default::default()
        };
        let merged = complete_input().with_overrides(overrides);
        assert_eq!(merged.ph, Some(5.2));
        assert_eq!(merged.nitrogen, Some(20.0));
    }

    #[test]
    fn input_accepts_camel_case_keys() {
        let json = r#"{
            "ph": 6.5, "nitrogen": 25, "phosphorus": 20, "potassium": 30,
            "organicMatter": 4.5, "heavyMetals": "low", "texture": "loamy",
            "calcium": 1200
        }"#;
        let input: MeasurementInput = serde_json::from_str(json).unwrap();
        let m = input.validate().unwrap();
        assert_eq!(m.organic_matter_percent, 4.5);
        assert_eq!(m.micronutrients.calcium, Some(1200.0));
    }

    #[test]
    fn enum_from_str() {
        assert_eq!(
            HeavyMetalsLevel::from_str("Moderate"),
            Some(HeavyMetalsLevel::Moderate)
        );
        assert_eq!(HeavyMetalsLevel::from_str("toxic"), None);
        assert_eq!(SoilTexture::from_str("LOAM"), Some(SoilTexture::Loamy));
        assert_eq!(SoilTexture::from_str("gravel"), None);
    }
}

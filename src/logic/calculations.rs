use super::soil::thresholds::HEALTH_LADDER;
use crate::models::SoilHealth;

/// Factor weights in percent; they sum to 100.
const PH_WEIGHT: u32 = 30;
const NITROGEN_WEIGHT: u32 = 25;
const PHOSPHORUS_WEIGHT: u32 = 25;
const ORGANIC_MATTER_WEIGHT: u32 = 20;

/// Each scoring factor takes one of two fixed values. The score is a step
/// function of four booleans, never a smooth curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFactors {
    pub ph_in_range: bool,
    pub nitrogen_adequate: bool,
    pub phosphorus_adequate: bool,
    pub organic_matter_rich: bool,
}

impl ScoreFactors {
    fn ph_points(&self) -> u32 {
        if self.ph_in_range {
            90
        } else {
            60
        }
    }

    fn nitrogen_points(&self) -> u32 {
        if self.nitrogen_adequate {
            85
        } else {
            60
        }
    }

    fn phosphorus_points(&self) -> u32 {
        if self.phosphorus_adequate {
            85
        } else {
            60
        }
    }

    fn organic_matter_points(&self) -> u32 {
        if self.organic_matter_rich {
            80
        } else {
            50
        }
    }
}

/// Weighted sum of the factor points, rounded half up.
///
/// Computed in hundredths so that e.g. 85.5 rounds to 86 exactly.
pub fn overall_score(factors: ScoreFactors) -> u8 {
    let weighted = PH_WEIGHT * factors.ph_points()
        + NITROGEN_WEIGHT * factors.nitrogen_points()
        + PHOSPHORUS_WEIGHT * factors.phosphorus_points()
        + ORGANIC_MATTER_WEIGHT * factors.organic_matter_points();

    ((weighted + 50) / 100) as u8
}

pub fn soil_health(score: u8) -> SoilHealth {
    HEALTH_LADDER.classify(score as f64)
}

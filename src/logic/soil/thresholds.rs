//! Breakpoint ladders used to bucket soil readings.
//!
//! Every ladder is an ordered list of rungs. A value takes the category of
//! the first rung that admits it and falls through to the ladder's top
//! category past the last rung, so the ladders are open-ended at both ends.

use crate::models::{NutrientStatus, OrganicMatterRating, PhCategory, SoilHealth};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value < bound
    Below(f64),
    /// value <= bound
    AtMost(f64),
}

impl Bound {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::Below(bound) => value < bound,
            Bound::AtMost(bound) => value <= bound,
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        match *self {
            Bound::Below(bound) | Bound::AtMost(bound) => bound,
        }
    }
}

#[derive(Debug)]
pub struct Ladder<T: 'static> {
    rungs: &'static [(Bound, T)],
    top: T,
}

impl<T: Copy> Ladder<T> {
    pub const fn new(rungs: &'static [(Bound, T)], top: T) -> Self {
        Self { rungs, top }
    }

    pub fn classify(&self, value: f64) -> T {
        self.rungs
            .iter()
            .find(|(bound, _)| bound.admits(value))
            .map(|(_, category)| *category)
            .unwrap_or(self.top)
    }

    #[cfg(test)]
    pub fn breakpoints(&self) -> Vec<f64> {
        self.rungs.iter().map(|(bound, _)| bound.value()).collect()
    }
}

/// Acidic bands exclude their upper boundary and the neutral and alkaline
/// bands include it, so 6.5 and 7.5 are both neutral.
static PH_RUNGS: [(Bound, PhCategory); 6] = [
    (Bound::Below(5.0), PhCategory::VeryAcidic),
    (Bound::Below(6.0), PhCategory::Acidic),
    (Bound::Below(6.5), PhCategory::SlightlyAcidic),
    (Bound::AtMost(7.5), PhCategory::Neutral),
    (Bound::AtMost(8.0), PhCategory::SlightlyAlkaline),
    (Bound::AtMost(9.0), PhCategory::Alkaline),
];

pub static PH_LADDER: Ladder<PhCategory> = Ladder::new(&PH_RUNGS, PhCategory::VeryAlkaline);

static ORGANIC_MATTER_RUNGS: [(Bound, OrganicMatterRating); 4] = [
    (Bound::Below(2.0), OrganicMatterRating::VeryLow),
    (Bound::Below(3.0), OrganicMatterRating::Low),
    (Bound::Below(4.0), OrganicMatterRating::Moderate),
    (Bound::Below(6.0), OrganicMatterRating::Good),
];

pub static ORGANIC_MATTER_LADDER: Ladder<OrganicMatterRating> =
    Ladder::new(&ORGANIC_MATTER_RUNGS, OrganicMatterRating::Excellent);

static HEALTH_RUNGS: [(Bound, SoilHealth); 3] = [
    (Bound::Below(50.0), SoilHealth::Poor),
    (Bound::Below(70.0), SoilHealth::Fair),
    (Bound::Below(85.0), SoilHealth::Good),
];

pub static HEALTH_LADDER: Ladder<SoilHealth> = Ladder::new(&HEALTH_RUNGS, SoilHealth::Excellent);

/// pH band that needs no correction, inclusive at both ends
pub const PH_TARGET_RANGE: (f64, f64) = (6.0, 7.5);

/// pH band reported as optimal for most crops, inclusive at both ends
pub const PH_OPTIMAL_RANGE: (f64, f64) = (6.0, 7.0);

/// Organic matter percentage above which the soil counts as rich
pub const ORGANIC_MATTER_RICH: f64 = 3.0;

/// Organic matter percentage below which compost is still suggested
pub const ORGANIC_MATTER_SUFFICIENT: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    #[cfg(test)]
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }

    /// Upper bounds (ppm, exclusive) of the deficient, low, adequate and
    /// high bands.
    pub const fn thresholds(&self) -> [f64; 4] {
        match self {
            Nutrient::Nitrogen => [10.0, 15.0, 25.0, 40.0],
            Nutrient::Phosphorus => [5.0, 10.0, 20.0, 35.0],
            Nutrient::Potassium => [15.0, 20.0, 30.0, 50.0],
        }
    }

    pub fn ladder(&self) -> &'static Ladder<NutrientStatus> {
        match self {
            Nutrient::Nitrogen => &NITROGEN_LADDER,
            Nutrient::Phosphorus => &PHOSPHORUS_LADDER,
            Nutrient::Potassium => &POTASSIUM_LADDER,
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const fn nutrient_rungs(t: [f64; 4]) -> [(Bound, NutrientStatus); 4] {
    [
        (Bound::Below(t[0]), NutrientStatus::Deficient),
        (Bound::Below(t[1]), NutrientStatus::Low),
        (Bound::Below(t[2]), NutrientStatus::Adequate),
        (Bound::Below(t[3]), NutrientStatus::High),
    ]
}

static NITROGEN_RUNGS: [(Bound, NutrientStatus); 4] =
    nutrient_rungs(Nutrient::Nitrogen.thresholds());
static PHOSPHORUS_RUNGS: [(Bound, NutrientStatus); 4] =
    nutrient_rungs(Nutrient::Phosphorus.thresholds());
static POTASSIUM_RUNGS: [(Bound, NutrientStatus); 4] =
    nutrient_rungs(Nutrient::Potassium.thresholds());

static NITROGEN_LADDER: Ladder<NutrientStatus> =
    Ladder::new(&NITROGEN_RUNGS, NutrientStatus::Excessive);
static PHOSPHORUS_LADDER: Ladder<NutrientStatus> =
    Ladder::new(&PHOSPHORUS_RUNGS, NutrientStatus::Excessive);
static POTASSIUM_LADDER: Ladder<NutrientStatus> =
    Ladder::new(&POTASSIUM_RUNGS, NutrientStatus::Excessive);

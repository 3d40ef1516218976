pub mod engine;
pub mod humidity;
pub mod rain;
pub mod temperature;
pub mod uv_exposure;
pub mod wind;

pub use engine::AdviceEngine;

use crate::models::{Advice, WeatherReport};

/// Trait for weather-driven gardening advice
pub trait AdviceRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return advice if conditions call for it
    fn evaluate(&self, report: &WeatherReport) -> Option<Advice>;
}

use super::AdviceRule;
use crate::models::{Advice, AdviceCategory, Severity, WeatherReport};

const FROST_BELOW_C: f64 = 5.0;
const HEAT_ABOVE_C: f64 = 30.0;

/// Temperature rule - always produces advice
///
/// - Below 5°C: frost protection
/// - Above 30°C: shade and extra water
/// - Otherwise: good gardening weather
pub struct TemperatureRule;

impl AdviceRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature Protection"
    }

    fn evaluate(&self, report: &WeatherReport) -> Option<Advice> {
        let temp = report.current.temperature_c;

        let (severity, message) = if temp < FROST_BELOW_C {
            (
                Severity::Warning,
                "Protect tender plants from frost - cover or move indoors",
            )
        } else if temp > HEAT_ABOVE_C {
            (
                Severity::Warning,
                "Provide shade and extra water for heat-sensitive plants",
            )
        } else {
            (
                Severity::Info,
                "Great temperature for most gardening activities",
            )
        };

        Some(
            Advice::new(self.id(), AdviceCategory::Temperature, severity, message)
                .with_data_point("Temperature", format!("{:.1}°C", temp)),
        )
    }
}

use super::AdviceRule;
use crate::models::{Advice, AdviceCategory, Severity, WeatherReport};

const DRY_BELOW_PERCENT: f64 = 40.0;
const HUMID_ABOVE_PERCENT: f64 = 80.0;

/// Humidity rule - dry air needs more water, humid air invites fungus
pub struct HumidityRule;

impl AdviceRule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Humidity Watch"
    }

    fn evaluate(&self, report: &WeatherReport) -> Option<Advice> {
        let humidity = report.current.humidity_percent;

        let message = if humidity < DRY_BELOW_PERCENT {
            "Low humidity - increase watering frequency and consider mulching"
        } else if humidity > HUMID_ABOVE_PERCENT {
            "High humidity - watch for fungal diseases and ensure good air circulation"
        } else {
            return None;
        };

        Some(
            Advice::new(self.id(), AdviceCategory::Humidity, Severity::Advisory, message)
                .with_data_point("Humidity", format!("{:.0}%", humidity)),
        )
    }
}

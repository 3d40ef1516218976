use super::AdviceRule;
use crate::models::{Advice, AdviceCategory, Severity, WeatherReport};

/// Wind speed as reported by the weather API, in m/s
const STRONG_WIND_ABOVE_MS: f64 = 10.0;

pub struct WindRule;

impl AdviceRule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Wind Protection"
    }

    fn evaluate(&self, report: &WeatherReport) -> Option<Advice> {
        let current = &report.current;
        if current.wind_speed_ms <= STRONG_WIND_ABOVE_MS {
            return None;
        }

        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Wind,
                Severity::Warning,
                "Strong winds - secure tall plants and protect delicate seedlings",
            )
            .with_data_point(
                "Wind",
                format!(
                    "{:.0} km/h {}",
                    current.wind_speed_kmh(),
                    current.wind_direction()
                ),
            ),
        )
    }
}

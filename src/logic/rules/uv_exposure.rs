use super::AdviceRule;
use crate::models::{Advice, AdviceCategory, Severity, WeatherReport};

const HIGH_UV_ABOVE: f64 = 7.0;

pub struct UvExposureRule;

impl AdviceRule for UvExposureRule {
    fn id(&self) -> &'static str {
        "uv_exposure"
    }

    fn name(&self) -> &'static str {
        "UV Exposure"
    }

    fn evaluate(&self, report: &WeatherReport) -> Option<Advice> {
        let uv = report.current.uv_index;
        if uv <= HIGH_UV_ABOVE {
            return None;
        }

        Some(
            Advice::new(
                self.id(),
                AdviceCategory::Sunlight,
                Severity::Advisory,
                "High UV index - provide shade for sensitive plants during midday",
            )
            .with_data_point("UV Index", format!("{:.0}", uv)),
        )
    }
}

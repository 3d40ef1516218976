use super::AdviceRule;
use crate::models::{Advice, AdviceCategory, Severity, WeatherReport};

const LOOKAHEAD_DAYS: usize = 3;
const RAIN_LIKELY_PERCENT: f64 = 50.0;

/// Rain rule - decides whether scheduled watering can be skipped
///
/// Looks at the first three forecast days; any day with a precipitation
/// probability above 50% means rain is expected soon.
pub struct RainRule;

impl AdviceRule for RainRule {
    fn id(&self) -> &'static str {
        "rain"
    }

    fn name(&self) -> &'static str {
        "Watering Schedule"
    }

    fn evaluate(&self, report: &WeatherReport) -> Option<Advice> {
        let advice = match report.rain_expected_within(LOOKAHEAD_DAYS, RAIN_LIKELY_PERCENT) {
            Some(day) => Advice::new(
                self.id(),
                AdviceCategory::Rain,
                Severity::Advisory,
                "Rain expected soon - hold off on watering and harvesting",
            )
            .with_data_point("Rain Day", day.date.format("%Y-%m-%d"))
            .with_data_point(
                "Rain Chance",
                format!("{:.0}%", day.precipitation_probability),
            ),
            None => Advice::new(
                self.id(),
                AdviceCategory::Rain,
                Severity::Info,
                "No rain in forecast - maintain regular watering schedule",
            ),
        };

        Some(advice)
    }
}

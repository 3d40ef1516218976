use super::{
    humidity::HumidityRule, rain::RainRule, temperature::TemperatureRule,
    uv_exposure::UvExposureRule, wind::WindRule, AdviceRule,
};
use crate::models::{Advice, WeatherReport};

pub struct AdviceEngine {
    rules: Vec<Box<dyn AdviceRule>>,
}

impl AdviceEngine {
    /// Rules run in a fixed order so the advice list reads temperature,
    /// humidity, wind, rain, then UV.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AdviceRule>> = vec![
            Box::new(TemperatureRule),
            Box::new(HumidityRule),
            Box::new(WindRule),
            Box::new(RainRule),
            Box::new(UvExposureRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, report: &WeatherReport) -> Vec<Advice> {
        let advice: Vec<Advice> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(report))
            .collect();

        tracing::debug!(count = advice.len(), "Evaluated weather advice rules");
        advice
    }

    pub fn evaluate_rule(&self, rule_id: &str, report: &WeatherReport) -> Option<Advice> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(report))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdviceEngine {
    fn default() -> Self {
        Self::new()
    }
}

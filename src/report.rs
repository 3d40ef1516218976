use crate::models::{
    Advice, AnalysisResult, HistoryEntry, NutrientClassification, SoilMeasurement, WeatherReport,
};
use std::fmt;

/// Plain-text rendering of one soil analysis
pub struct SoilReport<'a> {
    pub measurement: &'a SoilMeasurement,
    pub result: &'a AnalysisResult,
}

impl<'a> SoilReport<'a> {
    pub fn new(measurement: &'a SoilMeasurement, result: &'a AnalysisResult) -> Self {
        Self {
            measurement,
            result,
        }
    }
}

impl fmt::Display for SoilReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let m = self.measurement;

        writeln!(
            f,
            "Soil health: {} ({}/100, confidence {}%)",
            r.soil_health, r.overall_score, r.confidence
        )?;
        writeln!(
            f,
            "Sample: {} soil, heavy metals {}",
            m.texture, m.heavy_metals
        )?;
        writeln!(f)?;

        writeln!(f, "pH {:.1} - {}", r.ph.level, r.ph.category)?;
        writeln!(f, "  {}", r.ph.suitability)?;
        if r.ph.correction_needed {
            writeln!(f, "  {}", r.ph.recommendation)?;
        }
        writeln!(f)?;

        writeln!(f, "Nutrients")?;
        write_nutrient(f, "Nitrogen", &r.nutrients.nitrogen)?;
        write_nutrient(f, "Phosphorus", &r.nutrients.phosphorus)?;
        write_nutrient(f, "Potassium", &r.nutrients.potassium)?;
        writeln!(f)?;

        writeln!(
            f,
            "Organic matter {:.1}% - {}",
            r.organic_matter.percentage, r.organic_matter.rating
        )?;
        for suggestion in &r.organic_matter.improvement_suggestions {
            writeln!(f, "  - {}", suggestion)?;
        }
        writeln!(f)?;

        writeln!(f, "Pollutants: {} risk", r.pollutants.health_risk)?;
        for item in &r.pollutants.remediation {
            writeln!(f, "  - {}", item)?;
        }

        if !r.recommended_plants.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommended plants")?;
            for plant in &r.recommended_plants {
                writeln!(
                    f,
                    "  {} ({:?}, {}, climate {:?})",
                    plant.name, plant.difficulty, plant.yield_time, plant.climate_suitability
                )?;
                for reason in &plant.specific_reasons {
                    writeln!(f, "    - {}", reason)?;
                }
            }
        }

        if !r.improvement_plan.is_empty() {
            writeln!(f)?;
            writeln!(f, "Improvement plan")?;
            for (i, item) in r.improvement_plan.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. [{} priority] {} ({}, {} cost)",
                    i + 1,
                    item.priority,
                    item.action,
                    item.timeframe,
                    item.cost
                )?;
                writeln!(f, "     {}", item.expected_outcome)?;
            }
        }

        if !r.insights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Insights")?;
            for insight in &r.insights {
                writeln!(f, "  * {}", insight)?;
            }
        }

        if !r.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings")?;
            for warning in &r.warnings {
                writeln!(f, "  ! {}", warning)?;
            }
        }

        Ok(())
    }
}

fn write_nutrient(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    n: &NutrientClassification,
) -> fmt::Result {
    writeln!(f, "  {:<11}{:>6.1} ppm  {}", name, n.level, n.status)?;
    writeln!(f, "             {}", n.recommendation)
}

pub struct HistoryList<'a> {
    pub entries: &'a [HistoryEntry],
}

impl<'a> HistoryList<'a> {
    pub fn new(entries: &'a [HistoryEntry]) -> Self {
        Self { entries }
    }
}

impl fmt::Display for HistoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No analyses recorded yet.");
        }
        for entry in self.entries {
            writeln!(f, "{}", entry.summary())?;
        }
        Ok(())
    }
}

pub struct WeatherSummary<'a> {
    pub report: &'a WeatherReport,
    pub advice: &'a [Advice],
}

impl<'a> WeatherSummary<'a> {
    pub fn new(report: &'a WeatherReport, advice: &'a [Advice]) -> Self {
        Self { report, advice }
    }
}

impl fmt::Display for WeatherSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.report.current;
        writeln!(
            f,
            "Weather at {:.2}, {:.2} - {}",
            self.report.latitude, self.report.longitude, c.condition
        )?;
        writeln!(
            f,
            "  {:.0}°C, humidity {:.0}%, wind {:.0} km/h {}, UV {:.0}, {:.0} hPa",
            c.temperature_c,
            c.humidity_percent,
            c.wind_speed_kmh(),
            c.wind_direction(),
            c.uv_index,
            c.pressure_hpa
        )?;

        if !self.report.daily.is_empty() {
            writeln!(f)?;
            writeln!(f, "Forecast")?;
            for day in &self.report.daily {
                let marker = if day.condition.has_precipitation() { "*" } else { " " };
                writeln!(
                    f,
                    "  {} {} {:>3.0}°/{:<3.0}°  rain {:>3.0}%  {}",
                    marker,
                    day.date.format("%a %d %b"),
                    day.high_c,
                    day.low_c,
                    day.precipitation_probability,
                    day.condition
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Gardening advice")?;
        for advice in self.advice {
            writeln!(f, "  {} {}", advice.severity.symbol(), advice.message)?;
            for point in &advice.data_points {
                writeln!(f, "      {}: {}", point.label, point.value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::soil::analyze;
    use crate::logic::AdviceEngine;
    use crate::models::{
        CurrentConditions, DailyForecast, HeavyMetalsLevel, SoilTexture, WeatherCode,
    };
    use chrono::{NaiveDate, Utc};

    #[test]
    fn soil_report_lists_sections() {
        let m = SoilMeasurement::new(
            4.8,
            5.0,
            5.0,
            40.0,
            HeavyMetalsLevel::High,
            SoilTexture::Clay,
        )
        .with_organic_matter(1.0);
        let result = analyze(&m);
        let text = SoilReport::new(&m, &result).to_string();

        assert!(text.starts_with(&format!(
            "Soil health: {} ({}/100, confidence 90%)",
            result.soil_health, result.overall_score
        )));
        assert!(text.contains("Nutrients"));
        assert!(text.contains("Improvement plan"));
        assert!(text.contains("Warnings"));
        assert!(text.contains("clay soil, heavy metals high"));
    }

    #[test]
    fn empty_history_message() {
        assert_eq!(HistoryList::new(&[]).to_string(), "No analyses recorded yet.\n");
    }

    #[test]
    fn weather_summary_includes_advice() {
        let report = WeatherReport {
            fetched_at: Utc::now(),
            latitude: 28.61,
            longitude: 77.21,
            current: CurrentConditions {
                temperature_c: 34.0,
                humidity_percent: 30.0,
                wind_speed_ms: 2.0,
                wind_direction_deg: 90.0,
                pressure_hpa: 1008.0,
                visibility_km: 10.0,
                uv_index: 9.0,
                condition: WeatherCode::Clear,
            },
            daily: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                high_c: 38.0,
                low_c: 27.0,
                condition: WeatherCode::Clear,
                precipitation_probability: 0.0,
            }],
        };
        let advice = AdviceEngine::new().evaluate(&report);
        let text = WeatherSummary::new(&report, &advice).to_string();

        assert!(text.contains("wind 7 km/h E"));
        assert!(text.contains("Provide shade and extra water"));
        assert!(text.contains("High UV index"));
    }
}

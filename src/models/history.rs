use super::{AnalysisResult, SoilMeasurement};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub recorded_at: DateTime<Utc>,
    pub measurement: SoilMeasurement,
    pub result: AnalysisResult,
}

impl HistoryEntry {
    pub fn new(id: u64, measurement: SoilMeasurement, result: AnalysisResult) -> Self {
        Self {
            id,
            recorded_at: Utc::now(),
            measurement,
            result,
        }
    }

    /// One-line summary used by history listings
    pub fn summary(&self) -> String {
        format!(
            "#{} {} pH {:.1} N {} P {} K {} - {}/100 ({})",
            self.id,
            self.recorded_at.format("%Y-%m-%d %H:%M"),
            self.measurement.ph,
            self.measurement.nitrogen,
            self.measurement.phosphorus,
            self.measurement.potassium,
            self.result.overall_score,
            self.result.soil_health
        )
    }
}

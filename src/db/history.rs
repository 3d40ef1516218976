use super::KeyValueStore;
use crate::error::Result;
use crate::models::{AnalysisResult, HistoryEntry, SoilMeasurement};
use tracing::warn;

pub const HISTORY_KEY: &str = "soil-analysis-history";
pub const MAX_ENTRIES: usize = 50;

/// Past soil analyses, newest first, stored as one JSON document in an
/// injected key/value store.
pub struct AnalysisHistory<S> {
    store: S,
}

impl<S: KeyValueStore> AnalysisHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Unreadable history is logged and treated as empty so a corrupt
    /// record never blocks new analyses.
    pub fn list(&self) -> Result<Vec<HistoryEntry>> {
        let raw = match self.store.get(HISTORY_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(error = %e, "Stored analysis history is unreadable, starting fresh");
                Ok(Vec::new())
            }
        }
    }

    /// At most `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.list()?;
        entries.truncate(limit);
        Ok(entries)
    }

    pub fn latest(&self) -> Result<Option<HistoryEntry>> {
        Ok(self.list()?.into_iter().next())
    }

    pub fn record(
        &self,
        measurement: SoilMeasurement,
        result: AnalysisResult,
    ) -> Result<HistoryEntry> {
        let mut entries = self.list()?;
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = HistoryEntry::new(id, measurement, result);

        entries.insert(0, entry.clone());
        entries.truncate(MAX_ENTRIES);

        self.store.set(HISTORY_KEY, &serde_json::to_string(&entries)?)?;
        tracing::info!(id, score = entry.result.overall_score, "Recorded soil analysis");

        Ok(entry)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

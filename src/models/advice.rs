use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceCategory {
    Temperature,
    Humidity,
    Wind,
    Rain,
    Sunlight,
}

impl AdviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Temperature => "Temperature",
            AdviceCategory::Humidity => "Humidity",
            AdviceCategory::Wind => "Wind",
            AdviceCategory::Rain => "Rain",
            AdviceCategory::Sunlight => "Sunlight",
        }
    }
}

impl std::fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Advisory,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Advisory => "Advisory",
            Severity::Warning => "Warning",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Advisory => "→",
            Severity::Warning => "⚠",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(label: &str, value: impl std::fmt::Display) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// One piece of gardening advice derived from current weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub rule_id: String,
    pub category: AdviceCategory,
    pub severity: Severity,
    pub message: String,
    pub data_points: Vec<DataPoint>,
}

impl Advice {
    pub fn new(
        rule_id: impl Into<String>,
        category: AdviceCategory,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            severity,
            message: message.into(),
            data_points: Vec::new(),
        }
    }

    pub fn with_data_point(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.data_points.push(DataPoint::new(label, value));
        self
    }
}

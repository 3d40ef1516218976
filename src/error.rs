use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenOpsError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),
}

impl GardenOpsError {
    pub fn missing(field: &'static str) -> Self {
        GardenOpsError::InvalidInput {
            field,
            reason: "required value is missing".into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GardenOpsError>;

use crate::error::{GardenOpsError, Result};
use crate::logic::soil::engine::DEFAULT_CONFIDENCE;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "gardenops";
const DATA_DIR_ENV: &str = "GARDENOPS_DATA_DIR";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub weather: Option<WeatherConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Confidence figure reported with every analysis (0-100)
    #[serde(default = "default_confidence")]
    pub confidence: u8,
    /// Record each analysis in the local history
    #[serde(default = "default_enabled")]
    pub record_history: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            record_history: true,
        }
    }
}

fn default_confidence() -> u8 {
    DEFAULT_CONFIDENCE
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl WeatherConfig {
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(GardenOpsError::Config(format!(
                "Config file not found at {:?}. Run `gardenops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| GardenOpsError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Loads the config when one exists, otherwise falls back to defaults.
    /// An explicit path that is missing is still an error.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GardenOpsError::Config(format!("Failed to parse config: {}", e)))?;

        if config.analysis.confidence > 100 {
            return Err(GardenOpsError::Config(format!(
                "analysis.confidence must be between 0 and 100, got {}",
                config.analysis.confidence
            )));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        Ok(default_path)
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/gardenops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GardenOpsError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up GardenOps!");
        println!();

        println!("Soil analysis");
        let confidence: u8 = Input::new()
            .with_prompt("  Reported confidence (0-100)")
            .default(DEFAULT_CONFIDENCE)
            .validate_with(|v: &u8| {
                if *v <= 100 {
                    Ok(())
                } else {
                    Err("must be between 0 and 100")
                }
            })
            .interact_text()
            .map_err(input_error)?;

        let record_history = Confirm::new()
            .with_prompt("  Keep a history of analyses?")
            .default(true)
            .interact()
            .map_err(input_error)?;

        println!();

        println!("Tomorrow.io weather (leave API key blank to skip)");
        let api_key: String = Input::new()
            .with_prompt("  API key")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;

        let weather = if api_key.is_empty() {
            None
        } else {
            let latitude: f64 = Input::new()
                .with_prompt("  Latitude")
                .default(28.6139)
                .interact_text()
                .map_err(input_error)?;

            let longitude: f64 = Input::new()
                .with_prompt("  Longitude")
                .default(77.2090)
                .interact_text()
                .map_err(input_error)?;

            Some(WeatherConfig {
                api_key,
                latitude,
                longitude,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            analysis: AnalysisConfig {
                confidence,
                record_history,
            },
            weather,
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = format!(
            "# GardenOps Configuration\n# Generated by `gardenops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            config.to_yaml()?
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GardenOpsError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Replaces `${VAR_NAME}` with the variable's value. Unset variables
    /// are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| GardenOpsError::Config(format!("Invalid substitution pattern: {}", e)))?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| GardenOpsError::Config("Cannot determine data directory".into()))?
            .join(APP_DIR);

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("gardenops.db"))
    }
}

fn input_error(e: dialoguer::Error) -> GardenOpsError {
    GardenOpsError::Config(format!("Input error: {}", e))
}

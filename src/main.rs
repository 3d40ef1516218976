mod cli;
mod config;
mod datasources;
mod db;
mod error;
mod logic;
mod models;
mod report;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands};
use config::Config;
use datasources::TomorrowIoClient;
use db::{AnalysisHistory, Database, KeyValueStore};
use error::{GardenOpsError, Result};
use logic::{AdviceEngine, SoilAnalyzer};
use models::{MeasurementInput, SoilMeasurement};
use report::{HistoryList, SoilReport, WeatherSummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
            Ok(())
        }
        Commands::Check => check(cli.config, cli.data_dir.as_ref()).await,
        Commands::Analyze(args) => {
            let config = Config::load_or_default(cli.config)?;
            analyze(&config, cli.data_dir.as_ref(), &args)
        }
        Commands::History { limit, json, clear } => {
            let history = AnalysisHistory::new(Database::open(cli.data_dir.as_ref())?);
            if clear {
                history.clear()?;
                println!("Analysis history cleared.");
                return Ok(());
            }
            show_history(&history, limit, json)
        }
        Commands::Weather { lat, lon, json } => {
            let config = Config::load_or_default(cli.config)?;
            weather(&config, lat.zip(lon), json).await
        }
    }
}

fn analyze(config: &Config, data_dir: Option<&PathBuf>, args: &AnalyzeArgs) -> Result<()> {
    let measurement = load_measurement(args)?;
    let analyzer = SoilAnalyzer::new(config.analysis.confidence);
    let result = analyzer.analyze(&measurement);
    tracing::debug!(
        score = result.overall_score,
        confidence = analyzer.confidence(),
        "Analyzed soil sample"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", SoilReport::new(&measurement, &result));
    }

    if config.analysis.record_history && !args.no_history {
        let history = AnalysisHistory::new(Database::open(data_dir)?);
        let entry = history.record(measurement, result)?;
        tracing::debug!(id = entry.id, "Saved analysis to history");
    }

    Ok(())
}

/// File values first, then command-line flags on top
fn load_measurement(args: &AnalyzeArgs) -> Result<SoilMeasurement> {
    let base = match &args.input {
        Some(path) => read_measurement_file(path)?,
        None => MeasurementInput::default(),
    };
    base.with_overrides(args.overrides()).validate()
}

/// YAML or JSON; JSON parses as YAML.
fn read_measurement_file(path: &Path) -> Result<MeasurementInput> {
    let content = std::fs::read_to_string(path)?;
    let input = serde_yaml::from_str(&content)?;
    Ok(input)
}

fn show_history<S: KeyValueStore>(
    history: &AnalysisHistory<S>,
    limit: usize,
    json: bool,
) -> Result<()> {
    print!("{}", render_history(history, limit, json)?);
    Ok(())
}

fn render_history<S: KeyValueStore>(
    history: &AnalysisHistory<S>,
    limit: usize,
    json: bool,
) -> Result<String> {
    let entries = history.recent(limit)?;
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&entries)?))
    } else {
        Ok(HistoryList::new(&entries).to_string())
    }
}

async fn weather(config: &Config, location: Option<(f64, f64)>, json: bool) -> Result<()> {
    let mut weather_config = config
        .weather
        .clone()
        .filter(|w| w.is_usable())
        .ok_or_else(|| {
            GardenOpsError::Config(
                "Weather is not configured. Add a `weather` section with a Tomorrow.io api_key or run `gardenops init`.".into(),
            )
        })?;

    if let Some((latitude, longitude)) = location {
        weather_config.latitude = latitude;
        weather_config.longitude = longitude;
    }

    let client = TomorrowIoClient::new(weather_config);
    let report = client.fetch_report().await?;
    let advice = AdviceEngine::new().evaluate(&report);

    if json {
        let body = serde_json::json!({ "report": report, "advice": advice });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", WeatherSummary::new(&report, &advice));
    }
    Ok(())
}

async fn check(config_path: Option<PathBuf>, data_dir: Option<&PathBuf>) -> Result<()> {
    let config = match Config::load(config_path) {
        Ok(c) => {
            println!("Config: OK");
            c
        }
        Err(e) => {
            println!("Config: {}", e);
            println!("Using defaults.");
            Config::default()
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    match Database::open(data_dir) {
        Ok(db) => {
            let history = AnalysisHistory::new(db.clone());
            let count = history.list()?.len();
            println!("Database: OK ({}, {} analyses)", db.path().display(), count);
            if let Some(entry) = history.latest()? {
                println!("  Latest: {}", entry.summary());
            }
        }
        Err(e) => println!("Database: FAILED ({})", e),
    }

    let rules: Vec<&str> = AdviceEngine::new()
        .list_rules()
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    println!("Advice rules: {}", rules.join(", "));

    match config.weather {
        Some(w) if w.is_usable() => {
            let client = TomorrowIoClient::new(w);
            match client.test_connection().await {
                Ok(true) => println!("Tomorrow.io: OK"),
                Ok(false) => println!("Tomorrow.io: FAILED (request rejected, check api_key)"),
                Err(e) => println!("Tomorrow.io: OFFLINE ({})", e),
            }
        }
        _ => println!("Tomorrow.io: not configured"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::{HeavyMetalsLevel, SoilTexture};

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gardenops-{}-{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn flags_alone_build_a_measurement() {
        let args = AnalyzeArgs {
            ph: Some(6.5),
            nitrogen: Some(25.0),
            phosphorus: Some(20.0),
            potassium: Some(30.0),
            organic_matter: Some(4.5),
            heavy_metals: Some(HeavyMetalsLevel::Low),
            texture: Some(SoilTexture::Loamy),
            ..Default::default()
        };
        let m = load_measurement(&args).unwrap();
        assert_eq!(m.ph, 6.5);
        assert_eq!(m.organic_matter_percent, 4.5);
    }

    #[test]
    fn flags_override_file_values() {
        let path = temp_file(
            "sample.json",
            r#"{"ph": 5.2, "nitrogen": 12, "phosphorus": 9, "potassium": 18,
                "organicMatter": 2.1, "heavyMetals": "medium", "texture": "clay"}"#,
        );
        let args = AnalyzeArgs {
            input: Some(path.clone()),
            ph: Some(6.8),
            ..Default::default()
        };
        let m = load_measurement(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(m.ph, 6.8);
        assert_eq!(m.nitrogen, 12.0);
        assert_eq!(m.heavy_metals, HeavyMetalsLevel::Moderate);
        assert_eq!(m.texture, SoilTexture::Clay);
    }

    #[test]
    fn yaml_file_is_accepted() {
        let path = temp_file(
            "sample.yaml",
            "ph: 7.1\nnitrogen: 30\nphosphorus: 22\npotassium: 35\nheavy_metals: low\ntexture: silty\n",
        );
        let args = AnalyzeArgs {
            input: Some(path.clone()),
            ..Default::default()
        };
        let m = load_measurement(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(m.texture, SoilTexture::Silty);
        assert_eq!(m.organic_matter_percent, 0.0);
    }

    #[test]
    fn missing_field_is_named() {
        let args = AnalyzeArgs {
            ph: Some(6.5),
            nitrogen: Some(25.0),
            ..Default::default()
        };
        match load_measurement(&args) {
            Err(GardenOpsError::InvalidInput { field, .. }) => assert_eq!(field, "phosphorus"),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn history_listing_respects_limit() {
        let history = AnalysisHistory::new(MemoryStore::new());
        let m = SoilMeasurement::new(
            6.5,
            20.0,
            15.0,
            30.0,
            HeavyMetalsLevel::Low,
            SoilTexture::Loamy,
        );
        for _ in 0..3 {
            history.record(m.clone(), logic::soil::analyze(&m)).unwrap();
        }

        let json = render_history(&history, 2, true).unwrap();
        let shown: Vec<models::HistoryEntry> = serde_json::from_str(&json).unwrap();
        let ids: Vec<u64> = shown.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let text = render_history(&history, 2, false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("#3 "));
        assert!(lines[1].starts_with("#2 "));

        assert_eq!(history.list().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn weather_requires_configuration() {
        let err = weather(&Config::default(), None, false).await.unwrap_err();
        assert!(matches!(err, GardenOpsError::Config(_)));
    }
}

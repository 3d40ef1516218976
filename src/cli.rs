use crate::models::{HeavyMetalsLevel, MeasurementInput, SoilTexture};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gardenops",
    version,
    about = "Soil analysis and weather advice for home gardeners"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override SQLite data directory
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a soil sample and print recommendations
    Analyze(AnalyzeArgs),
    /// Show previously recorded analyses
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
        /// Delete all recorded analyses
        #[arg(long, conflicts_with_all = ["limit", "json"])]
        clear: bool,
    },
    /// Fetch the weather and print gardening advice
    Weather {
        /// Latitude, overrides the configured location
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        /// Longitude, overrides the configured location
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
        /// Print the report and advice as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// YAML or JSON file with the measurement; flags override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub ph: Option<f64>,

    /// Nitrogen in ppm
    #[arg(long)]
    pub nitrogen: Option<f64>,

    /// Phosphorus in ppm
    #[arg(long)]
    pub phosphorus: Option<f64>,

    /// Potassium in ppm
    #[arg(long)]
    pub potassium: Option<f64>,

    /// Organic matter in percent
    #[arg(long)]
    pub organic_matter: Option<f64>,

    /// low, moderate or high
    #[arg(long, value_parser = parse_heavy_metals)]
    pub heavy_metals: Option<HeavyMetalsLevel>,

    /// clay, sandy, loamy or silty
    #[arg(long, value_parser = parse_texture)]
    pub texture: Option<SoilTexture>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not record this analysis in history
    #[arg(long)]
    pub no_history: bool,
}

impl AnalyzeArgs {
    /// Measurement fields given on the command line
    pub fn overrides(&self) -> MeasurementInput {
        MeasurementInput {
            ph: self.ph,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            organic_matter: self.organic_matter,
            heavy_metals: self.heavy_metals,
            texture: self.texture,
            ..Default::default()
        }
    }
}

fn parse_heavy_metals(s: &str) -> Result<HeavyMetalsLevel, String> {
    HeavyMetalsLevel::from_str(s)
        .ok_or_else(|| format!("unknown heavy metals level '{}' (low, moderate, high)", s))
}

fn parse_texture(s: &str) -> Result<SoilTexture, String> {
    SoilTexture::from_str(s)
        .ok_or_else(|| format!("unknown soil texture '{}' (clay, sandy, loamy, silty)", s))
}

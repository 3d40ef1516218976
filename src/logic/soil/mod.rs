pub mod classify;
pub mod engine;
pub mod thresholds;

pub use engine::{analyze, SoilAnalyzer};

pub mod calculations;
pub mod rules;
pub mod soil;

pub use rules::AdviceEngine;
pub use soil::SoilAnalyzer;

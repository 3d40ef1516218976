pub mod advice;
pub mod analysis;
pub mod history;
pub mod soil;
pub mod weather;

pub use advice::*;
pub use analysis::*;
pub use history::*;
pub use soil::*;
pub use weather::*;

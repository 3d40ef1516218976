pub mod connection;
pub mod history;
pub mod migrations;
pub mod store;

pub use connection::Database;
pub use history::AnalysisHistory;
pub use store::{KeyValueStore, MemoryStore};

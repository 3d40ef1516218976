pub mod tomorrow;

pub use tomorrow::TomorrowIoClient;

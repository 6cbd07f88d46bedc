pub mod catalog;
pub mod config;
pub mod error;
pub mod listings;
pub mod suggestions;
pub mod telemetry;

pub mod config;
pub mod error;
pub mod models;

pub use config::{Config, DecisionThresholds};
pub use error::EngineError;

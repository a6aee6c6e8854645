//! Command layer: resolved configuration and the generate pipeline.

pub mod config;
mod generate;

pub use config::{Config, DEFAULT_STATUS_PATH, OutputFormat};
pub use generate::{GenerateReport, generate, run};

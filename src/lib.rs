pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::GeminiClient;
pub use app::Session;
pub use config::AppConfig;
pub use crate::core::{Controller, ViewState};
pub use domain::model::{ComparableSale, DetailedAnalysis, Language, ValuationResponse};
pub use domain::ports::ValuationService;
pub use utils::error::{Result, ValuationError};

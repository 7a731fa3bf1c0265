#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::gemini::api_key_from_env;
use crate::domain::model::Language;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.4;
pub const DEFAULT_WIDTH: usize = 72;

/// Effective settings after merging defaults, the TOML file, the environment and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_seconds: Option<u64>,
    pub language: Language,
    pub width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
            timeout_seconds: None,
            language: Language::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl AppConfig {
    /// Applies file values on top of the defaults, then the environment credential.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: file.service.endpoint.clone().unwrap_or(defaults.endpoint),
            model: file.service.model.clone().unwrap_or(defaults.model),
            api_key: file.api_key().map(str::to_string).or_else(api_key_from_env),
            temperature: file.service.temperature.unwrap_or(defaults.temperature),
            timeout_seconds: file.service.timeout_seconds,
            language: file.ui.language.unwrap_or(defaults.language),
            width: file.ui.width.unwrap_or(defaults.width),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &cli::CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file.validate()?;

        let mut config = Self::from_toml(&file);
        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model) = &cli.model {
            config.model = model.clone();
        }
        if let Some(temperature) = cli.temperature {
            config.temperature = temperature;
        }
        if let Some(timeout) = cli.timeout_seconds {
            config.timeout_seconds = Some(timeout);
        }
        if let Some(lang) = cli.lang {
            config.language = lang;
        }
        if let Some(width) = cli.width {
            config.width = width;
        }
        Ok(config)
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

// A missing credential is not an error here; it fails the valuation call instead.
impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.endpoint)?;
        validate_non_empty_string("service.model", &self.model)?;
        validate_range("service.temperature", self.temperature, 0.0, 2.0)?;
        validate_range("ui.width", self.width, 40, 200)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("service.timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}

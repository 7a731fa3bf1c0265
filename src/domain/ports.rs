use crate::domain::model::{Language, ValuationResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of completion-service settings, implemented by the CLI and TOML configs.
pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn temperature(&self) -> f32;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait ValuationService: Send + Sync {
    async fn evaluate(&self, domain: &str, language: Language) -> Result<ValuationResponse>;
}

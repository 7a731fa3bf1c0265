use crate::adapters::prompt::{build_prompt, valuation_schema};
use crate::domain::model::{Language, ValuationResponse};
use crate::domain::ports::{ConfigProvider, ValuationService};
use crate::utils::error::{Result, ValuationError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_ENV: &str = "API_KEY";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it carries any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Reads the credential from the environment, preferring `GEMINI_API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    api_key_from(|name| std::env::var(name).ok())
}

/// First non-blank value among the credential variables, in lookup order.
fn api_key_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [API_KEY_ENV, API_KEY_FALLBACK_ENV]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|key| !key.trim().is_empty())
}

pub struct GeminiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { config, client })
    }

    pub fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_endpoint().trim_end_matches('/'),
            self.config.model()
        )
    }

    pub fn build_request(&self, domain: &str, language: Language) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(build_prompt(domain, language)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: valuation_schema(),
                temperature: self.config.temperature(),
            },
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> ValuationService for GeminiClient<C> {
    async fn evaluate(&self, domain: &str, language: Language) -> Result<ValuationResponse> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(ValuationError::EmptyDomainError);
        }

        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ValuationError::MissingCredentialError {
                env_var: API_KEY_ENV.to_string(),
            })?;

        let url = self.request_url();
        tracing::debug!("Requesting valuation for {} ({}) from {}", domain, language, url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&self.build_request(domain, language))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Completion service response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ValuationError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(ValuationError::EmptyResponseError)?;
        tracing::debug!("Completion text received ({} bytes)", text.len());

        ValuationResponse::from_completion_text(&text)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing API credential: set {env_var} or service.api_key")]
    MissingCredentialError { env_var: String },

    #[error("Completion service returned HTTP {status}: {body}")]
    ServiceError { status: u16, body: String },

    #[error("Completion service returned no text")]
    EmptyResponseError,

    #[error("Domain name cannot be empty")]
    EmptyDomainError,

    #[error("Response validation failed for '{field}': {reason}")]
    ResponseValidationError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ValuationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValuationError::ApiError(_) => ErrorCategory::Network,
            ValuationError::ServiceError { .. } | ValuationError::EmptyResponseError => {
                ErrorCategory::Service
            }
            ValuationError::SerializationError(_)
            | ValuationError::ResponseValidationError { .. } => ErrorCategory::Data,
            ValuationError::ConfigError { .. }
            | ValuationError::InvalidConfigValueError { .. }
            | ValuationError::MissingCredentialError { .. } => ErrorCategory::Configuration,
            ValuationError::EmptyDomainError => ErrorCategory::Input,
            ValuationError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Service | ErrorCategory::Data => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message for the terminal, without transport internals.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ValuationError::ApiError(e) if e.is_timeout() => {
                "The valuation service did not answer in time".to_string()
            }
            ValuationError::ApiError(_) => "Could not reach the valuation service".to_string(),
            ValuationError::ServiceError { status, .. } => {
                format!("The valuation service rejected the request (HTTP {})", status)
            }
            ValuationError::EmptyResponseError => {
                "The valuation service returned an empty answer".to_string()
            }
            ValuationError::SerializationError(_) => {
                "The valuation service returned malformed data".to_string()
            }
            ValuationError::ResponseValidationError { field, .. } => {
                format!("The valuation service returned an invalid '{}'", field)
            }
            ValuationError::MissingCredentialError { env_var } => {
                format!("No API key configured ({})", env_var)
            }
            ValuationError::EmptyDomainError => "Please enter a domain name".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Service => "Check the API key, model name and quota, then retry",
            ErrorCategory::Data => "Retry the request; model output can vary between calls",
            ErrorCategory::Configuration => "Review the config file and command line flags",
            ErrorCategory::Input => "Enter a domain such as example.com",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValuationError>;

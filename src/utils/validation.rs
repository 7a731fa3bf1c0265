use crate::utils::error::{Result, ValuationError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ValuationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ValuationError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ValuationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValuationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ValuationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rounds a model-supplied score and checks it lies in 0..=100.
pub fn validate_score(field_name: &str, value: f64) -> Result<u8> {
    if !value.is_finite() {
        return Err(ValuationError::ResponseValidationError {
            field: field_name.to_string(),
            reason: format!("score is not a finite number: {}", value),
        });
    }
    let rounded = value.round();
    if !(0.0..=100.0).contains(&rounded) {
        return Err(ValuationError::ResponseValidationError {
            field: field_name.to_string(),
            reason: format!("score {} is outside 0..=100", value),
        });
    }
    Ok(rounded as u8)
}

/// USD amounts must be finite and non-negative.
pub fn validate_amount(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValuationError::ResponseValidationError {
            field: field_name.to_string(),
            reason: format!("amount must be a non-negative number, got {}", value),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("service.endpoint", "https://example.com").is_ok());
        assert!(validate_url("service.endpoint", "http://localhost:8080/v1beta").is_ok());
        assert!(validate_url("service.endpoint", "").is_err());
        assert!(validate_url("service.endpoint", "invalid-url").is_err());
        assert!(validate_url("service.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("service.temperature", 0.4, 0.0, 2.0).is_ok());
        assert!(validate_range("service.temperature", 2.5, 0.0, 2.0).is_err());
        assert!(validate_range("ui.width", 10usize, 40, 200).is_err());
    }

    #[test]
    fn test_validate_score_rounds_and_bounds() {
        assert_eq!(validate_score("ageScore", 70.0).unwrap(), 70);
        assert_eq!(validate_score("ageScore", 69.6).unwrap(), 70);
        assert_eq!(validate_score("ageScore", 100.4).unwrap(), 100);
        assert!(validate_score("ageScore", 101.0).is_err());
        assert!(validate_score("ageScore", -3.0).is_err());
        assert!(validate_score("ageScore", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("estimatedValue", 0.0).unwrap(), 0.0);
        assert!(validate_amount("estimatedValue", -1.0).is_err());
        assert!(validate_amount("estimatedValue", f64::INFINITY).is_err());
    }
}

use crate::utils::error::{Result, ValuationError};
use crate::utils::validation::{validate_amount, validate_score};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    English,
    #[serde(rename = "ar")]
    #[cfg_attr(feature = "cli", value(name = "ar"))]
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Name used inside the prompt for narrative fields.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }

    /// Name shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "العربية",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Language {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "ar" | "arabic" | "العربية" => Ok(Language::Arabic),
            other => Err(ValuationError::InvalidConfigValueError {
                field: "language".to_string(),
                value: other.to_string(),
                reason: "Supported languages: en, ar".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableSale {
    pub domain: String,
    pub price: f64,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    #[serde(default)]
    pub brandability: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub extensions: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub market_trends: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub estimated_value: f64,
    pub brandability_score: u8,
    pub keyword_score: u8,
    pub extension_score: u8,
    pub age_score: u8,
    pub comparable_sales: Vec<ComparableSale>,
    pub summary: String,
    pub detailed_analysis: DetailedAnalysis,
}

/// Year as the model sends it: usually a string, sometimes a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Text(String),
    Number(serde_json::Number),
}

impl RawYear {
    fn into_string(self) -> String {
        match self {
            RawYear::Text(s) => s,
            RawYear::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComparableSale {
    pub domain: String,
    pub price: f64,
    #[serde(default)]
    pub year: Option<RawYear>,
}

/// Untrusted payload exactly as decoded from the completion text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValuation {
    #[serde(default)]
    pub currency: Option<String>,
    pub estimated_value: f64,
    pub brandability_score: f64,
    pub keyword_score: f64,
    pub extension_score: f64,
    pub age_score: f64,
    pub comparable_sales: Vec<RawComparableSale>,
    pub summary: String,
    pub detailed_analysis: DetailedAnalysis,
}

impl TryFrom<RawValuation> for ValuationResponse {
    type Error = ValuationError;

    fn try_from(raw: RawValuation) -> Result<Self> {
        let comparable_sales = raw
            .comparable_sales
            .into_iter()
            .enumerate()
            .map(|(idx, sale)| -> Result<ComparableSale> {
                let price = validate_amount(&format!("comparableSales[{}].price", idx), sale.price)?;
                Ok(ComparableSale {
                    domain: sale.domain,
                    price,
                    year: sale.year.map(RawYear::into_string).unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ValuationResponse {
            currency: raw.currency,
            estimated_value: validate_amount("estimatedValue", raw.estimated_value)?,
            brandability_score: validate_score("brandabilityScore", raw.brandability_score)?,
            keyword_score: validate_score("keywordScore", raw.keyword_score)?,
            extension_score: validate_score("extensionScore", raw.extension_score)?,
            age_score: validate_score("ageScore", raw.age_score)?,
            comparable_sales,
            summary: raw.summary,
            detailed_analysis: raw.detailed_analysis,
        })
    }
}

impl ValuationResponse {
    /// Decodes completion text and validates it at the boundary.
    pub fn from_completion_text(text: &str) -> Result<Self> {
        let raw: RawValuation = serde_json::from_str(text)?;
        ValuationResponse::try_from(raw)
    }

    /// Market trend axis for the chart, derived from keyword and brandability.
    pub fn market_trend_score(&self) -> u8 {
        let sum = u16::from(self.keyword_score) + u16::from(self.brandability_score);
        ((f64::from(sum) / 2.0).round()) as u8
    }
}

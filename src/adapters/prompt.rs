use crate::domain::model::Language;
use serde_json::{json, Value};

pub const REQUIRED_FIELDS: [&str; 8] = [
    "estimatedValue",
    "brandabilityScore",
    "keywordScore",
    "extensionScore",
    "ageScore",
    "comparableSales",
    "summary",
    "detailedAnalysis",
];

pub fn build_prompt(domain: &str, language: Language) -> String {
    format!(
        r#"Act as a professional domain name appraiser.
Analyze the value of the domain name: "{domain}".

Consider the following factors:
1. Brandability: Is it memorable, short, easy to spell?
2. Keywords: Does it contain high-value, high-search-volume keywords?
3. Extensions: Is the TLD (.com, .net, etc.) valuable? How saturated are other extensions?
4. Market Trends: Current demand for this niche.
5. Comparable Sales: Estimate based on similar domains sold in the past.

Provide a realistic market value estimate in USD.

IMPORTANT: Provide the "summary" and "detailedAnalysis" text in the following language: {lang}."#,
        domain = domain,
        lang = language.english_name(),
    )
}

/// Structured-output schema in the completion API's OpenAPI subset.
pub fn valuation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "currency": { "type": "STRING" },
            "estimatedValue": { "type": "NUMBER", "description": "Estimated value in USD" },
            "brandabilityScore": { "type": "NUMBER", "description": "Score from 0 to 100" },
            "keywordScore": { "type": "NUMBER", "description": "Score from 0 to 100" },
            "extensionScore": { "type": "NUMBER", "description": "Score from 0 to 100" },
            "ageScore": {
                "type": "NUMBER",
                "description": "Score from 0 to 100 (Estimate based on likely age)"
            },
            "comparableSales": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "domain": { "type": "STRING" },
                        "price": { "type": "NUMBER" },
                        "year": { "type": "STRING" }
                    }
                }
            },
            "summary": { "type": "STRING", "description": "A short summary of the valuation" },
            "detailedAnalysis": {
                "type": "OBJECT",
                "properties": {
                    "brandability": { "type": "STRING" },
                    "keywords": { "type": "STRING" },
                    "extensions": { "type": "STRING" },
                    "age": { "type": "STRING" },
                    "marketTrends": { "type": "STRING" }
                }
            }
        },
        "required": REQUIRED_FIELDS,
    })
}

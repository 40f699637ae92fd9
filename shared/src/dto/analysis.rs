use crate::dto::legacy::LegacyEtsyData;
use crate::dto::series::SeriesData;
use crate::error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary of one product category as computed by the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(rename = "avg_price")]
    pub average_price: f64,
    #[serde(rename = "num_sellers")]
    pub seller_count: u64,
    #[serde(default)]
    pub top_keywords: Vec<String>,
}

impl CategorySummary {
    pub fn new(name: &str, average_price: f64, seller_count: u64) -> Self {
        Self {
            name: name.to_string(),
            average_price,
            seller_count,
            top_keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.top_keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }
}

/// Product suggestion produced by the ideation stage of the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductIdea {
    #[serde(alias = "idea")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Canonical analysis payload (`/api/etsy-analysis`).
///
/// Every section is optional. The payload is kept exactly as received and
/// never validated across fields; missing sections are simply not drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_categories: Option<Vec<CategorySummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_searches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_value_hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ideas: Option<Vec<ProductIdea>>,

    // Named chart series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_volume: Option<SeriesData>,
}

impl AnalysisPayload {
    /// True when no section has anything to draw.
    pub fn is_empty(&self) -> bool {
        fn list_empty<T>(section: &Option<Vec<T>>) -> bool {
            section.as_ref().map_or(true, Vec::is_empty)
        }
        fn series_empty(section: &Option<SeriesData>) -> bool {
            section.as_ref().map_or(true, SeriesData::is_empty)
        }

        list_empty(&self.top_categories)
            && list_empty(&self.trending_searches)
            && list_empty(&self.high_value_hashtags)
            && list_empty(&self.product_ideas)
            && series_empty(&self.categories)
            && series_empty(&self.competitors)
            && series_empty(&self.profitability)
            && series_empty(&self.sales_volume)
    }
}

/// Which of the two payload shapes an endpoint speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadSchema {
    #[default]
    Analysis,
    Legacy,
}

impl PayloadSchema {
    pub fn default_path(self) -> &'static str {
        match self {
            PayloadSchema::Analysis => "/api/etsy-analysis",
            PayloadSchema::Legacy => "/api/etsy-data",
        }
    }
}

impl std::str::FromStr for PayloadSchema {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "analysis" | "etsy-analysis" => Ok(PayloadSchema::Analysis),
            "legacy" | "etsy-data" => Ok(PayloadSchema::Legacy),
            _ => Err(format!("Unknown payload schema: {}", s)),
        }
    }
}

/// Turns a raw HTTP response into a payload.
///
/// Non-2xx statuses are server failures regardless of the body. A 2xx body must
/// be a JSON object matching `schema`.
pub fn decode_payload(schema: PayloadSchema, status: u16, body: &str) -> Result<AnalysisPayload> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Server { status });
    }

    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::Malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }

    match schema {
        PayloadSchema::Analysis => Ok(serde_json::from_value::<AnalysisPayload>(value)?),
        PayloadSchema::Legacy => Ok(serde_json::from_value::<LegacyEtsyData>(value)?.into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

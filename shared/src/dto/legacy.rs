use crate::dto::analysis::{AnalysisPayload, CategorySummary, ProductIdea};
use crate::dto::series::{SeriesData, SeriesDataset};
use serde::{Deserialize, Serialize};

/// Older payload shape served at `/api/etsy-data`.
///
/// Every chart arrives pre-shaped as a series object and there are no category
/// summaries, searches or hashtags. It is only ever decoded to be converted
/// into an [`AnalysisPayload`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEtsyData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_categories: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profitability: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_volume: Option<SeriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_ideas: Option<Vec<ProductIdea>>,
}

impl From<LegacyEtsyData> for AnalysisPayload {
    fn from(legacy: LegacyEtsyData) -> Self {
        AnalysisPayload {
            categories: legacy.top_categories,
            competitors: legacy.competitors,
            profitability: legacy.profitability,
            sales_volume: legacy.sales_volume,
            product_ideas: legacy.product_ideas,
            ..AnalysisPayload::default()
        }
    }
}

impl From<&AnalysisPayload> for LegacyEtsyData {
    fn from(payload: &AnalysisPayload) -> Self {
        LegacyEtsyData {
            top_categories: payload
                .categories
                .clone()
                .or_else(|| payload.top_categories.as_deref().and_then(category_price_series)),
            competitors: payload.competitors.clone(),
            profitability: payload.profitability.clone(),
            sales_volume: payload.sales_volume.clone(),
            product_ideas: payload.product_ideas.clone(),
        }
    }
}

/// Legacy clients only know series, so category summaries travel as their
/// average prices.
fn category_price_series(categories: &[CategorySummary]) -> Option<SeriesData> {
    if categories.is_empty() {
        return None;
    }
    Some(SeriesData::new(
        categories.iter().map(|c| c.name.clone()).collect(),
        vec![SeriesDataset::new(
            Some("Average Price"),
            categories.iter().map(|c| c.average_price).collect(),
        )],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::analysis::{decode_payload, PayloadSchema};
    use pretty_assertions::assert_eq;

    const LEGACY_BODY: &str = r#"{
        "topCategories": { "labels": ["Planners", "Stickers"], "datasets": [{ "label": "Listings", "data": [40, 25] }] },
        "competitors": { "labels": ["Planners", "Stickers"], "datasets": [{ "data": [12, 30] }] },
        "salesVolume": { "labels": ["Q1"], "datasets": [{ "label": "Units", "data": [900] }] },
        "productIdeas": [
            { "name": "Budget bundle", "description": "Monthly budget sheets", "keywords": ["budget", "finance"] }
        ]
    }"#;

    #[test]
    fn test_legacy_payload_maps_to_canonical_sections() {
        let payload = decode_payload(PayloadSchema::Legacy, 200, LEGACY_BODY).unwrap();

        let categories = payload.categories.as_ref().unwrap();
        assert_eq!(categories.labels, vec!["Planners", "Stickers"]);
        assert_eq!(categories.datasets[0].data, vec![40.0, 25.0]);
        assert_eq!(payload.competitors.as_ref().unwrap().datasets[0].label, None);
        assert_eq!(payload.profitability, None);
        assert_eq!(payload.sales_volume.as_ref().unwrap().datasets[0].data, vec![900.0]);
        assert_eq!(payload.product_ideas.as_ref().unwrap()[0].name, "Budget bundle");
        assert_eq!(payload.top_categories, None);
        assert_eq!(payload.trending_searches, None);
    }

    #[test]
    fn test_canonical_payload_projects_back_to_legacy() {
        let payload = decode_payload(PayloadSchema::Legacy, 200, LEGACY_BODY).unwrap();
        let legacy = LegacyEtsyData::from(&payload);

        let json = serde_json::to_value(&legacy).unwrap();
        assert!(json.get("topCategories").is_some());
        assert!(json.get("salesVolume").is_some());
        assert!(json.get("profitability").is_none());
        assert_eq!(AnalysisPayload::from(legacy), payload);
    }

    #[test]
    fn test_category_summaries_become_legacy_series() {
        let payload = AnalysisPayload {
            top_categories: Some(vec![
                CategorySummary::new("Planners", 12.5, 340),
                CategorySummary::new("Wall Art", 6.0, 120),
            ]),
            ..AnalysisPayload::default()
        };

        let legacy = LegacyEtsyData::from(&payload);
        let series = legacy.top_categories.expect("derived series");

        assert_eq!(series.labels, vec!["Planners", "Wall Art"]);
        assert_eq!(series.datasets[0].label.as_deref(), Some("Average Price"));
        assert_eq!(series.datasets[0].data, vec![12.5, 6.0]);
    }

    #[test]
    fn test_explicit_category_series_wins_over_summaries() {
        let payload = AnalysisPayload {
            top_categories: Some(vec![CategorySummary::new("Planners", 12.5, 340)]),
            categories: Some(SeriesData::new(
                vec!["Listings".to_string()],
                vec![SeriesDataset::new(None, vec![40.0])],
            )),
            ..AnalysisPayload::default()
        };

        let legacy = LegacyEtsyData::from(&payload);
        assert_eq!(legacy.top_categories, payload.categories);
    }

    #[test]
    fn test_no_categories_no_legacy_series() {
        let payload = AnalysisPayload {
            top_categories: Some(vec![]),
            ..AnalysisPayload::default()
        };
        assert_eq!(LegacyEtsyData::from(&payload).top_categories, None);
    }
}

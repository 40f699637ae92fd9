use serde::{Deserialize, Serialize};

/// A named numeric series as the analysis service ships it: chart-ready labels
/// plus one or more datasets aligned with those labels by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<SeriesDataset>,
}

/// Chart.js accepts either one colour for the whole dataset or one per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Uniform(String),
    PerPoint(Vec<String>),
}

impl SeriesColor {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            SeriesColor::Uniform(color) => vec![color.clone()],
            SeriesColor::PerPoint(colors) => colors.clone(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        match self {
            SeriesColor::Uniform(color) => Some(color),
            SeriesColor::PerPoint(colors) => colors.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<SeriesColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<SeriesColor>,
}

impl SeriesData {
    pub fn new(labels: Vec<String>, datasets: Vec<SeriesDataset>) -> Self {
        Self { labels, datasets }
    }

    /// Without labels or without any data point there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.datasets.iter().all(|d| d.data.is_empty())
    }
}

impl SeriesDataset {
    pub fn new(label: Option<&str>, data: Vec<f64>) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            ..Self::default()
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_accepts_chartjs_shape() {
        let value = json!({
            "labels": ["Planners", "Stickers"],
            "datasets": [{ "label": "Profit", "data": [4.5, 2.0], "backgroundColor": "#fff" }]
        });

        let series: SeriesData = serde_json::from_value(value).unwrap();

        assert_eq!(series.labels, vec!["Planners", "Stickers"]);
        assert_eq!(series.datasets[0].label.as_deref(), Some("Profit"));
        assert_eq!(series.datasets[0].data, vec![4.5, 2.0]);
        assert_eq!(
            series.datasets[0].background_color,
            Some(SeriesColor::Uniform("#fff".to_string()))
        );
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_accepts_per_point_colors() {
        let value = json!({
            "labels": ["a", "b"],
            "datasets": [{ "data": [1, 2], "backgroundColor": ["#000000", "#111111"], "borderColor": "#222222" }]
        });

        let series: SeriesData = serde_json::from_value(value).unwrap();
        let dataset = &series.datasets[0];

        assert_eq!(
            dataset.background_color.as_ref().map(SeriesColor::to_vec),
            Some(vec!["#000000".to_string(), "#111111".to_string()])
        );
        assert_eq!(dataset.border_color.as_ref().and_then(SeriesColor::first), Some("#222222"));
    }

    #[test]
    fn test_series_without_points_is_empty() {
        let series = SeriesData::new(vec![], vec![SeriesDataset::new(None, vec![])]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_series_missing_labels_or_data_is_empty() {
        let no_datasets = SeriesData::new(vec!["a".to_string()], vec![]);
        assert!(no_datasets.is_empty());

        let no_points = SeriesData::new(vec!["a".to_string()], vec![SeriesDataset::new(None, vec![])]);
        assert!(no_points.is_empty());

        let no_labels = SeriesData::new(vec![], vec![SeriesDataset::new(None, vec![3.0])]);
        assert!(no_labels.is_empty());
    }
}

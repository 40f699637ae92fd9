use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Line => write!(f, "line"),
        }
    }
}

/// Everything a charting surface needs to draw one chart.
///
/// `labels[i]` and every `datasets[_].data[i]` refer to the same entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    /// One entry for a uniform fill, or one per data point.
    pub background_colors: Vec<String>,
    pub border_color: Option<String>,
    pub border_width: u32,
    pub fill: bool,
    pub tension: f64,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            background_colors: Vec::new(),
            border_color: None,
            border_width: 0,
            fill: false,
            tension: 0.0,
        }
    }
}

impl DatasetStyle {
    /// Fill color for the point at `index`.
    pub fn color_at(&self, index: usize) -> Option<&str> {
        match self.background_colors.len() {
            0 => None,
            1 => self.background_colors.first().map(String::as_str),
            len => self.background_colors.get(index % len).map(String::as_str),
        }
    }
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: &str, labels: Vec<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels,
            datasets: Vec::new(),
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn first_dataset(&self) -> Option<&Dataset> {
        self.datasets.first()
    }
}

//! Pure projection from [`ViewState`] to what the page draws.
//!
//! Nothing here touches the DOM: the result is a plain value handed to the
//! chart and list renderers, so the same state always projects to the same
//! output.

use crate::charts::palette::{palette_color, palette_cycle, TEAL_BORDER, TEAL_FILL, TEAL_LINE};
use crate::charts::spec::{ChartKind, ChartSpec, Dataset, DatasetStyle};
use crate::dto::analysis::{AnalysisPayload, CategorySummary, ProductIdea};
use crate::dto::series::{SeriesColor, SeriesData};
use crate::view::state::ViewState;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    CategoryPrices,
    SellerShare,
    SellerDistribution,
    CategoryDetails,
    CategorySeries,
    CompetitorSeries,
    ProfitabilitySeries,
    SalesVolumeSeries,
    TrendingSearches,
    Hashtags,
    ProductIdeas,
}

impl SectionId {
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::CategoryPrices => "category-prices",
            SectionId::SellerShare => "seller-share",
            SectionId::SellerDistribution => "seller-distribution",
            SectionId::CategoryDetails => "category-details",
            SectionId::CategorySeries => "category-series",
            SectionId::CompetitorSeries => "competitor-series",
            SectionId::ProfitabilitySeries => "profitability-series",
            SectionId::SalesVolumeSeries => "sales-volume-series",
            SectionId::TrendingSearches => "trending-searches",
            SectionId::Hashtags => "hashtags",
            SectionId::ProductIdeas => "product-ideas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bulleted,
    /// Inline tags, used for hashtags.
    Cloud,
}

/// One visual list entry. `key` is the entry's index in the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub key: usize,
    pub heading: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSection {
    pub title: String,
    pub style: ListStyle,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Chart { id: SectionId, chart: ChartSpec },
    List { id: SectionId, list: ListSection },
}

impl Section {
    pub fn id(&self) -> SectionId {
        match self {
            Section::Chart { id, .. } | Section::List { id, .. } => *id,
        }
    }

    pub fn is_chart(&self) -> bool {
        matches!(self, Section::Chart { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderedView {
    Loading,
    Failed { message: String },
    Ready { sections: Vec<Section> },
}

impl RenderedView {
    /// Sections to draw; empty unless ready.
    pub fn sections(&self) -> &[Section] {
        match self {
            RenderedView::Ready { sections } => sections,
            _ => &[],
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections().iter().find(|s| s.id() == id)
    }

    pub fn chart(&self, id: SectionId) -> Option<&ChartSpec> {
        match self.section(id)? {
            Section::Chart { chart, .. } => Some(chart),
            Section::List { .. } => None,
        }
    }

    pub fn list(&self, id: SectionId) -> Option<&ListSection> {
        match self.section(id)? {
            Section::List { list, .. } => Some(list),
            Section::Chart { .. } => None,
        }
    }

    pub fn chart_count(&self) -> usize {
        self.sections().iter().filter(|s| s.is_chart()).count()
    }
}

pub fn render_view(state: &ViewState) -> RenderedView {
    match state {
        ViewState::Loading => RenderedView::Loading,
        ViewState::Failed(message) => RenderedView::Failed {
            message: message.clone(),
        },
        ViewState::Ready(payload) => RenderedView::Ready {
            sections: project_payload(payload),
        },
    }
}

fn project_payload(payload: &AnalysisPayload) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(categories) = non_empty(&payload.top_categories) {
        sections.push(Section::Chart {
            id: SectionId::CategoryPrices,
            chart: category_price_bar(categories),
        });
        sections.push(Section::Chart {
            id: SectionId::SellerShare,
            chart: seller_share_pie(categories),
        });
        sections.push(Section::Chart {
            id: SectionId::SellerDistribution,
            chart: seller_distribution_line(categories),
        });
        sections.push(Section::List {
            id: SectionId::CategoryDetails,
            list: category_details(categories),
        });
    }

    let named_series = [
        (SectionId::CategorySeries, ChartKind::Bar, "Top Categories", &payload.categories),
        (SectionId::CompetitorSeries, ChartKind::Pie, "Competitors", &payload.competitors),
        (SectionId::ProfitabilitySeries, ChartKind::Line, "Profitability", &payload.profitability),
        (SectionId::SalesVolumeSeries, ChartKind::Bar, "Sales Volume", &payload.sales_volume),
    ];
    for (id, kind, title, series) in named_series {
        if let Some(series) = series.as_ref().filter(|s| !s.is_empty()) {
            sections.push(Section::Chart {
                id,
                chart: series_chart(kind, title, series),
            });
        }
    }

    if let Some(searches) = non_empty(&payload.trending_searches) {
        sections.push(Section::List {
            id: SectionId::TrendingSearches,
            list: text_list("Trending Searches", ListStyle::Bulleted, searches),
        });
    }
    if let Some(hashtags) = non_empty(&payload.high_value_hashtags) {
        sections.push(Section::List {
            id: SectionId::Hashtags,
            list: text_list("High-Value Hashtags", ListStyle::Cloud, hashtags),
        });
    }
    if let Some(ideas) = non_empty(&payload.product_ideas) {
        sections.push(Section::List {
            id: SectionId::ProductIdeas,
            list: product_ideas(ideas),
        });
    }

    sections
}

fn non_empty<T>(section: &Option<Vec<T>>) -> Option<&[T]> {
    section.as_deref().filter(|items| !items.is_empty())
}

fn category_names(categories: &[CategorySummary]) -> Vec<String> {
    categories.iter().map(|c| c.name.clone()).collect()
}

fn seller_counts(categories: &[CategorySummary]) -> Vec<f64> {
    categories.iter().map(|c| c.seller_count as f64).collect()
}

pub fn category_price_bar(categories: &[CategorySummary]) -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, "Product Category Analysis", category_names(categories)).with_dataset(
        Dataset {
            label: Some("Average Price".to_string()),
            data: categories.iter().map(|c| c.average_price).collect(),
            style: DatasetStyle {
                background_colors: vec![TEAL_FILL.to_string()],
                border_color: Some(TEAL_BORDER.to_string()),
                border_width: 1,
                ..DatasetStyle::default()
            },
        },
    )
}

pub fn seller_share_pie(categories: &[CategorySummary]) -> ChartSpec {
    ChartSpec::new(ChartKind::Pie, "Market Share by Number of Sellers", category_names(categories))
        .with_dataset(Dataset {
            label: None,
            data: seller_counts(categories),
            style: DatasetStyle {
                background_colors: palette_cycle(categories.len()),
                ..DatasetStyle::default()
            },
        })
}

pub fn seller_distribution_line(categories: &[CategorySummary]) -> ChartSpec {
    ChartSpec::new(
        ChartKind::Line,
        "Seller Distribution Across Categories",
        category_names(categories),
    )
    .with_dataset(Dataset {
        label: Some("Number of Sellers".to_string()),
        data: seller_counts(categories),
        style: DatasetStyle {
            border_color: Some(TEAL_LINE.to_string()),
            border_width: 2,
            fill: false,
            tension: 0.1,
            ..DatasetStyle::default()
        },
    })
}

fn series_chart(kind: ChartKind, title: &str, series: &SeriesData) -> ChartSpec {
    let datasets = series
        .datasets
        .iter()
        .enumerate()
        .map(|(i, dataset)| {
            // Colours sent by the service win over the palette.
            let background_colors = dataset
                .background_color
                .as_ref()
                .map(SeriesColor::to_vec)
                .filter(|colors| !colors.is_empty())
                .unwrap_or_else(|| match kind {
                    ChartKind::Pie => palette_cycle(dataset.data.len()),
                    ChartKind::Bar | ChartKind::Line => vec![palette_color(i).to_string()],
                });
            let border_color = dataset
                .border_color
                .as_ref()
                .and_then(SeriesColor::first)
                .unwrap_or_else(|| palette_color(i))
                .to_string();
            Dataset {
                label: dataset.label.clone(),
                data: dataset.data.clone(),
                style: DatasetStyle {
                    background_colors,
                    border_color: Some(border_color),
                    border_width: 1,
                    fill: false,
                    tension: if kind == ChartKind::Line { 0.1 } else { 0.0 },
                },
            }
        })
        .collect();

    ChartSpec {
        kind,
        title: title.to_string(),
        labels: series.labels.clone(),
        datasets,
    }
}

fn category_details(categories: &[CategorySummary]) -> ListSection {
    ListSection {
        title: "Top Product Categories".to_string(),
        style: ListStyle::Bulleted,
        items: categories
            .iter()
            .enumerate()
            .map(|(key, category)| ListItem {
                key,
                heading: category.name.clone(),
                details: vec![
                    format!("Average Price: ${:.2}", category.average_price),
                    format!("Number of Sellers: {}", category.seller_count),
                    format!("Top Keywords: {}", category.top_keywords.join(", ")),
                ],
            })
            .collect(),
    }
}

fn text_list(title: &str, style: ListStyle, entries: &[String]) -> ListSection {
    ListSection {
        title: title.to_string(),
        style,
        items: entries
            .iter()
            .enumerate()
            .map(|(key, entry)| ListItem {
                key,
                heading: entry.clone(),
                details: Vec::new(),
            })
            .collect(),
    }
}

fn product_ideas(ideas: &[ProductIdea]) -> ListSection {
    ListSection {
        title: "Product Ideas".to_string(),
        style: ListStyle::Bulleted,
        items: ideas
            .iter()
            .enumerate()
            .map(|(key, idea)| {
                let mut details = Vec::with_capacity(2);
                if !idea.description.is_empty() {
                    details.push(idea.description.clone());
                }
                details.push(format!("Keywords: {}", idea.keywords.join(", ")));
                ListItem {
                    key,
                    heading: idea.name.clone(),
                    details,
                }
            })
            .collect(),
    }
}

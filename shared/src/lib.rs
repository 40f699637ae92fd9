pub mod dto {
    pub mod analysis;
    pub mod legacy;
    pub mod series;
}

pub mod view {
    pub mod lifecycle;
    pub mod projection;
    pub mod state;
}

pub mod charts {
    pub mod palette;
    pub mod registry;
    pub mod spec;
}

pub mod error;
pub mod source;

// Re-export commonly used items
pub use error::{FetchError, Result, FAILED_MESSAGE};

// Re-export DTOs
pub use dto::{
    analysis::{decode_payload, AnalysisPayload, CategorySummary, PayloadSchema, ProductIdea},
    legacy::LegacyEtsyData,
    series::{SeriesColor, SeriesData, SeriesDataset},
};

// Re-export view and chart types
pub use charts::{
    palette::{palette_color, PALETTE},
    registry::{register_chart_elements, registration_count, ChartElement, ChartRegistry},
    spec::{ChartKind, ChartSpec, Dataset, DatasetStyle},
};
pub use source::AnalysisSource;
pub use view::{
    lifecycle::{load_once, FetchGate, LoadOutcome, MountGuard},
    projection::{
        category_price_bar, render_view, seller_distribution_line, seller_share_pie, ListItem,
        ListSection, ListStyle, RenderedView, Section, SectionId,
    },
    state::ViewState,
};



#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_default_is_empty() {
        let payload = AnalysisPayload::default();

        assert!(payload.is_empty());
        assert_eq!(render_view(&ViewState::Ready(payload)), RenderedView::Ready { sections: vec![] });
    }

    #[test]
    fn test_failed_message_is_user_safe() {
        let error = FetchError::Server { status: 502 };

        assert_eq!(error.user_message(), FAILED_MESSAGE);
        assert!(!error.user_message().contains("502"));
    }
}

#[cfg(test)]
mod tests {
    use crate::api::analysis::HttpAnalysisSource;
    use crate::api::api_url;
    use crate::config::Config;
    use crate::Route;
    use pretty_assertions::assert_eq;
    use crate::pages::analytics_dashboard::DashboardState;
    use shared::{
        AnalysisPayload, AnalysisSource, FetchError, PayloadSchema, ViewState, FAILED_MESSAGE,
    };
    use std::rc::Rc;
    use yew::Reducible;
    use yew_router::Routable;

    #[test]
    fn test_config_defaults() {
        assert_eq!(Config::api_base_url(), "");
        assert_eq!(Config::schema_from(None), PayloadSchema::Analysis);
        assert_eq!(Config::request_timeout_ms(), 15_000);
        assert!(Config::chart_width() > 0);
        assert!(Config::chart_height() > 0);
    }

    #[test]
    fn test_analysis_paths() {
        assert_eq!(
            Config::analysis_path(PayloadSchema::Analysis),
            "/api/etsy-analysis"
        );
        assert_eq!(Config::analysis_path(PayloadSchema::Legacy), "/api/etsy-data");
    }

    #[test]
    fn test_schema_override() {
        assert_eq!(Config::schema_from(Some("legacy")), PayloadSchema::Legacy);
        assert_eq!(Config::schema_from(Some("etsy-analysis")), PayloadSchema::Analysis);
        assert_eq!(Config::schema_from(Some("xml")), PayloadSchema::Analysis);
    }

    #[test]
    fn test_api_url_is_relative_without_base() {
        assert_eq!(api_url("/api/etsy-analysis"), "/api/etsy-analysis");
    }

    #[test]
    fn test_http_source_targets_schema_endpoint() {
        let source = HttpAnalysisSource::default();
        assert_eq!(source.url(), "/api/etsy-analysis");
        assert_eq!(source.schema(), PayloadSchema::Analysis);
        assert_eq!(source.describe(), "GET /api/etsy-analysis");

        let legacy = HttpAnalysisSource::new(PayloadSchema::Legacy);
        assert_eq!(legacy.url(), "/api/etsy-data");
    }

    #[test]
    fn test_dashboard_reducer_settles_once() {
        let loading = Rc::new(DashboardState::default());
        assert_eq!(loading.0, ViewState::Loading);

        let ready = loading.reduce(Ok(AnalysisPayload::default()));
        assert!(matches!(ready.0, ViewState::Ready(_)));

        let late = ready.clone().reduce(Err(FetchError::timeout(15_000)));
        assert!(Rc::ptr_eq(&ready, &late));
    }

    #[test]
    fn test_dashboard_reducer_failure_hides_details() {
        let failed = Rc::new(DashboardState::default()).reduce(Err(FetchError::Server { status: 503 }));
        assert_eq!(failed.0, ViewState::Failed(FAILED_MESSAGE.to_string()));

        let late = failed.clone().reduce(Ok(AnalysisPayload::default()));
        assert!(Rc::ptr_eq(&failed, &late));
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/legacy"), Some(Route::LegacyDashboard));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::Dashboard.to_path(), "/");
    }
}

use crate::dto::analysis::AnalysisPayload;
use crate::error::FetchError;
use async_trait::async_trait;

/// Where the analytics view gets its payload from.
///
/// The browser implementation issues one HTTP GET; tests plug in canned
/// responses. Futures are not `Send` because the UI runs on a single thread.
#[async_trait(?Send)]
pub trait AnalysisSource {
    async fn fetch_analysis(&self) -> Result<AnalysisPayload, FetchError>;

    /// Human-readable endpoint, for logs.
    fn describe(&self) -> String;
}

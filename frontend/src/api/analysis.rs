use crate::api::api_url;
use crate::api::utils::json_get;
use crate::config::Config;
use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use shared::{decode_payload, AnalysisPayload, AnalysisSource, FetchError, PayloadSchema};

/// Fetches the analysis payload over HTTP with `gloo-net`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpAnalysisSource {
    url: String,
    schema: PayloadSchema,
    timeout_ms: u32,
}

impl HttpAnalysisSource {
    pub fn new(schema: PayloadSchema) -> Self {
        Self {
            url: api_url(Config::analysis_path(schema)),
            schema,
            timeout_ms: Config::request_timeout_ms(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn schema(&self) -> PayloadSchema {
        self.schema
    }

    async fn request(&self) -> Result<AnalysisPayload, FetchError> {
        let response = json_get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Server {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {}", e)))?;
        debug!("Received {} bytes from {}", body.len(), self.url);

        decode_payload(self.schema, response.status(), &body)
    }
}

impl Default for HttpAnalysisSource {
    fn default() -> Self {
        Self::new(Config::payload_schema())
    }
}

#[async_trait(?Send)]
impl AnalysisSource for HttpAnalysisSource {
    async fn fetch_analysis(&self) -> Result<AnalysisPayload, FetchError> {
        let request = Box::pin(self.request());
        let timeout = TimeoutFuture::new(self.timeout_ms);

        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::timeout(self.timeout_ms)),
        }
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}

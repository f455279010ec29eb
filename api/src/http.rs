use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::source::{HttpReply, ReportSource};

/// `reqwest`-backed [`ReportSource`]. Cheap to clone; the inner client is
/// reference counted.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpReportSource {
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// JSON request with `Accept` as its only added header; anything beyond
    /// the CORS-safelisted set would force a preflight on the web build.
    fn json_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<HttpReply, TransportError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait(?Send)]
impl ReportSource for HttpReportSource {
    fn base_url(&self) -> String {
        self.config.base_url.clone()
    }

    async fn probe(&self) -> Result<u16, TransportError> {
        let url = self.config.liveness_url();
        debug!(%url, "probing analysis API");
        let response = self.http.get(&url).send().await?;
        Ok(response.status().as_u16())
    }

    async fn trigger_analysis(&self) -> Result<HttpReply, TransportError> {
        let url = self.config.trigger_url();
        debug!(%url, "triggering batch analysis");
        self.send(self.json_request(Method::POST, &url)).await
    }

    async fn fetch_report(&self) -> Result<HttpReply, TransportError> {
        let url = self.config.report_url();
        debug!(%url, "fetching analysis report");
        self.send(self.json_request(Method::GET, &url)).await
    }
}

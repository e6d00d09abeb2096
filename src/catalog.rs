//! カタログAPIクライアント
//!
//! 1ページにつき1回GETを発行する。リトライはしない。

use crate::config::Config;
use crate::error::{ArticError, Result};
use artic_common::{page_url, parse_page_response, FetchError, PageResult};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// ページ単位のデータ取得元
pub trait CatalogSource {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = std::result::Result<PageResult, FetchError>> + Send;
}

/// reqwestによるHTTPクライアント
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("artic-browser/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ArticError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.resolved_endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> std::result::Result<PageResult, FetchError> {
        let url = page_url(&self.endpoint, page);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_page_response(&body)
    }
}

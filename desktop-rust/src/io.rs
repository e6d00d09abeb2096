use std::time::Duration;

use artic_common::{page_url, parse_page_response, FetchError, PageResult, ARTWORKS_ENDPOINT};
use reqwest::blocking::Client;
use tracing::debug;

/// エンドポイントを上書きする環境変数
const ENDPOINT_ENV: &str = "ARTIC_ENDPOINT";
/// タイムアウト秒数の環境変数（未設定ならタイムアウトなし）
const TIMEOUT_ENV: &str = "ARTIC_TIMEOUT_SECS";

pub fn resolve_endpoint() -> String {
    match std::env::var(ENDPOINT_ENV) {
        Ok(endpoint) if !endpoint.trim().is_empty() => endpoint.trim().to_string(),
        _ => ARTWORKS_ENDPOINT.to_string(),
    }
}

pub fn build_client() -> Result<Client, FetchError> {
    let timeout = std::env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .map(Duration::from_secs);

    let mut builder = Client::builder().user_agent("artic-desktop");
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| FetchError::Network(format!("HTTP client init: {e}")))
}

/// 1ページ分を同期取得（ワーカースレッドから呼ぶ）
pub fn fetch_page_blocking(client: &Client, endpoint: &str, page: u32) -> Result<PageResult, FetchError> {
    let url = page_url(endpoint, page);
    debug!(%url, "GET");

    let response = client
        .get(&url)
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().map_err(|e| FetchError::Network(e.to_string()))?;
    parse_page_response(&body)
}

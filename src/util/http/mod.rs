use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode,
};
use scraper::Html;

use crate::{config::SETTINGS, error::FetchError};

pub mod element;

/// A singleton instance of the reqwest client.
///
/// Its cookie store lives in memory only and is dropped with the process.
static CLIENT: OnceCell<Client> = OnceCell::new();

/// Builds the browser-like headers sent with every request.
fn default_headers() -> HeaderMap {
    let source = &SETTINGS.source;
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(source.user_agent));
    headers.insert(header::ACCEPT, HeaderValue::from_static(source.accept));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(source.accept_language),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

    headers
}

/// Returns the reqwest client singleton instance or creates one if it doesn't exist.
fn get_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        // reqwest 只帶 rustls-no-provider，需要先安裝 ring；已安裝時會回傳 Err，忽略即可
        let _ = rustls::crypto::ring::default_provider().install_default();

        let transport = &SETTINGS.transport;
        Client::builder()
            // ===== 壓縮 =====
            .brotli(true)
            .gzip(true)
            .zstd(true)
            // ===== 超時設置 =====
            // connect timeout 同時涵蓋 TLS handshake
            .connect_timeout(Duration::from_secs(transport.connect_timeout_secs))
            // ===== 連接池 =====
            .pool_max_idle_per_host(transport.max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(transport.idle_timeout_secs))
            // ===== Cookie 和重定向 =====
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            // ===== Headers =====
            .default_headers(default_headers())
            .build()
            .map_err(|e| anyhow!("Failed to create reqwest client: {:?}", e))
    })
}

/// Performs one HTTP GET and parses the body as an HTML document.
///
/// The whole exchange, sending the request and reading the body, must finish
/// within `deadline`. The response is consumed and dropped before returning,
/// whatever the outcome. The body is decoded with the charset the server
/// declares; bytes that are invalid in it are replaced rather than rejected.
///
/// # Errors
///
/// * `FetchError::Network` - the client could not be built, the request failed,
///   the body could not be read, or `deadline` elapsed.
/// * `FetchError::UnexpectedStatus` - the status was not `200 OK`.
/// * `FetchError::Parse` - the body was empty.
pub async fn get_document(url: &str, deadline: Duration) -> Result<Html, FetchError> {
    let client = get_client().map_err(|why| FetchError::Network(why.to_string()))?;
    let visit_log = format!("GET:{url}");
    let start = Instant::now();

    let page = match tokio::time::timeout(deadline, read_page(client, url)).await {
        Ok(page) => page,
        Err(_) => Err(FetchError::Network(format!(
            "request to {} timed out after {:?}",
            url, deadline
        ))),
    };
    let elapsed = start.elapsed().as_millis();

    let text = match page {
        Ok(text) => {
            tracing::debug!("{} {} ms", visit_log, elapsed);
            text
        }
        Err(why) => {
            tracing::debug!("{} failed because {:?}. {} ms", visit_log, why, elapsed);
            return Err(why);
        }
    };

    if text.trim().is_empty() {
        return Err(FetchError::Parse("empty response body".to_string()));
    }

    Ok(Html::parse_document(&text))
}

/// Sends the request and reads the whole body as text.
async fn read_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|why| FetchError::Network(why.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::UnexpectedStatus(status.to_string()));
    }

    response
        .text()
        .await
        .map_err(|why| FetchError::Network(format!("Error reading response body: {}", why)))
}

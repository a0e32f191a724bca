//! Content fetching from URLs, files, and stdin.
//!
//! URL fetching needs the `fetch` feature; files and stdin are always
//! available.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::{Duration, Instant};

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{LesbarError, Result};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; lesbar/0.3; +https://github.com/lesbar/lesbar)";

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT_SECS, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// A fetched page with the time the request took.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,
    pub body: String,
    /// Seconds from sending the request to receiving the full body.
    pub elapsed: f64,
}

/// Fetches HTML content from a URL.
///
/// Follows redirects, respects the configured timeout and treats non-success
/// status codes as errors.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    fetch_url_timed(url, config).await.map(|page| page.body)
}

/// Like [`fetch_url`], also reporting the final URL and load time.
#[cfg(feature = "fetch")]
pub async fn fetch_url_timed(url: &str, config: &FetchConfig) -> Result<FetchedPage> {
    let parsed_url = Url::parse(url).map_err(|e| LesbarError::InvalidUrl(format!("{}: {}", url, e)))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(LesbarError::InvalidUrl(format!("unsupported scheme: {}", parsed_url.scheme())));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(LesbarError::HttpError)?;

    let map_err = |e: reqwest::Error| {
        if e.is_timeout() { LesbarError::Timeout { timeout: config.timeout } } else { LesbarError::HttpError(e) }
    };

    let started = Instant::now();
    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "de-DE,de;q=0.9,en;q=0.5")
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(map_err)?;

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(map_err)?;
    let elapsed = started.elapsed().as_secs_f64();

    tracing::debug!(url = %final_url, bytes = body.len(), elapsed, "fetched page");

    Ok(FetchedPage { url: final_url, body, elapsed })
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(LesbarError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(LesbarError::from)
    }
}

/// Reads all of standard input.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(LesbarError::from)?;

    Ok(buffer)
}

/// True if `input` looks like an `http(s)` URL rather than a path.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

//! Fetcher trait and shared types

use async_trait::async_trait;
use url::Url;

/// A successfully fetched upstream page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the body was served from, after any redirects
    pub url: String,
    /// HTTP status (always 2xx)
    pub status: u16,
    /// Raw `Content-Type` header value
    pub content_type: Option<String>,
    /// Decoded body text
    pub body: String,
}

/// Fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Timed out fetching {url} after {secs}s")]
    Timeout { url: String, secs: u64 },

    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { url: String, status: u16 },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// HTTP status observed upstream, when the failure was a non-2xx response
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Source of upstream pages
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` with a single GET
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Check that `url` is an absolute http(s) URL with a host
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed =
        Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            url,
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(parsed)
}

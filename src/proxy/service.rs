//! Proxy orchestration

use std::sync::Arc;

use crate::fetch::{FetchError, Fetcher};
use crate::html::{rewrite_document, DocumentError, ParsedDocument};
use crate::text::TargetSpec;

/// A rewritten upstream page
#[derive(Debug, Clone)]
pub struct RewrittenPage {
    /// Serialized HTML after substitution
    pub content: String,
    /// Rewritten `<title>` text, empty when the page has none
    pub title: String,
    /// URL as requested by the client
    pub original_url: String,
    /// Number of text nodes that changed
    pub rewritten_nodes: usize,
}

/// Pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Failed to fetch content: {0}")]
    Upstream(#[from] FetchError),

    #[error("Failed to process content: {0}")]
    Parse(#[from] DocumentError),
}

/// Runs the fetch-and-rewrite pipeline for one request at a time
///
/// Holds no per-request state; share it behind an `Arc` and call it from as
/// many tasks as needed.
#[derive(Clone)]
pub struct ProxyService {
    fetcher: Arc<dyn Fetcher>,
    target: TargetSpec,
}

impl ProxyService {
    pub fn new(fetcher: Arc<dyn Fetcher>, target: TargetSpec) -> Self {
        Self { fetcher, target }
    }

    /// Fetch `url` and return its HTML with the target word swapped out
    pub async fn handle_fetch_request(&self, url: Option<&str>) -> Result<RewrittenPage, ProxyError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ProxyError::MissingUrl)?;

        // The only suspension point; everything after is synchronous
        let page = self.fetcher.fetch(url).await.map_err(|e| {
            if let Some(status) = e.upstream_status() {
                tracing::warn!("Upstream {} answered HTTP {}", url, status);
            }
            e
        })?;

        let mut document = ParsedDocument::from_page(&page.body, page.content_type.as_deref())?;
        let rewritten_nodes = rewrite_document(&mut document, &self.target)?;

        tracing::debug!(
            "Rewrote {} text nodes from {} (HTTP {}, {} -> {})",
            rewritten_nodes,
            page.url,
            page.status,
            self.target.match_term(),
            self.target.replacement()
        );

        Ok(RewrittenPage {
            content: document.to_html()?,
            title: document.title().unwrap_or_default(),
            original_url: url.to_string(),
            rewritten_nodes,
        })
    }
}

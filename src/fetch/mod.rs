//! Upstream page fetching
//!
//! One GET per call, no retries and no caching. URLs are validated before any
//! network activity; transport failures and non-2xx statuses come back as
//! distinct [`FetchError`] variants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use faleproxy_server::config::FetchConfig;
//! use faleproxy_server::fetch::{Fetcher, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new(&FetchConfig::default())?;
//! let page = fetcher.fetch("https://www.yale.edu/").await?;
//! println!("{} bytes of {:?}", page.body.len(), page.content_type);
//! ```

mod client;
mod types;

pub use client::HttpFetcher;
pub use types::{validate_url, FetchError, FetchedPage, Fetcher};

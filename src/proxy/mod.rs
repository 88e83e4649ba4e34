//! Fetch-and-rewrite pipeline
//!
//! validate → fetch → parse → rewrite → serialize. Every step is terminal on
//! failure and nothing partial is ever returned.

mod service;

pub use service::{ProxyError, ProxyService, RewrittenPage};

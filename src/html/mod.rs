//! HTML document handling
//!
//! Parses fetched markup into a [`ParsedDocument`] (an arena-backed tree from
//! `scraper`/html5ever), rewrites eligible text nodes in place and serializes
//! the result back to HTML.

mod document;
mod walker;

pub use document::{DocumentError, ParsedDocument};
pub use walker::{rewrite_document, EXCLUDED_ELEMENTS, MARKUP_CONTAINERS};

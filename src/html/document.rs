//! Parsed HTML document

use html5ever::serialize::{self, Serialize, SerializeOpts, TraversalScope};
use scraper::{ElementRef, Html};

/// Errors turning fetched content into a document and back
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] std::io::Error),

    #[error("Serialized document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// An exclusively owned HTML tree
///
/// Nodes live in the tree's arena and are addressed by id, so the walker can
/// collect edits with a shared borrow and apply them with a unique one.
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parse a full document, checking the declared content type first
    ///
    /// HTML parsing itself is error-recovering; malformed markup is repaired
    /// the way a browser would, and the recovered errors are only logged.
    pub fn from_page(body: &str, content_type: Option<&str>) -> Result<Self, DocumentError> {
        if let Some(content_type) = content_type {
            if !is_markup_content_type(content_type) {
                return Err(DocumentError::UnsupportedContentType(
                    content_type.to_string(),
                ));
            }
        }

        Ok(Self::parse(body))
    }

    /// Parse with scripting enabled, as a browser running the page would
    ///
    /// `<noscript>` content therefore stays a single raw text node holding
    /// the original markup.
    pub fn parse(body: &str) -> Self {
        let html = Html::parse_document(body);
        if !html.errors.is_empty() {
            tracing::debug!("Recovered from {} HTML parse errors", html.errors.len());
        }
        Self { html }
    }

    /// Parse a snippet in `<body>` context without adding `<head>`/`<body>`
    pub fn parse_fragment(body: &str) -> Self {
        Self {
            html: Html::parse_fragment(body),
        }
    }

    /// Text of the first `<title>` element, if any
    pub fn title(&self) -> Option<String> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "title")
            .map(|el| el.text().collect())
    }

    /// Serialize back to an HTML string
    pub fn to_html(&self) -> Result<String, DocumentError> {
        serialize_node(&self.html, TraversalScope::IncludeNode)
    }

    /// Serialize a fragment's content without the wrapping `<html>` element
    pub fn to_fragment_html(&self) -> Result<String, DocumentError> {
        serialize_node(&self.html.root_element(), TraversalScope::ChildrenOnly(None))
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }

    pub(crate) fn html_mut(&mut self) -> &mut Html {
        &mut self.html
    }
}

/// Serialize with the same scripting mode the parser used
///
/// Raw `<noscript>` text is written back unescaped; `scraper`'s own `html()`
/// escapes it and turns the markup inside into literal text.
fn serialize_node<T: Serialize>(node: &T, scope: TraversalScope) -> Result<String, DocumentError> {
    let mut buf = Vec::new();
    serialize::serialize(
        &mut buf,
        node,
        SerializeOpts {
            scripting_enabled: true,
            traversal_scope: scope,
            create_missing_parent: false,
        },
    )?;
    Ok(String::from_utf8(buf)?)
}

/// Whether a `Content-Type` header value names something we can parse as markup
fn is_markup_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let Some((kind, subtype)) = mime.split_once('/') else {
        return false;
    };

    kind == "text" || subtype.contains("html") || subtype.contains("xml")
}

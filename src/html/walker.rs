//! Text node rewriting
//!
//! Walks the document depth-first and runs the substitution engine over each
//! text node whose nearest enclosing element is not a raw-text container.
//! Element attributes are never touched, so `href`, `src`, `alt` and friends
//! survive verbatim while the visible text around them is rewritten.

use std::borrow::Cow;

use scraper::Node;

use super::document::{DocumentError, ParsedDocument};
use crate::text::{self, TargetSpec};

/// Elements whose text content is left alone
pub const EXCLUDED_ELEMENTS: &[&str] = &["script", "style"];

/// Elements the parser keeps as one raw text node holding unparsed markup
///
/// Their payload is parsed as a fragment, rewritten, and serialized back.
pub const MARKUP_CONTAINERS: &[&str] = &["noscript", "noembed", "noframes", "iframe"];

/// Rewrite every eligible text node in place, returning how many changed
///
/// Text nodes rewritten inside a markup container count individually.
pub fn rewrite_document(doc: &mut ParsedDocument, spec: &TargetSpec) -> Result<usize, DocumentError> {
    let mut edits = Vec::new();
    let mut changed = 0;

    for node in doc.html().tree.root().descendants() {
        let Node::Text(content) = node.value() else {
            continue;
        };

        let container = node
            .ancestors()
            .find_map(|ancestor| ancestor.value().as_element())
            .map(|el| el.name());

        match container {
            Some(name) if EXCLUDED_ELEMENTS.contains(&name) => {}
            Some(name) if MARKUP_CONTAINERS.contains(&name) => {
                if let Some((rewritten, count)) = rewrite_markup(&content.text, spec)? {
                    edits.push((node.id(), rewritten));
                    changed += count;
                }
            }
            _ => {
                if let Cow::Owned(rewritten) = text::rewrite(&content.text, spec) {
                    edits.push((node.id(), rewritten));
                    changed += 1;
                }
            }
        }
    }

    let tree = &mut doc.html_mut().tree;
    for (id, rewritten) in &edits {
        if let Some(mut node) = tree.get_mut(*id) {
            if let Node::Text(content) = node.value() {
                content.text = rewritten.as_str().into();
            }
        }
    }

    Ok(changed)
}

/// Rewrite raw markup, or `None` when it holds no match
///
/// Untouched markup is never re-serialized, so it keeps its exact bytes.
fn rewrite_markup(markup: &str, spec: &TargetSpec) -> Result<Option<(String, usize)>, DocumentError> {
    let mut fragment = ParsedDocument::parse_fragment(markup);
    let count = rewrite_document(&mut fragment, spec)?;
    if count == 0 {
        return Ok(None);
    }
    Ok(Some((fragment.to_fragment_html()?, count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yale() -> TargetSpec {
        TargetSpec::yale_to_fale().unwrap()
    }

    fn rewrite_fragment(html: &str) -> String {
        let mut doc = ParsedDocument::parse_fragment(html);
        rewrite_document(&mut doc, &yale()).unwrap();
        doc.to_fragment_html().unwrap()
    }

    #[test]
    fn test_link_text_rewritten_href_preserved() {
        let out = rewrite_fragment(r#"<a href="http://yale.edu">About Yale</a>"#);
        assert!(out.contains(r#"<a href="http://yale.edu">About Fale</a>"#));
    }

    #[test]
    fn test_attributes_untouched() {
        let out = rewrite_fragment(
            r#"<img src="/img/yale.png" alt="Yale logo" title="YALE"><p class="yale">Yale</p>"#,
        );
        assert!(out.contains(r#"src="/img/yale.png""#));
        assert!(out.contains(r#"alt="Yale logo""#));
        assert!(out.contains(r#"title="YALE""#));
        assert!(out.contains(r#"<p class="yale">Fale</p>"#));
    }

    #[test]
    fn test_script_and_style_untouched() {
        let out = rewrite_fragment(
            "<script>var school = 'Yale';</script><style>.Yale { color: blue; }</style><p>Yale</p>",
        );
        assert!(out.contains("var school = 'Yale';"));
        assert!(out.contains(".Yale { color: blue; }"));
        assert!(out.contains("<p>Fale</p>"));
    }

    #[test]
    fn test_comments_untouched() {
        let out = rewrite_fragment("<!-- Yale --><p>Yale</p>");
        assert!(out.contains("<!-- Yale -->"));
        assert!(out.contains("<p>Fale</p>"));
    }

    #[test]
    fn test_nested_text_rewritten() {
        let out = rewrite_fragment("<div><p>Go <em>Yale</em> <strong>YALE</strong>!</p></div>");
        assert!(out.contains("<em>Fale</em>"));
        assert!(out.contains("<strong>FALE</strong>"));
    }

    #[test]
    fn test_full_document_head_and_body() {
        let mut doc = ParsedDocument::parse(
            "<!DOCTYPE html><html><head><title>Yale University Test Page</title></head>\
             <body><h1>Welcome to Yale University</h1></body></html>",
        );
        let changed = rewrite_document(&mut doc, &yale()).unwrap();
        assert_eq!(changed, 2);

        let out = doc.to_html().unwrap();
        assert!(out.contains("<title>Fale University Test Page</title>"));
        assert!(out.contains("<h1>Welcome to Fale University</h1>"));
        assert_eq!(doc.title().as_deref(), Some("Fale University Test Page"));
    }

    #[test]
    fn test_escaped_text_stays_escaped() {
        let out = rewrite_fragment("<p>Yale &amp; &lt;friends&gt;</p>");
        assert!(out.contains("<p>Fale &amp; &lt;friends&gt;</p>"));
    }

    #[test]
    fn test_no_matches_counts_zero() {
        let mut doc = ParsedDocument::parse_fragment("<p>Harvard</p>");
        assert_eq!(rewrite_document(&mut doc, &yale()).unwrap(), 0);
    }

    #[test]
    fn test_raw_text_containers_round_trip_exactly() {
        let sources = [
            r#"<script>if (a < b && c > d) { school = "Yale"; }</script>"#,
            "<style>nav > a[href*=\"yale\"]::after { content: \"Yale\"; }</style>",
            r#"<noscript><img src="https://px.example/t.gif" alt=""></noscript>"#,
            r#"<noembed><embed src="/yale.swf"></noembed>"#,
            r#"<noframes><p>Frames <b>required</b> & more</p></noframes>"#,
            r#"<iframe src="https://example.com/"><a href="x">fallback</a></iframe>"#,
        ];
        for source in sources {
            assert_eq!(rewrite_fragment(source), source, "{source}");
        }
    }

    #[test]
    fn test_noscript_visible_text_rewritten_markup_kept() {
        let out = rewrite_fragment(
            r#"<noscript><a href="https://www.yale.edu/plain">Yale without JavaScript</a></noscript>"#,
        );
        assert_eq!(
            out,
            r#"<noscript><a href="https://www.yale.edu/plain">Fale without JavaScript</a></noscript>"#
        );
    }

    #[test]
    fn test_noscript_in_head_keeps_markup() {
        let mut doc = ParsedDocument::parse(
            r#"<html><head><noscript><img src="https://px.example/t.gif" alt="Yale"></noscript></head><body><p>Yale</p></body></html>"#,
        );
        assert_eq!(rewrite_document(&mut doc, &yale()).unwrap(), 1);
        assert_eq!(
            doc.to_html().unwrap(),
            r#"<html><head><noscript><img src="https://px.example/t.gif" alt="Yale"></noscript></head><body><p>Fale</p></body></html>"#
        );
    }

    #[test]
    fn test_rcdata_elements_stay_escaped() {
        assert_eq!(
            rewrite_fragment("<textarea>Yale &lt;b&gt; &amp; co</textarea>"),
            "<textarea>Fale &lt;b&gt; &amp; co</textarea>"
        );

        let mut doc = ParsedDocument::parse("<title>Yale &amp; &lt;friends&gt;</title>");
        rewrite_document(&mut doc, &yale()).unwrap();
        assert!(doc
            .to_html()
            .unwrap()
            .contains("<title>Fale &amp; &lt;friends&gt;</title>"));
        assert_eq!(doc.title().as_deref(), Some("Fale & <friends>"));
    }
}

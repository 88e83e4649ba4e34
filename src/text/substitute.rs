//! Whole-word, case-preserving replacement

use std::borrow::Cow;

use super::target::TargetSpec;

/// Replace every whole-word occurrence of the target's match term in `text`.
///
/// A hit counts only when the characters on either side are not letters,
/// digits or combining marks, so "Yalesville" is left alone while "Yale's"
/// becomes "Fale's".
/// Each replacement takes the case form of the text it replaces.
pub fn substitute(text: &str, spec: &TargetSpec) -> String {
    rewrite(text, spec).into_owned()
}

/// Like [`substitute`] but borrows `text` when nothing matched
pub(crate) fn rewrite<'a>(text: &'a str, spec: &TargetSpec) -> Cow<'a, str> {
    let pattern = spec.pattern();
    let mut output: Option<String> = None;
    let mut copied_to = 0;
    let mut search_from = 0;

    while let Some(hit) = pattern.find_at(text, search_from) {
        if hit.is_empty() {
            break;
        }

        if !is_word_boundary(text, hit.start(), hit.end(), spec) {
            // Step one character forward so overlapping candidates are still tried
            search_from = next_char_boundary(text, hit.start());
            continue;
        }

        let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
        out.push_str(&text[copied_to..hit.start()]);
        out.push_str(&spec.replacement_for(hit.as_str()));
        copied_to = hit.end();
        search_from = hit.end();
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied_to..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize, spec: &TargetSpec) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| spec.is_word_char(c)) && !after.is_some_and(|c| spec.is_word_char(c))
}

fn next_char_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(text.len(), |c| at + c.len_utf8())
}

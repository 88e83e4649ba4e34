//! Substitution target and case handling

use regex::Regex;

/// Case pattern of a matched word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseForm {
    /// Every cased character is uppercase ("YALE")
    Upper,
    /// First character uppercase, the rest lowercase ("Yale")
    Capitalized,
    /// All lowercase, or any mixed pattern ("yale", "yAlE")
    Lower,
}

impl CaseForm {
    /// Classify a matched substring.
    ///
    /// `Upper` is checked first, so a single uppercase letter is `Upper`
    /// rather than `Capitalized`.
    pub fn detect(word: &str) -> Self {
        let has_upper = word.chars().any(char::is_uppercase);
        if has_upper && !word.chars().any(char::is_lowercase) {
            return CaseForm::Upper;
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() && !chars.any(char::is_uppercase) => {
                CaseForm::Capitalized
            }
            _ => CaseForm::Lower,
        }
    }

    /// Render `word` in this case form
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseForm::Upper => word.to_uppercase(),
            CaseForm::Lower => word.to_lowercase(),
            CaseForm::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Errors building a [`TargetSpec`]
#[derive(Debug, thiserror::Error)]
pub enum TargetSpecError {
    #[error("Match term must not be empty")]
    EmptyMatchTerm,

    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Immutable (match term, replacement term) pair
///
/// Matching is case-insensitive; the compiled patterns are built once here and
/// shared by every call to [`substitute`](super::substitute).
#[derive(Debug, Clone)]
pub struct TargetSpec {
    match_term: String,
    replacement: String,
    pattern: Regex,
    word_char: Regex,
}

impl TargetSpec {
    pub fn new(match_term: &str, replacement: &str) -> Result<Self, TargetSpecError> {
        if match_term.is_empty() {
            return Err(TargetSpecError::EmptyMatchTerm);
        }

        let pattern = Regex::new(&format!("(?i){}", regex::escape(match_term)))?;
        // Combining marks belong to the letter they follow
        let word_char = Regex::new(r"^[\p{Alphabetic}\p{N}\p{M}]$")?;

        Ok(Self {
            match_term: match_term.to_string(),
            replacement: replacement.to_string(),
            pattern,
            word_char,
        })
    }

    /// The Yale → Fale pair the proxy serves
    pub fn yale_to_fale() -> Result<Self, TargetSpecError> {
        Self::new("Yale", "Fale")
    }

    pub fn match_term(&self) -> &str {
        &self.match_term
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether `c` continues a word, so a hit next to it is not whole-word
    pub(crate) fn is_word_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.word_char.is_match(c.encode_utf8(&mut buf))
    }

    /// Replacement text for a hit whose original spelling was `matched`
    pub fn replacement_for(&self, matched: &str) -> String {
        CaseForm::detect(matched).apply(&self.replacement)
    }
}

//! Word substitution
//!
//! Pure text rewriting: finds whole-word, case-insensitive occurrences of a
//! match term and swaps in a replacement that mirrors the case of each hit.
//! Knows nothing about markup; the HTML walker decides which strings reach it.

mod substitute;
mod target;

pub use substitute::substitute;
pub(crate) use substitute::rewrite;
pub use target::{CaseForm, TargetSpec, TargetSpecError};

//! Faleproxy Server Library
//!
//! Fetches a remote HTML page and returns a copy in which every whole-word
//! "Yale" in visible text becomes "Fale", keeping the original case pattern.
//! Markup, attributes and script/style bodies pass through untouched.
//!
//! # Modules
//!
//! - `text`: case-preserving word substitution
//! - `html`: document parsing, text node walking and serialization
//! - `fetch`: upstream HTTP fetching
//! - `proxy`: the fetch → parse → rewrite → serialize pipeline
//! - `routes`: the axum HTTP surface

pub mod config;
pub mod error;
pub mod fetch;
pub mod html;
pub mod proxy;
pub mod routes;
pub mod state;
pub mod text;

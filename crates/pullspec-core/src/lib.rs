#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for pull specifications.
//!
//! - `Keyword`: interned attribute key, shared process-wide
//! - `Colors`: ANSI palette used when rendering specs

mod colors;
mod interner;
mod keyword;

#[cfg(test)]
mod colors_tests;

pub use colors::Colors;
pub use keyword::{Keyword, KeywordError, kw};

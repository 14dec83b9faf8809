//! Builders for hierarchical pull specifications.
//!
//! A pull spec says which attributes of an entity a query should retrieve,
//! and for relationship attributes, which attributes of the related
//! entities. This crate only builds that description:
//! - `builder` - generic accumulate-then-finalize context
//! - `context` - `PullSpecContext`, the spec builder
//! - `attributes` - per-field options and their builder
//! - `spec` - the finished `PullSpec` value
//! - `dump` - pull-vector rendering
//! - `validation` - opt-in structural lints

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod attributes;
pub mod builder;
pub mod context;
pub mod dump;
pub mod spec;
pub mod validation;

#[cfg(test)]
mod spec_tests;

pub use attributes::{AttrOption, Attributes, AttributesContext, Collection};
pub use builder::{Build, BuilderContext};
pub use context::PullSpecContext;
pub use dump::Printer;
pub use spec::{Item, PullSpec};
pub use validation::{Config, Diagnostics};

pub use pullspec_core::{Keyword, KeywordError, kw};

/// Errors surfaced while building or checking a pull spec.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidKeyword(#[from] KeywordError),

    #[error("pull spec check failed with {}", count_errors(.0))]
    InvalidPullSpec(Diagnostics),
}

fn count_errors(diagnostics: &Diagnostics) -> String {
    match diagnostics.error_count() {
        1 => "1 error".to_owned(),
        n => format!("{n} errors"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

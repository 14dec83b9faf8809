//! Structural lints for finished pull specs.
//!
//! Building never rejects a spec. These checks are opt-in and only report
//! shapes an executor is likely to treat specially:
//! - `*` next to other items in the same vector
//! - the same key selected twice in one vector
//! - joins that pull nothing
//! - `:limit 0`

mod config;
mod diagnostics;

#[cfg(test)]
mod validation_tests;

use indexmap::IndexMap;
use pullspec_core::Keyword;

use crate::spec::{Item, PullSpec};

pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};

/// Run every lint over `spec` and its nested join specs.
pub fn validate(spec: &PullSpec, config: &Config) -> Diagnostics {
    let mut validator = Validator {
        config,
        diag: Diagnostics::new(),
        path: Vec::new(),
    };
    validator.visit_spec(spec);

    let diag = validator.diag;
    tracing::debug!(
        errors = diag.error_count(),
        warnings = diag.warning_count(),
        strict = config.is_strict(),
        "validated pull spec"
    );
    diag
}

struct Validator<'c> {
    config: &'c Config,
    diag: Diagnostics,
    /// Join keys leading to the spec being visited.
    path: Vec<Keyword>,
}

impl Validator<'_> {
    fn visit_spec(&mut self, spec: &PullSpec) {
        if spec.len() > 1 && spec.iter().any(|item| matches!(item, Item::All)) {
            self.report(DiagnosticKind::WildcardWithSiblings, None);
        }

        let mut seen: IndexMap<Keyword, usize> = IndexMap::new();
        for key in spec.iter().filter_map(Item::key) {
            *seen.entry(key).or_default() += 1;
        }
        for (key, count) in seen {
            if count > 1 {
                self.report(DiagnosticKind::DuplicateKey, Some(key));
            }
        }

        for item in spec {
            self.visit_item(item);
        }
    }

    fn visit_item(&mut self, item: &Item) {
        match item {
            Item::Field { key, attributes } => {
                if attributes.limit == Some(0) {
                    self.report(DiagnosticKind::ZeroLimit, Some(*key));
                }
            }
            Item::Join { key, spec } => {
                if spec.is_empty() {
                    self.report(DiagnosticKind::EmptyJoin, Some(*key));
                }
                self.path.push(*key);
                self.visit_spec(spec);
                self.path.pop();
            }
            Item::All => {}
        }
    }

    fn report(&mut self, kind: DiagnosticKind, key: Option<Keyword>) {
        let Some(severity) = self.config.severity(kind) else {
            return;
        };
        self.diag.push(Diagnostic {
            kind,
            severity,
            path: self.path.clone(),
            key,
        });
    }
}

//! Validation policy.

use serde::Deserialize;

use super::{DiagnosticKind, Severity};

/// Decides which lints run and how severe they are.
///
/// Deserializable so an engine can load it from its own settings; every
/// field has a default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report every lint as an error.
    pub(crate) strict: bool,
    /// Lints that are not reported at all.
    pub(crate) allowed: Vec<DiagnosticKind>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Silence `kind`.
    pub fn allow(mut self, kind: DiagnosticKind) -> Self {
        if !self.allowed.contains(&kind) {
            self.allowed.push(kind);
        }
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Severity to report `kind` with, or `None` if it is silenced.
    pub fn severity(&self, kind: DiagnosticKind) -> Option<Severity> {
        if self.allowed.contains(&kind) {
            return None;
        }
        if self.strict {
            return Some(Severity::Error);
        }
        Some(kind.default_severity())
    }
}

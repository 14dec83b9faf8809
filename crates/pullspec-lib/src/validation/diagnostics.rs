//! Lint results.

use std::fmt;

use pullspec_core::Keyword;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    WildcardWithSiblings,
    DuplicateKey,
    EmptyJoin,
    ZeroLimit,
}

impl DiagnosticKind {
    /// Severity used unless the policy overrides it.
    pub fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn message(&self, key: Option<Keyword>) -> String {
        let key = key.map(|k| k.to_string()).unwrap_or_default();
        match self {
            Self::WildcardWithSiblings => "`*` is combined with other items".to_owned(),
            Self::DuplicateKey => format!("`{key}` is selected more than once"),
            Self::EmptyJoin => format!("join on `{key}` pulls nothing"),
            Self::ZeroLimit => format!("`{key}` has `:limit 0`"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding, located by the join keys leading to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Join keys from the root spec to the vector containing the finding.
    pub path: Vec<Keyword>,
    /// Key the finding is about, if it concerns one item.
    pub key: Option<Keyword>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn message(&self) -> String {
        self.kind.message(self.key)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message())?;
        if self.path.is_empty() {
            return Ok(());
        }

        f.write_str(" in [")?;
        for (i, key) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

/// Findings in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(Diagnostic::is_warning)
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_warning()).count()
    }

    /// One diagnostic per line.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(Diagnostic::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

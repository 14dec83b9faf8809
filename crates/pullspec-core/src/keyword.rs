//! Attribute keys.
//!
//! A `Keyword` names an entity attribute, optionally namespaced
//! (`:person/name`). Keywords are interned in a process-wide table, so a
//! keyword is a `Copy` handle and equality is a single integer comparison.

use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

use serde::{Serialize, Serializer};

use crate::interner::{Interner, Symbol};

static KEYWORDS: LazyLock<RwLock<Interner>> = LazyLock::new(|| RwLock::new(Interner::new()));

/// Characters that terminate a keyword in pull notation.
const DELIMITERS: &[char] = &['(', ')', '[', ']', '{', '}', '"', ',', ';', '\\'];

/// Errors produced by `Keyword::parse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeywordError {
    #[error("keyword is empty")]
    Empty,

    #[error("keyword `{text}` contains invalid character {ch:?}")]
    InvalidChar { text: String, ch: char },

    #[error("keyword `{text}` has an empty namespace or name")]
    EmptySegment { text: String },
}

/// Interned attribute key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword(Symbol);

impl Keyword {
    /// Intern `text` as an opaque key. A single leading `:` is dropped.
    ///
    /// No validation is done; use [`Keyword::parse`] to reject malformed names.
    pub fn intern(text: &str) -> Self {
        Self::intern_body(text.strip_prefix(':').unwrap_or(text))
    }

    /// Intern text that has already lost its leading colon.
    fn intern_body(text: &str) -> Self {
        // Fast path: most keys are interned many times.
        let existing = KEYWORDS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(text);
        if let Some(sym) = existing {
            return Self(sym);
        }

        let sym = KEYWORDS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .intern(text);
        Self(sym)
    }

    /// Validate and intern `text`.
    ///
    /// Accepts `name`, `:name`, `ns/name` and `:ns/name`. Rejects empty input,
    /// whitespace and delimiter characters, more than one leading `:`, and
    /// empty namespace or name segments. Colons after the first character of
    /// the name are kept (`:a:b`).
    pub fn parse(text: &str) -> Result<Self, KeywordError> {
        let body = text.strip_prefix(':').unwrap_or(text);
        if body.is_empty() {
            return Err(KeywordError::Empty);
        }

        if body.starts_with(':') {
            return Err(KeywordError::InvalidChar {
                text: text.to_owned(),
                ch: ':',
            });
        }

        if let Some(ch) = body
            .chars()
            .find(|c| c.is_whitespace() || DELIMITERS.contains(c))
        {
            return Err(KeywordError::InvalidChar {
                text: text.to_owned(),
                ch,
            });
        }

        if let Some((ns, name)) = body.split_once('/')
            && (ns.is_empty() || name.is_empty())
        {
            return Err(KeywordError::EmptySegment {
                text: text.to_owned(),
            });
        }

        Ok(Self::intern_body(body))
    }

    /// Full text without the leading colon, e.g. `person/name`.
    pub fn as_str(self) -> &'static str {
        KEYWORDS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(self.0)
    }

    /// Namespace part, if any (`person` for `:person/name`).
    pub fn namespace(self) -> Option<&'static str> {
        self.as_str().split_once('/').map(|(ns, _)| ns)
    }

    /// Name part (`name` for `:person/name`).
    pub fn name(self) -> &'static str {
        let text = self.as_str();
        text.split_once('/').map_or(text, |(_, name)| name)
    }

    /// Reverse-reference keys have a name starting with `_`.
    pub fn is_reverse(self) -> bool {
        self.name().len() > 1 && self.name().starts_with('_')
    }

    /// Toggle between the forward and reverse form of this key.
    ///
    /// `:person/friends` <-> `:person/_friends`
    pub fn reversed(self) -> Self {
        let name = self.name();
        let flipped = if self.is_reverse() {
            name[1..].to_owned()
        } else {
            format!("_{name}")
        };
        match self.namespace() {
            Some(ns) => Self::intern_body(&format!("{ns}/{flipped}")),
            None => Self::intern_body(&flipped),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.as_str())
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Keyword {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Keyword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Shorthand for [`Keyword::intern`].
pub fn kw(text: &str) -> Keyword {
    Keyword::intern(text)
}

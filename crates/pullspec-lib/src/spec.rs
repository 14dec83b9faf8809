//! Finished pull specifications.

use std::fmt;

use pullspec_core::Keyword;
use serde::Serialize;

use crate::attributes::Attributes;
use crate::dump::Printer;
use crate::validation::{self, Config};

/// One element of a pull spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    /// Select a single attribute.
    Field {
        key: Keyword,
        attributes: Attributes,
    },
    /// Follow a relationship and pull `spec` for each related entity.
    Join { key: Keyword, spec: PullSpec },
    /// Every attribute of the current entity.
    All,
}

impl Item {
    pub fn field(key: Keyword) -> Self {
        Self::Field {
            key,
            attributes: Attributes::EMPTY,
        }
    }

    pub fn join(key: Keyword, spec: PullSpec) -> Self {
        Self::Join { key, spec }
    }

    /// Selected key; `None` for the wildcard.
    pub fn key(&self) -> Option<Keyword> {
        match self {
            Self::Field { key, .. } | Self::Join { key, .. } => Some(*key),
            Self::All => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::item(self).render())
    }
}

/// Ordered, immutable sequence of pull items.
///
/// Declaration order is kept and duplicates are not removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PullSpec(Vec<Item>);

impl PullSpec {
    pub fn new(items: Vec<Item>) -> Self {
        Self(items)
    }

    /// `[*]`
    pub fn all() -> Self {
        Self(vec![Item::All])
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.0
    }

    /// Nesting depth: 0 when empty, 1 for a flat spec, one more per join level.
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        let nested = self
            .0
            .iter()
            .filter_map(|item| match item {
                Item::Join { spec, .. } => Some(spec.depth()),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        1 + nested
    }

    /// Render in pull-vector notation.
    pub fn printer(&self) -> Printer<'_> {
        Printer::new(self)
    }

    /// Run the structural lints and fail if any is reported as an error.
    pub fn check(&self, config: &Config) -> crate::Result<()> {
        let diagnostics = validation::validate(self, config);
        if diagnostics.has_errors() {
            return Err(crate::Error::InvalidPullSpec(diagnostics));
        }
        Ok(())
    }
}

impl fmt::Display for PullSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printer().render())
    }
}

impl From<Vec<Item>> for PullSpec {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl FromIterator<Item> for PullSpec {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PullSpec {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PullSpec {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

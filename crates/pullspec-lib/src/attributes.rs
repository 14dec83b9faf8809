//! Per-field options and the builder that collects them.

use std::fmt;

use pullspec_core::Keyword;
use serde::Serialize;
use serde_json::Value;

use crate::builder::{Build, BuilderContext};

/// Collection type for a many-valued attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Vector,
    Set,
}

impl Collection {
    /// Empty literal in pull notation.
    pub fn literal(self) -> &'static str {
        match self {
            Self::Vector => "[]",
            Self::Set => "#{}",
        }
    }
}

/// One option issued inside an attribute block.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrOption {
    As(Keyword),
    Limit(usize),
    Default(Value),
    Into(Collection),
}

/// Options attached to a field selection.
///
/// What each option means is up to whoever executes the spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attributes {
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<Keyword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub into: Option<Collection>,
}

impl Attributes {
    /// No options set.
    pub const EMPTY: Self = Self {
        alias: None,
        limit: None,
        default: None,
        into: None,
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        self.alias.is_none()
            && self.limit.is_none()
            && self.default.is_none()
            && self.into.is_none()
    }

    /// Fold options in order. A repeated option keeps its last value.
    pub fn from_options(options: Vec<AttrOption>) -> Self {
        options.into_iter().fold(Self::EMPTY, |mut attrs, option| {
            match option {
                AttrOption::As(key) => attrs.alias = Some(key),
                AttrOption::Limit(n) => attrs.limit = Some(n),
                AttrOption::Default(value) => attrs.default = Some(value),
                AttrOption::Into(coll) => attrs.into = Some(coll),
            }
            attrs
        })
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::dump::Printer::attributes(self).render())
    }
}

/// Builder for [`Attributes`].
#[derive(Debug)]
pub struct AttributesContext {
    inner: BuilderContext<AttrOption, Attributes>,
}

impl AttributesContext {
    pub fn add(&mut self, option: AttrOption) -> &mut Self {
        self.inner.add(option);
        self
    }

    /// `:as`: rename the attribute in results.
    pub fn alias(&mut self, key: Keyword) -> &mut Self {
        self.add(AttrOption::As(key))
    }

    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.add(AttrOption::Limit(n))
    }

    pub fn default(&mut self, value: impl Into<Value>) -> &mut Self {
        self.add(AttrOption::Default(value.into()))
    }

    /// `:into`: collection type for many-valued results.
    pub fn collection(&mut self, collection: Collection) -> &mut Self {
        self.add(AttrOption::Into(collection))
    }
}

impl Build for AttributesContext {
    type Output = Attributes;

    fn fresh() -> Self {
        Self {
            inner: BuilderContext::new(Attributes::from_options),
        }
    }

    fn pending(&self) -> usize {
        self.inner.len()
    }

    fn finish(self) -> Attributes {
        self.inner.finish()
    }
}

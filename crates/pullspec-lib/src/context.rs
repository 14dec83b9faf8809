//! Builder for [`PullSpec`].
//!
//! ```
//! use pullspec_core::kw;
//! use pullspec_lib::{Build, PullSpecContext};
//!
//! let spec = PullSpecContext::build(|p| {
//!     p.field(kw("name"));
//!     p.with(kw("friends"), |a| {
//!         a.limit(5);
//!     });
//!     p.join(kw("address"), |p| {
//!         p.field(kw("city")).field(kw("zip"));
//!     });
//! });
//!
//! assert_eq!(spec.to_string(), "[:name (:friends {:limit 5}) {:address [:city :zip]}]");
//! ```

use pullspec_core::Keyword;

use crate::attributes::AttributesContext;
use crate::builder::{Build, BuilderContext};
use crate::spec::{Item, PullSpec};

/// Accumulates pull items for one level of a spec.
#[derive(Debug)]
pub struct PullSpecContext {
    inner: BuilderContext<Item, PullSpec>,
}

impl PullSpecContext {
    pub fn add(&mut self, item: Item) -> &mut Self {
        self.inner.add(item);
        self
    }

    /// Select `key` with no options.
    pub fn field(&mut self, key: Keyword) -> &mut Self {
        self.add(Item::field(key))
    }

    /// Select each key in order.
    pub fn fields(&mut self, keys: impl IntoIterator<Item = Keyword>) -> &mut Self {
        for key in keys {
            self.field(key);
        }
        self
    }

    /// Select `key` with options collected by `block`.
    pub fn with(&mut self, key: Keyword, block: impl FnOnce(&mut AttributesContext)) -> &mut Self {
        let attributes = AttributesContext::build(block);
        self.add(Item::Field { key, attributes })
    }

    /// Follow `key` and pull the nested spec built by `block`.
    pub fn join(&mut self, key: Keyword, block: impl FnOnce(&mut PullSpecContext)) -> &mut Self {
        let spec = Self::build(block);
        self.add(Item::join(key, spec))
    }

    /// Fallible [`join`](Self::join). Nothing is appended when `block` fails.
    pub fn try_join<E>(
        &mut self,
        key: Keyword,
        block: impl FnOnce(&mut PullSpecContext) -> Result<(), E>,
    ) -> Result<&mut Self, E> {
        let spec = Self::try_build(block)?;
        Ok(self.add(Item::join(key, spec)))
    }

    /// Follow `key` and pull every attribute of the related entity.
    pub fn join_all(&mut self, key: Keyword) -> &mut Self {
        self.add(Item::join(key, PullSpec::all()))
    }

    /// Every attribute of the current entity.
    pub fn all(&mut self) -> &mut Self {
        self.add(Item::All)
    }
}

impl Build for PullSpecContext {
    type Output = PullSpec;

    fn fresh() -> Self {
        Self {
            inner: BuilderContext::new(PullSpec::new),
        }
    }

    fn pending(&self) -> usize {
        self.inner.len()
    }

    fn finish(self) -> PullSpec {
        self.inner.finish()
    }
}

//! String table behind `Keyword`.
//!
//! Interned strings are never freed: the backing storage is leaked so that
//! `resolve` can hand out `&'static str` without holding a borrow of the
//! interner. A keyword name once seen stays valid for the rest of the process.

use std::collections::HashMap;

/// Handle to an interned string. Comparing two symbols is one integer comparison.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Symbol(u32);

#[derive(Debug, Default)]
pub(crate) struct Interner {
    map: HashMap<&'static str, Symbol>,
    /// Indexed by Symbol.
    strings: Vec<&'static str>,
}

impl Interner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up a string without interning it.
    pub(crate) fn get(&self, s: &str) -> Option<Symbol> {
        self.map.get(s).copied()
    }

    /// Intern a string, returning the existing Symbol if already present.
    pub(crate) fn intern(&mut self, s: &str) -> Symbol {
        if let Some(sym) = self.get(s) {
            return sym;
        }

        let stored: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(stored);
        self.map.insert(stored, sym);
        sym
    }

    /// Resolve a Symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub(crate) fn resolve(&self, sym: Symbol) -> &'static str {
        self.strings[sym.0 as usize]
    }
}

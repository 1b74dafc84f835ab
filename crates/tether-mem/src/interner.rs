//! Name interning for scope bindings.
//!
//! Binding layers key their maps by [`Symbol`] instead of by string. The
//! interner hands out one symbol per distinct name and resolves it back for
//! diagnostics.
//!
//! # Examples
//!
//! ```
//! use tether_mem::NameInterner;
//!
//! let mut names = NameInterner::new();
//!
//! let a = names.intern("myNum1");
//! let b = names.intern("myNum1");
//! let c = names.intern("myNum2");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(names.resolve(a), Some("myNum1"));
//! ```

use crate::symbol::Symbol;
use fxhash::FxBuildHasher;
use hashbrown::HashMap;

/// Bidirectional name ↔ [`Symbol`] table.
#[derive(Debug, Clone, Default)]
pub struct NameInterner {
    /// Symbol id → name.
    names: Vec<Box<str>>,
    /// Name → symbol.
    symbols: HashMap<Box<str>, Symbol, FxBuildHasher>,
}

impl NameInterner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `name`, assigning the next id on first sight.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct names are interned.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.symbols.get(name) {
            return sym;
        }

        let id = u32::try_from(self.names.len())
            .expect("name interner exhausted the u32 id space");
        let sym = Symbol::new(id);
        self.names.push(name.into());
        self.symbols.insert(name.into(), sym);
        sym
    }

    /// Returns the symbol for `name` without interning it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.symbols.get(name).copied()
    }

    /// Resolves a symbol to its name, or `None` if it was never issued.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.as_usize()).map(|s| &**s)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interner_starts_empty() {
        let names = NameInterner::new();
        assert!(names.is_empty());
        assert_eq!(names.len(), 0);
    }

    #[test]
    fn test_sequential_ids() {
        let mut names = NameInterner::new();

        assert_eq!(names.intern("x").as_u32(), 0);
        assert_eq!(names.intern("y").as_u32(), 1);
        assert_eq!(names.intern("x").as_u32(), 0);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_get_does_not_intern() {
        let mut names = NameInterner::new();

        assert_eq!(names.get("missing"), None);
        assert!(names.is_empty());

        let sym = names.intern("present");
        assert_eq!(names.get("present"), Some(sym));
    }

    #[test]
    fn test_resolve_unknown_symbol() {
        let names = NameInterner::new();
        assert_eq!(names.resolve(Symbol::new(9999)), None);
    }

    #[test]
    fn test_unicode_and_empty_names() {
        let mut names = NameInterner::new();

        let empty = names.intern("");
        let uni = names.intern("变量");

        assert_eq!(names.resolve(empty), Some(""));
        assert_eq!(names.resolve(uni), Some("变量"));
    }

    #[test]
    fn test_many_names() {
        let mut names = NameInterner::new();

        let syms: Vec<_> = (0..500).map(|i| names.intern(&format!("v{i}"))).collect();
        assert_eq!(names.len(), 500);

        for (i, sym) in syms.iter().enumerate() {
            assert_eq!(names.intern(&format!("v{i}")), *sym);
        }
    }
}

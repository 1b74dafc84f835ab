//! Symbol type for interned binding names.
//!
//! # Examples
//!
//! ```
//! use tether_mem::Symbol;
//!
//! let a = Symbol::new(3);
//! assert_eq!(a, Symbol::new(3));
//! assert_eq!(a.as_usize(), 3);
//! ```

use std::fmt;

/// A 32-bit id standing for one interned name.
///
/// Equality and hashing are on the id, so scope lookups never compare
/// string contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from a raw id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw id as `usize`.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

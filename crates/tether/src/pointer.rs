//! Nullable pointers to heap cells.
//!
//! A [`Pointer`] is either nil or the address `{storage, index}` of one cell
//! in a [`Heap`]. Pointers are `Copy`: passing one to a function copies the
//! address, so reassigning the parameter never affects the caller, while
//! storing *through* it changes the cell every holder sees.
//!
//! # Examples
//!
//! ```
//! use tether::{Error, Heap, Pointer};
//!
//! let mut heap = Heap::new();
//! let p = heap.make_pointer(73);
//! let q = p;
//!
//! heap.store(p, 20).unwrap();
//! assert_eq!(heap.deref(q).unwrap(), 20);
//!
//! let nil: Pointer<i64> = Pointer::nil();
//! assert!(matches!(heap.deref(nil), Err(Error::NilDereference { .. })));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::heap::{Heap, StoreId, View};

/// Address of a single cell: a store id and an index into that store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddr {
    /// Backing store holding the cell.
    pub storage: StoreId,
    /// Index of the cell within the store.
    pub index: usize,
}

impl fmt::Display for CellAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}{:04x}", self.storage.slot().as_u32(), self.index)
    }
}

/// A nullable reference to one cell of a `Heap<T>`.
///
/// Equality is address identity, so `p == Pointer::nil()` is the nil check.
pub struct Pointer<T> {
    addr: Option<CellAddr>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Pointer<T> {
    const fn to(addr: CellAddr) -> Self {
        Self {
            addr: Some(addr),
            _marker: PhantomData,
        }
    }

    /// The nil pointer.
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            addr: None,
            _marker: PhantomData,
        }
    }

    /// Returns true for the nil pointer.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.addr.is_none()
    }

    /// The address this pointer holds, or `None` if nil.
    #[must_use]
    pub const fn addr(&self) -> Option<CellAddr> {
        self.addr
    }
}

impl<T> Clone for Pointer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Pointer<T> {}

impl<T> PartialEq for Pointer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr == other.addr
    }
}

impl<T> Eq for Pointer<T> {}

impl<T> Default for Pointer<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> fmt::Debug for Pointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr {
            Some(addr) => write!(f, "Pointer({addr})"),
            None => f.write_str("Pointer(nil)"),
        }
    }
}

impl<T> fmt::Display for Pointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr {
            Some(addr) => write!(f, "{addr}"),
            None => f.write_str("<nil>"),
        }
    }
}

impl<T: Clone + Default> Heap<T> {
    /// Allocates a fresh one-cell store holding `value` and points at it.
    pub fn make_pointer(&mut self, value: T) -> Pointer<T> {
        let storage = self.alloc_store(vec![value]);
        Pointer::to(CellAddr { storage, index: 0 })
    }

    /// Points at element `index` of `view`, aliasing that cell.
    pub fn address_of(&self, view: View<T>, index: usize) -> Result<Pointer<T>> {
        let storage = match view.storage {
            Some(id) if index < view.len => id,
            _ => return Err(Error::IndexOutOfRange { index, len: view.len }),
        };
        self.backing(storage)?;
        Ok(Pointer::to(CellAddr {
            storage,
            index: view.offset + index,
        }))
    }

    fn cell(&self, ptr: Pointer<T>, op: &'static str) -> Result<&T> {
        let addr = ptr.addr.ok_or(Error::NilDereference { op })?;
        self.backing(addr.storage)?
            .get(addr.index)
            .ok_or(addr.storage.invalid())
    }

    fn cell_mut(&mut self, ptr: Pointer<T>, op: &'static str) -> Result<&mut T> {
        let addr = ptr.addr.ok_or(Error::NilDereference { op })?;
        self.backing_mut(addr.storage)?
            .get_mut(addr.index)
            .ok_or(addr.storage.invalid())
    }

    /// Reads the current value of the pointed-to cell.
    ///
    /// # Errors
    ///
    /// [`Error::NilDereference`] if `ptr` is nil.
    pub fn deref(&self, ptr: Pointer<T>) -> Result<T> {
        self.cell(ptr, "deref").cloned()
    }

    /// Overwrites the pointed-to cell.
    ///
    /// # Errors
    ///
    /// [`Error::NilDereference`] if `ptr` is nil.
    pub fn store(&mut self, ptr: Pointer<T>, value: T) -> Result<()> {
        *self.cell_mut(ptr, "store")? = value;
        Ok(())
    }

    /// Applies `f` to the pointed-to cell in place, as in `*p += 1`.
    pub fn update<R>(&mut self, ptr: Pointer<T>, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        Ok(f(self.cell_mut(ptr, "update")?))
    }
}

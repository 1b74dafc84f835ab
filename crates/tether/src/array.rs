//! Fixed-length arrays.
//!
//! [`FixedArray`] is a plain value: cloning it copies all `N` elements and
//! two arrays never share cells. To carve views from an array it has to be
//! placed in a heap first, which yields an [`ArrayRef`], the equivalent of a
//! declared array variable whose address can be taken.
//!
//! # Examples
//!
//! ```
//! use tether::{FixedArray, Heap};
//!
//! let a = FixedArray::new([1, 2, 3]);
//! let b = FixedArray::from([1, 2, 3]);
//! assert_eq!(a, b);
//!
//! let mut heap = Heap::new();
//! let var = heap.alloc_array(a.clone());
//! let whole = heap.view_array(var, 0, 3).unwrap();
//!
//! heap.array_set(var, 1, 9).unwrap();
//! assert_eq!(heap.render(whole).unwrap(), "[1 9 3]");
//!
//! // `a` was copied into the heap, not moved into it.
//! assert_eq!(a.get(1), Some(&2));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::heap::{Heap, StoreId, View, render_cells};

/// An array of exactly `N` elements with value semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize>([T; N]);

impl<T, const N: usize> FixedArray<T, N> {
    /// Wraps an array literal.
    #[must_use]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Number of elements, always `N`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true when `N == 0`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let cell = self
            .0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: N })?;
        *cell = value;
        Ok(())
    }

    /// Borrows the elements.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Unwraps the underlying array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// An array of `N` zero values.
    #[must_use]
    pub fn zeroed() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self(elements)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cells(&self.0))
    }
}

/// A [`FixedArray`] placed in a heap, addressable by views and pointers.
pub struct ArrayRef<T, const N: usize> {
    storage: StoreId,
    _marker: PhantomData<fn() -> T>,
}

impl<T, const N: usize> ArrayRef<T, N> {
    /// The view `a[:]` covering the whole array.
    #[must_use]
    pub const fn as_view(&self) -> View<T> {
        View::new(self.storage, 0, N, N)
    }
}

impl<T, const N: usize> Clone for ArrayRef<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for ArrayRef<T, N> {}

impl<T, const N: usize> fmt::Debug for ArrayRef<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayRef({}, len={N})", self.storage)
    }
}

impl<T: Clone + Default> Heap<T> {
    /// Copies `array` into a fresh store of exactly `N` cells.
    pub fn alloc_array<const N: usize>(&mut self, array: FixedArray<T, N>) -> ArrayRef<T, N> {
        let storage = self.alloc_store(Vec::from(array.into_inner()));
        ArrayRef {
            storage,
            _marker: PhantomData,
        }
    }

    /// Copies the current contents of `array` out of the heap.
    pub fn load_array<const N: usize>(&self, array: ArrayRef<T, N>) -> Result<FixedArray<T, N>> {
        let cells = self.backing(array.storage)?;
        if cells.len() < N {
            return Err(array.storage.invalid());
        }
        Ok(FixedArray(std::array::from_fn(|i| cells[i].clone())))
    }

    /// Overwrites every element of `array` with `value`'s elements.
    pub fn store_array<const N: usize>(
        &mut self,
        array: ArrayRef<T, N>,
        value: FixedArray<T, N>,
    ) -> Result<()> {
        let cells = self.backing_mut(array.storage)?;
        for (cell, element) in cells.iter_mut().zip(value.into_inner()) {
            *cell = element;
        }
        Ok(())
    }

    /// Overwrites element `index` of `array`.
    pub fn array_set<const N: usize>(
        &mut self,
        array: ArrayRef<T, N>,
        index: usize,
        value: T,
    ) -> Result<()> {
        self.set(array.as_view(), index, value)
    }

    /// Carves `array[lo..hi]`; the view's capacity is `N - lo`.
    pub fn view_array<const N: usize>(
        &self,
        array: ArrayRef<T, N>,
        lo: usize,
        hi: usize,
    ) -> Result<View<T>> {
        self.view(array.as_view(), lo, hi)
    }
}

//! Backing storage and bounded views.
//!
//! A [`Heap`] owns every backing store of one element type. Stores live in
//! a [`SlotArena`] and are addressed by id; a store's length is its
//! capacity, and every cell of it always holds a value (`T::default()` until
//! written).
//!
//! A [`View`] is a `Copy` handle `{storage, offset, len, cap}`. Carving a
//! view from another view or from an addressable array reuses the same
//! storage id, so writes through one are visible through the other wherever
//! their ranges overlap. Appending past `cap` allocates a new store and
//! returns a view over it; from that point the result and the original no
//! longer alias.
//!
//! # Examples
//!
//! ```
//! use tether::Heap;
//!
//! let mut heap = Heap::new();
//! let s = heap.alloc_slice([10, 20, 30]);
//! assert_eq!((s.len(), s.cap()), (3, 3));
//!
//! let s = heap.append(s, [40, 50]).unwrap();
//! assert_eq!(heap.render(s).unwrap(), "[10 20 30 40 50]");
//! assert_eq!(s.cap(), 6);
//!
//! let head = heap.view(s, 0, 3).unwrap();
//! heap.clear(head).unwrap();
//! assert_eq!(heap.render(s).unwrap(), "[0 0 0 40 50]");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

use tether_log::trace;
use tether_mem::{ArenaStats, GrowthPolicy, SlotArena, SlotId};

use crate::error::{Error, Result};

static NEXT_HEAP_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of one backing store: the heap that allocated it and its slot.
///
/// Handles carry a `StoreId`, so a heap rejects handles issued by any other
/// heap even when the slot numbers coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId {
    heap: u32,
    slot: SlotId,
}

impl StoreId {
    /// Slot of the store within its heap.
    #[must_use]
    pub const fn slot(self) -> SlotId {
        self.slot
    }

    pub(crate) const fn invalid(self) -> Error {
        Error::InvalidStorage {
            id: self.slot.as_u32(),
        }
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap{}{}", self.heap, self.slot)
    }
}

/// Bounded window `{storage, offset, len, cap}` over a backing store.
///
/// Views are plain handles: copying a view never copies elements. All
/// element access goes through the [`Heap`] that issued the view.
///
/// The zero value is the nil view, which has no storage and zero length and
/// capacity.
pub struct View<T> {
    pub(crate) storage: Option<StoreId>,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> View<T> {
    pub(crate) const fn new(storage: StoreId, offset: usize, len: usize, cap: usize) -> Self {
        Self {
            storage: Some(storage),
            offset,
            len,
            cap,
            _marker: PhantomData,
        }
    }

    /// The nil view.
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            storage: None,
            offset: 0,
            len: 0,
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Returns true for the nil view.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.storage.is_none()
    }

    /// Number of addressable elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the view has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the view can grow to without reallocating.
    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if both views are windows onto the same backing store.
    ///
    /// Two nil views share nothing.
    #[must_use]
    pub fn shares_storage(&self, other: &View<T>) -> bool {
        self.storage.is_some() && self.storage == other.storage
    }

    /// Returns true if some cell is addressable through both views.
    #[must_use]
    pub fn overlaps(&self, other: &View<T>) -> bool {
        self.shares_storage(other)
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<T> {}

impl<T> Default for View<T> {
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.storage {
            Some(id) => write!(
                f,
                "View({id}, offset={}, len={}, cap={})",
                self.offset, self.len, self.cap
            ),
            None => f.write_str("View(nil)"),
        }
    }
}

/// Owner of every backing store for element type `T`.
///
/// Every heap has a process-unique id. A clone keeps the id, so handles
/// into the original address the clone's copies of the same stores.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    id: u32,
    pub(crate) stores: SlotArena<Vec<T>>,
    policy: GrowthPolicy,
    reallocations: usize,
}

impl<T> Heap<T> {
    /// Creates an empty heap with the default growth policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::Doubling)
    }

    /// Creates an empty heap that grows stores according to `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            id: NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed),
            stores: SlotArena::new(),
            policy,
            reallocations: 0,
        }
    }

    /// The growth policy used when an append overflows.
    #[must_use]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of backing stores allocated so far.
    #[must_use]
    pub fn storage_count(&self) -> usize {
        self.stores.len()
    }

    /// Number of appends that had to detach onto a new store.
    #[must_use]
    pub const fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Arena statistics for the backing stores.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        self.stores.stats()
    }

    pub(crate) fn backing(&self, id: StoreId) -> Result<&Vec<T>> {
        if id.heap != self.id {
            return Err(id.invalid());
        }
        self.stores.get(id.slot).ok_or(id.invalid())
    }

    pub(crate) fn backing_mut(&mut self, id: StoreId) -> Result<&mut Vec<T>> {
        if id.heap != self.id {
            return Err(id.invalid());
        }
        self.stores.get_mut(id.slot).ok_or(id.invalid())
    }

    /// The cells addressable through `view`.
    fn cells(&self, view: View<T>) -> Result<&[T]> {
        match view.storage {
            Some(id) => {
                self.backing(id)?
                    .get(view.offset..view.offset + view.len)
                    .ok_or(id.invalid())
            }
            None => Ok(&[]),
        }
    }

    fn cells_mut(&mut self, view: View<T>) -> Result<&mut [T]> {
        match view.storage {
            Some(id) => {
                self.backing_mut(id)?
                    .get_mut(view.offset..view.offset + view.len)
                    .ok_or(id.invalid())
            }
            None => Ok(&mut []),
        }
    }
}

impl<T: Clone + Default> Heap<T> {
    /// Moves `cells` into a fresh store; its length becomes its capacity.
    pub(crate) fn alloc_store(&mut self, cells: Vec<T>) -> StoreId {
        let cap = cells.len();
        let id = StoreId {
            heap: self.id,
            slot: self.stores.alloc(cells),
        };
        trace!("allocated store {id} with capacity {cap}");
        id
    }

    /// Allocates a store holding exactly `items` and returns a view over
    /// all of it (`len == cap`), like a slice literal.
    pub fn alloc_slice(&mut self, items: impl IntoIterator<Item = T>) -> View<T> {
        let cells: Vec<T> = items.into_iter().collect();
        let len = cells.len();
        let id = self.alloc_store(cells);
        View::new(id, 0, len, len)
    }

    /// Allocates a zero-filled store of `cap` cells and returns a view over
    /// its first `len`.
    pub fn make(&mut self, len: usize, cap: usize) -> Result<View<T>> {
        if len > cap {
            return Err(Error::OutOfRange { lo: 0, hi: len, len: cap });
        }
        let id = self.alloc_store(vec![T::default(); cap]);
        Ok(View::new(id, 0, len, cap))
    }

    /// Carves `source[lo..hi]`.
    ///
    /// The result shares `source`'s store. Its capacity is
    /// `source.cap() - lo`, so appending to it may overwrite cells that
    /// `source` still addresses.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `lo > hi` or `hi > source.len()`.
    pub fn view(&self, source: View<T>, lo: usize, hi: usize) -> Result<View<T>> {
        if lo > hi || hi > source.len {
            return Err(Error::OutOfRange { lo, hi, len: source.len });
        }
        match source.storage {
            Some(id) => {
                self.backing(id)?;
                Ok(View::new(id, source.offset + lo, hi - lo, source.cap - lo))
            }
            None => Ok(View::nil()),
        }
    }

    /// Appends `items` to `view` and returns the grown view.
    ///
    /// When the items fit in `view.cap()`, they are written into the shared
    /// store in place and every other view over those cells observes them.
    /// Otherwise the elements are copied to a new store sized by the heap's
    /// [`GrowthPolicy`] and the returned view no longer aliases `view`.
    pub fn append(&mut self, view: View<T>, items: impl IntoIterator<Item = T>) -> Result<View<T>> {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(view);
        }
        let needed = view.len + items.len();

        if needed <= view.cap
            && let Some(id) = view.storage
        {
            let start = view.offset + view.len;
            let window = self
                .backing_mut(id)?
                .get_mut(start..view.offset + needed)
                .ok_or(id.invalid())?;
            for (cell, item) in window.iter_mut().zip(items) {
                *cell = item;
            }
            return Ok(View::new(id, view.offset, needed, view.cap));
        }

        let new_cap = self.policy.next_capacity(view.cap, needed);
        let mut cells = Vec::with_capacity(new_cap);
        cells.extend_from_slice(self.cells(view)?);
        cells.extend(items);
        cells.resize(new_cap, T::default());

        let id = self.alloc_store(cells);
        self.reallocations += 1;
        trace!(
            "append detached {view:?} onto store {id}: len {needed}, cap {} -> {new_cap}",
            view.cap
        );
        Ok(View::new(id, 0, needed, new_cap))
    }

    /// Resets every cell in `view` to `T::default()`.
    ///
    /// Length and capacity are unchanged; other views over the same cells
    /// observe the zeroes.
    pub fn clear(&mut self, view: View<T>) -> Result<()> {
        self.cells_mut(view)?.fill(T::default());
        Ok(())
    }

    /// Copies `min(dst.len(), src.len())` elements from `src` into `dst`
    /// and returns how many were copied.
    ///
    /// Overlapping views of the same store are handled as if the source
    /// were read in full before the first write.
    pub fn copy(&mut self, dst: View<T>, src: View<T>) -> Result<usize> {
        let n = dst.len.min(src.len);
        let staged = self.cells(src)?[..n].to_vec();
        self.cells_mut(dst)?[..n].clone_from_slice(&staged);
        Ok(n)
    }

    /// Returns the element at `index`.
    pub fn get(&self, view: View<T>, index: usize) -> Result<&T> {
        self.cells(view)?
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len: view.len })
    }

    /// Overwrites the element at `index`.
    pub fn set(&mut self, view: View<T>, index: usize, value: T) -> Result<()> {
        let cell = self
            .cells_mut(view)?
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len: view.len })?;
        *cell = value;
        Ok(())
    }

    /// Copies the elements of `view` out of the heap.
    pub fn to_vec(&self, view: View<T>) -> Result<Vec<T>> {
        Ok(self.cells(view)?.to_vec())
    }

    /// Iterates over the elements of `view` in index order.
    pub fn iter(&self, view: View<T>) -> Result<std::slice::Iter<'_, T>> {
        Ok(self.cells(view)?.iter())
    }

    /// Element-wise comparison of two views.
    ///
    /// Views of different lengths are never equal. Storage identity is not
    /// considered.
    pub fn equal(&self, a: View<T>, b: View<T>) -> Result<bool>
    where
        T: PartialEq,
    {
        Ok(self.cells(a)? == self.cells(b)?)
    }

    /// Renders the elements of `view` as `[a b c]`.
    pub fn render(&self, view: View<T>) -> Result<String>
    where
        T: fmt::Display,
    {
        Ok(render_cells(self.cells(view)?))
    }
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a sequence as `[a b c]`.
pub(crate) fn render_cells<T: fmt::Display>(cells: &[T]) -> String {
    let mut out = String::from("[");
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&cell.to_string());
    }
    out.push(']');
    out
}

//! Id-indexed slot arena.
//!
//! A [`SlotArena`] owns a growing list of slots. Allocating a value returns
//! a [`SlotId`]; the slot lives until the arena is dropped. There is no
//! per-slot free and no reset, so an id handed out once always resolves to
//! the same slot and two distinct ids never resolve to the same one.
//!
//! Handles built on top of slot ids (views, pointers) are plain `Copy`
//! values. Two handles alias exactly when they carry the same id.
//!
//! # Examples
//!
//! ```
//! use tether_mem::arena::SlotArena;
//!
//! let mut arena = SlotArena::new();
//!
//! let a = arena.alloc(vec![1, 2, 3]);
//! let b = arena.alloc(vec![1, 2, 3]);
//!
//! arena.get_mut(a).unwrap()[0] = 9;
//!
//! assert_eq!(arena.get(a), Some(&vec![9, 2, 3]));
//! assert_eq!(arena.get(b), Some(&vec![1, 2, 3]));
//! ```

use std::fmt;

/// Identifier of one slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(u32);

impl SlotId {
    /// Creates an id from its raw index.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw index as `usize`.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena allocation statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    /// Number of slots handed out so far.
    pub slot_count: usize,
    /// Number of slots the arena can hold before its index table grows.
    pub slot_capacity: usize,
}

/// Append-only arena of `T` slots addressed by [`SlotId`].
///
/// # Examples
///
/// ```
/// use tether_mem::arena::{SlotArena, SlotId};
///
/// let mut arena: SlotArena<i64> = SlotArena::with_capacity(4);
/// let id = arena.alloc(73);
///
/// *arena.get_mut(id).unwrap() = 20;
/// assert_eq!(arena.get(id), Some(&20));
/// assert_eq!(arena.get(SlotId::new(99)), None);
/// ```
#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<T>,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Moves `value` into a fresh slot and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots are allocated.
    pub fn alloc(&mut self, value: T) -> SlotId {
        let raw = u32::try_from(self.slots.len())
            .expect("slot arena exhausted the u32 id space");
        self.slots.push(value);
        SlotId(raw)
    }

    /// Returns the slot for `id`, or `None` if this arena never issued it.
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.as_usize())
    }

    /// Returns the slot for `id` mutably.
    #[must_use]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.as_usize())
    }

    /// Returns true if `id` was issued by this arena.
    #[must_use]
    pub fn contains(&self, id: SlotId) -> bool {
        id.as_usize() < self.slots.len()
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over `(id, slot)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (SlotId(i as u32), slot))
    }

    /// Returns allocation statistics.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            slot_count: self.slots.len(),
            slot_capacity: self.slots.capacity(),
        }
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

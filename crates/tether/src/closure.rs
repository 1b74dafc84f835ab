//! Closures that capture a shared mutable cell.
//!
//! A [`SharedCell`] is a captured variable. A [`Closure`] bundles one cell
//! with a body; every call applies the body to the same cell, so successive
//! calls see cumulative state. [`make_closure`] allocates a fresh cell per
//! call, so two closures made separately never interfere.
//!
//! # Examples
//!
//! ```
//! use tether::make_closure;
//!
//! let counter = make_closure(5, |n: &mut i64| {
//!     *n += 1;
//!     *n
//! });
//!
//! assert_eq!(counter.call(), 6);
//! assert_eq!(counter.call(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A mutable variable captured by reference.
///
/// Clones share the cell; the cell lives as long as its longest holder.
pub struct SharedCell<S>(Rc<RefCell<S>>);

impl<S> SharedCell<S> {
    /// Declares a new captured variable holding `value`.
    pub fn new(value: S) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> S
    where
        S: Clone,
    {
        self.0.borrow().clone()
    }

    /// Overwrites the value.
    pub fn set(&self, value: S) {
        *self.0.borrow_mut() = value;
    }

    /// Runs `f` with mutable access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }

    /// Returns true if both handles refer to the same cell.
    pub fn same_cell(&self, other: &SharedCell<S>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<S> Clone for SharedCell<S> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<S: fmt::Debug> fmt::Debug for SharedCell<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedCell").field(&self.0.borrow()).finish()
    }
}

/// A callable bound to one captured cell.
pub struct Closure<S, R> {
    cell: SharedCell<S>,
    body: Rc<dyn Fn(&mut S) -> R>,
}

impl<S, R> Closure<S, R> {
    /// Allocates a fresh cell seeded with `initial` and binds `body` to it.
    pub fn new(initial: S, body: impl Fn(&mut S) -> R + 'static) -> Self {
        Self::capturing(&SharedCell::new(initial), body)
    }

    /// Binds `body` to a cell the caller already holds.
    ///
    /// Mutations made by the closure are visible through `cell`, and
    /// writes to `cell` are visible to the next call.
    pub fn capturing(cell: &SharedCell<S>, body: impl Fn(&mut S) -> R + 'static) -> Self {
        Self {
            cell: cell.clone(),
            body: Rc::new(body),
        }
    }

    /// Applies the body to the captured cell and returns its result.
    ///
    /// # Panics
    ///
    /// If the body re-enters this closure (or another closure over the same
    /// cell) while it runs.
    pub fn call(&self) -> R {
        self.cell.with(|state| (self.body)(state))
    }

    /// Returns a copy of the captured state.
    pub fn state(&self) -> S
    where
        S: Clone,
    {
        self.cell.get()
    }

    /// The captured cell.
    pub fn cell(&self) -> &SharedCell<S> {
        &self.cell
    }

    /// Returns true if both closures capture the same cell.
    pub fn shares_cell_with<Q>(&self, other: &Closure<S, Q>) -> bool {
        self.cell.same_cell(&other.cell)
    }
}

impl<S, R> Clone for Closure<S, R> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            body: Rc::clone(&self.body),
        }
    }
}

impl<S: fmt::Debug, R> fmt::Debug for Closure<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("cell", &self.cell)
            .finish_non_exhaustive()
    }
}

/// Allocates one shared cell seeded with `initial` and returns a closure
/// over it.
pub fn make_closure<S, R>(initial: S, body: impl Fn(&mut S) -> R + 'static) -> Closure<S, R> {
    Closure::new(initial, body)
}

//! Tether: an executable model of value and reference semantics.
//!
//! This crate models how composite values share or copy their storage:
//!
//! - **Fixed arrays** ([`FixedArray`]): plain values, copied on assignment
//! - **Views** ([`View`]): bounded windows over shared backing storage that
//!   detach from it once an append outgrows their capacity
//! - **Maps** ([`Map`]): handles that alias one table until deep-copied
//! - **Pointers** ([`Pointer`]): nullable cell addresses; nil dereference is
//!   an error, never a default
//! - **Closures** ([`Closure`]): callables bound to one shared captured cell
//! - **Scopes** ([`Env`]): block-scoped shadowing over heap cells
//!
//! All storage lives in a [`Heap`], an id-indexed arena of backing stores.
//! Every handle is plain data (`Copy` where possible) and every access goes
//! through the heap, so aliasing is explicit and checked.
//!
//! The [`demo`] module replays scripted scenarios through the model and
//! collects their output in a [`Report`].
//!
//! # Example
//!
//! ```
//! use tether::Heap;
//!
//! let mut heap = Heap::new();
//! let x = heap.alloc_slice(["a", "b", "c", "d"]);
//! let y = heap.view(x, 0, 2).unwrap();
//! let z = heap.view(x, 1, 4).unwrap();
//!
//! heap.set(x, 1, "y").unwrap();
//! heap.set(y, 0, "x").unwrap();
//! heap.set(z, 1, "z").unwrap();
//!
//! assert_eq!(heap.render(x).unwrap(), "[x y z d]");
//! assert_eq!(heap.render(y).unwrap(), "[x y]");
//! assert_eq!(heap.render(z).unwrap(), "[y z d]");
//! ```

pub mod arith;
pub mod array;
pub mod closure;
pub mod config;
pub mod demo;
pub mod error;
pub mod heap;
pub mod map;
pub mod pointer;
pub mod report;
pub mod scope;

pub use arith::{div, div_and_remainder};
pub use array::{ArrayRef, FixedArray};
pub use closure::{Closure, SharedCell, make_closure};
pub use config::Config;
pub use error::{Error, Result};
pub use heap::{Heap, StoreId, View};
pub use map::Map;
pub use pointer::{CellAddr, Pointer};
pub use report::Report;
pub use scope::Env;
pub use tether_mem::GrowthPolicy;

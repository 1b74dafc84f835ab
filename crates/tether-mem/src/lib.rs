//! Storage infrastructure for the Tether aliasing model.
//!
//! This crate provides the memory primitives the model is built on:
//!
//! - **Slot arena**: id-indexed storage slots that never move or get freed
//!   while the arena lives, so handles stay valid and never alias by accident
//! - **Growth policy**: how a backing store picks its next capacity
//! - **Name interning**: deduplicated binding names with `Symbol` ids
//!   (requires the `interner` feature)

pub mod arena;
pub mod growth;

#[cfg(feature = "interner")]
pub mod interner;
#[cfg(feature = "interner")]
pub mod symbol;

pub use arena::{ArenaStats, SlotArena, SlotId};
pub use growth::GrowthPolicy;

#[cfg(feature = "interner")]
pub use interner::NameInterner;
#[cfg(feature = "interner")]
pub use symbol::Symbol;

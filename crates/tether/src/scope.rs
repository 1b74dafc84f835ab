//! Block-scoped name bindings.
//!
//! An [`Env`] is a stack of layers, each mapping a name to the pointer of
//! the heap cell it was declared with. Lookup walks innermost to outermost.
//! Declaring a name in an inner block binds a new cell in that layer only,
//! so popping the layer leaves the outer binding and its cell untouched.
//!
//! # Examples
//!
//! ```
//! use tether::{Env, Heap};
//!
//! let mut heap = Heap::new();
//! let mut env = Env::new();
//! env.declare(&mut heap, "n", 10);
//!
//! let inner = env.block(|env| {
//!     env.declare(&mut heap, "n", 5);
//!     env.load(&heap, "n")
//! });
//!
//! assert_eq!(inner.unwrap(), 5);
//! assert_eq!(env.load(&heap, "n").unwrap(), 10);
//! ```

use std::ops::{Deref, DerefMut};

use fxhash::FxBuildHasher;
use hashbrown::HashMap;
use tether_log::debug;
use tether_mem::{NameInterner, Symbol};

use crate::error::{Error, Result};
use crate::heap::Heap;
use crate::pointer::Pointer;

type Layer<T> = HashMap<Symbol, Pointer<T>, FxBuildHasher>;

/// Lexical environment of heap-backed variables.
#[derive(Debug)]
pub struct Env<T> {
    names: NameInterner,
    layers: Vec<Layer<T>>,
}

impl<T> Env<T> {
    /// Creates an environment with a single outermost layer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: NameInterner::new(),
            layers: vec![Layer::default()],
        }
    }

    /// Number of layers, 1 at the outermost level.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Pushes a fresh innermost layer.
    pub fn enter_block(&mut self) {
        self.layers.push(Layer::default());
        debug!("entered block at depth {}", self.layers.len());
    }

    /// Pops the innermost layer. The outermost layer is never popped.
    pub fn exit_block(&mut self) {
        if self.layers.len() > 1 {
            let layer = self.layers.pop();
            debug!(
                "exited block, dropped {} bindings, depth {}",
                layer.map_or(0, |l| l.len()),
                self.layers.len()
            );
        }
    }

    /// Runs `f` inside a fresh block and pops it afterwards, even if `f`
    /// unwinds.
    pub fn block<R>(&mut self, f: impl FnOnce(&mut Env<T>) -> R) -> R {
        self.enter_block();
        let mut guard = BlockGuard { env: self };
        f(&mut guard)
    }

    /// Returns the cell `name` currently resolves to.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedName`] if no enclosing layer declares `name`.
    pub fn resolve(&self, name: &str) -> Result<Pointer<T>> {
        self.names
            .get(name)
            .and_then(|sym| {
                self.layers
                    .iter()
                    .rev()
                    .find_map(|layer| layer.get(&sym).copied())
            })
            .ok_or_else(|| Error::UndefinedName {
                name: name.to_string(),
            })
    }

    /// Returns true if `name` resolves in any enclosing layer.
    pub fn is_declared(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }
}

impl<T: Clone + Default> Env<T> {
    /// Declares `name` in the innermost layer, bound to a fresh cell holding
    /// `value`. Redeclaring in the same layer rebinds to a new cell.
    pub fn declare(&mut self, heap: &mut Heap<T>, name: &str, value: T) -> Pointer<T> {
        let sym = self.names.intern(name);
        let ptr = heap.make_pointer(value);
        if let Some(layer) = self.layers.last_mut() {
            layer.insert(sym, ptr);
        }
        ptr
    }

    /// Reads the value `name` resolves to.
    pub fn load(&self, heap: &Heap<T>, name: &str) -> Result<T> {
        heap.deref(self.resolve(name)?)
    }

    /// Writes `value` into the cell `name` resolves to.
    pub fn assign(&self, heap: &mut Heap<T>, name: &str, value: T) -> Result<()> {
        heap.store(self.resolve(name)?, value)
    }
}

impl<T> Default for Env<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pops the block it was created for when dropped.
struct BlockGuard<'a, T> {
    env: &'a mut Env<T>,
}

impl<T> Deref for BlockGuard<'_, T> {
    type Target = Env<T>;

    fn deref(&self) -> &Env<T> {
        self.env
    }
}

impl<T> DerefMut for BlockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Env<T> {
        self.env
    }
}

impl<T> Drop for BlockGuard<'_, T> {
    fn drop(&mut self) {
        self.env.exit_block();
    }
}

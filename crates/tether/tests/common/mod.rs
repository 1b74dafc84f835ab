// Common test utilities for integration tests
//
// Shared fixtures for building heaps, views and environments.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tether::{GrowthPolicy, Heap, View};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a heap of integers with the default doubling policy
pub fn int_heap() -> Heap<i64> {
    Heap::new()
}

/// Creates a heap of integers that grows to exactly the needed capacity
pub fn exact_heap() -> Heap<i64> {
    Heap::with_policy(GrowthPolicy::Exact)
}

/// Allocates `0..len` as a slice literal
pub fn counting_slice(heap: &mut Heap<i64>, len: i64) -> View<i64> {
    heap.alloc_slice(0..len)
}

/// Reads a view into a vector, panicking on a bad handle
pub fn contents<T: Clone + Default>(heap: &Heap<T>, view: View<T>) -> Vec<T> {
    heap.to_vec(view).expect("view should be readable")
}

/// A file path under the system temp directory unique to this process and call
pub fn temp_path(stem: &str) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("tether-{stem}-{}-{n}.json", std::process::id()))
}

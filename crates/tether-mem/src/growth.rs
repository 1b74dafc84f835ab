//! Capacity growth for backing stores.
//!
//! When an append does not fit in a backing store, the store is replaced by
//! a larger one. [`GrowthPolicy`] decides how large. The default doubles the
//! old capacity and falls back to the exact requirement when doubling is not
//! enough.
//!
//! # Examples
//!
//! ```
//! use tether_mem::GrowthPolicy;
//!
//! // 3 elements, 2 more appended: doubling gives 6.
//! assert_eq!(GrowthPolicy::Doubling.next_capacity(3, 5), 6);
//!
//! // Doubling 1 is not enough for 4.
//! assert_eq!(GrowthPolicy::Doubling.next_capacity(1, 4), 4);
//!
//! assert_eq!(GrowthPolicy::Exact.next_capacity(3, 5), 5);
//! ```

/// Strategy for picking the capacity of a replacement backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// `max(2 * current, needed)`.
    #[default]
    Doubling,
    /// Exactly `needed`; every overflowing append reallocates.
    Exact,
}

impl GrowthPolicy {
    /// Returns the capacity for a store that must hold `needed` elements and
    /// currently holds `current`.
    ///
    /// The result is never smaller than `needed`.
    #[must_use]
    pub const fn next_capacity(self, current: usize, needed: usize) -> usize {
        let grown = match self {
            GrowthPolicy::Doubling => current.saturating_mul(2),
            GrowthPolicy::Exact => needed,
        };
        if grown < needed { needed } else { grown }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GrowthPolicy::Doubling => "doubling",
            GrowthPolicy::Exact => "exact",
        }
    }
}

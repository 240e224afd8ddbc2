//! Fisher–Yates shuffle core implementation.
//!
//! This module provides the public API for the secure shuffle: a single
//! function that permutes a mutable slice in place using randomness from
//! an injected bounded random integer source.
//!
//! ## Algorithm
//!
//! For `i` from `n - 1` down to `1`:
//!
//! 1. Draw `j` uniformly from `[0, i]`, i.e. with bound `i + 1`.
//! 2. Swap the elements at positions `i` and `j` (`j` may equal `i`, in
//!    which case the swap is a no-op but the draw still counts).
//!
//! Iterating downward and drawing from `[0, i]` at each step is what
//! makes the permutation unbiased. Drawing from the full range on every
//! step, or iterating upward with the same bound, skews the distribution
//! and must be avoided.
//!
//! ## Failure semantics
//!
//! An absent source fails before any element moves. A source failure
//! mid-run aborts the remaining steps and leaves the already-determined
//! suffix in place; the slice is then partially permuted and
//! caller-visible. Callers needing all-or-nothing behavior should
//! shuffle a copy and swap it in on success. Errors are never retried,
//! replaced with weaker randomness, or wrapped with loss of information.

use crate::source::{BoundedRandomSource, RandomSourceError};

/// Errors that can occur during a secure shuffle.
#[derive(Debug, PartialEq, Eq)]
pub enum ShuffleError {
    /// No random source was supplied; the slice was not modified.
    MissingSource,

    /// The random source failed while drawing a value, surfaced
    /// verbatim. The slice may be partially permuted.
    Source(RandomSourceError),
}

/// Randomly permutes a slice in place using a secure random source.
///
/// Performs a backward Fisher–Yates shuffle: every one of the `n!`
/// orderings of a slice of length `n` is equally likely, subject to the
/// uniformity of the supplied source. Exactly `n - 1` values are drawn
/// from the source; a slice of length 0 or 1 draws nothing and is
/// returned unchanged.
///
/// Elements only move by pairwise swaps; the slice keeps its length and
/// its multiset of elements. Duplicate elements are permitted and are
/// shuffled by position, not by value. `T` needs no capabilities beyond
/// being swappable.
///
/// # Arguments
///
/// - `items`
///   The slice to permute. Borrowed mutably for the duration of the call.
/// - `source`
///   The bounded random integer capability to draw from. `None` models
///   an absent provider and fails fast.
///
/// # Errors
///
/// Returns [`ShuffleError::MissingSource`] if `source` is `None`,
/// detected before any mutation. Returns [`ShuffleError::Source`] if a
/// draw fails; the remaining steps are abandoned and the slice is left
/// partially permuted.
///
/// # Example
///
/// ```rust, ignore
/// use secure_shuffle::shuffle::secure_shuffle;
/// use secure_shuffle::source::SystemRandomSource;
///
/// let mut records = vec!["a", "b", "c", "d"];
/// let mut source = SystemRandomSource::new();
///
/// secure_shuffle(&mut records, Some(&mut source)).unwrap();
/// ```
pub fn secure_shuffle<T>(
    items: &mut [T],
    source: Option<&mut dyn BoundedRandomSource>,
) -> Result<(), ShuffleError> {
    let Some(source) = source else {
        return Err(ShuffleError::MissingSource);
    };

    for i in (1..items.len()).rev() {
        let j = source.next_below(i + 1).map_err(ShuffleError::Source)?;

        // A source returning j > i violates its contract; never clamp,
        // clamping would bias the distribution.
        debug_assert!(j <= i, "source returned {j} for bound {}", i + 1);

        items.swap(i, j);
    }

    Ok(())
}

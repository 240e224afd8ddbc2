//! Secure in-place shuffling
//!
//! This module provides the crate's core operation: an unbiased,
//! cryptographically secure random permutation of a mutable slice.
//!
//! The algorithm is the backward Fisher–Yates shuffle. It walks the slice
//! from the last index down to the second, draws one bounded random
//! integer per position from a caller-supplied
//! [`BoundedRandomSource`](crate::source::BoundedRandomSource), and swaps
//! in place. Each step determines exactly one final position, giving
//! O(n) time, O(1) extra space, and probability `1/n!` for every
//! permutation.
//!
//! The operation is synchronous and single-threaded: it spawns nothing,
//! suspends nowhere, and requires exclusive mutable access to the slice
//! for its full duration, which safe Rust already enforces.

mod core;

pub use self::core::{ShuffleError, secure_shuffle};

//! Operating-system-backed bounded random integer source
//!
//! This module adapts the OS CSPRNG to the [`BoundedRandomSource`]
//! capability. It implements no generator of its own: every draw consumes
//! fresh kernel entropy, reduced to the requested range by rejection
//! sampling so that no bound introduces bias.

use crate::os::sys_random;
use crate::source::bounded::{BoundedRandomSource, RandomSourceError};

/// A bounded random integer source backed by the operating system CSPRNG.
///
/// Each call to [`next_below`](BoundedRandomSource::next_below) draws a
/// full 64-bit word of OS entropy and reduces it to `[0, bound)` using
/// the rejection scheme of `arc4random_uniform`: draws below
/// `2^64 mod bound` are discarded and redrawn, after which the modulo
/// reduction is exactly uniform. For any bound that fits in a `usize`
/// the rejection probability is far below one in `2^32`, so the loop
/// effectively never iterates twice.
///
/// The type holds no state; it is a handle to the kernel entropy pool.
/// Independent instances are interchangeable.
pub struct SystemRandomSource;

impl SystemRandomSource {
    /// Creates a new source backed by the operating system.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedRandomSource for SystemRandomSource {
    /// Returns a uniformly distributed integer in `[0, bound)` using OS
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError::InvalidBound`] if `bound` is zero,
    /// or [`RandomSourceError::Entropy`] carrying the raw OS status code
    /// if the kernel entropy read fails.
    fn next_below(&mut self, bound: usize) -> Result<usize, RandomSourceError> {
        if bound == 0 {
            return Err(RandomSourceError::InvalidBound);
        }

        if bound == 1 {
            return Ok(0);
        }

        let bound = bound as u64;

        // 2^64 mod bound; draws below this threshold would make the
        // low residues over-represented and are rejected.
        let reject_below = bound.wrapping_neg() % bound;

        loop {
            let mut raw = [0u8; 8];
            sys_random(&mut raw).map_err(RandomSourceError::Entropy)?;

            let value = u64::from_le_bytes(raw);

            if value >= reject_below {
                return Ok((value % bound) as usize);
            }
        }
    }
}

//! The bounded random integer capability.
//!
//! A [`BoundedRandomSource`] is the only collaborator the shuffle
//! operation knows about. It is owned and supplied by the caller; the
//! shuffle never constructs or seeds it, it only draws from it and
//! propagates whatever the source reports.

/// Errors that a bounded random integer source may report.
#[derive(Debug, PartialEq, Eq)]
pub enum RandomSourceError {
    /// The requested bound was zero; `[0, 0)` is empty.
    InvalidBound,

    /// The operating system entropy facility failed.
    ///
    /// Carries the raw platform status code (`errno` on Linux, `NTSTATUS`
    /// on Windows) so callers can inspect the failure unchanged.
    Entropy(i32),

    /// The source ran out of values.
    ///
    /// Produced by sources with a finite supply, such as scripted test
    /// doubles or pre-drawn entropy pools.
    Exhausted,
}

/// A producer of uniformly distributed bounded random integers.
///
/// Implementations must return an integer drawn uniformly from
/// `[0, bound)` for every `bound >= 1`, backed by a cryptographically
/// secure entropy source. A value outside that range is a contract
/// violation; consumers are entitled to assume it never happens and do
/// not clamp, since clamping would bias the distribution.
///
/// Sources may be stateful and are invoked through `&mut self`. Sharing
/// one source across threads is governed entirely by the implementing
/// type's own `Send`/`Sync` story; this crate adds no locking.
pub trait BoundedRandomSource {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomSourceError::InvalidBound`] if `bound` is zero,
    /// or a source-specific error if a value cannot be produced. Errors
    /// are final: the consumer does not retry.
    fn next_below(&mut self, bound: usize) -> Result<usize, RandomSourceError>;
}

//! Bounded random integer sources
//!
//! This module defines the randomness capability consumed by the shuffle
//! operation, and a production implementation of it.
//!
//! The capability is deliberately narrow: a source produces one uniformly
//! distributed integer in `[0, bound)` per call, for any positive bound
//! the caller requests. No byte streams and no seeding or reseeding
//! policy leak into the interface. This keeps the shuffle independent of
//! any particular generator and lets tests substitute a scripted source
//! without weakening production security.
//!
//! Design goals:
//! - Uniformity for every requested bound, with no modulo bias
//! - Secure entropy in production, sourced from the operating system
//! - Explicit, propagated failures; no retries and no fallbacks
//! - Minimal and explicit API surface

mod bounded;
mod system;

pub use bounded::{BoundedRandomSource, RandomSourceError};
pub use system::SystemRandomSource;

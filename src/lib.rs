//! Cryptographically secure in-place shuffling
//!
//! This crate provides a single, narrowly-scoped primitive: an unbiased,
//! in-place random permutation of a mutable slice, driven by a
//! cryptographically secure source of bounded random integers.
//!
//! The focus is on **clarity, predictability, and auditability** rather
//! than on providing a large shuffling or sampling API. The permutation
//! algorithm and the randomness contract are explicit, minimal, and
//! designed for security-critical callers: randomizing sensitive records,
//! distributing work items, anonymizing order.
//!
//! # Module overview
//!
//! - `shuffle`
//!   The shuffle operation itself: a backward Fisher–Yates permutation
//!   that draws one bounded random integer per undetermined position and
//!   swaps in place. Every one of the `n!` orderings of a slice of length
//!   `n` is equally likely, subject to the quality of the supplied source.
//!
//! - `source`
//!   The randomness capability consumed by the shuffle: a trait for
//!   producers of uniformly distributed integers in `[0, bound)`, plus a
//!   production implementation backed by the operating system CSPRNG.
//!   The capability is injected by the caller, which keeps production
//!   security and test determinism on the same code path.
//!
//! - `os`
//!   Internal operating system abstraction layer. Exposes raw OS entropy
//!   through a single portable function with platform-specific backends
//!   selected at compile time.
//!
//! # Design goals
//!
//! - Unbiased permutations: each step draws from exactly the range the
//!   algorithm requires, and bounded integers are produced by rejection
//!   sampling, never by modulo reduction alone.
//! - No internal randomness: the crate implements no generator of its
//!   own; it only consumes the capability the caller supplies.
//! - Explicit failure semantics: every error is returned to the caller
//!   unchanged, with no logging, no fallback randomness, and no retries.
//! - No global state: every call is independent and re-entrant given
//!   independent slices and sources.
//!
//! This crate is not a general-purpose collections or sampling library;
//! it deliberately omits copy-producing shuffles, weighted sampling, and
//! partial (k-of-n) shuffles.

mod os;

pub mod shuffle;
pub mod source;

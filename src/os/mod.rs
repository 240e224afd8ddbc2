//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system services this crate requires.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same public surface,
//! allowing higher-level code to remain fully portable.
//!
//! The only capability exposed is access to operating system entropy: a
//! single function that fills a buffer with cryptographically secure
//! random bytes, or reports the raw OS status code on failure. Failures
//! are never masked or retried here; the caller decides what an entropy
//! failure means.
//!
//! All exposed functions are safe wrappers around low-level OS APIs.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

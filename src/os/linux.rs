//! Operating system abstraction layer (Linux)
//!
//! This module obtains cryptographically secure random bytes from the
//! kernel using the `getrandom` system call.
//!
//! On Linux, `getrandom` provides direct access to the kernel entropy pool
//! and is suitable for security-critical use cases.

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// This function repeatedly calls the Linux `getrandom` system call until
/// the entire buffer is filled. Partial reads are handled transparently,
/// which can occur depending on kernel behavior or signal interruptions.
///
/// # Errors
/// Returns the raw `errno` value if `getrandom` reports an error. The
/// buffer may be partially written in that case and must not be used.
///
/// # Notes
/// - No heap allocation is performed.
/// - The buffer is fully initialized on success.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), i32> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let errno = std::io::Error::last_os_error()
                .raw_os_error()
                .unwrap_or(libc::EIO);
            return Err(errno);
        }

        filled += ret as usize;
    }

    Ok(())
}

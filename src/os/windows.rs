use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Errors
/// Returns the raw `NTSTATUS` value if `BCryptGenRandom` reports a
/// failure. The buffer contents are unspecified in that case.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), i32> {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        return Err(status);
    }

    Ok(())
}

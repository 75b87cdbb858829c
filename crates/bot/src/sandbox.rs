//! Post-connect process hardening.
//!
//! On OpenBSD the process drops to `pledge("stdio inet dns prot_exec")` once
//! the gateway is up; elsewhere this is a no-op.

#[cfg(target_os = "openbsd")]
const PLEDGE_PROMISES: &[u8] = b"stdio inet dns prot_exec\0";

#[cfg(target_os = "openbsd")]
pub fn restrict_process() {
    // SAFETY: promises is NUL-terminated and execpromises may be NULL.
    let rc = unsafe {
        libc::pledge(
            PLEDGE_PROMISES.as_ptr().cast::<libc::c_char>(),
            std::ptr::null(),
        )
    };
    if rc == 0 {
        log::debug!("pledge applied");
    } else {
        log::warn!("pledge failed: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(target_os = "openbsd"))]
pub fn restrict_process() {
    log::trace!("No process restrictions on this platform");
}

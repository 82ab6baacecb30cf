//! Unified error type for the lightctl-lib crate.
//!
//! [`LightctlError`] wraps the actuator error ([`SysfsError`]) and
//! domain-specific kinds; `From` impls allow `?` to propagate across module
//! boundaries. `errno()` flattens any error to the negative OS code the HAL
//! contract promises its callers.

use std::fmt;

use crate::sysfs::SysfsError;

#[derive(Debug)]
pub enum LightctlError {
    /// Actuator I/O error (open or write on a device file). Non-fatal for
    /// indicator updates; returned for backlight updates.
    Sysfs(SysfsError),
    /// Caller asked for a light name this device does not expose.
    UnknownLight(String),
    /// Color parsing error.
    Color(String),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
}

impl LightctlError {
    /// Negative OS error code for this failure.
    ///
    /// Contract violations map to `-EINVAL`; I/O failures carry their own
    /// errno, defaulting to `-EIO` when the OS code is unavailable.
    pub fn errno(&self) -> i32 {
        match self {
            LightctlError::Sysfs(e) => e.errno(),
            LightctlError::UnknownLight(_) | LightctlError::Color(_) => -libc::EINVAL,
            LightctlError::Io(e) => e.raw_os_error().map(|n| -n).unwrap_or(-libc::EIO),
        }
    }
}

impl fmt::Display for LightctlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightctlError::Sysfs(e) => write!(f, "{e}"),
            LightctlError::UnknownLight(name) => write!(f, "unknown light: {name}"),
            LightctlError::Color(e) => write!(f, "color error: {e}"),
            LightctlError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for LightctlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LightctlError::Sysfs(e) => Some(e),
            LightctlError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SysfsError> for LightctlError {
    fn from(e: SysfsError) -> Self {
        LightctlError::Sysfs(e)
    }
}

impl From<std::io::Error> for LightctlError {
    fn from(e: std::io::Error) -> Self {
        LightctlError::Io(e)
    }
}

/// Crate-level Result alias using [`LightctlError`].
pub type Result<T> = std::result::Result<T, LightctlError>;

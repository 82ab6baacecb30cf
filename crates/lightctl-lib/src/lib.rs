//! lightctl — userspace lights HAL for a shared indicator LED and backlight.
//!
//! Four logical lights (backlight, battery, notifications, attention) share
//! one physical multi-color LED and one display backlight. This crate holds
//! the arbitration that decides what the shared hardware shows, the
//! persistence-mode bookkeeping for the backlight, and the sysfs actuator
//! that performs the writes.

pub mod arbiter;
pub mod backlight;
pub mod color;
pub mod config;
pub mod error;
pub mod hal;
pub mod paths;
pub mod state;
pub mod sysfs;

pub use error::LightctlError;

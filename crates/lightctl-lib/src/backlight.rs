//! Backlight path — persistence-mode transitions plus the two hardware models.
//!
//! Independent of LED arbitration: backlight updates never touch the winner
//! computation, but they share the registry lock so mode bookkeeping and the
//! hardware write form one critical section.

use crate::arbiter::LightsRegistry;
use crate::color::rgb_to_brightness;
use crate::paths::LightPaths;
use crate::state::{BrightnessMode, LightState};
use crate::sysfs::{self, SysfsLights};

/// Brightness forced while low-persistence mode is active.
pub const DEFAULT_LOW_PERSISTENCE_BRIGHTNESS: u32 = 0x80;

/// Vendor-specific brightness primitive for the extended backlight model.
///
/// Opaque collaborator: the HAL clamps and forwards a raw level, nothing more.
pub trait ExtBacklight: Send + Sync {
    /// One-time hardware setup, called when the extended model is selected.
    fn init(&self) {}

    /// Apply a raw brightness level (already validated against the maximum).
    fn set_level(&self, level: u32);
}

/// Direct-model backlight update.
///
/// Sequencing is load-bearing: the persistence flag is written only when the
/// update crosses the low-persistence boundary, the brightness override to
/// [`DEFAULT_LOW_PERSISTENCE_BRIGHTNESS`] applies only on that same entering
/// transition, and `last_backlight_mode` is updated even when the flag write
/// failed. A failed flag write skips the brightness write and is returned to
/// the caller.
pub fn set_backlight(
    registry: &LightsRegistry,
    lights: &impl SysfsLights,
    paths: &LightPaths,
    state: &LightState,
) -> sysfs::Result<()> {
    let mut slots = registry.lock();

    let mut brightness = u32::from(rgb_to_brightness(state.color));
    let lp_enabled = state.brightness_mode == BrightnessMode::LowPersistence;

    let mut flag_err = None;
    if (slots.last_backlight_mode != state.brightness_mode && lp_enabled)
        || (!lp_enabled && slots.last_backlight_mode == BrightnessMode::LowPersistence)
    {
        if let Err(e) = lights.write_level(&paths.persistence, lp_enabled as u32) {
            log::warn!("failed to toggle persistence mode: {e}");
            flag_err = Some(e);
        }
        if lp_enabled {
            brightness = DEFAULT_LOW_PERSISTENCE_BRIGHTNESS;
        }
    }

    slots.last_backlight_mode = state.brightness_mode;

    match flag_err {
        Some(e) => Err(e),
        None => {
            // Which backlight node is live depends on the running device, so
            // probe on every write.
            if lights.exists(&paths.lcd) {
                lights.write_level(&paths.lcd, brightness)
            } else {
                lights.write_level(&paths.lcd_alt, brightness)
            }
        }
    }
}

/// Extended-model backlight update.
///
/// The raw low 24 bits of the color are the level; values above the
/// configured maximum are dropped without error.
pub fn set_backlight_ext(
    registry: &LightsRegistry,
    ext: &dyn ExtBacklight,
    max_brightness: u32,
    state: &LightState,
) -> sysfs::Result<()> {
    let _slots = registry.lock();
    let level = state.color & 0x00FF_FFFF;
    if level <= max_brightness {
        ext.set_level(level);
    }
    Ok(())
}

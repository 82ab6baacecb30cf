//! Indicator arbitration — merges battery, notification, and attention state
//! onto the one physical LED.
//!
//! The registry holds the last-set state per indicator behind a single mutex;
//! every update recomputes the winner and re-derives the hardware directive
//! from scratch. There is no memoization against the previous output — a
//! no-op update still produces a (deterministic) hardware write.

use std::sync::{Mutex, MutexGuard};

use crate::color::{is_lit, rgb_to_brightness};
use crate::paths::LightPaths;
use crate::state::{BrightnessMode, FlashMode, LightState};
use crate::sysfs::SysfsLights;

/// Concrete hardware directive for the shared LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedDirective {
    pub brightness: u8,
    pub blink: bool,
}

/// Resolve a winning state into a hardware directive.
///
/// Blink requires both durations nonzero; durations only count for
/// [`FlashMode::Timed`]. The millisecond values themselves are never sent to
/// the device — only the boolean flag, with hardware-default timing.
pub fn resolve_directive(state: &LightState) -> LedDirective {
    let (on_ms, off_ms) = match state.flash_mode {
        FlashMode::Timed => (state.flash_on_ms, state.flash_off_ms),
        _ => (0, 0),
    };
    LedDirective {
        brightness: rgb_to_brightness(state.color),
        blink: on_ms > 0 && off_ms > 0,
    }
}

/// Last-known inputs for the shared LED and backlight, guarded as one unit.
#[derive(Debug, Default)]
pub(crate) struct Slots {
    pub battery: LightState,
    pub notification: LightState,
    /// Flash duration recorded by attention requests. Bookkeeping only: it
    /// never feeds the LED output in the current hardware generation.
    pub attention_ms: u32,
    pub last_backlight_mode: BrightnessMode,
}

/// Process-wide arbitration state.
///
/// One mutex covers all slots so winner computation always sees a consistent
/// snapshot, and the hardware write happens inside the same critical section.
#[derive(Debug, Default)]
pub struct LightsRegistry {
    inner: Mutex<Slots>,
}

impl LightsRegistry {
    pub fn new() -> Self {
        LightsRegistry::default()
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Slots> {
        self.inner.lock().unwrap()
    }

    pub fn set_battery(&self, lights: &impl SysfsLights, paths: &LightPaths, state: &LightState) {
        let mut slots = self.lock();
        slots.battery = *state;
        apply_shared_led(&slots, lights, paths);
    }

    pub fn set_notifications(
        &self,
        lights: &impl SysfsLights,
        paths: &LightPaths,
        state: &LightState,
    ) {
        let mut slots = self.lock();
        slots.notification = *state;
        apply_shared_led(&slots, lights, paths);
    }

    /// Record attention state and re-arbitrate.
    ///
    /// `Hardware` flash stores the on-duration, `None` clears it; other flash
    /// modes leave the stored value alone. Either way the battery/notification
    /// winner is re-applied.
    pub fn set_attention(&self, lights: &impl SysfsLights, paths: &LightPaths, state: &LightState) {
        let mut slots = self.lock();
        match state.flash_mode {
            FlashMode::Hardware => slots.attention_ms = state.flash_on_ms,
            FlashMode::None => slots.attention_ms = 0,
            FlashMode::Timed => {}
        }
        apply_shared_led(&slots, lights, paths);
    }

    /// Currently recorded attention flash duration.
    pub fn attention_ms(&self) -> u32 {
        self.lock().attention_ms
    }

    /// Last applied backlight brightness mode.
    pub fn last_backlight_mode(&self) -> BrightnessMode {
        self.lock().last_backlight_mode
    }
}

/// Pick the winner and drive the LED. Caller must hold the registry lock.
fn apply_shared_led(slots: &Slots, lights: &impl SysfsLights, paths: &LightPaths) {
    let winner = if is_lit(slots.battery.color) {
        &slots.battery
    } else {
        &slots.notification
    };
    apply_led(winner, lights, paths);
}

/// Drive the LED from a resolved directive.
///
/// Blink and steady level are mutually exclusive hardware modes: a failed
/// blink request forces the level to 0 so stale brightness never stays
/// visible. Write failures are non-fatal — the registry slots are already
/// updated, so arbitration stays consistent for subsequent calls.
fn apply_led(state: &LightState, lights: &impl SysfsLights, paths: &LightPaths) {
    let directive = resolve_directive(state);
    if directive.blink {
        if let Err(e) = lights.write_blink(&paths.led_blink, true) {
            log::warn!("blink request failed ({e}), forcing LED off");
            if let Err(e) = lights.write_level(&paths.led, 0) {
                log::warn!("LED off fallback failed: {e}");
            }
        }
    } else if let Err(e) = lights.write_level(&paths.led, directive.brightness as u32) {
        log::warn!("LED level write failed: {e}");
    }
}

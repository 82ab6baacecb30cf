//! Light state model — the per-call value type and the logical light IDs.

use std::fmt;
use std::str::FromStr;

/// How the LED should flash, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashMode {
    /// Steady illumination.
    #[default]
    None,
    /// Software-requested timed blink using `flash_on_ms` / `flash_off_ms`.
    Timed,
    /// Hardware-driven flash (attention light only).
    Hardware,
}

/// Who decided the brightness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// User-set brightness.
    #[default]
    User,
    /// Ambient light sensor.
    Sensor,
    /// Low-persistence display mode; brightness is overridden while active.
    LowPersistence,
}

/// State requested for one logical light.
///
/// Immutable value type: each update replaces the previous state wholesale,
/// there is no per-field mutation of a stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightState {
    /// 24-bit RGB packed as `0x00RRGGBB`; the top byte is ignored.
    pub color: u32,
    pub flash_mode: FlashMode,
    /// Blink on-duration in milliseconds; meaningful only for [`FlashMode::Timed`].
    pub flash_on_ms: u32,
    /// Blink off-duration in milliseconds; meaningful only for [`FlashMode::Timed`].
    pub flash_off_ms: u32,
    pub brightness_mode: BrightnessMode,
}

impl LightState {
    /// Steady, user-mode state with the given color.
    pub fn steady(color: u32) -> Self {
        LightState {
            color,
            ..Default::default()
        }
    }

    /// Timed-blink state with the given color and on/off durations.
    pub fn timed(color: u32, on_ms: u32, off_ms: u32) -> Self {
        LightState {
            color,
            flash_mode: FlashMode::Timed,
            flash_on_ms: on_ms,
            flash_off_ms: off_ms,
            ..Default::default()
        }
    }
}

/// The four independently addressable logical lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightId {
    Backlight,
    Battery,
    Notifications,
    Attention,
}

impl LightId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightId::Backlight => "backlight",
            LightId::Battery => "battery",
            LightId::Notifications => "notifications",
            LightId::Attention => "attention",
        }
    }

    /// All known light IDs, in arbitration-relevant order.
    pub const ALL: [LightId; 4] = [
        LightId::Backlight,
        LightId::Battery,
        LightId::Notifications,
        LightId::Attention,
    ];
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backlight" => Ok(LightId::Backlight),
            "battery" => Ok(LightId::Battery),
            "notifications" | "notification" => Ok(LightId::Notifications),
            "attention" => Ok(LightId::Attention),
            other => Err(format!("unknown light: {other}")),
        }
    }
}

//! Sysfs file targets for the indicator LED, backlight, and display mode.

use std::path::{Path, PathBuf};

/// Indicator LED brightness level.
pub const LED_FILE: &str = "/sys/class/leds/mx-led/brightness";
/// Indicator LED hardware blink flag.
pub const LED_BLINK_FILE: &str = "/sys/class/leds/mx-led/blink";
/// Primary backlight level.
pub const LCD_FILE: &str = "/sys/class/leds/lcd-backlight/brightness";
/// Secondary backlight level, used when the primary does not exist.
pub const LCD_FILE2: &str = "/sys/class/backlight/panel0-backlight/brightness";
/// Display low-persistence mode flag.
pub const PERSISTENCE_FILE: &str = "/sys/class/graphics/fb0/msm_fb_persist_mode";

/// The full set of device-file targets.
///
/// Which backlight path is live depends on the running device, so both are
/// carried and probed at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightPaths {
    pub led: PathBuf,
    pub led_blink: PathBuf,
    pub lcd: PathBuf,
    pub lcd_alt: PathBuf,
    pub persistence: PathBuf,
}

impl Default for LightPaths {
    fn default() -> Self {
        LightPaths {
            led: LED_FILE.into(),
            led_blink: LED_BLINK_FILE.into(),
            lcd: LCD_FILE.into(),
            lcd_alt: LCD_FILE2.into(),
            persistence: PERSISTENCE_FILE.into(),
        }
    }
}

impl LightPaths {
    /// Stock paths re-rooted under `root` (for tests and the CLI override).
    pub fn under_root(root: &Path) -> Self {
        let stock = LightPaths::default();
        let rebase = |p: &Path| {
            let rel = p.strip_prefix("/").unwrap_or(p);
            root.join(rel)
        };
        LightPaths {
            led: rebase(&stock.led),
            led_blink: rebase(&stock.led_blink),
            lcd: rebase(&stock.lcd),
            lcd_alt: rebase(&stock.lcd_alt),
            persistence: rebase(&stock.persistence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_stock_paths() {
        let p = LightPaths::default();
        assert_eq!(p.led, PathBuf::from(LED_FILE));
        assert_eq!(p.lcd_alt, PathBuf::from(LCD_FILE2));
    }

    #[test]
    fn under_root_rebases_all_paths() {
        let p = LightPaths::under_root(Path::new("/tmp/fake"));
        assert_eq!(
            p.led,
            PathBuf::from("/tmp/fake/sys/class/leds/mx-led/brightness")
        );
        assert_eq!(
            p.persistence,
            PathBuf::from("/tmp/fake/sys/class/graphics/fb0/msm_fb_persist_mode")
        );
    }
}

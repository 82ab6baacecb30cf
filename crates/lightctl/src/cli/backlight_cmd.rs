//! `backlight` subcommand — grayscale level convenience for the display.

use std::path::Path;

use super::{LightId, LightState, ModeArg, Result, SetOutput};

pub(super) fn cmd_backlight(
    level: u8,
    mode: ModeArg,
    json: bool,
    sysfs_root: Option<&Path>,
) -> Result<()> {
    // Equal channels: the luma of (N, N, N) is exactly N.
    let l = u32::from(level);
    let state = LightState {
        color: (l << 16) | (l << 8) | l,
        brightness_mode: mode.into(),
        ..Default::default()
    };

    let hal = super::build_hal(sysfs_root);
    let handle = hal.open_id(LightId::Backlight);
    handle.set(&state)?;

    if json {
        let output = SetOutput {
            light: handle.id().to_string(),
            color: super::color::format_color(state.color),
            brightness: level,
            blink: false,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("backlight: level {level}");
    }
    handle.close();
    Ok(())
}

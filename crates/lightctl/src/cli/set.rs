//! `set` subcommand — apply a full state to one logical light.

use std::path::Path;

use lightctl_lib::arbiter::resolve_directive;
use lightctl_lib::LightctlError;

use super::{color, FlashArg, LightState, ModeArg, Result, SetOutput};

#[allow(clippy::too_many_arguments)]
pub(super) fn cmd_set(
    light: &str,
    color_arg: &str,
    flash: FlashArg,
    on_ms: u32,
    off_ms: u32,
    mode: ModeArg,
    json: bool,
    sysfs_root: Option<&Path>,
) -> Result<()> {
    let value = color::parse_color(color_arg).map_err(LightctlError::Color)?;
    let state = LightState {
        color: value,
        flash_mode: flash.into(),
        flash_on_ms: on_ms,
        flash_off_ms: off_ms,
        brightness_mode: mode.into(),
    };

    let hal = super::build_hal(sysfs_root);
    let handle = hal.open(light)?;
    handle.set(&state)?;

    let directive = resolve_directive(&state);
    if json {
        let output = SetOutput {
            light: handle.id().to_string(),
            color: color::format_color(value),
            brightness: directive.brightness,
            blink: directive.blink,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!(
            "{}: {} (brightness {}{})",
            handle.id(),
            color::format_color(value),
            directive.brightness,
            if directive.blink { ", blinking" } else { "" }
        );
    }
    handle.close();
    Ok(())
}

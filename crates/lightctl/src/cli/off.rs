//! `off` subcommand — clear one logical light.

use std::path::Path;

use super::{LightState, Result, SetOutput};

pub(super) fn cmd_off(light: &str, json: bool, sysfs_root: Option<&Path>) -> Result<()> {
    let hal = super::build_hal(sysfs_root);
    let handle = hal.open(light)?;
    handle.set(&LightState::steady(0))?;

    if json {
        let output = SetOutput {
            light: handle.id().to_string(),
            color: super::color::format_color(0),
            brightness: 0,
            blink: false,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}: off", handle.id());
    }
    handle.close();
    Ok(())
}

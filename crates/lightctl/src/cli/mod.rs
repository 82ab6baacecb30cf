//! CLI subcommands — indicator control, backlight level, configuration.

mod backlight_cmd;
mod config_cmd;
mod off;
mod set;

use std::path::Path;

use clap::{Subcommand, ValueEnum};
use serde::Serialize;

pub(super) use lightctl_lib::color;
pub(super) use lightctl_lib::config::Config;
pub(super) use lightctl_lib::error::Result;
pub(super) use lightctl_lib::hal::LightsHal;
pub(super) use lightctl_lib::paths::LightPaths;
pub(super) use lightctl_lib::state::{BrightnessMode, FlashMode, LightId, LightState};
pub(super) use lightctl_lib::sysfs::SysfsBackend;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output: at least PADDING
/// spaces after the longest key, top-level and indented values in one column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{key:<width$}{value}", width = w);
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

// ── Argument enums ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlashArg {
    None,
    Timed,
    Hardware,
}

impl From<FlashArg> for FlashMode {
    fn from(arg: FlashArg) -> Self {
        match arg {
            FlashArg::None => FlashMode::None,
            FlashArg::Timed => FlashMode::Timed,
            FlashArg::Hardware => FlashMode::Hardware,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    User,
    Sensor,
    LowPersistence,
}

impl From<ModeArg> for BrightnessMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::User => BrightnessMode::User,
            ModeArg::Sensor => BrightnessMode::Sensor,
            ModeArg::LowPersistence => BrightnessMode::LowPersistence,
        }
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct SetOutput {
    pub light: String,
    pub color: String,
    pub brightness: u8,
    pub blink: bool,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
}

#[derive(Subcommand)]
pub enum Command {
    /// Set a light's state
    Set {
        /// Light name (backlight, battery, notifications, attention)
        light: String,
        /// Color: a name (red, green, ...) or #RRGGBB
        color: String,
        /// Flash mode
        #[arg(long, value_enum, default_value = "none")]
        flash: FlashArg,
        /// Flash on-duration in milliseconds
        #[arg(long, default_value_t = 0)]
        on_ms: u32,
        /// Flash off-duration in milliseconds
        #[arg(long, default_value_t = 0)]
        off_ms: u32,
        /// Brightness mode
        #[arg(long, value_enum, default_value = "user")]
        mode: ModeArg,
    },

    /// Set the display backlight to a grayscale level
    Backlight {
        /// Brightness level (0-255)
        level: u8,
        /// Brightness mode
        #[arg(long, value_enum, default_value = "user")]
        mode: ModeArg,
    },

    /// Turn a light off
    Off {
        /// Light name (backlight, battery, notifications, attention)
        light: String,
    },

    /// Show current configuration and file paths
    Config,
}

/// One HAL instance per invocation, against the real device files unless a
/// test root override is given.
pub(super) fn build_hal(sysfs_root: Option<&Path>) -> LightsHal<SysfsBackend> {
    let config = Config::load();
    let paths = match sysfs_root {
        Some(root) => LightPaths::under_root(root),
        None => LightPaths::default(),
    };
    LightsHal::new(SysfsBackend::new(), paths, config)
}

pub fn run(cmd: Command, json: bool, sysfs_root: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Set {
            light,
            color,
            flash,
            on_ms,
            off_ms,
            mode,
        } => set::cmd_set(&light, &color, flash, on_ms, off_ms, mode, json, sysfs_root),
        Command::Backlight { level, mode } => {
            backlight_cmd::cmd_backlight(level, mode, json, sysfs_root)
        }
        Command::Off { light } => off::cmd_off(&light, json, sysfs_root),
        Command::Config => config_cmd::cmd_config(json),
    }
}



#[cfg(test)]
mod json_output_tests {
    use super::*;

    #[test]
    fn set_output_serializes_all_fields() {
        let output = SetOutput {
            light: "notifications".into(),
            color: "#00FF00".into(),
            brightness: 149,
            blink: true,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(&output).unwrap()).unwrap();
        assert_eq!(parsed["light"], "notifications");
        assert_eq!(parsed["color"], "#00FF00");
        assert_eq!(parsed["brightness"], 149);
        assert_eq!(parsed["blink"], true);
    }

    #[test]
    fn config_output_missing_path_is_null() {
        let output = ConfigOutput {
            config_file: None,
            config_file_exists: false,
            settings: Config::default(),
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(&output).unwrap()).unwrap();
        assert!(parsed["config_file"].is_null());
        assert_eq!(parsed["config_file_exists"], false);
        assert_eq!(parsed["settings"]["extended_backlight"], false);
        assert_eq!(parsed["settings"]["max_brightness"], 255);
    }
}

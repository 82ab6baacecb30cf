//! `config` subcommand — show current configuration and file paths.

use super::{kv, kv_indent, kv_width, Config, ConfigOutput, Result};

pub(super) fn cmd_config(json: bool) -> Result<()> {
    let (config, warnings) = Config::load_with_warnings();
    for w in &warnings {
        log::warn!("{w}");
    }
    let config_path = Config::path();
    let config_exists = config_path.as_ref().map(|p| p.exists()).unwrap_or(false);

    if json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    let w = kv_width(
        &["Config file:"],
        &["extended_backlight:", "max_brightness:"],
    );

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("extended_backlight:", config.extended_backlight, w);
    kv_indent("max_brightness:", config.max_brightness, w);
    Ok(())
}

//! Integration tests for the `lightctl` binary.
//!
//! Functional tests run against a fake sysfs tree in a tempdir via the
//! hidden `--sysfs-root` override; the binary then reads and writes real
//! files the same way it would on device.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("lightctl")
}

/// Create the stock device nodes under `root`, all initialized to "0\n".
fn fake_sysfs(root: &Path) {
    for rel in [
        "sys/class/leds/mx-led/brightness",
        "sys/class/leds/mx-led/blink",
        "sys/class/leds/lcd-backlight/brightness",
        "sys/class/backlight/panel0-backlight/brightness",
        "sys/class/graphics/fb0/msm_fb_persist_mode",
    ] {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "0\n").unwrap();
    }
}

fn node(root: &Path, rel: &str) -> String {
    std::fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lightctl"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_config_json_produces_valid_json() {
    let output = cli()
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(
        json["settings"].is_object(),
        "JSON output should contain 'settings' object"
    );
    assert!(
        json["config_file"].is_string() || json["config_file"].is_null(),
        "config_file should be string or null"
    );
}

// ── Functional tests against a fake sysfs tree ──

#[test]
fn set_notification_writes_luma_to_led_node() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["set", "notifications", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains("149"));

    assert!(node(dir.path(), "sys/class/leds/mx-led/brightness").starts_with("149\n"));
}

#[test]
fn set_timed_flash_writes_blink_flag() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args([
            "set",
            "notifications",
            "#FF0000",
            "--flash",
            "timed",
            "--on-ms",
            "500",
            "--off-ms",
            "500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("blinking"));

    assert!(node(dir.path(), "sys/class/leds/mx-led/blink").starts_with("1\n"));
}

#[test]
fn off_clears_the_led() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());
    let root = dir.path().to_str().unwrap();

    cli()
        .args(["--sysfs-root", root])
        .args(["set", "notifications", "white"])
        .assert()
        .success();
    cli()
        .args(["--sysfs-root", root])
        .args(["off", "notifications"])
        .assert()
        .success();

    assert!(node(dir.path(), "sys/class/leds/mx-led/brightness").starts_with("0\n"));
}

#[test]
fn backlight_level_reaches_primary_lcd_node() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["backlight", "128"])
        .assert()
        .success();

    assert!(node(dir.path(), "sys/class/leds/lcd-backlight/brightness").starts_with("128\n"));
}

#[test]
fn backlight_falls_back_to_secondary_node() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());
    std::fs::remove_file(dir.path().join("sys/class/leds/lcd-backlight/brightness")).unwrap();

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["backlight", "200"])
        .assert()
        .success();

    assert!(
        node(dir.path(), "sys/class/backlight/panel0-backlight/brightness").starts_with("200\n")
    );
}

#[test]
fn set_json_reports_resolved_directive() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    let output = cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["--json", "set", "battery", "blue"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["light"], "battery");
    assert_eq!(json["color"], "#0000FF");
    assert_eq!(json["brightness"], 28);
    assert_eq!(json["blink"], false);
}

// ── Error paths ──

#[test]
fn unknown_light_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["set", "speaker", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown light"));
}

#[test]
fn invalid_color_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["set", "battery", "#GGGGGG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("color"));
}

#[test]
fn backlight_with_no_lcd_nodes_fails() {
    let dir = tempfile::tempdir().unwrap();
    fake_sysfs(dir.path());
    std::fs::remove_file(dir.path().join("sys/class/leds/lcd-backlight/brightness")).unwrap();
    std::fs::remove_file(
        dir.path()
            .join("sys/class/backlight/panel0-backlight/brightness"),
    )
    .unwrap();

    cli()
        .args(["--sysfs-root", dir.path().to_str().unwrap()])
        .args(["backlight", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

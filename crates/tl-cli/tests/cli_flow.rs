//! End-to-end tests driving the `tl` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn tl_binary() -> String {
    env!("CARGO_BIN_EXE_tl").to_string()
}

/// Run `tl` with an isolated home so no user config leaks in.
fn tl(home: &Path, args: &[&str]) -> Output {
    Command::new(tl_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("TL_STYLE")
        .args(args)
        .output()
        .expect("failed to run tl")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tl should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_shift_clamps_to_end_of_february() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["shift", "2000-03-31 03:45:00", "1 month", "--before"]);
    assert_eq!(stdout(&out), "2000-02-29 03:45:00\n");

    let out = tl(temp.path(), &["shift", "2000-01-31T03:45:00", "1mn"]);
    assert_eq!(stdout(&out), "2000-02-29 03:45:00\n");
}

#[test]
fn test_format_styles() {
    let temp = TempDir::new().unwrap();
    let input = "1 hour, 3 minutes, 4 seconds";
    for (style, expected) in [
        ("long", "1 hour, 3 minutes, 4 seconds\n"),
        ("short", "1hr 3min\n"),
        ("micro", "1h\n"),
    ] {
        let out = tl(temp.path(), &["format", input, "--style", style]);
        assert_eq!(stdout(&out), expected, "style {style}");
    }
}

#[test]
fn test_format_rejects_unknown_style() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["format", "1h", "--style", "verbose"]);
    assert!(!out.status.success());
}

#[test]
fn test_config_file_sets_default_style() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "style = \"micro\"\n").unwrap();

    let out = tl(
        temp.path(),
        &["--config", config.to_str().unwrap(), "format", "2 weeks 3 days"],
    );
    assert_eq!(stdout(&out), "2w\n");
}

#[test]
fn test_env_overrides_config() {
    let temp = TempDir::new().unwrap();
    let out = Command::new(tl_binary())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("TL_STYLE", "short")
        .args(["between", "2026-01-01", "2026-01-15 12:00:00"])
        .output()
        .unwrap();
    assert_eq!(stdout(&out), "2wk 12hr\n");
}

#[test]
fn test_wall_round_trip() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["wall", "13:00"]);
    assert_eq!(stdout(&out), "1:00:00 PM\n");

    let out = tl(temp.path(), &["wall", "12:00 PM", "--twenty-four-hour", "--no-seconds"]);
    assert_eq!(stdout(&out), "12:00\n");

    let out = tl(temp.path(), &["wall", "6:30 am", "--on", "2021-07-04"]);
    assert_eq!(stdout(&out), "2021-07-04 06:30:00\n");
}

#[test]
fn test_until_past_fails() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["until", "2000-01-01"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("in the past"), "stderr: {stderr}");
}

#[test]
fn test_since_past_succeeds() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["since", "2000-01-01", "--style", "micro"]);
    assert!(stdout(&out).ends_with("w\n"));
}

#[test]
fn test_between_day_keywords() {
    let temp = TempDir::new().unwrap();
    let out = tl(temp.path(), &["between", "yesterday", "tomorrow"]);
    assert_eq!(stdout(&out), "2 days\n");
}

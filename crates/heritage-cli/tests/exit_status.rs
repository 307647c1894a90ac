//! Process-level tests: the catalog failures map to distinct exit statuses.
//!
//! Each run gets its own HOME and XDG dirs so the default config and the log
//! file land in a scratch directory.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_heritage"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_STATE_HOME", dir.join("state"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run heritage binary")
}

#[test]
fn missing_catalog_exits_with_not_found_status() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("catalog file not found"), "stderr: {}", stderr);
    assert!(stderr.contains("heritage_sites.json"), "stderr: {}", stderr);
}

#[test]
fn malformed_catalog_exits_with_parse_status() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("heritage_sites.json"), "[{\"name\": }]").unwrap();
    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed"), "stderr: {}", stderr);
    assert!(stderr.contains("line 1 column"), "stderr: {}", stderr);
}

#[test]
fn records_without_images_complete_with_success() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("heritage_sites.json"),
        r#"[
            {"name": "Hampi", "location": "Karnataka", "precautions": ["Water", "Hat"]},
            {"name": "Petra", "image": "missing/petra.jpg"}
        ]"#,
    )
    .unwrap();
    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("🏛️ Hampi — Karnataka"));
    assert!(stdout.contains("  Precautions: Water, Hat"));
    assert!(stdout.contains("No image path for Hampi"));
    assert!(stdout.contains("Image not found"));
    assert!(stdout.contains("Displayed 0 of 2 images"));
}

#[test]
fn default_config_is_written_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("heritage_sites.json"), "[]").unwrap();
    let out = run_in(dir.path());

    assert_eq!(out.status.code(), Some(0));
    let cfg = fs::read_to_string(dir.path().join("config/heritage/config.toml")).unwrap();
    assert!(cfg.contains("catalog_path = \"heritage_sites.json\""));
    assert!(cfg.contains("image_dir = \"images\""));
}

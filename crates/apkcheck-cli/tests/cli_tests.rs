//! Integration tests for apkcheck-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn apkcheck_cmd() -> Command {
    cargo_bin_cmd!("apkcheck")
}

fn write_apk(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("failed to create fixture file");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for entry in entries {
        writer.start_file(*entry, options).unwrap();
        writer.write_all(b"fixture contents").unwrap();
    }
    writer.finish().unwrap();
    path
}

fn complete_apk(dir: &Path) -> PathBuf {
    write_apk(
        dir,
        "complete.apk",
        &[
            "AndroidManifest.xml",
            "classes.dex",
            "assets/index.html",
            "res/drawable/icon.png",
        ],
    )
}

fn divider_count(stdout: &[u8]) -> usize {
    let divider = "-".repeat(50);
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| *line == divider)
        .count()
}

#[test]
fn test_version_flag() {
    apkcheck_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apkcheck"));
}

#[test]
fn test_help_flag() {
    apkcheck_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

/// With no arguments the default candidate list is checked, every path
/// is reported, and the process still exits 0.
#[test]
fn test_default_candidates_all_reported() {
    let temp = TempDir::new().unwrap();

    let output = apkcheck_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "🔍 Verifying APK: dist/public/zivora-installable.apk",
        ))
        .stdout(predicate::str::contains(
            "🔍 Verifying APK: dist/public/zivora-production.apk",
        ))
        .stdout(predicate::str::contains(
            "🔍 Verifying APK: dist/public/zivora-debug.apk",
        ))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.matches("❌ APK file not found").count(), 3);
    assert_eq!(divider_count(&output), 3);
}

#[test]
fn test_complete_apk_report() {
    let temp = TempDir::new().unwrap();
    let apk = complete_apk(temp.path());

    apkcheck_cmd()
        .arg(&apk)
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 File size: 0.0 MB"))
        .stdout(predicate::str::contains("📋 Total files in APK: 4"))
        .stdout(predicate::str::contains("✅ Required files present: 2/2"))
        .stdout(predicate::str::contains("📁 Has assets/: True"))
        .stdout(predicate::str::contains("📁 Has res/: True"))
        .stdout(predicate::str::contains("📁 Has META-INF/: False"))
        .stdout(predicate::str::contains("📄 First 10 files:"))
        .stdout(predicate::str::contains("   1. AndroidManifest.xml"))
        .stdout(predicate::str::contains("   4. res/drawable/icon.png"))
        .stdout(predicate::str::contains("Missing files").not());
}

#[test]
fn test_missing_dex_reported() {
    let temp = TempDir::new().unwrap();
    let apk = write_apk(
        temp.path(),
        "nodex.apk",
        &["AndroidManifest.xml", "assets/app.js"],
    );

    apkcheck_cmd()
        .arg(&apk)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Required files present: 1/2"))
        .stdout(predicate::str::contains("❌ Missing files: classes.dex"));
}

#[test]
fn test_non_zip_file_reports_format_error_after_size() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fake.apk");
    std::fs::write(&path, "just some text").unwrap();

    apkcheck_cmd()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 File size: 0.0 MB"))
        .stdout(predicate::str::contains("❌ Invalid ZIP/APK format"))
        .stdout(predicate::str::contains("Total files").not());
}

#[test]
fn test_preview_caps_at_ten_lines() {
    let temp = TempDir::new().unwrap();
    let entries: Vec<String> = (0..14).map(|i| format!("res/raw/blob{i:02}.bin")).collect();
    let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
    let apk = write_apk(temp.path(), "large.apk", &refs);

    let output = apkcheck_cmd()
        .arg(&apk)
        .assert()
        .success()
        .stdout(predicate::str::contains("📄 First 10 files:"))
        .stdout(predicate::str::contains("   10. res/raw/blob09.bin"))
        .stdout(predicate::str::contains("   11. ").not())
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let preview_lines = text.lines().filter(|l| l.starts_with("   ")).count();
    assert_eq!(preview_lines, 10);
}

#[test]
fn test_preview_flag_changes_depth() {
    let temp = TempDir::new().unwrap();
    let apk = complete_apk(temp.path());

    apkcheck_cmd()
        .arg("--preview")
        .arg("2")
        .arg(&apk)
        .assert()
        .success()
        .stdout(predicate::str::contains("📄 First 2 files:"))
        .stdout(predicate::str::contains("   2. classes.dex"))
        .stdout(predicate::str::contains("   3. ").not());
}

/// Order of the supplied paths is preserved and a failure on one path
/// never stops the next one from being inspected.
#[test]
fn test_all_paths_attempted_in_order() {
    let temp = TempDir::new().unwrap();
    let apk = complete_apk(temp.path());
    let missing = temp.path().join("gone.apk");

    let output = apkcheck_cmd()
        .arg(&missing)
        .arg(&apk)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let missing_pos = text.find("APK file not found").unwrap();
    let analyzed_pos = text.find("Total files in APK").unwrap();
    assert!(missing_pos < analyzed_pos);
    assert_eq!(divider_count(&output), 2);
}

#[test]
fn test_report_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let apk = complete_apk(temp.path());

    let first = apkcheck_cmd()
        .arg(&apk)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = apkcheck_cmd()
        .arg(&apk)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
}

#[test]
fn test_json_output_complete_apk() {
    let temp = TempDir::new().unwrap();
    let apk = complete_apk(temp.path());

    let output = apkcheck_cmd()
        .arg("--json")
        .arg(&apk)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "inspect");
    assert_eq!(json["data"]["total_entries"], 4);
    assert_eq!(json["data"]["required_present"], 2);
    assert_eq!(json["data"]["required_total"], 2);
    assert_eq!(json["data"]["missing_files"], serde_json::json!([]));
    assert_eq!(json["data"]["directories"][2]["prefix"], "META-INF/");
    assert_eq!(json["data"]["directories"][2]["present"], false);
    assert_eq!(json["data"]["first_entries"][0], "AndroidManifest.xml");
}

#[test]
fn test_json_output_missing_path() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("gone.apk");

    let output = apkcheck_cmd()
        .arg("--json")
        .arg(&missing)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("APK file not found")
    );
}

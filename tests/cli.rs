use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".pulse-dashboard").join("config.json")
}

const BINARY_NAME: &str = "pulse-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Locations command lists every location and marks the default.
fn locations_lists_fixed_set() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("locations")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Dhaka (default)"))
        .stdout(contains("London"))
        .stdout(contains("New York"))
        .stdout(contains("Tokyo"));
}

#[test]
/// Unknown locations are rejected before any request is made.
fn weather_rejects_unknown_location() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["weather", "--location", "Atlantis"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Unknown location: Atlantis"));
}

#[test]
#[ignore] // This currently involves a network call to the forecast service.
fn weather_prints_forecast_summary() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["weather", "--location", "London"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("London - "));
}

#[test]
/// Setting a default location writes the config file.
fn set_default_location_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-default-location", "--location", "tokyo"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Default location saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"default_location\": \"Tokyo\""));

    // The saved default is picked up by later commands
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("locations")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Tokyo (default)"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{\"default_location\": \"London\"}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Reset succeeds when there is nothing to delete.
fn reset_without_config_succeeds() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success();
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's configuration: HOME points inside
/// the test directory.
pub fn fl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("fuellog");
    cmd.env("HOME", home).env("APPDATA", home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique, empty directory inside the system temp dir.
pub fn setup_test_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fuellog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path.to_string_lossy().to_string()
}

/// Data directory inside a test directory.
pub fn data_dir(root: &str) -> String {
    PathBuf::from(root).join("data").to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a file in `dir` and return its path.
pub fn write_file(dir: &str, name: &str, content: &str) -> String {
    let path = PathBuf::from(dir).join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Initialize the logs and add three refills and two readings via the CLI.
pub fn init_with_data(root: &str) -> String {
    let data = data_dir(root);

    fl(root)
        .args(["--data-dir", &data, "--test", "init"])
        .assert()
        .success();

    for (date, station, price, qty, odo) in [
        ("2026-01-03", "PTT", "40", "35", "1000"),
        ("2026-01-12", "Shell", "41", "30", "1400"),
        ("2026-02-01", "Bangchak", "40", "28", "1800"),
    ] {
        fl(root)
            .args([
                "--data-dir", &data, "add", "refill", "--date", date, "--station", station,
                "--fuel", "E20", "--price", price, "--qty", qty, "--odometer", odo,
            ])
            .assert()
            .success();
    }

    for (date, economy, odo, mode) in [
        ("2026-01-10", "14.2", "1200", "city"),
        ("2026-01-15", "16.2", "1500", "H"),
    ] {
        fl(root)
            .args([
                "--data-dir", &data, "add", "consumption", "--date", date, "--economy", economy,
                "--odometer", odo, "--mode", mode,
            ])
            .assert()
            .success();
    }

    data
}

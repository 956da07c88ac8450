use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes `contents` as `services-config.toml` in a fresh temp dir.
/// Keep the returned dir alive for as long as the file is needed.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("flexq_test_")
        .tempdir()
        .expect("failed to create temp dir");
    let path = dir.path().join("services-config.toml");
    fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}

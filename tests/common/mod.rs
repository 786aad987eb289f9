//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub fn sample_name() -> &'static str {
    "TestUser"
}

pub fn sample_names() -> Vec<&'static str> {
    vec!["Alice", "Bob", "Charlie"]
}

/// Writes `content` to a temporary `.toml` file that lives as long as the handle.
pub fn write_config(content: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

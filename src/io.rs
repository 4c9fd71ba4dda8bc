//! File-level collaborators: the name list, the config file, and the
//! `simulation.json` export. None of this is needed to run the simulation
//! in memory.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::ArenaConfig;
use crate::model::SimulationResult;

pub const DEFAULT_TRIBUTE_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Evelyn", "Frank", "George", "Hannah",
];

/// Read one name per line, trimmed, skipping blanks and repeats.
///
/// Falls back to [`DEFAULT_TRIBUTE_NAMES`] when the file does not exist or
/// holds no names.
pub fn load_names(path: &Path) -> io::Result<Vec<String>> {
    if !path.is_file() {
        tracing::info!(path = %path.display(), "no names file; using the default roster");
        return Ok(default_names());
    }
    let names = parse_names(&fs::read_to_string(path)?);
    if names.is_empty() {
        tracing::warn!(path = %path.display(), "names file is empty; using the default roster");
        return Ok(default_names());
    }
    Ok(names)
}

pub fn parse_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if names.iter().any(|n| n == line) {
            tracing::warn!("duplicate tribute name {line:?} in names file; skipping");
            continue;
        }
        names.push(line.to_string());
    }
    names
}

pub fn default_names() -> Vec<String> {
    DEFAULT_TRIBUTE_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Load an arena config file.
///
/// A missing file yields the defaults. A file that is not JSON at all is
/// an error; individual bad fields are recovered by [`ArenaConfig::from_value`].
pub fn load_config(path: &Path) -> io::Result<ArenaConfig> {
    if !path.is_file() {
        tracing::info!(path = %path.display(), "no config file; using defaults");
        return Ok(ArenaConfig::default());
    }
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(ArenaConfig::from_value(&value))
}

/// Write the result as pretty-printed JSON, creating parent directories.
pub fn export_simulation(result: &SimulationResult, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

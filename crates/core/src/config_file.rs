//! Loader for the flat `key = value` configuration file.
//!
//! ```text
//! # comment
//! GREETING = hi   # trailing comment
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;
use crate::file_handling::read_file;

/// Marker starting a comment that runs to the end of the line
pub const COMMENT_MARKER: char = '#';

/// Configured keys and values, in the order each key was first seen.
pub type ConfigMap = IndexMap<String, String>;

/// Parses configuration text.
///
/// Comments are stripped, key and value are trimmed and lines with an empty
/// key are skipped. A repeated key keeps its first position but takes the
/// last value.
pub fn parse_config(text: &str) -> ConfigMap {
    let mut keys = ConfigMap::new();

    for line in text.lines() {
        let line = match line.split_once(COMMENT_MARKER) {
            Some((content, _)) => content,
            None => line,
        }
        .trim();

        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        keys.insert(key.to_string(), value.trim().to_string());
    }

    keys
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
#[track_caller]
pub fn load_config(path: &Path) -> Result<ConfigMap> {
    let text = read_file("config file", path)?;
    let keys = parse_config(&text);
    debug!("Loaded {} key(s) from `{}`", keys.len(), path.display());

    Ok(keys)
}

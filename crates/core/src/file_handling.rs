//! File handling for templates and generated outputs.
//!
//! Every helper here is `#[track_caller]`: an error carries the location of
//! the operation step that called the helper, not of the helper itself.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Reads a whole text file with its line breaks normalized to `\n`.
#[track_caller]
pub fn read_file(file_description: &str, path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(normalize_newlines(&contents)),
        Err(e) => Err(Error::io_error(file_description, path, e)),
    }
}

/// Turns `\r\n` and lone `\r` line breaks into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Creates or truncates `path` and writes `contents` to it. Parent
/// directories must already exist.
#[track_caller]
pub fn write_file(file_description: &str, path: &Path, contents: &str) -> Result<()> {
    match fs::write(path, contents) {
        Ok(()) => Ok(()),
        Err(e) => Err(Error::io_error(file_description, path, e)),
    }
}

/// Removes the file at `path` if anything exists there.
///
/// Returns whether a file was removed. A missing path is not an error.
#[track_caller]
pub fn remove_file_if_exists(file_description: &str, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) => Err(Error::io_error(file_description, path, e)),
    }
}

/// Lists the template entries of the template directory, sorted by file
/// name. Other entries are never opened.
#[track_caller]
pub fn list_templates(settings: &Settings) -> Result<Vec<PathBuf>> {
    let dir = settings.template_dir_path();
    let dir = dir.as_path();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => return Err(Error::io_error("template directory", dir, e)),
    };

    let mut templates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Err(Error::io_error("template directory", dir, e)),
        };

        if settings.is_template(&entry.file_name().to_string_lossy()) {
            templates.push(entry.path());
        } else {
            debug!("Skipping non-template entry `{}`", entry.path().display());
        }
    }

    Ok(templates.into_iter().sorted().collect())
}

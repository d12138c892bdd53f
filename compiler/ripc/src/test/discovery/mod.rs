//! Fixture file discovery.
//!
//! Fixture files are `*.rb` files whose stem starts with `tokenize` or
//! `parse`; any other `.rb` file is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Mode;

/// A discovered fixture file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureFile {
    pub path: PathBuf,
    pub mode: Mode,
}

impl FixtureFile {
    /// `None` unless `path` is a fixture file.
    pub fn new(path: PathBuf) -> Option<Self> {
        if !path.extension().is_some_and(|e| e == "rb") {
            return None;
        }
        let mode = Mode::from_path(&path)?;
        Some(FixtureFile { path, mode })
    }
}

/// Discover all fixture files in a directory tree, sorted by path.
pub fn discover_fixtures(root: &Path) -> Vec<FixtureFile> {
    let mut files = Vec::new();
    discover_recursive(root, &mut files);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<FixtureFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
            if path.is_dir() && name == "target" {
                continue;
            }
        }

        if path.is_dir() {
            discover_recursive(&path, files);
        } else if let Some(file) = FixtureFile::new(path) {
            files.push(file);
        }
    }
}

/// Fixture files at `path`: the file itself, or everything below a
/// directory.
pub fn discover_fixtures_in(path: &Path) -> Vec<FixtureFile> {
    if path.is_file() {
        FixtureFile::new(path.to_path_buf()).into_iter().collect()
    } else if path.is_dir() {
        discover_fixtures(path)
    } else {
        vec![]
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Directory listing and prefix bookkeeping used by the walker.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::TreeError;

use super::filter::SkipFilter;

/// Connector for every child except the last one at its level.
pub const BRANCH: &str = "├── ";
/// Connector for the last child at its level.
pub const LAST_BRANCH: &str = "└── ";
/// Continuation guide below a child that has later siblings.
pub const PIPE_PREFIX: &str = "│   ";
/// Blank continuation below the last child.
pub const SPACE_PREFIX: &str = "    ";

/// A visible child of a listed directory.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List `dir`, drop skipped names and return the rest sorted by name.
///
/// Any listing failure, including one on an individual entry, is returned as
/// `TreeError::Listing` for `dir`.
pub fn read_sorted_entries(dir: &Path, filter: &SkipFilter) -> Result<Vec<Entry>, TreeError> {
    let listing_error = |source| TreeError::Listing {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let name = entry.file_name();
        if filter.is_skipped(&name) {
            continue;
        }
        let path = entry.path();
        // Follows symlinks: a link to a directory is walked like the directory itself.
        let is_dir = path.is_dir();
        entries.push(Entry { name, path, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Connector drawn in front of a child's name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for a child's own children.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, SPACE_PREFIX)
    } else {
        format!("{}{}", current_prefix, PIPE_PREFIX)
    }
}

/// Name shown on the header line: the last component of the absolute,
/// lexically normalized root path.
///
/// `.` resolves to the current directory's name and `..` components are folded
/// away. The filesystem root has no final component and yields an empty string.
pub fn display_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

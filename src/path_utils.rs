//! Cross-platform path utilities
//!
//! Glob matching always sees forward slashes, and paths reported to the
//! caller are absolute.

use std::path::{Path, PathBuf};

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Forward-slash form of `path` relative to `root`.
///
/// Paths outside `root` are returned whole.
pub fn relative_to(path: &Path, root: &Path) -> String {
    to_forward_slashes(path.strip_prefix(root).unwrap_or(path))
}

/// Final component of an archive entry name, whichever separator the
/// archiver used. Returns `None` for names ending in a separator.
pub fn entry_base_name(entry_name: &str) -> Option<&str> {
    entry_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
}

/// Absolute form of `path`, resolving symlinks when the path exists.
pub fn absolute(path: &Path) -> PathBuf {
    dunce::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

//! Candidate discovery under a root directory
//!
//! The scanner walks the whole tree below the root (following symlinks) and
//! yields every regular file whose path matches the include glob and no
//! exclusion glob. Each glob is tried against both the root-relative path
//! and the full path, so `**/target/*.jar` and `/srv/apps/**/target/*.jar`
//! select the same files under `/srv/apps`. Entries that cannot be read mid-walk
//! (unreadable directories, broken symlinks, symlink loops) are logged and
//! skipped; only an unreadable root fails the scan.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::exclusion::ExclusionMatcher;
use super::glob::CompiledGlob;
use crate::error::{Result, root_inaccessible, root_not_absolute};

/// A file believed to be a bundle, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the scan, starting at 0
    pub index: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CandidateScanner {
    root: PathBuf,
    include: CompiledGlob,
    exclusions: ExclusionMatcher,
}

impl CandidateScanner {
    /// Rejects a relative root before touching the file system.
    pub fn new(root: &Path, include: &str, exclusions: ExclusionMatcher) -> Result<Self> {
        if !root.is_absolute() {
            return Err(root_not_absolute(root));
        }
        Ok(Self {
            root: root.to_path_buf(),
            include: CompiledGlob::compile(include)?,
            exclusions,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh walk.
    ///
    /// Every call is independent of earlier ones. Siblings are visited in
    /// file name order, so the sequence is stable between runs.
    pub fn scan(&self) -> Result<impl Iterator<Item = Candidate> + '_> {
        std::fs::read_dir(&self.root).map_err(|e| root_inaccessible(&self.root, e))?;

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        Ok(walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    let path = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    warn!(path = %path, error = %err, "Skipping unreadable path");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.accepts(entry.path()))
            .enumerate()
            .map(|(index, entry)| {
                debug!(path = %entry.path().display(), "Found candidate");
                Candidate {
                    index,
                    path: entry.into_path(),
                }
            }))
    }

    /// Globs may be written relative to the root or as absolute paths; a
    /// match on either form counts.
    fn accepts(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let included = self.include.is_match(relative) || self.include.is_match(path);
        included && !self.exclusions.excludes(relative) && !self.exclusions.excludes(path)
    }
}

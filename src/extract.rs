//! Nested jar extraction
//!
//! The bundle is read once, entry by entry in archive order. Sizes come from
//! the central directory, so entries written by streaming tools (`jar`,
//! `ZipOutputStream`) with a trailing data descriptor are read like any
//! other. Nothing is buffered beyond the entry being copied. Accepted entries land
//! in the destination under their base name, so two nested jars with the
//! same file name in different directories overwrite each other (last one
//! wins).

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::{Result, entry_write_failed, extraction_failed};
use crate::path_utils;

/// Directories of a fat jar that hold nested jars
pub const NESTED_ARCHIVE_PREFIXES: &[&str] = &["BOOT-INF/", "WEB-INF/"];

/// Suffix of nested jars, compared case-insensitively
pub const NESTED_ARCHIVE_SUFFIX: &str = ".jar";

/// What one extraction produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub count: usize,
    pub dest_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct NestedArchiveExtractor {
    prefixes: Vec<String>,
    suffix: String,
}

impl Default for NestedArchiveExtractor {
    fn default() -> Self {
        Self {
            prefixes: NESTED_ARCHIVE_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            suffix: NESTED_ARCHIVE_SUFFIX.to_string(),
        }
    }
}

impl NestedArchiveExtractor {
    /// Whether the entry named `entry_name` is a nested archive
    pub fn accepts(&self, entry_name: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| entry_name.starts_with(prefix.as_str()))
            && entry_name
                .to_ascii_lowercase()
                .ends_with(&self.suffix.to_ascii_lowercase())
    }

    /// Copy every nested archive of `bundle` into `dest_dir`.
    ///
    /// Visits every entry in archive order. The first entry that cannot be written
    /// aborts the extraction; files written before it stay in place.
    pub fn extract(&self, bundle: &Path, dest_dir: &Path) -> Result<ExtractionResult> {
        let file = File::open(bundle).map_err(|e| extraction_failed(bundle, e))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| extraction_failed(bundle, e))?;
        let mut count = 0;

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| extraction_failed(bundle, e))?;
            let entry_name = entry.name().to_string();
            if entry.is_dir() || !self.accepts(&entry_name) {
                continue;
            }
            let Some(file_name) = path_utils::entry_base_name(&entry_name) else {
                continue;
            };

            let target = dest_dir.join(file_name);
            write_entry(&mut entry, &target)
                .map_err(|e| entry_write_failed(&entry_name, &target, e))?;
            debug!(entry = %entry_name, target = %target.display(), "Extracted nested jar");
            count += 1;
        }

        info!(
            "Extracted {} files from fat JAR '{}' to '{}'",
            count,
            bundle.display(),
            dest_dir.display()
        );
        Ok(ExtractionResult {
            count,
            dest_dir: dest_dir.to_path_buf(),
        })
    }
}

fn write_entry(entry: &mut impl io::Read, target: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(target)?);
    io::copy(entry, &mut out)?;
    out.flush()
}

//! Fat jar detection
//!
//! A candidate qualifies when its manifest carries a non-blank `Start-Class`.
//! Only the central directory and the manifest entry are read.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use super::manifest::{MANIFEST_PATH, Manifest, START_CLASS_ATTRIBUTE};
use super::marker::BundleMarker;
use crate::error::{Result, archive_open_failed, manifest_read_failed};

/// Outcome of inspecting one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Qualified(BundleMarker),
    /// A readable archive without an entry point; not an error
    NotQualified,
}

#[derive(Debug, Clone)]
pub struct BundleClassifier {
    attribute: String,
}

impl Default for BundleClassifier {
    fn default() -> Self {
        Self::new(START_CLASS_ATTRIBUTE)
    }
}

impl BundleClassifier {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    /// Inspect the archive at `path`.
    ///
    /// A missing manifest, attribute or value yields
    /// [`Classification::NotQualified`]. A file that cannot be opened as a
    /// zip archive, or whose manifest cannot be read, is an error.
    pub fn classify(&self, path: &Path) -> Result<Classification> {
        let file = File::open(path).map_err(|e| archive_open_failed(path, e))?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|e| archive_open_failed(path, e))?;

        let bytes = match archive.by_name(MANIFEST_PATH) {
            Ok(mut entry) => {
                let mut bytes = Vec::new();
                entry
                    .read_to_end(&mut bytes)
                    .map_err(|e| manifest_read_failed(path, e))?;
                bytes
            }
            Err(ZipError::FileNotFound) => return Ok(Classification::NotQualified),
            Err(e) => return Err(manifest_read_failed(path, e)),
        };

        let marker = Manifest::parse(&bytes)
            .main_attribute(&self.attribute)
            .and_then(BundleMarker::new);

        Ok(marker.map_or(Classification::NotQualified, Classification::Qualified))
    }
}

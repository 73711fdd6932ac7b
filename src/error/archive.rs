//! Bundle archive errors

use std::fmt::Display;
use std::path::Path;

use super::FatJarError;

pub fn archive_open_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::ArchiveOpenFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn manifest_read_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::ManifestReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a bundle whose entry stream cannot be read to the end
pub fn extraction_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::ExtractionFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a nested archive that could not be written out
pub fn entry_write_failed(entry: &str, path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::EntryWriteFailed {
        entry: entry.to_string(),
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

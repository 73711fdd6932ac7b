//! Output staging and conversion errors

use std::fmt::Display;
use std::path::Path;

use super::FatJarError;

pub fn invalid_marker(marker: impl Into<String>) -> FatJarError {
    FatJarError::InvalidMarker {
        marker: marker.into(),
    }
}

pub fn staging_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::StagingFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn conversion_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::ConversionFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

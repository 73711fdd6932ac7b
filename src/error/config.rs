//! Configuration errors

use std::fmt::Display;
use std::path::Path;

use super::FatJarError;

pub fn config_not_found(path: &Path) -> FatJarError {
    FatJarError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

pub fn config_read_failed(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

pub fn config_parse_failed(path: &str, reason: impl Display) -> FatJarError {
    FatJarError::ConfigParseFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

pub fn invalid_config(message: impl Into<String>) -> FatJarError {
    FatJarError::InvalidConfig {
        message: message.into(),
    }
}

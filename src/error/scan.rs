//! Candidate scanning errors

use std::fmt::Display;
use std::path::Path;

use super::FatJarError;

/// Creates an error for a `--root` that is not absolute
pub fn root_not_absolute(path: &Path) -> FatJarError {
    FatJarError::RootNotAbsolute {
        path: path.display().to_string(),
    }
}

/// Creates an error for a root directory that cannot be listed
pub fn root_inaccessible(path: &Path, reason: impl Display) -> FatJarError {
    FatJarError::RootInaccessible {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a glob that does not compile
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Display) -> FatJarError {
    FatJarError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}

//! Error types and handling for fatjar
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped into sub-modules by the pipeline stage that raises them:
//! - [`scan`]: Root directory and glob errors
//! - [`archive`]: Opening, classifying and extracting bundles
//! - [`stage`]: Output directory preparation and conversion
//! - [`config`]: Configuration file errors

pub mod archive;
pub mod config;
pub mod scan;
pub mod stage;

pub use archive::{
    archive_open_failed, entry_write_failed, extraction_failed, manifest_read_failed,
};
pub use config::{config_not_found, config_parse_failed, config_read_failed, invalid_config};
pub use scan::{invalid_glob, root_inaccessible, root_not_absolute};
pub use stage::{conversion_failed, invalid_marker, staging_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fatjar operations
#[derive(Error, Diagnostic, Debug)]
pub enum FatJarError {
    // Scan errors
    #[error("Root directory must be absolute: {path}")]
    #[diagnostic(
        code(fatjar::scan::root_not_absolute),
        help("Pass an absolute path to --root or omit it to use the current directory")
    )]
    RootNotAbsolute { path: String },

    #[error("Cannot read root directory {path}: {reason}")]
    #[diagnostic(code(fatjar::scan::root_inaccessible))]
    RootInaccessible { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(fatjar::scan::invalid_glob),
        help("Patterns are matched against paths relative to the root, e.g. '**/*.jar'")
    )]
    InvalidGlob { pattern: String, reason: String },

    // Archive errors
    #[error("Failed to open archive {path}: {reason}")]
    #[diagnostic(code(fatjar::archive::open_failed))]
    ArchiveOpenFailed { path: String, reason: String },

    #[error("Failed to read manifest of {path}: {reason}")]
    #[diagnostic(code(fatjar::archive::manifest_read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to read entries of {path}: {reason}")]
    #[diagnostic(code(fatjar::archive::extraction_failed))]
    ExtractionFailed { path: String, reason: String },

    #[error("Failed to extract entry '{entry}' to {path}: {reason}")]
    #[diagnostic(code(fatjar::archive::entry_write_failed))]
    EntryWriteFailed {
        entry: String,
        path: String,
        reason: String,
    },

    // Staging errors
    #[error("Start class '{marker}' does not yield a usable application name")]
    #[diagnostic(code(fatjar::stage::invalid_marker))]
    InvalidMarker { marker: String },

    #[error("Failed to prepare output directory {path}: {reason}")]
    #[diagnostic(
        code(fatjar::stage::failed),
        help("Check that the output directory is writable")
    )]
    StagingFailed { path: String, reason: String },

    #[error("Failed to convert {path}: {reason}")]
    #[diagnostic(code(fatjar::stage::conversion_failed))]
    ConversionFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(fatjar::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    #[diagnostic(code(fatjar::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(fatjar::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(fatjar::config::invalid))]
    InvalidConfig { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fatjar::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for FatJarError {
    fn from(err: std::io::Error) -> Self {
        FatJarError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FatJarError {
    fn from(err: serde_json::Error) -> Self {
        FatJarError::IoError {
            message: format!("Failed to serialize output: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FatJarError>;

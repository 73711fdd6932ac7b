//! Per-application output directories
//!
//! Layout under the output root:
//!
//! ```text
//! <out>/<app-name>/
//!     start-class.txt   start class, verbatim
//!     lib/              nested jars and the slim jar
//! ```
//!
//! Staging always starts from an empty application directory, so running the
//! pipeline twice leaves only the second run's files behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::{AppName, BundleMarker};
use crate::error::{Result, staging_failed};

/// Name of the file holding the start class
pub const MARKER_FILE_NAME: &str = "start-class.txt";

/// Name of the subdirectory receiving extracted jars
pub const LIB_DIR_NAME: &str = "lib";

/// Directories prepared for one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingLayout {
    pub app_name: AppName,
    pub app_dir: PathBuf,
    pub marker_file: PathBuf,
    pub lib_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputStager {
    out_root: PathBuf,
}

impl OutputStager {
    pub fn new(out_root: impl Into<PathBuf>) -> Self {
        Self {
            out_root: out_root.into(),
        }
    }

    pub fn out_root(&self) -> &Path {
        &self.out_root
    }

    /// Clear and recreate `<out>/<app-name>`, write the marker file, then
    /// create `lib/`.
    ///
    /// Destructive: whatever lives in the application directory is removed
    /// without confirmation.
    pub fn stage(&self, marker: &BundleMarker) -> Result<StagingLayout> {
        let app_name = marker.app_name()?;
        let app_dir = self.out_root.join(app_name.as_str());

        clear_dir(&app_dir)?;

        let marker_file = app_dir.join(MARKER_FILE_NAME);
        fs::write(&marker_file, marker.as_str()).map_err(|e| staging_failed(&marker_file, e))?;

        let lib_dir = app_dir.join(LIB_DIR_NAME);
        fs::create_dir_all(&lib_dir).map_err(|e| staging_failed(&lib_dir, e))?;

        debug!(app = %app_name, dir = %app_dir.display(), "Staged output directory");
        Ok(StagingLayout {
            app_name,
            app_dir,
            marker_file,
            lib_dir,
        })
    }
}

/// Remove `dir` if present and recreate it empty.
///
/// A symlink or file at `dir` is removed itself; its target is left alone.
fn clear_dir(dir: &Path) -> Result<()> {
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(dir).map_err(|e| staging_failed(dir, e))?;
        }
        Ok(_) => fs::remove_file(dir).map_err(|e| staging_failed(dir, e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(staging_failed(dir, e)),
    }
    fs::create_dir_all(dir).map_err(|e| staging_failed(dir, e))
}

//! Conversion of a fat jar into its slim form
//!
//! Runs after the nested jars have been extracted. The pipeline only sees
//! the [`Converter`] trait: any error fails the whole candidate.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Result, conversion_failed};
use crate::extract::NestedArchiveExtractor;

/// Downstream stage invoked once per extracted bundle
pub trait Converter: Send + Sync {
    /// Convert `bundle`, placing any artifact in `lib_dir`.
    ///
    /// Returns the artifact path, if one was written.
    fn convert(&self, bundle: &Path, lib_dir: &Path) -> Result<Option<PathBuf>>;
}

/// Leaves the extracted jars as they are
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConversion;

impl Converter for NoConversion {
    fn convert(&self, _bundle: &Path, _lib_dir: &Path) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Writes `<lib>/<bundle-stem>-slim.jar`: the bundle minus its nested jars.
#[derive(Debug, Default, Clone)]
pub struct SlimJarConverter {
    nested: NestedArchiveExtractor,
}

impl SlimJarConverter {
    pub fn slim_jar_path(bundle: &Path, lib_dir: &Path) -> PathBuf {
        let stem = bundle
            .file_stem()
            .map_or_else(|| "bundle".into(), |s| s.to_string_lossy());
        lib_dir.join(format!("{stem}-slim.jar"))
    }

    fn write_slim_jar(&self, bundle: &Path, target: &Path) -> zip::result::ZipResult<usize> {
        let mut archive = ZipArchive::new(BufReader::new(File::open(bundle)?))?;
        let mut writer = ZipWriter::new(BufWriter::new(File::create(target)?));
        let mut kept = 0;

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();
            if self.nested.accepts(&name) {
                continue;
            }
            if entry.is_dir() {
                writer.add_directory(name, SimpleFileOptions::default())?;
                continue;
            }
            let method = if entry.compression() == CompressionMethod::Stored {
                CompressionMethod::Stored
            } else {
                CompressionMethod::Deflated
            };
            writer.start_file(name, SimpleFileOptions::default().compression_method(method))?;
            io::copy(&mut entry, &mut writer)?;
            kept += 1;
        }

        writer.finish()?.flush()?;
        Ok(kept)
    }
}

impl Converter for SlimJarConverter {
    fn convert(&self, bundle: &Path, lib_dir: &Path) -> Result<Option<PathBuf>> {
        let target = Self::slim_jar_path(bundle, lib_dir);
        let kept = self
            .write_slim_jar(bundle, &target)
            .map_err(|e| conversion_failed(bundle, e))?;
        info!(
            "Converted '{}' to slim JAR '{}' ({} entries)",
            bundle.display(),
            target.display(),
            kept
        );
        Ok(Some(target))
    }
}

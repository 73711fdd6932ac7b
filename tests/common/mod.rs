//! Common test utilities for fatjar integration tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A directory tree to scan, plus a separate output directory
pub struct TestRoot {
    #[allow(dead_code)]
    temp: TempDir,
    /// Absolute scan root
    pub path: PathBuf,
    /// Output directory passed with --out-dir
    pub out: PathBuf,
}

impl TestRoot {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let base = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        let path = base.join("root");
        let out = base.join("out");
        std::fs::create_dir_all(&path).expect("Failed to create root directory");
        Self { temp, path, out }
    }

    /// Write a zip archive below the root; entries ending in '/' are directories
    pub fn write_zip(&self, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
        let path = self.path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let file = File::create(&path).expect("Failed to create archive");
        let mut zip = ZipWriter::new(file);
        for (entry, data) in entries {
            if entry.ends_with('/') {
                zip.add_directory(*entry, SimpleFileOptions::default())
                    .expect("Failed to add directory");
            } else {
                let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
                zip.start_file(*entry, options).expect("Failed to start entry");
                zip.write_all(data).expect("Failed to write entry");
            }
        }
        zip.finish().expect("Failed to finish archive");
        path
    }

    /// Write a fat JAR with the given start class and nested library JARs
    pub fn write_fat_jar(&self, name: &str, start_class: &str, nested: &[&str]) -> PathBuf {
        let manifest = format!(
            "Manifest-Version: 1.0\r\nMain-Class: org.springframework.boot.loader.JarLauncher\r\n\
             Start-Class: {start_class}\r\n\r\n"
        );
        let libs: Vec<(String, Vec<u8>)> = nested
            .iter()
            .map(|jar| (format!("BOOT-INF/lib/{jar}"), format!("contents of {jar}").into_bytes()))
            .collect();

        let mut entries: Vec<(&str, &[u8])> = vec![
            ("META-INF/", b"".as_slice()),
            ("META-INF/MANIFEST.MF", manifest.as_bytes()),
            ("BOOT-INF/classes/com/example/App.class", b"\xca\xfe\xba\xbe".as_slice()),
        ];
        entries.extend(libs.iter().map(|(n, d)| (n.as_str(), d.as_slice())));
        self.write_zip(name, &entries)
    }

    /// Write a JAR whose manifest has no start class
    pub fn write_plain_jar(&self, name: &str) -> PathBuf {
        self.write_zip(
            name,
            &[("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n\r\n".as_slice())],
        )
    }

    /// Write a file with a .jar name that is not a zip archive
    pub fn write_corrupt_jar(&self, name: &str) -> PathBuf {
        let path = self.path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, b"definitely not a zip").expect("Failed to write file");
        path
    }

    /// Path of an application's lib directory in the output
    pub fn lib_dir(&self, app: &str) -> PathBuf {
        self.out.join(app).join("lib")
    }

    /// `process-fat-jars` against this root and output directory
    pub fn process_cmd(&self, glob: &str) -> Command {
        let mut cmd = fatjar_cmd();
        cmd.arg("process-fat-jars")
            .arg("--root")
            .arg(&self.path)
            .arg("--fat-jars")
            .arg(glob)
            .arg("--out-dir")
            .arg(&self.out);
        cmd
    }
}

impl Default for TestRoot {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn fatjar_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fatjar").expect("fatjar binary");
    cmd.env_remove("FATJAR_ROOT")
        .env_remove("FATJAR_OUT_DIR")
        .env_remove("FATJAR_JOBS");
    cmd
}

/// Sorted file names in a directory
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| {
            e.expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

//! Test fixtures for building archives on disk.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_fat_jar};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let jar = write_fat_jar(temp.path(), "demo.jar", "com.example.DemoApp", &["a.jar"]);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Manifest text with a `Start-Class` main attribute
pub fn manifest_with_start_class(start_class: &str) -> String {
    format!(
        "Manifest-Version: 1.0\r\nMain-Class: org.springframework.boot.loader.JarLauncher\r\nStart-Class: {start_class}\r\n\r\n"
    )
}

/// Write a zip at `dir/name` holding `entries` in order.
///
/// Entry names ending in `/` become directory entries.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn write_zip(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let zip_path = dir.join(name);
    if let Some(parent) = zip_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create archive parent");
    }
    let file = File::create(&zip_path).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (entry_name, content) in entries {
        if entry_name.ends_with('/') {
            writer
                .add_directory(*entry_name, stored)
                .expect("Failed to add directory");
            continue;
        }
        // nested jars are stored uncompressed in real fat jars
        let options = if entry_name.ends_with(".jar") {
            stored
        } else {
            deflated
        };
        writer
            .start_file(*entry_name, options)
            .expect("Failed to start entry");
        writer.write_all(content).expect("Failed to write entry");
    }
    writer.finish().expect("Failed to finish archive");
    zip_path
}

/// Entries of a Spring Boot style fat jar, in archive order
fn fat_jar_entries(start_class: &str, nested: &[&str]) -> Vec<(String, Vec<u8>)> {
    let mut entries = vec![
        ("META-INF/".to_string(), Vec::new()),
        (
            "META-INF/MANIFEST.MF".to_string(),
            manifest_with_start_class(start_class).into_bytes(),
        ),
        (
            "BOOT-INF/classes/com/example/App.class".to_string(),
            b"\xca\xfe\xba\xbe".to_vec(),
        ),
    ];
    entries.extend(nested.iter().map(|jar| {
        (
            format!("BOOT-INF/lib/{jar}"),
            format!("nested {jar}").into_bytes(),
        )
    }));
    entries
}

/// Write a Spring Boot style fat jar with one nested jar per name under
/// `BOOT-INF/lib/`.
pub fn write_fat_jar(dir: &Path, name: &str, start_class: &str, nested: &[&str]) -> PathBuf {
    let owned = fat_jar_entries(start_class, nested);
    let entries: Vec<(&str, &[u8])> = owned
        .iter()
        .map(|(entry, content)| (entry.as_str(), content.as_slice()))
        .collect();
    write_zip(dir, name, &entries)
}

/// Write the same fat jar as [`write_fat_jar`] the way a streaming writer
/// does (`jar`, `ZipOutputStream`): every entry has general purpose flag
/// bit 3 set, zero sizes in its local header and a trailing data
/// descriptor. Only the central directory carries the real sizes.
pub fn write_streamed_fat_jar(
    dir: &Path,
    name: &str,
    start_class: &str,
    nested: &[&str],
) -> PathBuf {
    const FLAGS: u16 = 0x0808; // data descriptor, UTF-8 names
    const DOS_DATE: u16 = 0x21; // 1980-01-01

    let mut out: Vec<u8> = Vec::new();
    let mut central: Vec<u8> = Vec::new();
    let entries = fat_jar_entries(start_class, nested);

    for (entry_name, content) in &entries {
        let offset = u32::try_from(out.len()).expect("fixture too large");
        let crc = crc32(content);
        let size = u32::try_from(content.len()).expect("entry too large");
        let name_len = u16::try_from(entry_name.len()).expect("name too long");

        put_u32(&mut out, 0x0403_4b50);
        for field in [20, FLAGS, 0, 0, DOS_DATE] {
            put_u16(&mut out, field);
        }
        for field in [0, 0, 0] {
            put_u32(&mut out, field);
        }
        put_u16(&mut out, name_len);
        put_u16(&mut out, 0);
        out.extend_from_slice(entry_name.as_bytes());
        out.extend_from_slice(content);
        for field in [0x0807_4b50, crc, size, size] {
            put_u32(&mut out, field);
        }

        put_u32(&mut central, 0x0201_4b50);
        for field in [20, 20, FLAGS, 0, 0, DOS_DATE] {
            put_u16(&mut central, field);
        }
        for field in [crc, size, size] {
            put_u32(&mut central, field);
        }
        for field in [name_len, 0, 0, 0, 0] {
            put_u16(&mut central, field);
        }
        let external = if entry_name.ends_with('/') { 0x10 } else { 0 };
        put_u32(&mut central, external);
        put_u32(&mut central, offset);
        central.extend_from_slice(entry_name.as_bytes());
    }

    let count = u16::try_from(entries.len()).expect("too many entries");
    let central_offset = u32::try_from(out.len()).expect("fixture too large");
    let central_size = u32::try_from(central.len()).expect("fixture too large");
    out.extend_from_slice(&central);
    put_u32(&mut out, 0x0605_4b50);
    for field in [0, 0, count, count] {
        put_u16(&mut out, field);
    }
    put_u32(&mut out, central_size);
    put_u32(&mut out, central_offset);
    put_u16(&mut out, 0);

    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create archive parent");
    }
    std::fs::write(&path, out).expect("Failed to write streamed jar");
    path
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// CRC-32 (IEEE), bitwise
fn crc32(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

/// Write a plain library jar whose manifest has no `Start-Class`.
pub fn write_plain_jar(dir: &Path, name: &str) -> PathBuf {
    write_zip(
        dir,
        name,
        &[
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n\r\n".as_slice()),
            ("com/example/Util.class", b"\xca\xfe\xba\xbe".as_slice()),
        ],
    )
}

/// Write bytes that are not a zip archive at all.
pub fn write_corrupt_jar(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not a zip archive").expect("Failed to write corrupt jar");
    path
}

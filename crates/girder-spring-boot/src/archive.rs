//! Starter archive extraction
//!
//! Spring Initializr serves the scaffolded project as a zip archive. The
//! zip decoding itself is delegated to the `zip` crate; this module owns
//! the expansion policy: entries land under the destination project
//! directory, and entry names that would escape it are rejected.
//!
//! Extraction does not restore permission bits from the archive; the
//! generator explicitly re-sets the wrapper's executable bit afterwards,
//! because extraction on some platforms does not preserve it anyway.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::trace;
use zip::ZipArchive;

use crate::error::{GenerationError, Result};

/// Expand the zip archive at `archive_path` into `dest`
///
/// `dest` is created if missing. A corrupt archive, an unreadable entry,
/// or any write failure aborts the extraction.
pub fn extract_zip(archive_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive_path)
        .map_err(|e| GenerationError::extraction(format!("cannot open archive: {e}")))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| GenerationError::extraction(format!("corrupt archive: {e}")))?;

    std::fs::create_dir_all(dest)
        .map_err(|e| GenerationError::extraction(format!("cannot create {}: {e}", dest.display())))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| GenerationError::extraction(format!("corrupt archive entry: {e}")))?;

        // Reject absolute paths and `..` components (zip-slip)
        let relative = entry.enclosed_name().ok_or_else(|| {
            GenerationError::extraction(format!("unsafe entry name: {}", entry.name()))
        })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| {
                GenerationError::extraction(format!("cannot create {}: {e}", out_path.display()))
            })?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GenerationError::extraction(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        trace!("Extracting {}", out_path.display());
        let mut out_file = File::create(&out_path).map_err(|e| {
            GenerationError::extraction(format!("cannot create {}: {e}", out_path.display()))
        })?;
        io::copy(&mut entry, &mut out_file).map_err(|e| {
            GenerationError::extraction(format!("cannot write {}: {e}", out_path.display()))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_test_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            if name.ends_with('/') {
                writer.add_directory(name.trim_end_matches('/'), options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_extracts_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("starter.zip");
        write_test_zip(
            &archive,
            &[
                ("pom.xml", "<project/>"),
                ("src/main/java/", ""),
                ("src/main/java/App.java", "class App {}"),
            ],
        );

        let dest = dir.path().join("out");
        extract_zip(&archive, &dest).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.join("pom.xml")).unwrap(),
            "<project/>"
        );
        assert_eq!(
            std::fs::read_to_string(dest.join("src/main/java/App.java")).unwrap(),
            "class App {}"
        );
    }

    #[test]
    fn test_creates_missing_destination() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("starter.zip");
        write_test_zip(&archive, &[("mvnw", "#!/bin/sh\n")]);

        let dest = dir.path().join("apps/bootapp");
        extract_zip(&archive, &dest).unwrap();

        assert!(dest.join("mvnw").exists());
    }

    #[test]
    fn test_rejects_corrupt_archive() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("broken.zip");
        std::fs::write(&archive, b"this is not a zip file").unwrap();

        let err = extract_zip(&archive, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, GenerationError::Extraction { .. }));
    }

    #[test]
    fn test_rejects_escaping_entry_names() {
        let dir = TempDir::new().unwrap();
        let archive = dir.path().join("evil.zip");
        write_test_zip(&archive, &[("../escape.txt", "nope")]);

        let err = extract_zip(&archive, &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, GenerationError::Extraction { .. }));
        assert!(!dir.path().join("escape.txt").exists());
    }
}

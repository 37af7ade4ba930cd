//! Starter archive fixtures
//!
//! Builds small in-memory zip archives shaped like real Spring Initializr
//! output: a wrapper script, the build file, and a source tree stub.

use std::io::{Cursor, Write};

use girder_spring_boot::BuildSystem;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Minimal `pom.xml` body used by Maven fixtures
pub const POM_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project>\n\t<artifactId>starter</artifactId>\n</project>\n";

/// Minimal `build.gradle` body used by Gradle fixtures
pub const BUILD_GRADLE: &str =
    "plugins {\n\tid 'org.springframework.boot' version '3.4.0'\n}\n";

/// Build a zip archive from (name, content) entries
pub fn zip_with_entries(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, content) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(name.trim_end_matches('/'), options)
                .unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }

    writer.finish().unwrap().into_inner()
}

/// Build a starter archive for the given build system
pub fn starter_zip(build_system: BuildSystem) -> Vec<u8> {
    let build_file_content = match build_system {
        BuildSystem::Maven => POM_XML,
        BuildSystem::Gradle => BUILD_GRADLE,
    };

    zip_with_entries(&[
        (build_system.wrapper_name(), "#!/bin/sh\nexec java \"$@\"\n"),
        (build_system.build_file_name(), build_file_content),
        ("src/main/java/", ""),
        (
            "src/main/java/DemoApplication.java",
            "public class DemoApplication {}\n",
        ),
    ])
}

/// Build a starter archive that is missing the wrapper script
pub fn starter_zip_without_wrapper(build_system: BuildSystem) -> Vec<u8> {
    zip_with_entries(&[(build_system.build_file_name(), POM_XML)])
}

//! Build system selection for generated projects
//!
//! The build-system specifics (wire identifier, wrapper script name, build
//! file, optional build-file augmentation) hang off one tagged variant
//! instead of being scattered across conditionals.

use std::fmt;
use std::str::FromStr;

/// Text block appended to generated `build.gradle` files so the Gradle
/// build exposes the same `buildInfo` task the Maven plugin gets for free.
const GRADLE_BUILD_INFO_TASK: &str = "\nspringBoot {\n\tbuildInfo()\n}\n";

/// Build system of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildSystem {
    Maven,
    Gradle,
}

impl BuildSystem {
    /// Identifier sent to the initializer service as the `type` parameter
    pub fn id(&self) -> &'static str {
        match self {
            Self::Maven => "maven-project",
            Self::Gradle => "gradle-project",
        }
    }

    /// Name of the wrapper executable bundled at the project root
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Maven => "mvnw",
            Self::Gradle => "gradlew",
        }
    }

    /// Name of the generated build file
    pub fn build_file_name(&self) -> &'static str {
        match self {
            Self::Maven => "pom.xml",
            Self::Gradle => "build.gradle",
        }
    }

    /// Text block to append to the generated build file, if this build
    /// system needs one
    ///
    /// Only Gradle has an augmentation: the freshly generated
    /// `build.gradle` lacks a `buildInfo` task definition. The insertion is
    /// pure text, no Gradle DSL parsing, and runs exactly once against a
    /// freshly downloaded file.
    pub fn build_file_augmentation(&self) -> Option<&'static str> {
        match self {
            Self::Maven => None,
            Self::Gradle => Some(GRADLE_BUILD_INFO_TASK),
        }
    }
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BuildSystem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "maven-project" => Ok(Self::Maven),
            "gradle-project" => Ok(Self::Gradle),
            other => Err(format!(
                "Unknown build system: {other}. Valid values: maven-project, gradle-project"
            )),
        }
    }
}

//! # girder-spring-boot
//!
//! Spring Boot project generator plugin for the Girder monorepo tool:
//! - Fetches a scaffolded starter archive from Spring Initializr
//! - Extracts it into the workspace (`apps/<name>` or `libs/<name>`)
//! - Restores the executable bit on the generated build wrapper
//! - Appends the `buildInfo` task to Gradle build files
//! - Registers the project's targets and the plugin identifier in the
//!   workspace configuration store

pub mod archive;
pub mod build_system;
pub mod error;
pub mod generator;
pub mod options;

pub use build_system::BuildSystem;
pub use error::{GenerationError, Result};
pub use generator::{generate, PLUGIN_NAME};
pub use options::{ProjectGeneratorOptions, DEFAULT_INITIALIZER_URL};

// The project type lives with the workspace store; re-exported here so
// plugin consumers need a single import.
pub use girder_workspace::ProjectType;

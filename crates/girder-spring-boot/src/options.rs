//! Generator invocation options

use crate::build_system::BuildSystem;
use crate::error::{GenerationError, Result};
use girder_workspace::ProjectType;

/// Default Spring Initializr endpoint
pub const DEFAULT_INITIALIZER_URL: &str = "https://start.spring.io";

/// Fully-resolved options for one generator invocation
///
/// The record is immutable once built; validation happens up front in
/// [`ProjectGeneratorOptions::validate`], before any I/O.
#[derive(Debug, Clone)]
pub struct ProjectGeneratorOptions {
    /// Project name, unique within the workspace
    pub name: String,

    /// Whether the project lands under `apps/` or `libs/`
    pub project_type: ProjectType,

    /// Build system the initializer should scaffold
    pub build_system: BuildSystem,

    /// Base URL of the initializer service
    pub spring_initializer_url: String,
}

impl ProjectGeneratorOptions {
    /// Create options with the default initializer endpoint
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        build_system: BuildSystem,
    ) -> Self {
        Self {
            name: name.into(),
            project_type,
            build_system,
            spring_initializer_url: DEFAULT_INITIALIZER_URL.to_string(),
        }
    }

    /// Override the initializer endpoint
    pub fn with_initializer_url(mut self, url: impl Into<String>) -> Self {
        self.spring_initializer_url = url.into();
        self
    }

    /// Check the validity invariant: the name must be a valid workspace
    /// identifier (lowercase alphanumeric with hyphens, starting
    /// alphanumeric)
    pub fn validate(&self) -> Result<()> {
        if !is_valid_project_name(&self.name) {
            return Err(GenerationError::invalid_name(&self.name));
        }
        Ok(())
    }

    /// Project root path relative to the workspace root
    pub fn project_root(&self) -> String {
        format!("{}/{}", self.project_type.root_dir(), self.name)
    }
}

/// Workspace identifier rules: non-empty, lowercase alphanumeric plus
/// hyphens, must start with an alphanumeric character
fn is_valid_project_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

//! Error types for girder-workspace

use thiserror::Error;

/// Result type alias using girder-workspace's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Workspace configuration store error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project already registered under this name
    #[error("Project '{name}' is already registered in the workspace")]
    ProjectExists { name: String },

    /// Project not found
    #[error("Project not found in workspace: {name}")]
    ProjectNotFound { name: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(name: impl Into<String>) -> Self {
        Self::ProjectExists { name: name.into() }
    }

    /// Create a project not found error
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }
}

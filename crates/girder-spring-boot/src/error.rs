//! Error types for the Spring Boot generator

use thiserror::Error;

/// Result type alias using the generator's error type
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Generation error taxonomy
///
/// Every variant is terminal for the current invocation: nothing is
/// retried, and no rollback is performed. Files already extracted stay on
/// disk when a later step fails.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Project name is not a valid workspace identifier
    #[error("Invalid project name: {name}. Must be lowercase alphanumeric with hyphens")]
    InvalidName { name: String },

    /// Fetch failure or non-success response from the initializer service
    #[error("Failed to download starter archive from {url}: {message}")]
    Network { url: String, message: String },

    /// Corrupt archive or I/O failure while expanding it
    #[error("Failed to extract starter archive: {message}")]
    Extraction { message: String },

    /// Wrapper executable missing, or a file mutation after extraction was
    /// rejected
    #[error("Filesystem operation failed on {path}: {message}")]
    FileSystem { path: String, message: String },

    /// The workspace configuration store rejected the write
    #[error("Failed to write workspace configuration: {0}")]
    ConfigWrite(#[from] girder_workspace::Error),
}

impl GenerationError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a network error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    pub fn filesystem(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FileSystem {
            path: path.into(),
            message: message.into(),
        }
    }
}

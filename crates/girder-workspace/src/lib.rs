//! # girder-workspace
//!
//! Workspace configuration store for the Girder monorepo tool providing:
//! - Per-project configuration records (root path, type, named targets)
//! - The global plugin registry
//! - An explicit in-memory `Workspace` handle over the on-disk files,
//!   mutated by generators and persisted by the host command

pub mod error;
pub mod types;
pub mod workspace;

pub use error::{Error, Result};
pub use types::{ProjectConfiguration, ProjectType, TargetConfiguration};
pub use workspace::Workspace;

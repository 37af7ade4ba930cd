//! The `Workspace` handle over the on-disk configuration files
//!
//! A `Workspace` is an explicit, in-memory view of the two configuration
//! files owned by the Girder tool:
//! - `workspace.json` - the per-project configuration entries
//! - `girder.json` - global settings, currently the plugin registry
//!
//! Generators receive a mutable handle, record their changes through it,
//! and the host command persists the handle with [`Workspace::save`]. The
//! handle never writes as a side effect of a mutation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ProjectConfiguration;

/// File name of the per-project configuration store
pub const WORKSPACE_FILE: &str = "workspace.json";

/// File name of the global configuration (plugin registry)
pub const GLOBAL_CONFIG_FILE: &str = "girder.json";

/// Current schema version written to `workspace.json`
const WORKSPACE_SCHEMA_VERSION: u32 = 1;

/// On-disk shape of `workspace.json`
#[derive(Debug, Serialize, Deserialize)]
struct WorkspaceFile {
    version: u32,
    #[serde(default)]
    projects: BTreeMap<String, ProjectConfiguration>,
}

/// On-disk shape of `girder.json`
#[derive(Debug, Default, Serialize, Deserialize)]
struct GlobalConfigFile {
    #[serde(default)]
    plugins: Vec<String>,
}

/// In-memory workspace configuration handle
#[derive(Debug)]
pub struct Workspace {
    /// Workspace root directory
    root: PathBuf,

    /// Per-project configuration entries
    projects: BTreeMap<String, ProjectConfiguration>,

    /// Registered plugin identifiers
    plugins: Vec<String>,
}

impl Workspace {
    /// Create an empty workspace handle rooted at `root`
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            projects: BTreeMap::new(),
            plugins: Vec::new(),
        }
    }

    /// Load the workspace configuration from `root`
    ///
    /// Missing files load as an empty workspace; a workspace that has never
    /// seen a generator has neither file yet.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        let projects = match std::fs::read_to_string(root.join(WORKSPACE_FILE)) {
            Ok(content) => serde_json::from_str::<WorkspaceFile>(&content)?.projects,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(Error::Io(e)),
        };

        let plugins = match std::fs::read_to_string(root.join(GLOBAL_CONFIG_FILE)) {
            Ok(content) => serde_json::from_str::<GlobalConfigFile>(&content)?.plugins,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(Error::Io(e)),
        };

        debug!(
            "Loaded workspace at {} ({} project(s), {} plugin(s))",
            root.display(),
            projects.len(),
            plugins.len()
        );

        Ok(Self {
            root,
            projects,
            plugins,
        })
    }

    /// Workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a project configuration under `name`
    ///
    /// Project names are unique within a workspace; registering a name
    /// twice is rejected.
    pub fn add_project(&mut self, name: &str, config: ProjectConfiguration) -> Result<()> {
        if self.projects.contains_key(name) {
            return Err(Error::project_exists(name));
        }
        self.projects.insert(name.to_string(), config);
        Ok(())
    }

    /// Read back the configuration entry for `name`
    pub fn project(&self, name: &str) -> Result<&ProjectConfiguration> {
        self.projects
            .get(name)
            .ok_or_else(|| Error::project_not_found(name))
    }

    /// All registered project names, sorted
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }

    /// Register a plugin identifier in the global plugin list
    ///
    /// Idempotent: an already-registered identifier is left alone.
    pub fn register_plugin(&mut self, id: &str) {
        if !self.plugins.iter().any(|p| p == id) {
            self.plugins.push(id.to_string());
        }
    }

    /// Registered plugin identifiers, in registration order
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Persist the handle to `workspace.json` and `girder.json`
    pub fn save(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;

        let workspace_file = WorkspaceFile {
            version: WORKSPACE_SCHEMA_VERSION,
            projects: self.projects.clone(),
        };
        let content = serde_json::to_string_pretty(&workspace_file)?;
        std::fs::write(self.root.join(WORKSPACE_FILE), content)?;

        let global_file = GlobalConfigFile {
            plugins: self.plugins.clone(),
        };
        let content = serde_json::to_string_pretty(&global_file)?;
        std::fs::write(self.root.join(GLOBAL_CONFIG_FILE), content)?;

        debug!("Saved workspace configuration to {}", self.root.display());
        Ok(())
    }
}

//! Type definitions for workspace project configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of project a workspace entry describes
///
/// The project type decides where the project tree lives: applications go
/// under `apps/`, libraries under `libs/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Library,
}

impl ProjectType {
    /// Workspace identifier for this project type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Library => "library",
        }
    }

    /// Top-level workspace directory for projects of this type
    pub fn root_dir(&self) -> &'static str {
        match self {
            Self::Application => "apps",
            Self::Library => "libs",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "application" => Ok(Self::Application),
            "library" => Ok(Self::Library),
            other => Err(format!(
                "Unknown project type: {other}. Valid types: application, library"
            )),
        }
    }
}

/// A named workspace target bound to a concrete executor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfiguration {
    /// Executor reference string, e.g. `girder-spring-boot:buildJar`
    pub executor: String,
}

impl TargetConfiguration {
    pub fn new(executor: impl Into<String>) -> Self {
        Self {
            executor: executor.into(),
        }
    }
}

/// The workspace's record for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    /// Project root path relative to the workspace root (`apps/<name>` or
    /// `libs/<name>`)
    pub root: String,

    /// Project type
    pub project_type: ProjectType,

    /// Target name -> executor binding
    #[serde(default)]
    pub targets: BTreeMap<String, TargetConfiguration>,
}

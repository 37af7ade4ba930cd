//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};
use girder_spring_boot::{BuildSystem, ProjectType, DEFAULT_INITIALIZER_URL};
use std::path::PathBuf;

/// Girder - monorepo build orchestration
#[derive(Parser, Debug)]
#[command(name = "girder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Spring Boot project into the workspace
    Generate(GenerateArgs),

    /// Show version information
    Version(VersionArgs),
}

// Generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project name (unique within the workspace)
    #[arg(short, long)]
    pub name: String,

    /// Project type: application (apps/) or library (libs/)
    #[arg(long, default_value = "application")]
    pub project_type: ProjectType,

    /// Build system: maven-project or gradle-project
    #[arg(long, default_value = "maven-project")]
    pub build_system: BuildSystem,

    /// Base URL of the Spring Initializr service
    #[arg(long, default_value = DEFAULT_INITIALIZER_URL)]
    pub initializer_url: String,

    /// Workspace root directory (default: current directory)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

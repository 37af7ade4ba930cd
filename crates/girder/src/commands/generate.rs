//! `girder generate` command handler

use anyhow::{Context, Result};
use girder_spring_boot::{generate, BuildSystem, ProjectGeneratorOptions};
use girder_workspace::Workspace;

use crate::cli::GenerateArgs;
use crate::output;

/// Generate a Spring Boot project and register it in the workspace
pub async fn run(args: GenerateArgs) -> Result<()> {
    output::header("Generate Spring Boot project");

    let workspace_root = match args.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };

    let options = ProjectGeneratorOptions::new(&args.name, args.project_type, args.build_system)
        .with_initializer_url(&args.initializer_url);

    output::kv("Project name", &args.name);
    output::kv("Project type", args.project_type.as_str());
    output::kv("Build system", args.build_system.id());
    output::kv("Workspace", &workspace_root.display().to_string());
    println!();

    let mut workspace =
        Workspace::load(&workspace_root).context("Failed to load workspace configuration")?;

    generate(&mut workspace, &options).await?;

    // The generator mutates the handle; persisting it is the host's job
    workspace
        .save()
        .context("Failed to save workspace configuration")?;

    println!();
    output::success(&format!("Project '{}' generated successfully", args.name));
    output::kv("Location", &options.project_root());

    let run_hint = match args.build_system {
        BuildSystem::Maven => "./mvnw spring-boot:run",
        BuildSystem::Gradle => "./gradlew bootRun",
    };
    println!();
    output::info("Next steps:");
    println!("   1. cd {}", options.project_root());
    println!("   2. {}", run_hint);

    Ok(())
}

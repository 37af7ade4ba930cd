//! The project generator
//!
//! One invocation runs a strictly linear sequence: build the download URL,
//! fetch the starter archive, extract it into the workspace, restore the
//! wrapper's executable bit, optionally augment the Gradle build file, and
//! register the project in the workspace configuration store. Any step
//! failure aborts the invocation; nothing is retried and nothing is rolled
//! back.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use futures_util::StreamExt;
use girder_workspace::{ProjectConfiguration, TargetConfiguration, Workspace};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use url::Url;

use crate::archive;
use crate::error::{GenerationError, Result};
use crate::options::ProjectGeneratorOptions;

/// Plugin identifier registered in the workspace's global plugin list,
/// and the executor namespace for all generated targets
pub const PLUGIN_NAME: &str = "girder-spring-boot";

/// `User-Agent` header sent to the initializer service
const USER_AGENT: &str = concat!("girder-spring-boot/", env!("CARGO_PKG_VERSION"));

/// The fixed target set every generated project gets, each bound to the
/// executor `girder-spring-boot:<target>`
const TARGETS: [&str; 8] = [
    "run",
    "serve",
    "test",
    "clean",
    "buildJar",
    "buildWar",
    "buildImage",
    "buildInfo",
];

/// Generate a Spring Boot project into the workspace
///
/// Side effects: the extracted project tree under the workspace root, and
/// the project/plugin entries recorded in the `workspace` handle. The host
/// is responsible for persisting the handle afterwards.
pub async fn generate(
    workspace: &mut Workspace,
    options: &ProjectGeneratorOptions,
) -> Result<()> {
    options.validate()?;

    let url = build_download_url(options)?;
    let dest = workspace
        .root()
        .join(options.project_type.root_dir())
        .join(&options.name);

    info!("Downloading Spring Boot project zip from : {url}...");
    let starter_zip = download_starter(&url).await?;

    info!("Extracting Spring Boot project zip to '{}'...", dest.display());
    archive::extract_zip(starter_zip.path(), &dest)?;

    let wrapper = dest.join(options.build_system.wrapper_name());
    debug!(
        "Restoring write permission on wrapper executable at '{}'...",
        wrapper.display()
    );
    restore_wrapper_permissions(&wrapper)?;

    if let Some(block) = options.build_system.build_file_augmentation() {
        debug!("Adding 'buildInfo' task to the build.gradle file...");
        append_to_build_file(&dest.join(options.build_system.build_file_name()), block)?;
    }

    workspace.add_project(&options.name, project_configuration(options))?;
    workspace.register_plugin(PLUGIN_NAME);

    Ok(())
}

/// Build the initializer download URL:
/// `<baseUrl>/starter.zip?type=<buildSystemId>&name=<projectName>`
pub fn build_download_url(options: &ProjectGeneratorOptions) -> Result<Url> {
    let base = options.spring_initializer_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}/starter.zip")).map_err(|e| {
        GenerationError::network(&options.spring_initializer_url, format!("invalid URL: {e}"))
    })?;
    url.query_pairs_mut()
        .append_pair("type", options.build_system.id())
        .append_pair("name", &options.name);
    Ok(url)
}

/// Fetch the starter archive, streaming the response body into a temp file
///
/// One GET, no retry, no timeout: the initializer is a fast first-party
/// service and this is a scaffold-once developer tool.
async fn download_starter(url: &Url) -> Result<NamedTempFile> {
    let client = reqwest::Client::new();
    let response = client
        .get(url.clone())
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| GenerationError::network(url.as_str(), e.to_string()))?;

    if !response.status().is_success() {
        return Err(GenerationError::network(
            url.as_str(),
            format!("HTTP {}", response.status()),
        ));
    }

    let mut archive_file = NamedTempFile::new()
        .map_err(|e| GenerationError::extraction(format!("cannot create temporary file: {e}")))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk: bytes::Bytes =
            chunk.map_err(|e| GenerationError::network(url.as_str(), e.to_string()))?;
        archive_file
            .write_all(&chunk)
            .map_err(|e| GenerationError::extraction(format!("cannot write archive: {e}")))?;
    }
    archive_file
        .flush()
        .map_err(|e| GenerationError::extraction(format!("cannot write archive: {e}")))?;

    Ok(archive_file)
}

/// Re-set the wrapper script's permission bits to 0755
///
/// Archive extraction does not preserve executable bits on every platform,
/// so the bits are set explicitly and unconditionally after extraction.
/// On non-unix targets only the wrapper's existence is verified.
fn restore_wrapper_permissions(wrapper: &Path) -> Result<()> {
    if !wrapper.exists() {
        return Err(GenerationError::filesystem(
            wrapper.display().to_string(),
            "wrapper executable not found after extraction",
        ));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(wrapper, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| GenerationError::filesystem(wrapper.display().to_string(), e.to_string()))?;
    }

    Ok(())
}

/// Append a text block to the generated build file
fn append_to_build_file(build_file: &Path, block: &str) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(build_file)
        .map_err(|e| GenerationError::filesystem(build_file.display().to_string(), e.to_string()))?;
    file.write_all(block.as_bytes())
        .map_err(|e| GenerationError::filesystem(build_file.display().to_string(), e.to_string()))
}

/// Build the project configuration entry with the fixed target set
fn project_configuration(options: &ProjectGeneratorOptions) -> ProjectConfiguration {
    let targets: BTreeMap<String, TargetConfiguration> = TARGETS
        .iter()
        .map(|target| {
            (
                (*target).to_string(),
                TargetConfiguration::new(format!("{PLUGIN_NAME}:{target}")),
            )
        })
        .collect();

    ProjectConfiguration {
        root: options.project_root(),
        project_type: options.project_type,
        targets,
    }
}

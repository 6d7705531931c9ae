//! End-to-end logo step: response in, logos and README out
//!
//! This is the thin layer between the workflow environment and the pure
//! extraction/patching code. Paths arrive already resolved.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ActionConfig;
use crate::error::ActionError;
use crate::extract::SvgExtractor;

/// Workflow output name for the light logo path
pub const LIGHT_OUTPUT: &str = "light-logo-path";

/// Workflow output name for the dark logo path
pub const DARK_OUTPUT: &str = "dark-logo-path";

/// One run of the logo step
#[derive(Debug, Clone)]
pub struct LogoJob {
    pub config: ActionConfig,
    /// Base directory for README image references
    pub workspace: PathBuf,
    /// README to patch; `None` leaves the README alone
    pub readme: Option<PathBuf>,
}

impl LogoJob {
    /// Job writing into `workspace` with the README at its root
    pub fn new(config: ActionConfig, workspace: impl Into<PathBuf>) -> Self {
        let workspace = workspace.into();
        Self {
            config,
            readme: Some(workspace.join("README.md")),
            workspace,
        }
    }

    pub fn with_readme(mut self, readme: impl Into<PathBuf>) -> Self {
        self.readme = Some(readme.into());
        self
    }

    pub fn without_readme(mut self) -> Self {
        self.readme = None;
        self
    }
}

/// Paths of the written logos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLogos {
    pub light_path: PathBuf,
    pub dark_path: PathBuf,
}

/// Read the model response, failing if the file does not exist
pub fn read_response(path: &Path) -> Result<String, ActionError> {
    if !path.is_file() {
        return Err(ActionError::InputMissing {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| ActionError::io(path, e))
}

/// Extract both logos, write them, and patch the README.
///
/// Nothing is written when extraction fails.
pub fn run(response: &str, job: &LogoJob) -> Result<GeneratedLogos, ActionError> {
    let config = &job.config;
    info!(
        output_dir = %config.output_dir.display(),
        chars = response.chars().count(),
        "processing logo response"
    );

    let mut extractor = SvgExtractor::new();
    if let Some(debug_file) = &config.debug_file {
        extractor = extractor.with_debug_path(debug_file);
    }
    let pair = extractor.extract(response)?;

    fs::create_dir_all(&config.output_dir).map_err(|e| ActionError::io(&config.output_dir, e))?;

    let logos = GeneratedLogos {
        light_path: config.light_path(),
        dark_path: config.dark_path(),
    };
    write_file(&logos.light_path, &pair.light)?;
    info!(path = %logos.light_path.display(), "saved light theme logo");
    write_file(&logos.dark_path, &pair.dark)?;
    info!(path = %logos.dark_path.display(), "saved dark theme logo");

    if let Some(readme) = &job.readme {
        update_readme(readme, &logos, job)?;
    }

    Ok(logos)
}

/// Patch the README on disk, creating it when missing
fn update_readme(readme: &Path, logos: &GeneratedLogos, job: &LogoJob) -> Result<(), ActionError> {
    let current = if readme.exists() {
        info!(path = %readme.display(), "updating existing README");
        fs::read_to_string(readme).map_err(|e| ActionError::io(readme, e))?
    } else {
        info!(path = %readme.display(), "creating new README");
        String::new()
    };

    let patched = job.config.picture.apply(
        &current,
        &logos.light_path,
        &logos.dark_path,
        &job.workspace,
    );
    write_file(readme, &patched)?;
    info!("README updated with theme-aware logos");
    Ok(())
}

/// Append the logo paths as `name=value` lines to a workflow output file
pub fn write_github_outputs(path: &Path, logos: &GeneratedLogos) -> Result<(), ActionError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ActionError::io(path, e))?;

    writeln!(file, "{LIGHT_OUTPUT}={}", logos.light_path.display())
        .and_then(|_| writeln!(file, "{DARK_OUTPUT}={}", logos.dark_path.display()))
        .map_err(|e| ActionError::io(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<(), ActionError> {
    fs::write(path, contents).map_err(|e| ActionError::io(path, e))
}

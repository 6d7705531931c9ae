//! Action configuration
//!
//! Output locations and README markup settings can be supplied as a TOML file.
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::readme::PictureBlock;

/// Default directory for generated logos
pub const DEFAULT_OUTPUT_DIR: &str = "assets";

/// Default file name of the light logo
pub const DEFAULT_LIGHT_FILE: &str = "logo-light.svg";

/// Default file name of the dark logo
pub const DEFAULT_DARK_FILE: &str = "logo-dark.svg";

/// Default location of the raw response copy
pub const DEFAULT_DEBUG_FILE: &str = "debug_logo_response.txt";

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolved settings for one logo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// Directory the two logos are written to
    pub output_dir: PathBuf,
    pub light_file: String,
    pub dark_file: String,
    /// Where the raw response is copied; `None` disables the copy
    pub debug_file: Option<PathBuf>,
    /// README markup settings
    pub picture: PictureBlock,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
struct TomlConfig {
    output: Option<TomlOutput>,
    readme: Option<TomlReadme>,
}

#[derive(Deserialize)]
struct TomlOutput {
    directory: Option<PathBuf>,
    light_file: Option<String>,
    dark_file: Option<String>,
    debug_file: Option<PathBuf>,
}

#[derive(Deserialize)]
struct TomlReadme {
    alt: Option<String>,
    width: Option<u32>,
}

impl ActionConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(output) = parsed.output {
            if let Some(directory) = output.directory {
                config.output_dir = directory;
            }
            if let Some(light_file) = output.light_file {
                config.light_file = light_file;
            }
            if let Some(dark_file) = output.dark_file {
                config.dark_file = dark_file;
            }
            if let Some(debug_file) = output.debug_file {
                config.debug_file = Some(debug_file);
            }
        }

        if let Some(readme) = parsed.readme {
            if let Some(alt) = readme.alt {
                config.picture.alt = alt;
            }
            if let Some(width) = readme.width {
                config.picture.width = width;
            }
        }

        Ok(config)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the debug copy location
    pub fn with_debug_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_file = Some(path.into());
        self
    }

    /// Disable the debug copy
    pub fn without_debug_file(mut self) -> Self {
        self.debug_file = None;
        self
    }

    pub fn light_path(&self) -> PathBuf {
        self.output_dir.join(&self.light_file)
    }

    pub fn dark_path(&self) -> PathBuf {
        self.output_dir.join(&self.dark_file)
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            light_file: DEFAULT_LIGHT_FILE.to_string(),
            dark_file: DEFAULT_DARK_FILE.to_string(),
            debug_file: Some(PathBuf::from(DEFAULT_DEBUG_FILE)),
            picture: PictureBlock::default(),
        }
    }
}

//! YAML project config file (`bodywork.yaml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::{ConfigError, ConfigResult};
use crate::constants::{DEFAULT_PROJECT_DIR, PROJECT_CONFIG_FILENAME};
use crate::logging::Severity;

/// The slice of the project config this crate reads
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// `logging` section
    #[serde(default)]
    pub logging: Option<LoggingSettings>,
}

/// `logging` section of the project config
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Minimum severity name, e.g. `INFO`
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Default location of the project config file
pub fn default_config_path() -> PathBuf {
    Path::new(DEFAULT_PROJECT_DIR).join(PROJECT_CONFIG_FILENAME)
}

/// Read-only handle on a project config file
///
/// The file need not exist; a missing file surfaces as
/// [`ConfigError::NotFound`] when loaded.
///
/// # Example
///
/// ```no_run
/// use bodywork_logging::config::ProjectConfigFile;
///
/// let config = ProjectConfigFile::new("bodywork.yaml");
/// match config.log_level() {
///     Ok(level) => println!("configured level: {}", level),
///     Err(e) => println!("no usable level: {}", e),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectConfigFile {
    path: PathBuf,
}

impl ProjectConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Config file at [`default_config_path`]
    pub fn default_location() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load and parse the file
    pub fn load(&self) -> ConfigResult<ProjectConfig> {
        if !self.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ProjectConfig::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load the file and validate its `logging.log_level` field
    pub fn log_level(&self) -> ConfigResult<Severity> {
        let config = self.load()?;
        let name = config
            .logging
            .ok_or(ConfigError::MissingField("logging"))?
            .log_level
            .ok_or(ConfigError::MissingField("logging.log_level"))?;

        Severity::from_name(&name).ok_or(ConfigError::InvalidValue {
            field: "logging.log_level",
            value: name,
        })
    }
}

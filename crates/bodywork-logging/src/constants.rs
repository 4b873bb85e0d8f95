//! Fixed names and defaults shared across the crate

use crate::logging::Severity;

/// Name of the process-wide logger
pub const LOGGER_NAME: &str = "bodywork";

/// Environment variable consulted for the log level
pub const DEFAULT_LOG_LEVEL_ENV_VAR: &str = "BODYWORK_LOG_LEVEL";

/// Level used when no other source resolves one
pub const DEFAULT_LOG_LEVEL: Severity = Severity::Info;

/// Directory searched for the project config file
pub const DEFAULT_PROJECT_DIR: &str = ".";

/// Project config filename
pub const PROJECT_CONFIG_FILENAME: &str = "bodywork.yaml";

/// `chrono` format string for console timestamps
pub const LOG_TIME_FORMAT: &str = "[%d/%m/%y %H:%M:%S]";

//! Project configuration file access
//!
//! Only the `logging.log_level` field is consumed here; the rest of the
//! project config schema is owned elsewhere and ignored when parsing.

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{default_config_path, LoggingSettings, ProjectConfig, ProjectConfigFile};

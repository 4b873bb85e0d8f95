//! Bodywork Logging
//!
//! Shared, named logger used across the Bodywork toolset.
//!
//! The level is resolved from a waterfall of sources, the first success
//! winning:
//! 1. A level passed explicitly to the factory
//! 2. `logging.log_level` in the project config file (`bodywork.yaml`)
//! 3. The `BODYWORK_LOG_LEVEL` environment variable
//! 4. The default, INFO
//!
//! A single console handler is attached the first time the factory runs.
//!
//! ```rust,no_run
//! use bodywork_logging::{default_log_factory, log_info};
//!
//! let log = default_log_factory(None)?;
//! log.info("deployment started");
//! log_info!(log, "{} stages queued", 3);
//! # Ok::<(), bodywork_logging::LogError>(())
//! ```

pub mod constants;
pub mod logging;
pub mod config;
pub mod resolver;
pub mod factory;

// Re-export commonly used types
pub use logging::{
    shared_console, Console, ConsoleHandler, Handler, HandlerConfig, Highlighter, Logger, Record,
    Severity, SharedHandler, SEVERITY_NAMES,
};

pub use config::{ConfigError, ConfigResult, ProjectConfig, ProjectConfigFile};

pub use resolver::{LevelChain, LevelSource, Resolution, ResolveError};

pub use factory::{
    configure_logger, current_level, default_log_factory, get_logger, level_chain, log_factory,
    LogError, LogResult,
};

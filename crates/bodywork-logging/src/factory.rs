//! Process-wide `bodywork` logger and the factory that configures it
//!
//! The logger is created on first access and lives for the rest of the
//! process. Every factory call re-resolves the threshold; the console
//! handler is attached once and never replaced.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::config::default_config_path;
use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_LEVEL_ENV_VAR, LOGGER_NAME};
use crate::logging::{shared_console, ConsoleHandler, HandlerConfig, Logger, Severity, SharedHandler};
use crate::resolver::{
    ConfigFileLevel, DefaultLevel, EnvLevel, ExplicitLevel, LevelChain, ResolveError,
};

/// Errors surfaced by the factory
///
/// Only a bad explicit level reaches the caller; every other source failure
/// falls through to the next source.
#[derive(Error, Debug)]
pub enum LogError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub type LogResult<T> = Result<T, LogError>;

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(LOGGER_NAME));

/// The process-wide logger, without touching its configuration
pub fn get_logger() -> &'static Logger {
    &LOGGER
}

/// Handler configuration used for the shared logger
pub fn default_handler_config() -> HandlerConfig {
    HandlerConfig::default()
}

/// Build the standard resolution chain
///
/// Order: `log_level` argument, config file, `env_var`, then
/// [`DEFAULT_LOG_LEVEL`]. Without an explicit level the first source is
/// omitted entirely.
pub fn level_chain(
    log_level: Option<&str>,
    config_file_path: impl Into<PathBuf>,
    env_var: &str,
) -> LevelChain {
    let mut chain = LevelChain::new();
    if let Some(name) = log_level {
        chain = chain.with_source(ExplicitLevel::new(name));
    }
    chain
        .with_source(ConfigFileLevel::new(config_file_path))
        .with_source(EnvLevel::new(env_var))
        .with_source(DefaultLevel(DEFAULT_LOG_LEVEL))
}

/// Resolve a level through `chain`, apply it to `logger` and make sure one
/// handler is attached
///
/// `make_handler` runs only when `logger` has no handlers yet.
pub fn configure_logger<'a>(
    logger: &'a Logger,
    chain: &LevelChain,
    make_handler: impl FnOnce() -> SharedHandler,
) -> LogResult<&'a Logger> {
    let resolution = chain.resolve()?;
    logger.set_level(resolution.severity);
    logger.add_handler_if_none(make_handler);

    logger.debug(&format!(
        "log level {} resolved from {}",
        resolution.severity, resolution.source
    ));
    Ok(logger)
}

/// Create or reconfigure the shared `bodywork` logger
///
/// If `log_level` is given it takes precedence over everything else and must
/// be one of `DEBUG`, `INFO`, `WARNING`, `ERROR` or `CRITICAL`. Otherwise the
/// level comes from `logging.log_level` in the config file at
/// `config_file_path`, then from `BODYWORK_LOG_LEVEL`, then defaults to INFO.
///
/// # Example
///
/// ```no_run
/// use bodywork_logging::log_factory;
///
/// let log = log_factory(Some("DEBUG"), "bodywork.yaml").unwrap();
/// log.info("starting deployment");
/// ```
pub fn log_factory(
    log_level: Option<&str>,
    config_file_path: impl AsRef<Path>,
) -> LogResult<&'static Logger> {
    let chain = level_chain(
        log_level,
        config_file_path.as_ref(),
        DEFAULT_LOG_LEVEL_ENV_VAR,
    );
    configure_logger(get_logger(), &chain, || {
        Arc::new(ConsoleHandler::new(shared_console(), default_handler_config()))
    })
}

/// [`log_factory`] with the config file at its default location
pub fn default_log_factory(log_level: Option<&str>) -> LogResult<&'static Logger> {
    log_factory(log_level, default_config_path())
}

/// Current threshold of the shared logger
pub fn current_level() -> Severity {
    get_logger().level()
}

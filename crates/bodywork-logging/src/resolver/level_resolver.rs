//! Level sources and the chain that consults them in order

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, ProjectConfigFile};
use crate::logging::Severity;

/// Reasons a source failed to produce a level
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid log level: {0:?} (expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
    InvalidSeverityName(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment variable {0} is not set")]
    MissingEnvValue(String),

    #[error("Environment variable {var} holds an unknown log level: {value:?}")]
    InvalidEnvValue { var: String, value: String },

    #[error("No source resolved a log level")]
    Unresolved,
}

/// What the chain does when a source fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFailure {
    /// Stop and return the error to the caller
    Propagate,
    /// Move on to the next source
    FallThrough,
}

/// A single place a log level can come from
pub trait LevelSource: Send + Sync {
    /// Short name used to report where a level came from
    fn name(&self) -> &str;

    /// Try to produce a level
    fn resolve(&self) -> Result<Severity, ResolveError>;

    /// How the chain treats a failure from this source
    fn on_failure(&self) -> OnFailure {
        OnFailure::FallThrough
    }
}

/// Level named directly by the caller
///
/// An unknown name is fatal: the caller asked for it, so it is never
/// silently replaced.
#[derive(Debug, Clone)]
pub struct ExplicitLevel {
    name: String,
}

impl ExplicitLevel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LevelSource for ExplicitLevel {
    fn name(&self) -> &str {
        "argument"
    }

    fn resolve(&self) -> Result<Severity, ResolveError> {
        self.name.parse()
    }

    fn on_failure(&self) -> OnFailure {
        OnFailure::Propagate
    }
}

/// Level read from the project config file
#[derive(Debug, Clone)]
pub struct ConfigFileLevel {
    file: ProjectConfigFile,
}

impl ConfigFileLevel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: ProjectConfigFile::new(path),
        }
    }
}

impl LevelSource for ConfigFileLevel {
    fn name(&self) -> &str {
        "config file"
    }

    fn resolve(&self) -> Result<Severity, ResolveError> {
        Ok(self.file.log_level()?)
    }
}

/// Level read from an environment variable
///
/// Unset and unrecognised values both fall through.
#[derive(Debug, Clone)]
pub struct EnvLevel {
    var: String,
}

impl EnvLevel {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl LevelSource for EnvLevel {
    fn name(&self) -> &str {
        "environment"
    }

    fn resolve(&self) -> Result<Severity, ResolveError> {
        let value = env::var(&self.var).map_err(|_| ResolveError::MissingEnvValue(self.var.clone()))?;
        Severity::from_name(&value).ok_or_else(|| ResolveError::InvalidEnvValue {
            var: self.var.clone(),
            value,
        })
    }
}

/// A fixed fallback level that always resolves
#[derive(Debug, Clone, Copy)]
pub struct DefaultLevel(pub Severity);

impl LevelSource for DefaultLevel {
    fn name(&self) -> &str {
        "default"
    }

    fn resolve(&self) -> Result<Severity, ResolveError> {
        Ok(self.0)
    }
}

/// A resolved level and the source that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub severity: Severity,
    pub source: String,
}

/// Ordered list of level sources; the first success wins
///
/// # Example
///
/// ```
/// use bodywork_logging::resolver::{DefaultLevel, EnvLevel, LevelChain};
/// use bodywork_logging::Severity;
///
/// let chain = LevelChain::new()
///     .with_source(EnvLevel::new("MY_APP_LOG_LEVEL_UNSET"))
///     .with_source(DefaultLevel(Severity::Info));
///
/// let resolution = chain.resolve().unwrap();
/// assert_eq!(resolution.severity, Severity::Info);
/// assert_eq!(resolution.source, "default");
/// ```
#[derive(Default)]
pub struct LevelChain {
    sources: Vec<Box<dyn LevelSource>>,
}

impl LevelChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source at the lowest priority so far
    pub fn with_source(mut self, source: impl LevelSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn sources(&self) -> &[Box<dyn LevelSource>] {
        &self.sources
    }

    /// Consult each source in order
    ///
    /// Returns the first success. A failing source either ends resolution
    /// with its error or is skipped, per its [`OnFailure`].
    pub fn resolve(&self) -> Result<Resolution, ResolveError> {
        for source in &self.sources {
            match source.resolve() {
                Ok(severity) => {
                    return Ok(Resolution {
                        severity,
                        source: source.name().to_string(),
                    })
                }
                Err(e) => match source.on_failure() {
                    OnFailure::Propagate => return Err(e),
                    OnFailure::FallThrough => continue,
                },
            }
        }
        Err(ResolveError::Unresolved)
    }
}

impl std::fmt::Debug for LevelChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("LevelChain").field("sources", &names).finish()
    }
}

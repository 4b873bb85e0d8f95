//! Log-level resolution from an ordered chain of sources
//!
//! Source priority (first success wins):
//! 1. Explicit argument from the caller
//! 2. `logging.log_level` in the project config file
//! 3. `BODYWORK_LOG_LEVEL` environment variable
//! 4. Built-in default (INFO)

mod level_resolver;

pub use level_resolver::{
    ConfigFileLevel, DefaultLevel, EnvLevel, ExplicitLevel, LevelChain, LevelSource, OnFailure,
    Resolution, ResolveError,
};

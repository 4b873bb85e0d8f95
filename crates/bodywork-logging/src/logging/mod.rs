//! Logger, severity levels and the console output handler

mod traits;
mod console;
mod logger;
pub mod level;

pub use traits::{Handler, Record, SharedHandler};
pub use console::{shared_console, Console, ConsoleHandler, HandlerConfig, Highlighter};
pub use logger::Logger;
pub use level::{Severity, SEVERITY_NAMES};

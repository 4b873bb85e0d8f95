//! Handler trait and the record type handlers consume

use std::error::Error;
use std::sync::Arc;

use super::level::Severity;

/// A single log event, as handed to every attached handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Severity of the event
    pub severity: Severity,
    /// Name of the logger that produced it
    pub logger: String,
    /// Rendered message
    pub message: String,
    /// Source file, when captured by one of the `log_*!` macros
    pub file: Option<&'static str>,
    /// Source line, when captured by one of the `log_*!` macros
    pub line: Option<u32>,
    /// Error chain attached to the event, outermost error first
    pub error_chain: Vec<String>,
}

impl Record {
    pub fn new(severity: Severity, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            logger: logger.into(),
            message: message.into(),
            file: None,
            line: None,
            error_chain: Vec::new(),
        }
    }

    /// Attach the source location of the call site
    pub fn with_location(mut self, file: &'static str, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Attach an error and walk its `source()` chain
    pub fn with_error(mut self, error: &(dyn Error + 'static)) -> Self {
        let mut current: Option<&(dyn Error + 'static)> = Some(error);
        while let Some(err) = current {
            self.error_chain.push(err.to_string());
            current = err.source();
        }
        self
    }

    pub fn has_error(&self) -> bool {
        !self.error_chain.is_empty()
    }
}

/// Output handler abstraction
///
/// Implementations:
/// - `ConsoleHandler`: human-readable lines on a shared console
pub trait Handler: Send + Sync {
    /// Human-readable name of this handler
    fn name(&self) -> &str;

    /// Format and write a record
    ///
    /// Threshold filtering happens in the logger before this is called.
    fn emit(&self, record: &Record);
}

/// Type alias for an Arc-wrapped handler
pub type SharedHandler = Arc<dyn Handler>;

/// Convenience macros for logging with the call site attached
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::logging::Severity::Debug, format!($($arg)*), file!(), line!())
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::logging::Severity::Info, format!($($arg)*), file!(), line!())
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::logging::Severity::Warning, format!($($arg)*), file!(), line!())
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::logging::Severity::Error, format!($($arg)*), file!(), line!())
    };
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::logging::Severity::Critical, format!($($arg)*), file!(), line!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk full")
        }
    }

    impl Error for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failed to write artefact")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_record_defaults() {
        let record = Record::new(Severity::Info, "bodywork", "hello");
        assert_eq!(record.logger, "bodywork");
        assert!(record.file.is_none());
        assert!(!record.has_error());
    }

    #[test]
    fn test_record_error_chain() {
        let err = Outer(Inner);
        let record = Record::new(Severity::Error, "bodywork", "stage failed").with_error(&err);
        assert_eq!(
            record.error_chain,
            vec!["failed to write artefact".to_string(), "disk full".to_string()]
        );
    }

    #[test]
    fn test_record_location() {
        let record = Record::new(Severity::Debug, "bodywork", "x").with_location("src/a.rs", 12);
        assert_eq!(record.file, Some("src/a.rs"));
        assert_eq!(record.line, Some(12));
    }
}

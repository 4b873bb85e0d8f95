//! Named logger with a severity threshold and an append-only handler list

use std::error::Error;

use parking_lot::{Mutex, RwLock};

use super::level::Severity;
use super::traits::{Record, SharedHandler};
use crate::constants::DEFAULT_LOG_LEVEL;

/// A named logger
///
/// Records below the threshold are dropped. Records at or above it are passed
/// to every attached handler in attachment order. Handlers can be added but
/// never removed.
pub struct Logger {
    name: String,
    level: RwLock<Severity>,
    handlers: Mutex<Vec<SharedHandler>>,
}

impl Logger {
    /// Create a logger with no handlers and the default threshold
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(DEFAULT_LOG_LEVEL),
            handlers: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current severity threshold
    pub fn level(&self) -> Severity {
        *self.level.read()
    }

    pub fn set_level(&self, level: Severity) {
        *self.level.write() = level;
    }

    /// Whether a record at `severity` would be emitted
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity >= self.level()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn has_handlers(&self) -> bool {
        self.handler_count() > 0
    }

    /// Append a handler unconditionally
    pub fn add_handler(&self, handler: SharedHandler) {
        self.handlers.lock().push(handler);
    }

    /// Attach the handler built by `make` only if none is attached yet
    ///
    /// The check and the push happen under one lock, so concurrent callers
    /// attach at most one handler between them. Returns whether `make` ran.
    pub fn add_handler_if_none(&self, make: impl FnOnce() -> SharedHandler) -> bool {
        let mut handlers = self.handlers.lock();
        if !handlers.is_empty() {
            return false;
        }
        handlers.push(make());
        true
    }

    /// Dispatch a fully built record
    pub fn log(&self, record: Record) {
        if !self.is_enabled_for(record.severity) {
            return;
        }
        // Clone the list so a handler that logs cannot deadlock on it
        let handlers = self.handlers.lock().clone();
        for handler in handlers {
            handler.emit(&record);
        }
    }

    /// Log with a call-site location. Used by the `log_*!` macros.
    pub fn log_at(&self, severity: Severity, message: String, file: &'static str, line: u32) {
        if !self.is_enabled_for(severity) {
            return;
        }
        self.log(Record::new(severity, self.name.as_str(), message).with_location(file, line));
    }

    fn log_message(&self, severity: Severity, message: &str) {
        if !self.is_enabled_for(severity) {
            return;
        }
        self.log(Record::new(severity, self.name.as_str(), message));
    }

    pub fn debug(&self, message: &str) {
        self.log_message(Severity::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log_message(Severity::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log_message(Severity::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log_message(Severity::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log_message(Severity::Critical, message);
    }

    /// Log at ERROR with `error` and its source chain attached
    pub fn exception(&self, message: &str, error: &(dyn Error + 'static)) {
        if !self.is_enabled_for(Severity::Error) {
            return;
        }
        self.log(Record::new(Severity::Error, self.name.as_str(), message).with_error(error));
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &format!("[{} handlers]", self.handler_count()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Handler;
    use std::sync::Arc;

    /// Handler that keeps every record it receives
    #[derive(Default)]
    struct RecordingHandler {
        records: Mutex<Vec<Record>>,
    }

    impl RecordingHandler {
        fn messages(&self) -> Vec<String> {
            self.records.lock().iter().map(|r| r.message.clone()).collect()
        }
    }

    impl Handler for RecordingHandler {
        fn name(&self) -> &str {
            "recording"
        }

        fn emit(&self, record: &Record) {
            self.records.lock().push(record.clone());
        }
    }

    #[test]
    fn test_new_logger() {
        let logger = Logger::new("bodywork");
        assert_eq!(logger.name(), "bodywork");
        assert_eq!(logger.level(), Severity::Info);
        assert!(!logger.has_handlers());
    }

    #[test]
    fn test_threshold_filters_records() {
        let logger = Logger::new("test");
        let recorder = Arc::new(RecordingHandler::default());
        logger.add_handler(recorder.clone());
        logger.set_level(Severity::Warning);

        logger.debug("d");
        logger.info("i");
        logger.warning("w");
        logger.error("e");
        logger.critical("c");

        assert_eq!(recorder.messages(), vec!["w", "e", "c"]);
    }

    #[test]
    fn test_add_handler_if_none_is_idempotent() {
        let logger = Logger::new("test");
        let first = logger.add_handler_if_none(|| Arc::new(RecordingHandler::default()));
        let second = logger.add_handler_if_none(|| panic!("second handler must not be built"));

        assert!(first);
        assert!(!second);
        assert_eq!(logger.handler_count(), 1);
    }

    #[test]
    fn test_add_handler_if_none_concurrent() {
        let logger = Arc::new(Logger::new("test"));
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let logger = logger.clone();
                std::thread::spawn(move || {
                    logger.add_handler_if_none(|| Arc::new(RecordingHandler::default()))
                })
            })
            .collect();

        let attached = threads
            .into_iter()
            .map(|t| t.join().unwrap())
            .filter(|attached| *attached)
            .count();

        assert_eq!(attached, 1);
        assert_eq!(logger.handler_count(), 1);
    }

    #[test]
    fn test_records_reach_handlers_in_order() {
        let logger = Logger::new("test");
        let a = Arc::new(RecordingHandler::default());
        let b = Arc::new(RecordingHandler::default());
        logger.add_handler(a.clone());
        logger.add_handler(b.clone());

        logger.info("hello");

        assert_eq!(a.messages(), vec!["hello"]);
        assert_eq!(b.messages(), vec!["hello"]);
        assert_eq!(a.records.lock()[0].logger, "test");
    }

    #[test]
    fn test_exception_attaches_error() {
        let logger = Logger::new("test");
        let recorder = Arc::new(RecordingHandler::default());
        logger.add_handler(recorder.clone());

        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        logger.exception("could not load", &err);

        let records = recorder.records.lock();
        assert_eq!(records[0].severity, Severity::Error);
        assert_eq!(records[0].error_chain, vec!["no such file".to_string()]);
    }

    #[test]
    fn test_macros_capture_location() {
        let logger = Logger::new("test");
        let recorder = Arc::new(RecordingHandler::default());
        logger.add_handler(recorder.clone());
        logger.set_level(Severity::Debug);

        crate::log_debug!(logger, "stage {} of {}", 1, 3);
        crate::log_critical!(logger, "gone");

        let records = recorder.records.lock();
        assert_eq!(records[0].message, "stage 1 of 3");
        assert_eq!(records[0].severity, Severity::Debug);
        assert!(records[0].file.is_some_and(|f| f.ends_with("logger.rs")));
        assert!(records[0].line.is_some());
        assert_eq!(records[1].severity, Severity::Critical);
    }
}

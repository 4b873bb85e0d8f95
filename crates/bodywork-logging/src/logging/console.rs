//! Console handler implementation

use std::io::{self, Write};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::traits::{Handler, Record};
use crate::constants::LOG_TIME_FORMAT;

const BOLD_CYAN: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

/// A lock-guarded writer shared by everything that prints to the terminal
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Console writing to stderr
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Console writing to an arbitrary sink
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Write one line and flush. Write failures are dropped.
    pub fn write_line(&self, line: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

static CONSOLE: Lazy<Arc<Console>> = Lazy::new(|| Arc::new(Console::stderr()));

/// The process-wide terminal console
pub fn shared_console() -> Arc<Console> {
    CONSOLE.clone()
}

/// How message text is decorated before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlighter {
    /// Leave messages untouched
    #[default]
    Null,
    /// Render runs of digits in bold cyan
    Numbers,
}

impl Highlighter {
    pub fn apply(&self, message: &str) -> String {
        match self {
            Highlighter::Null => message.to_string(),
            Highlighter::Numbers => {
                let mut out = String::with_capacity(message.len());
                let mut in_digits = false;
                for c in message.chars() {
                    let is_digit = c.is_ascii_digit();
                    if is_digit && !in_digits {
                        out.push_str(BOLD_CYAN);
                    } else if !is_digit && in_digits {
                        out.push_str(RESET);
                    }
                    in_digits = is_digit;
                    out.push(c);
                }
                if in_digits {
                    out.push_str(RESET);
                }
                out
            }
        }
    }
}

/// Presentation settings for a [`ConsoleHandler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// `chrono` format string for the timestamp column
    pub time_format: String,
    /// Append `file:line` when the record carries a location
    pub show_path: bool,
    /// Render the full error chain instead of the outermost error only
    pub rich_tracebacks: bool,
    pub highlighter: Highlighter,
    /// Blank out a timestamp identical to the previous record's
    pub omit_repeated_times: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            time_format: LOG_TIME_FORMAT.to_string(),
            show_path: false,
            rich_tracebacks: true,
            highlighter: Highlighter::Null,
            omit_repeated_times: false,
        }
    }
}

/// A handler that writes one human-readable line per record to a [`Console`]
#[derive(Debug)]
pub struct ConsoleHandler {
    console: Arc<Console>,
    config: HandlerConfig,
    last_time: Mutex<Option<String>>,
}

impl ConsoleHandler {
    pub fn new(console: Arc<Console>, config: HandlerConfig) -> Self {
        Self {
            console,
            config,
            last_time: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Render a record as it would be printed at `now`
    pub fn format_record(&self, record: &Record, now: &NaiveDateTime) -> String {
        let time = self.time_column(now.format(&self.config.time_format).to_string());
        let message = self.config.highlighter.apply(&record.message);

        let mut line = format!("{} {:<8} {}", time, record.severity.as_str(), message);

        if self.config.show_path {
            if let (Some(file), Some(lineno)) = (record.file, record.line) {
                line.push_str(&format!(" {}:{}", file, lineno));
            }
        }

        if let Some((outer, causes)) = record.error_chain.split_first() {
            line.push_str(&format!("\n  Error: {}", outer));
            if self.config.rich_tracebacks {
                for cause in causes {
                    line.push_str(&format!("\n  Caused by: {}", cause));
                }
            }
        }

        line
    }

    fn time_column(&self, time: String) -> String {
        let mut last = self.last_time.lock();
        if self.config.omit_repeated_times && last.as_deref() == Some(time.as_str()) {
            return " ".repeat(time.chars().count());
        }
        *last = Some(time.clone());
        time
    }
}

impl Handler for ConsoleHandler {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, record: &Record) {
        let line = self.format_record(record, &Local::now().naive_local());
        self.console.write_line(&line);
    }
}

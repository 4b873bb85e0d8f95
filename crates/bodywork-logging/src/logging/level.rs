//! Severity levels and the name table used to look them up

use std::fmt;
use std::str::FromStr;

use crate::resolver::ResolveError;

/// Log severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

/// Every severity paired with its canonical name
///
/// Lookups are case-sensitive: `"INFO"` resolves, `"info"` does not.
pub const SEVERITY_NAMES: [(&str, Severity); 5] = [
    ("DEBUG", Severity::Debug),
    ("INFO", Severity::Info),
    ("WARNING", Severity::Warning),
    ("ERROR", Severity::Error),
    ("CRITICAL", Severity::Critical),
];

impl Severity {
    /// Look up a severity by its canonical name
    ///
    /// Returns `None` for anything outside [`SEVERITY_NAMES`], leaving the
    /// caller to decide whether that is fatal.
    pub fn from_name(name: &str) -> Option<Self> {
        SEVERITY_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, severity)| *severity)
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Numeric value, spaced by ten so levels sort and compare as integers
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ResolveError::InvalidSeverityName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info > Severity::Debug);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Critical > Severity::Error);
    }

    #[test]
    fn test_name_table_is_consistent() {
        for (name, severity) in SEVERITY_NAMES {
            assert_eq!(Severity::from_name(name), Some(severity));
            assert_eq!(severity.as_str(), name);
            assert_eq!(severity.to_string(), name);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Severity::from_name("info"), None);
        assert_eq!(Severity::from_name("Warning"), None);
        assert_eq!(Severity::from_name("WARN"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn test_from_str_reports_bad_name() {
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);

        let err = "LOUD".parse::<Severity>().unwrap_err();
        assert!(matches!(err, ResolveError::InvalidSeverityName(ref name) if name == "LOUD"));
    }

    #[test]
    fn test_values() {
        assert_eq!(Severity::Debug.value(), 10);
        assert_eq!(Severity::Critical.value(), 50);
    }
}

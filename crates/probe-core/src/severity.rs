use std::fmt;

/// Nagios/Icinga service severity.
///
/// Ordered so that `max` picks the worse state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Derive the severity of a formatted verdict string.
    ///
    /// Purely textual and case-sensitive: the generic classification rules
    /// pass vendor state tokens through verbatim, so the literal words
    /// `Critical` and `Warning` appear in the output exactly when a sensor
    /// reported them. `Critical` outranks `Warning`; neither means healthy.
    pub fn of_output(text: &str) -> Severity {
        if text.contains("Critical") {
            Severity::Critical
        } else if text.contains("Warning") {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }

    /// The status-line prefix, e.g. `CRITICAL`.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// The conventional Nagios process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

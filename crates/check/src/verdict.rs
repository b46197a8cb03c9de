use std::fmt;

/// Severity of a check outcome.
///
/// Declaration order is the aggregation precedence: when several results
/// disagree, the numerically greatest variant wins. The process exit code
/// is a separate, fixed table (`OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3`)
/// and deliberately does not follow this ordering.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    /// Everything within bounds.
    Ok,
    /// Degraded but not yet an emergency.
    Warning,
    /// The check could not determine the state.
    Unknown,
    /// Out of bounds or a guarded resource is broken.
    Critical,
}

impl Verdict {
    /// Exit code understood by the invoking monitoring supervisor.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Uppercase severity word used at the start of the report line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

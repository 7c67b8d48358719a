//! Matchers: the two line patterns the call-flow scans depend on.

use tracing::debug;

use super::{PatternError, PatternMatcher};

/// Patterns recognised in switch log lines.
pub struct Patterns;

impl Patterns {
    /// UUID-shaped call identifier: 36 hex digits or hyphens (case-insensitive).
    pub const CALL_ID: &'static str = r"[a-f0-9-]{36}";

    /// Dialplan transfer to a numbered destination; group 1 is the destination.
    pub const TRANSFER: &'static str = r"Transfer .*? to XML\[([0-9]+)@";
}

/// Both line matchers, compiled once and shared by every scan.
#[derive(Debug, Clone)]
pub struct LineMatchers {
    call_id: PatternMatcher,
    transfer: PatternMatcher,
}

impl LineMatchers {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            call_id: PatternMatcher::new(Patterns::CALL_ID, false)?,
            transfer: PatternMatcher::new(Patterns::TRANSFER, true)?,
        })
    }

    /// First call-identifier token on the line.
    pub fn call_id<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.call_id.find(line)
    }

    /// Destination number of the transfer on the line, if any.
    ///
    /// A digit run too long for `u64` saturates to `u64::MAX`; it lies
    /// outside every destination range either way.
    pub fn destination(&self, line: &str) -> Option<u64> {
        let digits = self.transfer.capture(line, 1)?;
        match digits.parse::<u64>() {
            Ok(destination) => Some(destination),
            Err(e) => {
                debug!("Saturating transfer destination {}: {}", digits, e);
                Some(u64::MAX)
            }
        }
    }
}

use grep_matcher::{Captures, Matcher};
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// A single compiled regex over one log line.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    matcher: RegexMatcher,
}

impl PatternMatcher {
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, PatternError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(!case_sensitive)
            .multi_line(false)
            .build(pattern)
            .map_err(|e| PatternError::InvalidRegex(e.to_string()))?;

        Ok(Self { matcher })
    }

    #[inline]
    pub fn is_match(&self, line: &str) -> bool {
        self.matcher.is_match(line.as_bytes()).unwrap_or(false)
    }

    /// Text of the leftmost match.
    pub fn find<'a>(&self, line: &'a str) -> Option<&'a str> {
        let m = self.matcher.find(line.as_bytes()).ok()??;
        line.get(m.start()..m.end())
    }

    /// Text of capture group `group` in the leftmost match.
    pub fn capture<'a>(&self, line: &'a str, group: usize) -> Option<&'a str> {
        let mut caps = self.matcher.new_captures().ok()?;
        if !self.matcher.captures(line.as_bytes(), &mut caps).ok()? {
            return None;
        }
        let m = caps.get(group)?;
        line.get(m.start()..m.end())
    }
}

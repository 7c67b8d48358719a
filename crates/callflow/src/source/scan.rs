use super::SourceError;

/// Result of one full pass over the log.
///
/// `value` is always usable: when the pass was cut short, it holds whatever
/// was computed from the lines read before the failure, and `failure`
/// keeps the cause for diagnostics.
#[derive(Debug)]
pub struct Scan<T> {
    pub value: T,
    pub lines_scanned: u64,
    /// Distinct lines retained for deduplication; zero for scans that keep none.
    pub distinct_lines: u64,
    pub failure: Option<SourceError>,
}

impl<T> Scan<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            lines_scanned: 0,
            distinct_lines: 0,
            failure: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

//! Extract: ordered routing events for one call identifier.

use std::collections::HashSet;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::{debug, trace};

use crate::pattern::LineMatchers;
use crate::source::{LineSource, Scan};
use super::{classify, CallEvent, CallId};

pub struct CallFlowExtractor {
    matchers: Arc<LineMatchers>,
}

impl CallFlowExtractor {
    pub fn new(matchers: Arc<LineMatchers>) -> Self {
        Self { matchers }
    }

    /// Replay the log and collect a routing event for every distinct line
    /// that mentions `call_id` and carries a transfer.
    ///
    /// A line is marked seen the first time it mentions the call, whether or
    /// not it holds a transfer; byte-identical repeats are skipped after that.
    pub async fn extract(&self, call_id: &CallId, source: &LineSource) -> Scan<Vec<CallEvent>> {
        let mut scan = Scan::new(Vec::new());
        let mut seen: HashSet<String> = HashSet::new();
        let lines = source.lines();
        tokio::pin!(lines);

        while let Some(item) = lines.next().await {
            let line = match item {
                Ok(line) => line,
                Err(e) => {
                    scan.failure = Some(e);
                    break;
                }
            };
            scan.lines_scanned += 1;

            if !line.contains(call_id.as_str()) {
                continue;
            }
            if seen.contains(&line) {
                trace!("Skipping repeated line for {}", call_id);
                continue;
            }

            if let Some(event) = self.event_for(&line) {
                scan.value.push(event);
            }
            seen.insert(line);
        }
        scan.distinct_lines = seen.len() as u64;

        debug!(
            "Extracted {} events for {} from {} distinct lines ({} scanned)",
            scan.value.len(),
            call_id,
            scan.distinct_lines,
            scan.lines_scanned
        );
        scan
    }

    fn event_for(&self, line: &str) -> Option<CallEvent> {
        let destination = self.matchers.destination(line)?;
        Some(CallEvent {
            event_label: classify(destination),
            destination,
            raw_log: trim_log(line).to_string(),
        })
    }
}

/// Strip surrounding whitespace and byte-order marks.
fn trim_log(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

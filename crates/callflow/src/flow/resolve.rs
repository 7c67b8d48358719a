//! Resolve: phone number to the call identifier of its latest call.

use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::debug;

use crate::pattern::LineMatchers;
use crate::source::{LineSource, Scan};
use super::CallId;

pub struct CallIdResolver {
    matchers: Arc<LineMatchers>,
}

impl CallIdResolver {
    pub fn new(matchers: Arc<LineMatchers>) -> Self {
        Self { matchers }
    }

    /// Scan the whole log for lines containing `phone_number` and keep the
    /// identifier from the last one that carries an identifier.
    ///
    /// The most recent mention decides: an identifier found on a later line
    /// replaces any found earlier. A source failure ends the scan with the
    /// best identifier seen so far and is reported in `failure`.
    pub async fn resolve(&self, phone_number: &str, source: &LineSource) -> Scan<Option<CallId>> {
        let mut scan = Scan::new(None);
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

            if !line.contains(phone_number) {
                continue;
            }
            if let Some(id) = self.matchers.call_id(&line) {
                scan.value = Some(CallId::new(id));
            }
        }

        debug!(
            "Resolved {} to {:?} after {} lines",
            phone_number, scan.value, scan.lines_scanned
        );
        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixture::{directory_source, log_file, missing_source, source_for};
    use crate::source::SourceError;

    fn resolver() -> CallIdResolver {
        CallIdResolver::new(Arc::new(LineMatchers::new().expect("matchers")))
    }

    #[tokio::test]
    async fn test_last_match_wins() {
        let file = log_file(
            "[INFO] new call 5551234 id=ABCDEF01-2345-6789-ABCD-EF0123456789 inbound\n\
             [INFO] unrelated 5559999 id=99999999-9999-9999-9999-999999999999\n\
             [INFO] redial 5551234 id=11111111-2222-3333-4444-555555555555 inbound\n",
        );

        let scan = resolver().resolve("5551234", &source_for(&file)).await;

        assert!(scan.is_complete());
        assert_eq!(scan.lines_scanned, 3);
        assert_eq!(
            scan.into_value(),
            Some(CallId::new("11111111-2222-3333-4444-555555555555"))
        );
    }

    #[tokio::test]
    async fn test_later_line_without_id_keeps_earlier_id() {
        let file = log_file(
            "5551234 id=ABCDEF01-2345-6789-ABCD-EF0123456789\n\
             5551234 hung up, no uuid on this line\n",
        );

        let id = resolver().resolve("5551234", &source_for(&file)).await.into_value();

        assert_eq!(id, Some(CallId::new("ABCDEF01-2345-6789-ABCD-EF0123456789")));
    }

    #[tokio::test]
    async fn test_id_without_phone_number_is_ignored() {
        let file = log_file("id=ABCDEF01-2345-6789-ABCD-EF0123456789 from 5550000\n");

        let id = resolver().resolve("5551234", &source_for(&file)).await.into_value();

        assert_eq!(id, None);
    }

    #[tokio::test]
    async fn test_read_failure_resolves_nothing() {
        let (_dir, source) = directory_source();

        let scan = resolver().resolve("5551234", &source).await;

        assert!(matches!(scan.failure, Some(SourceError::ReadFailure { .. })));
        assert_eq!(scan.value, None);
    }

    #[tokio::test]
    async fn test_missing_log_resolves_nothing() {
        let scan = resolver().resolve("5551234", &missing_source()).await;

        assert_eq!(scan.lines_scanned, 0);
        assert!(matches!(scan.failure, Some(SourceError::LogUnavailable { .. })));
        assert_eq!(scan.value, None);
    }
}

use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio_stream::Stream;

use super::{LineSplitter, SourceError};

/// Read size per await point.
pub const DEFAULT_CHUNK_BYTES: usize = 64 * 1024;

/// Handle on the switch log. Cheap to clone; holds no open file.
#[derive(Debug, Clone)]
pub struct LineSource {
    path: PathBuf,
    chunk_bytes: usize,
}

impl LineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            chunk_bytes: DEFAULT_CHUNK_BYTES,
        }
    }

    pub fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Self {
        self.chunk_bytes = chunk_bytes.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the log and stream its lines in file order.
    ///
    /// The file is opened when the stream is first polled. A missing file
    /// yields a single `LogUnavailable` item; a read error mid-file is
    /// yielded after every line completed before it, and ends the stream.
    pub fn lines(&self) -> impl Stream<Item = Result<String, SourceError>> + Send + 'static {
        let path = self.path.clone();
        let chunk_bytes = self.chunk_bytes;

        async_stream::try_stream! {
            let mut file = File::open(&path)
                .await
                .map_err(|e| SourceError::on_open(&path, e))?;

            let mut buf = vec![0u8; chunk_bytes];
            let mut splitter = LineSplitter::new();

            loop {
                let read = file
                    .read(&mut buf)
                    .await
                    .map_err(|e| SourceError::on_read(&path, e))?;
                if read == 0 {
                    break;
                }
                for line in splitter.push(&buf[..read]) {
                    yield line;
                }
            }

            if let Some(line) = splitter.finish() {
                yield line;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixture::{directory_source, log_file, missing_source, source_for};
    use tokio_stream::StreamExt;

    async fn collect(source: &LineSource) -> Vec<Result<String, SourceError>> {
        source.lines().collect().await
    }

    #[tokio::test]
    async fn test_reads_lines_in_order() {
        let file = log_file("first\r\nsecond\nthird");
        let lines: Vec<String> = collect(&source_for(&file))
            .await
            .into_iter()
            .map(|r| r.expect("line"))
            .collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_tiny_chunks_match_one_big_read() {
        let text = "a-line\r\nb-line\rc-line\n\nd-line\n";
        let file = log_file(text);
        let big: Vec<String> = collect(&source_for(&file))
            .await
            .into_iter()
            .map(|r| r.expect("line"))
            .collect();
        let small: Vec<String> = collect(&source_for(&file).with_chunk_bytes(1))
            .await
            .into_iter()
            .map(|r| r.expect("line"))
            .collect();
        assert_eq!(big, vec!["a-line", "b-line", "c-line", "", "d-line"]);
        assert_eq!(big, small);
    }

    #[tokio::test]
    async fn test_missing_file_yields_unavailable() {
        let items = collect(&missing_source()).await;
        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Err(SourceError::LogUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_unreadable_file_yields_read_failure() {
        let (_dir, source) = directory_source();

        let items = collect(&source).await;

        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], Err(SourceError::ReadFailure { .. })));
    }

    #[tokio::test]
    async fn test_empty_file_yields_nothing() {
        let file = log_file("");
        assert!(collect(&source_for(&file)).await.is_empty());
    }

    #[tokio::test]
    async fn test_each_scan_rereads_the_file() {
        use std::io::Write;

        let mut file = log_file("one\n");
        let source = source_for(&file);
        assert_eq!(collect(&source).await.len(), 1);

        file.write_all(b"two\n").expect("append");
        file.flush().expect("flush");
        assert_eq!(collect(&source).await.len(), 2);
    }

    #[test]
    fn test_zero_chunk_is_clamped() {
        let source = LineSource::new("/tmp/x.log").with_chunk_bytes(0);
        assert_eq!(source.chunk_bytes, 1);
    }
}

//! Analyze: phone number in, ordered call flow out.
//!
//! Two independent passes over the log per query: resolve the call
//! identifier, then replay the log for that identifier. Nothing is shared
//! between the passes or between queries.

use std::sync::Arc;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::conf::CallflowConfig;
use crate::flow::{CallFlow, CallFlowExtractor, CallIdResolver};
use crate::pattern::{LineMatchers, PatternError};
use crate::source::{LineSource, Scan};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Phone number is required")]
    MissingPhoneNumber,
}

/// Outcome of one query. `NotFound` is a normal answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    Found(CallFlow),
    NotFound,
}

impl Analysis {
    pub fn call_flow(&self) -> Option<&CallFlow> {
        match self {
            Analysis::Found(flow) => Some(flow),
            Analysis::NotFound => None,
        }
    }
}

/// Error body in the same shape the call-flow consumers already read.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        Self {
            error: "No call flow found for this number".to_string(),
        }
    }
}

impl From<&AnalyzeError> for ErrorBody {
    fn from(err: &AnalyzeError) -> Self {
        Self { error: err.to_string() }
    }
}

pub struct CallFlowService {
    source: LineSource,
    resolver: CallIdResolver,
    extractor: CallFlowExtractor,
}

impl CallFlowService {
    pub fn new(source: LineSource, matchers: Arc<LineMatchers>) -> Self {
        Self {
            source,
            resolver: CallIdResolver::new(Arc::clone(&matchers)),
            extractor: CallFlowExtractor::new(matchers),
        }
    }

    pub fn from_config(config: &CallflowConfig) -> Result<Self, PatternError> {
        let source = LineSource::new(&config.log_path).with_chunk_bytes(config.read_chunk_bytes);
        Ok(Self::new(source, Arc::new(LineMatchers::new()?)))
    }

    pub async fn analyze(&self, phone_number: &str) -> Result<Analysis, AnalyzeError> {
        // An empty needle would match every line of the log.
        if phone_number.is_empty() {
            return Err(AnalyzeError::MissingPhoneNumber);
        }

        let resolved = self.resolver.resolve(phone_number, &self.source).await;
        self.report("resolve", &resolved);
        let Some(call_id) = resolved.into_value() else {
            info!("No call flow found for {}", phone_number);
            return Ok(Analysis::NotFound);
        };

        let extracted = self.extractor.extract(&call_id, &self.source).await;
        self.report("extract", &extracted);
        let events = extracted.into_value();

        info!(
            "Call flow for {}: call_id={}, events={}",
            phone_number,
            call_id,
            events.len()
        );
        Ok(Analysis::Found(CallFlow { call_id, events }))
    }

    fn report<T>(&self, pass: &str, scan: &Scan<T>) {
        if let Some(failure) = &scan.failure {
            warn!(
                "{} pass over {} stopped after {} lines: {}",
                pass,
                self.source.path().display(),
                scan.lines_scanned,
                failure
            );
        }
    }
}

//! Service module: the per-query pipeline.

pub mod analyze;

pub use analyze::{Analysis, AnalyzeError, CallFlowService, ErrorBody};

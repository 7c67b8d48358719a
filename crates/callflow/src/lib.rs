//! Call-flow reconstruction from a telephony switch log.
//!
//! A query resolves a dialed phone number to the identifier of its most
//! recent call, then replays the log for that identifier and returns the
//! routing decisions in log order.

// Core
pub mod source;
pub mod pattern;
pub mod flow;

// Pipeline and process wiring
pub mod service;
pub mod conf;
pub mod runtime;

pub use flow::{CallEvent, CallFlow, CallId, EventLabel};
pub use service::{Analysis, AnalyzeError, CallFlowService};

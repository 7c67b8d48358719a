//! Flow module: call identifier resolution and routing-event extraction.

pub mod classify;
pub mod extract;
pub mod model;
pub mod resolve;

pub use classify::{classify, DESTINATION_RANGES};
pub use extract::CallFlowExtractor;
pub use model::{CallEvent, CallFlow, CallId, EventLabel};
pub use resolve::CallIdResolver;

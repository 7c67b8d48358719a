//! Source module: lazy line access to the switch log.
//!
//! Every scan reopens the file and reads it front to back; nothing is cached
//! between scans.

pub mod error;
pub mod lines;
pub mod scan;
pub mod split;

#[cfg(test)]
pub(crate) mod fixture;

pub use error::SourceError;
pub use lines::{LineSource, DEFAULT_CHUNK_BYTES};
pub use scan::Scan;
pub use split::LineSplitter;

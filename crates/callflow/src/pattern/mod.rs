//! Pattern module: compiled line matchers.
//!
//! Matchers are built once and are pure afterwards: a line goes in, an
//! optional structured match comes out.

pub mod engine;
pub mod matchers;

pub use engine::{PatternError, PatternMatcher};
pub use matchers::{LineMatchers, Patterns};

//! Request middleware.
//!
//! Cross-cutting request concerns live here; handlers never see them.

pub mod trace;

pub use trace::{Trace, TraceId};

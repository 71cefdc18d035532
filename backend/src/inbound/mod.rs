//! Inbound adapters translating HTTP requests into domain service calls.
//!
//! Framework details stay here; the domain never sees Actix types.

pub mod http;

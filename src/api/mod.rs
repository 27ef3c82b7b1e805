//! HTTP API implementation
//!
//! JSON endpoints in `handlers`, byte streaming in `stream`. Routing lives
//! in `crate::build_router`.

pub mod handlers;
pub mod stream;

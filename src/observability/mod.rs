//! Observability for cinedb
//!
//! Structured JSON logging only. Logging is synchronous, has no side effects
//! on request handling, and must never crash the server.

mod logger;

pub use logger::{Logger, Severity};

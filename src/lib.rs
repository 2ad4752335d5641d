//! cinedb - a schema-flexible movie catalog served over HTTP
//!
//! One resource, "movie", with create/read/update/delete operations and
//! three read-side query variants: exact-field filtering, case-insensitive
//! title search, and inclusive year ranges. Persistence sits behind the
//! [`store::DocumentStore`] trait and is injected into the HTTP layer.

pub mod api;
pub mod cli;
pub mod config;
pub mod observability;
pub mod query;
pub mod server;
pub mod store;

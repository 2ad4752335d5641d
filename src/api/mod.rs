//! # Movie HTTP API
//!
//! Request handling is two stateless steps composed per request: translate
//! the route into a store query or mutation, then map the outcome to a
//! status code and JSON body. All state lives in the injected store.

pub mod errors;
pub mod response;
pub mod routes;

pub use errors::{ApiError, ApiResult, ErrorBody};
pub use response::{MessageBody, WELCOME};
pub use routes::MovieApi;

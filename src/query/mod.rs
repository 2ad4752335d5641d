//! # Query Translation
//!
//! Turns route parameters into store filters: exact-match pairs for listing,
//! a case-insensitive containment pattern for title search, and inclusive
//! integer bounds for year ranges. Translation never touches the store.

mod filter;
mod params;

pub use filter::{CompiledFilter, FieldPredicate, Filter, FilterError, Predicate};
pub use params::{parse_year_bounds, RangeBoundError};

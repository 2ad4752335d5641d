//! # HTTP Routes
//!
//! Axum handlers for the movie collection, generic over the injected store.
//! Handlers translate route parameters into filters or mutations, call the
//! store, and hand outcomes to the response mapper.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::query::{parse_year_bounds, Filter};
use crate::store::DocumentStore;

use super::errors::{ApiError, ApiResult};
use super::response::{MessageBody, WELCOME};

/// The movie catalog HTTP surface
pub struct MovieApi<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore + 'static> MovieApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(welcome_handler))
            .route("/movies", get(list_handler::<S>).post(create_handler::<S>))
            .route(
                "/movies/:id",
                get(get_handler::<S>)
                    .put(update_handler::<S>)
                    .delete(delete_handler::<S>),
            )
            .route("/movies/search/:title", get(search_handler::<S>))
            .route(
                "/movies/range/:start_year/:end_year",
                get(range_handler::<S>),
            )
            .with_state(self.store)
    }
}

/// Root route: plain-text welcome
async fn welcome_handler() -> &'static str {
    WELCOME
}

/// List movies, exact-matching every supplied query pair
async fn list_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Query(pairs): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Value>>> {
    let filter = Filter::from_pairs(pairs);
    Ok(Json(store.find(&filter)?))
}

/// Fetch a single movie by identifier
async fn get_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let movie = store.find_by_id(&id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

/// Case-insensitive title substring search
async fn search_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Value>>> {
    let filter = Filter::contains("title", title);
    Ok(Json(store.find(&filter)?))
}

/// Movies with startYear in the inclusive `[start, end]` range
async fn range_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path((start_year, end_year)): Path<(String, String)>,
) -> ApiResult<Json<Vec<Value>>> {
    let (lo, hi) =
        parse_year_bounds(&start_year, &end_year).map_err(|e| ApiError::InvalidRange(e.to_string()))?;
    let filter = Filter::between("startYear", lo, hi);
    Ok(Json(store.find(&filter)?))
}

/// Create a movie from the request payload as-is
async fn create_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let created = store.insert(body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Merge the payload's fields into an existing movie
async fn update_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let updated = store.update(&id, &body)?.ok_or(ApiError::NotFound)?;
    Ok(Json(updated))
}

/// Remove a movie, confirming whether one existed
async fn delete_handler<S: DocumentStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    if store.remove(&id)? {
        Ok(Json(MessageBody::deleted()))
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_router_builds() {
        let api = MovieApi::new(MemoryStore::new());
        let _router = api.router();
        // If we get here, route registration succeeded
    }
}

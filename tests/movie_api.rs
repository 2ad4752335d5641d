//! HTTP Contract Tests
//!
//! Drives the full router and asserts the status-code and body contract for
//! every route: 200/201 happy paths, 404 with a fixed message for absent
//! documents, 400 for rejected payloads and non-numeric range bounds, and
//! 500 for store-level failures such as malformed identifiers.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cinedb::api::MovieApi;
use cinedb::store::MemoryStore;

// =============================================================================
// Test Utilities
// =============================================================================

fn app() -> Router {
    MovieApi::new(MemoryStore::new()).router()
}

/// Send a request and parse the JSON response body.
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_movie(app: &Router, body: Value) -> Value {
    let (status, created) = send(app, "POST", "/movies", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

// =============================================================================
// Root Route
// =============================================================================

#[tokio::test]
async fn test_root_returns_plain_text_welcome() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("movie catalog"));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_stored_form() {
    let app = app();
    let payload = json!({"title": "Alien", "startYear": 1979, "director": "Ridley Scott"});
    let created = create_movie(&app, payload.clone()).await;

    // Stored form is a superset of the payload, plus store defaults
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&created[key], value);
    }
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_rejected_payload_is_400() {
    let app = app();

    let (status, body) = send(&app, "POST", "/movies", Some(json!({"startYear": 1999}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "failed to add movie");
    assert!(body["error"].is_string());

    let (status, _) = send(&app, "POST", "/movies", Some(json!("just a string"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Get By Id
// =============================================================================

#[tokio::test]
async fn test_get_found_and_absent() {
    let app = app();
    let created = create_movie(&app, json!({"title": "Alien"})).await;
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Alien");

    let (status, body) = send(&app, "GET", &format!("/movies/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "movie not found"}));
}

#[tokio::test]
async fn test_get_malformed_identifier_is_500() {
    let app = app();
    let (status, body) = send(&app, "GET", "/movies/999", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
    assert!(body["error"].is_string());
}

// =============================================================================
// List / Filter
// =============================================================================

#[tokio::test]
async fn test_list_and_exact_filters() {
    let app = app();
    create_movie(&app, json!({"title": "The Matrix", "startYear": 1999, "genre": "Sci-Fi"})).await;
    create_movie(&app, json!({"title": "Heat", "startYear": 1995, "genre": "Crime"})).await;

    let (status, all) = send(&app, "GET", "/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, crime) = send(&app, "GET", "/movies?genre=Crime", None).await;
    assert_eq!(crime.as_array().unwrap().len(), 1);
    assert_eq!(crime[0]["title"], "Heat");

    // Numeric fields match their query-string rendering
    let (_, matrix) = send(&app, "GET", "/movies?startYear=1999", None).await;
    assert_eq!(matrix.as_array().unwrap().len(), 1);
    assert_eq!(matrix[0]["title"], "The Matrix");

    // An unmatched filter is an empty list, not an error
    let (status, none) = send(&app, "GET", "/movies?genre=Western", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_ignores_case() {
    let app = app();
    create_movie(&app, json!({"title": "The Matrix", "startYear": 1999})).await;
    create_movie(&app, json!({"title": "Heat", "startYear": 1995})).await;

    let (status, found) = send(&app, "GET", "/movies/search/matrix", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["title"], "The Matrix");

    let (_, found) = send(&app, "GET", "/movies/search/HEAT", None).await;
    assert_eq!(found[0]["title"], "Heat");

    let (status, none) = send(&app, "GET", "/movies/search/blade", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

// =============================================================================
// Range
// =============================================================================

#[tokio::test]
async fn test_range_is_inclusive_and_order_sensitive() {
    let app = app();
    create_movie(&app, json!({"title": "The Matrix", "startYear": 1999})).await;

    let (status, hit) = send(&app, "GET", "/movies/range/1999/2003", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hit.as_array().unwrap().len(), 1);

    let (status, none) = send(&app, "GET", "/movies/range/2000/2010", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));

    // Inverted bounds are legal and match nothing
    let (status, none) = send(&app, "GET", "/movies/range/2010/2000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_range_non_numeric_bound_is_400() {
    let app = app();
    let (status, body) = send(&app, "GET", "/movies/range/abc/2000", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid year range");
    assert!(body["error"].is_string());
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_and_returns_post_update_form() {
    let app = app();
    let created = create_movie(&app, json!({"title": "Alien", "startYear": 1979})).await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/movies/{}", id),
        Some(json!({"title": "Aliens", "startYear": 1986})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Aliens");
    assert_eq!(updated["startYear"], 1986);
    assert_eq!(updated["id"], created["id"]);
}

#[tokio::test]
async fn test_update_absent_is_404_and_creates_nothing() {
    let app = app();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/movies/{}", Uuid::new_v4()),
        Some(json!({"title": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "movie not found"}));

    let (_, all) = send(&app, "GET", "/movies", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_update_malformed_identifier_is_500() {
    let app = app();
    let (status, body) = send(
        &app,
        "PUT",
        "/movies/999",
        Some(json!({"title": "Ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_then_delete_again() {
    let app = app();
    let created = create_movie(&app, json!({"title": "Alien"})).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "movie deleted successfully"}));

    let (status, _) = send(&app, "GET", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "movie not found"}));
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

/// Seed one movie, then walk search, range, lookup, and delete in sequence.
#[tokio::test]
async fn test_catalog_walkthrough() {
    let app = app();
    let created = create_movie(&app, json!({"title": "The Matrix", "startYear": 1999})).await;
    let id = created["id"].as_str().unwrap();

    let (status, found) = send(&app, "GET", "/movies/search/matrix", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    let (status, none) = send(&app, "GET", "/movies/range/2000/2010", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));

    let (status, body) = send(&app, "GET", &format!("/movies/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "movie not found");

    let (status, body) = send(&app, "DELETE", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "movie deleted successfully");

    let (status, _) = send(&app, "GET", &format!("/movies/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

//! HTTP routing for the API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::debug;
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use wayfarer_core::Catalogue;

use crate::{Api, ApiError, WindowParams};

/// Query pairs in request order; duplicates and unknown keys are kept.
type QueryPairs = Query<Vec<(String, String)>>;

/// Greeting returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Wayfarer API!";

/// Build the API router over `catalogue`.
///
/// Every route is read-only. `/relation/{id}/experiences` matches the path
/// segment against each experience's relation reference verbatim. Requests
/// from any origin are accepted with credentials; preflights get the request
/// origin, method and headers mirrored back.
pub fn create_router(catalogue: Arc<Catalogue>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/relations", get(relations))
        .route("/relations/countries", get(relation_countries))
        .route("/relations/tags", get(relation_tags))
        .route("/relation/{id}", get(relation))
        .route("/relation/{id}/experiences", get(relation_experiences))
        .route("/experiences", get(experiences))
        .route("/experiences/countries", get(experience_countries))
        .route("/experiences/tags", get(experience_tags))
        .route("/experience/{id}", get(experience))
        .route("/countries", get(countries))
        .fallback(not_found)
        .layer(cors())
        .with_state(Api::new(catalogue))
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn welcome() -> Response {
    Json(json!({ "message": WELCOME_MESSAGE })).into_response()
}

async fn relations(State(api): State<Api>, Query(pairs): QueryPairs) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /relations {window:?}");
    Json(api.relations(&window)).into_response()
}

async fn relation(State(api): State<Api>, Path(id): Path<String>) -> Response {
    debug!("GET /relation/{id}");
    match api.relation(&id) {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn relation_experiences(
    State(api): State<Api>,
    Path(relation_ref): Path<String>,
) -> Response {
    debug!("GET /relation/{relation_ref}/experiences");
    Json(api.relation_experiences(&relation_ref)).into_response()
}

async fn experiences(State(api): State<Api>, Query(pairs): QueryPairs) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /experiences {window:?}");
    Json(api.experiences(&window)).into_response()
}

async fn experience(State(api): State<Api>, Path(id): Path<String>) -> Response {
    debug!("GET /experience/{id}");
    match api.experience(&id) {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn countries(State(api): State<Api>, Query(pairs): QueryPairs) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /countries {window:?}");
    Json(api.countries(&window)).into_response()
}

async fn relation_countries(
    State(api): State<Api>,
    Query(pairs): QueryPairs,
) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /relations/countries {window:?}");
    Json(api.relation_countries(&window)).into_response()
}

async fn relation_tags(State(api): State<Api>, Query(pairs): QueryPairs) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /relations/tags {window:?}");
    Json(api.relation_tags(&window)).into_response()
}

async fn experience_countries(
    State(api): State<Api>,
    Query(pairs): QueryPairs,
) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /experiences/countries {window:?}");
    Json(api.experience_countries(&window)).into_response()
}

async fn experience_tags(State(api): State<Api>, Query(pairs): QueryPairs) -> Response {
    let window = pairs.into_iter().collect::<WindowParams>().window();
    debug!("GET /experiences/tags {window:?}");
    Json(api.experience_tags(&window)).into_response()
}

async fn not_found(uri: Uri) -> ApiError {
    debug!("No route for {uri}");
    ApiError::RouteNotFound
}

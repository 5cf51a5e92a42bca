//! HTTP API and static pages for the zoo records service.

mod body;
mod error;

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, Query, State},
    response::Json,
    routing::get,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, warn};
use zoo_model::{validate_animal, Animal, Criteria, NewAnimal};
use zoo_storage::AnimalStore;

pub use body::CandidateBody;
pub use error::ApiError;

/// Message returned when a submitted animal fails validation.
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";

async fn list_animals(
    State(store): State<Arc<AnimalStore>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let criteria = Criteria::from_pairs(pairs)?;
    let animals = tokio::task::spawn_blocking(move || store.query(&criteria)).await??;
    Ok(Json(animals))
}

async fn get_animal(
    State(store): State<Arc<AnimalStore>>,
    UrlPath(id): UrlPath<String>,
) -> Result<Json<Animal>, ApiError> {
    let animal = tokio::task::spawn_blocking(move || store.get(&id)).await??;
    animal.map(Json).ok_or(ApiError::NotFound)
}

async fn create_animal(
    State(store): State<Arc<AnimalStore>>,
    CandidateBody(body): CandidateBody,
) -> Result<Json<Animal>, ApiError> {
    if !validate_animal(&body) {
        warn!("Rejected malformed animal: {}", body);
        return Err(ApiError::InvalidAnimal);
    }
    let candidate: NewAnimal = serde_json::from_value(body).map_err(|e| {
        warn!("Rejected animal with non-string traits: {}", e);
        ApiError::InvalidAnimal
    })?;

    let animal = tokio::task::spawn_blocking(move || store.create(candidate)).await??;
    debug!("Stored animal {:?}", animal);
    Ok(Json(animal))
}

/// Build the JSON API router over the given store.
pub fn api_router(store: Arc<AnimalStore>) -> Router {
    Router::new()
        .route("/api/animals", get(list_animals).post(create_animal))
        .route("/api/animals/{id}", get(get_animal))
        .with_state(store)
}

/// Build the full app: the API plus the HTML pages under `public_dir`.
///
/// Any GET that matches neither a route nor a file in `public_dir` is
/// answered with `index.html`.
pub fn build_router(store: Arc<AnimalStore>, public_dir: impl AsRef<Path>) -> Router {
    let public_dir = public_dir.as_ref();
    let index = public_dir.join("index.html");

    api_router(store)
        .route_service("/", ServeFile::new(&index))
        .route_service("/animals", ServeFile::new(public_dir.join("animals.html")))
        .route_service("/zookeepers", ServeFile::new(public_dir.join("zookeepers.html")))
        .fallback_service(ServeDir::new(public_dir).fallback(ServeFile::new(&index)))
}

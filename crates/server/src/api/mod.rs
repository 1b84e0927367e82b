//! JSON endpoints over the same catalog the pages render.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use browser_core::{filter, pick_random};
use shared::{
    domain::Movie,
    error::{ApiError, ErrorCode},
    protocol::{CatalogState, CatalogStatus, SearchParams, SearchResponse},
};

use crate::app_state::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub(crate) fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/movies", get(search_movies))
        .route("/api/movies/random", get(random_movie))
        .route("/api/catalog/status", get(catalog_status))
}

async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchResponse> {
    let movies = loaded_movies(&state)?;
    let criteria = params.to_criteria();
    let movies: Vec<Movie> = filter(movies, &criteria).into_iter().cloned().collect();
    Ok(Json(SearchResponse {
        criteria,
        count: movies.len(),
        movies,
    }))
}

async fn random_movie(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Movie>> {
    let movies = loaded_movies(&state)?;
    Ok(Json(pick_random(movies).into_iter().cloned().collect()))
}

async fn catalog_status(State(state): State<Arc<AppState>>) -> Json<CatalogStatus> {
    Json(state.presenter.catalog().status())
}

fn loaded_movies(state: &AppState) -> Result<&[Movie], (StatusCode, Json<ApiError>)> {
    let catalog = state.presenter.catalog();
    match catalog.status().state {
        CatalogState::Loaded => Ok(catalog.movies()),
        CatalogState::Pending => Err(unavailable("catalog is still loading")),
        CatalogState::Failed => Err(unavailable("catalog failed to load")),
    }
}

fn unavailable(message: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiError::new(ErrorCode::Unavailable, message)),
    )
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;

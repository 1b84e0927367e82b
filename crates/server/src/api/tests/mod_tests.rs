use super::*;
use axum::{
    body::{self, Body},
    http::Request,
};
use browser_core::Presenter;
use catalog::Catalog;
use tower::ServiceExt;

fn app_with(catalog: Catalog) -> Router {
    routes().with_state(Arc::new(AppState {
        presenter: Presenter::new(catalog),
    }))
}

fn loaded_app() -> Router {
    app_with(Catalog::from_movies(vec![
        Movie::new("A", "Drama", 7.5, 2001, "first"),
        Movie::new("B", "Comedy", 6.0, 2010, "second"),
    ]))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&body).expect("json"))
}

#[tokio::test]
async fn search_returns_matching_movies() {
    let (status, json) = get_json(loaded_app(), "/api/movies?genre=Drama").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["movies"][0]["title"], "A");
    assert_eq!(json["criteria"]["genre"], "Drama");
}

#[tokio::test]
async fn search_without_criteria_returns_everything_in_order() {
    let (_, json) = get_json(loaded_app(), "/api/movies").await;
    let response: SearchResponse = serde_json::from_value(json).expect("response");
    let titles: Vec<&str> = response.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["A", "B"]);
}

#[tokio::test]
async fn search_while_loading_is_unavailable() {
    let (status, json) = get_json(app_with(Catalog::new()), "/api/movies").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "unavailable");
}

#[tokio::test]
async fn random_returns_a_single_catalog_member() {
    let (status, json) = get_json(loaded_app(), "/api/movies/random").await;
    assert_eq!(status, StatusCode::OK);
    let picked: Vec<Movie> = serde_json::from_value(json).expect("movies");
    assert_eq!(picked.len(), 1);
    assert!(["A", "B"].contains(&picked[0].title.as_str()));
}

#[tokio::test]
async fn random_on_empty_loaded_catalog_is_empty() {
    let app = app_with(Catalog::from_movies(Vec::new()));
    let (status, json) = get_json(app, "/api/movies/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn status_reports_failure_message() {
    let catalog = Catalog::new();
    catalog.mark_failed("no such file").expect("mark failed");
    let (status, json) = get_json(app_with(catalog), "/api/catalog/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "failed");
    assert_eq!(json["error"], "no such file");
    assert_eq!(json["movie_count"], 0);
}

#[tokio::test]
async fn status_reports_movie_count() {
    let (_, json) = get_json(loaded_app(), "/api/catalog/status").await;
    assert_eq!(json["state"], "loaded");
    assert_eq!(json["movie_count"], 2);
}

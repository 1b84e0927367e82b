use super::*;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use browser_core::EMPTY_STATE_MESSAGE;
use shared::domain::Movie;
use tower::ServiceExt;

fn app_with(catalog: Catalog) -> Router {
    build_router(Arc::new(AppState {
        presenter: Presenter::new(catalog),
    }))
}

fn loaded_app() -> Router {
    app_with(Catalog::from_movies(vec![
        Movie::new("A", "Drama", 7.5, 2001, "first"),
        Movie::new("B", "Comedy", 6.0, 2010, "second"),
    ]))
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf8"))
}

fn results_of(html: &str) -> &str {
    let start = html.find("<div id=\"results\"").expect("results container");
    let open_end = start + html[start..].find('>').expect("open tag") + 1;
    let close = html.rfind("</div>\n</body>").expect("close tag");
    &html[open_end..close]
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get_text(app_with(Catalog::new()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn index_lists_whole_catalog_in_order() {
    let (status, html) = get_text(loaded_app(), "/").await;
    assert_eq!(status, StatusCode::OK);

    let results = results_of(&html);
    assert_eq!(results.matches("class=\"movie-card\"").count(), 2);
    let a = results.find(">A</h3>").expect("A");
    let b = results.find(">B</h3>").expect("B");
    assert!(a < b);
}

#[tokio::test]
async fn index_is_blank_while_catalog_is_loading() {
    let (status, html) = get_text(app_with(Catalog::new()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("data-catalog=\"pending\""));
    assert_eq!(results_of(&html), "");
    assert!(html.contains("id=\"searchForm\""));
}

#[tokio::test]
async fn search_filters_by_genre() {
    let (_, html) = get_text(loaded_app(), "/search?genre=Drama&min_rating=&year=").await;
    let results = results_of(&html);
    assert!(results.contains(">A</h3>"));
    assert!(!results.contains(">B</h3>"));
    assert!(html.contains("<option value=\"Drama\" selected>Drama</option>"));
}

#[tokio::test]
async fn search_without_matches_shows_empty_state() {
    let (_, html) = get_text(loaded_app(), "/search?genre=&min_rating=8&year=").await;
    let results = results_of(&html);
    assert!(results.contains(EMPTY_STATE_MESSAGE));
    assert!(!results.contains("movie-card"));
}

#[tokio::test]
async fn search_by_year() {
    let (_, html) = get_text(loaded_app(), "/search?year=2010").await;
    let results = results_of(&html);
    assert!(results.contains(">B</h3>"));
    assert!(!results.contains(">A</h3>"));
}

#[tokio::test]
async fn search_before_load_leaves_results_blank() {
    let (status, html) = get_text(app_with(Catalog::new()), "/search?genre=Drama").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results_of(&html), "");
}

#[tokio::test]
async fn search_after_failed_load_leaves_results_blank() {
    let catalog = Catalog::new();
    catalog.mark_failed("boom").expect("mark failed");
    let (_, html) = get_text(app_with(catalog), "/search").await;
    assert!(html.contains("data-catalog=\"failed\""));
    assert_eq!(results_of(&html), "");
}

#[tokio::test]
async fn surprise_shows_one_card() {
    let (_, html) = get_text(loaded_app(), "/surprise").await;
    assert_eq!(results_of(&html).matches("class=\"movie-card\"").count(), 1);
}

#[tokio::test]
async fn reset_clears_controls_and_lists_everything() {
    let (_, html) = get_text(loaded_app(), "/reset?genre=Drama&min_rating=9&year=2001").await;
    assert_eq!(results_of(&html).matches("class=\"movie-card\"").count(), 2);
    assert!(!html.contains(" selected>"));
    assert!(html.contains("placeholder=\"Year\" value=\"\""));
}

#[tokio::test]
async fn movie_text_is_escaped_in_pages() {
    let app = app_with(Catalog::from_movies(vec![Movie::new(
        "<img src=x onerror=alert(1)>",
        "Drama",
        7.0,
        2000,
        "<script>evil()</script>",
    )]));
    let (_, html) = get_text(app, "/").await;
    assert!(!html.contains("<img"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[tokio::test]
async fn catalog_genres_extend_the_selector() {
    let app = app_with(Catalog::from_movies(vec![Movie::new(
        "High Noon",
        "Western",
        8.0,
        1952,
        "",
    )]));
    let (_, html) = get_text(app, "/").await;
    assert!(html.contains("<option value=\"Western\">Western</option>"));
}

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use browser_core::{
    page::{genre_options, render_page, PageView},
    FormControls, Presenter, ResultsPane,
};
use catalog::{spawn_initial_load, Catalog, CatalogSource};
use shared::protocol::{CatalogState, SearchParams};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings()?;

    let catalog = Catalog::new();
    let source = CatalogSource::parse(&settings.catalog_source);
    info!(%source, "loading catalog");
    spawn_initial_load(catalog.clone(), source);

    let state = AppState {
        presenter: Presenter::new(catalog),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/search", get(search))
        .route("/surprise", get(surprise))
        .route("/reset", get(reset))
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Shows the whole catalog once it has loaded; the results container stays
/// blank while loading or after a failed load.
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut pane = ResultsPane::default();
    if state.presenter.catalog().status().state == CatalogState::Loaded {
        state.presenter.show_all(&mut pane);
    }
    page(&state, &SearchParams::default(), &pane)
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let controls = FormControls::new(params);
    let mut pane = ResultsPane::default();
    state.presenter.search(&controls, &mut pane);
    page(&state, &controls.values, &pane)
}

async fn surprise(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let mut pane = ResultsPane::default();
    state.presenter.surprise(&mut pane);
    page(&state, &params, &pane)
}

async fn reset(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let mut controls = FormControls::new(params);
    let mut pane = ResultsPane::default();
    state.presenter.reset(&mut controls, &mut pane);
    page(&state, &controls.values, &pane)
}

fn page(state: &AppState, controls: &SearchParams, pane: &ResultsPane) -> Html<String> {
    let catalog = state.presenter.catalog();
    let genres = genre_options(catalog.movies());
    Html(render_page(&PageView {
        controls,
        genres: &genres,
        results: pane.content(),
        catalog_state: catalog.status().state,
    }))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;

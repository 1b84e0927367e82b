//! The host page: search form, command triggers and the results container.

use std::fmt::Write as _;

use shared::{
    domain::{Movie, KNOWN_GENRES},
    protocol::{CatalogState, SearchParams},
};

use crate::presenter::escape_html;

pub struct PageView<'a> {
    pub controls: &'a SearchParams,
    pub genres: &'a [String],
    pub results: &'a str,
    pub catalog_state: CatalogState,
}

/// Known genres first, then any other genre found in the catalog in order of
/// first appearance.
pub fn genre_options(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = KNOWN_GENRES.iter().map(|g| g.to_string()).collect();
    for movie in movies {
        let genre = movie.genre.trim();
        if !genre.is_empty() && !genres.iter().any(|known| known == genre) {
            genres.push(genre.to_string());
        }
    }
    genres
}

pub fn render_page(view: &PageView<'_>) -> String {
    let selected_genre = view.controls.genre.as_deref().unwrap_or_default().trim();
    let min_rating = escape_html(view.controls.min_rating.as_deref().unwrap_or_default());
    let year = escape_html(view.controls.year.as_deref().unwrap_or_default());
    let catalog_state = match view.catalog_state {
        CatalogState::Pending => "pending",
        CatalogState::Loaded => "loaded",
        CatalogState::Failed => "failed",
    };

    let mut options = String::from("<option value=\"\">All Genres</option>");
    for genre in view.genres {
        let escaped = escape_html(genre);
        let selected = if genre == selected_genre { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{escaped}\"{selected}>{escaped}</option>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Movie Finder</title>
</head>
<body>
<h1>🎬 Movie Finder</h1>
<form id="searchForm" action="/search" method="get">
<select id="genre" name="genre">{options}</select>
<input id="minRating" name="min_rating" type="number" min="0" max="10" step="0.1" placeholder="Min rating" value="{min_rating}">
<input id="year" name="year" type="number" placeholder="Year" value="{year}">
<button type="submit">Search</button>
<a id="surprise" href="/surprise">Surprise Me</a>
<a id="reset" href="/reset">Reset</a>
</form>
<div id="results" data-catalog="{catalog_state}">{results}</div>
</body>
</html>
"#,
        results = view.results,
    )
}

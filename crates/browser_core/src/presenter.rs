use std::fmt::Write as _;

use shared::domain::Movie;

pub const EMPTY_STATE_MESSAGE: &str = "😕 No movies found. Try different filters!";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn render_empty_state() -> String {
    format!("<div class=\"no-results\">{EMPTY_STATE_MESSAGE}</div>")
}

pub fn render_card(movie: &Movie) -> String {
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let year = movie.year.map(|y| y.to_string()).unwrap_or_default();

    let mut card = String::new();
    let _ = write!(
        card,
        concat!(
            "<div class=\"movie-card\">",
            "<div class=\"movie-header\">",
            "<h3 class=\"movie-title\">{title}</h3>",
            "<span class=\"movie-rating\">⭐ {rating}</span>",
            "</div>",
            "<div class=\"movie-meta\">",
            "<span class=\"genre-badge\">{genre}</span>",
            "<span>📅 {year}</span>",
            "</div>",
            "<p class=\"movie-description\">{description}</p>",
            "</div>"
        ),
        title = escape_html(&movie.title),
        rating = rating,
        genre = escape_html(&movie.genre),
        year = year,
        description = escape_html(&movie.description),
    );
    card
}

/// Renders the results container content: one card per movie in the given
/// order, or the empty-state placeholder.
pub fn render_results<'a>(results: impl IntoIterator<Item = &'a Movie>) -> String {
    let markup: String = results.into_iter().map(render_card).collect();
    if markup.is_empty() {
        render_empty_state()
    } else {
        markup
    }
}

//! Sample dataset generation.

use std::path::Path;

use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use shared::domain::{Movie, KNOWN_GENRES};

use crate::CatalogError;

pub const DEFAULT_COUNT: usize = 1000;
pub const DEFAULT_OUTPUT: &str = "movies.json";
pub const DEFAULT_CSV_OUTPUT: &str = "movies_with_descriptions.csv";

const EARLIEST_YEAR: i32 = 1950;
const LATEST_YEAR: i32 = 2024;
const MIN_RATING: f64 = 6.5;
const MAX_RATING: f64 = 9.8;

const TITLES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "Inception",
    "Fight Club",
    "Forrest Gump",
    "The Matrix",
    "Goodfellas",
    "Se7en",
    "Interstellar",
    "Parasite",
    "The Silence of the Lambs",
    "The Green Mile",
    "Gladiator",
    "Saving Private Ryan",
    "The Prestige",
    "The Departed",
    "Whiplash",
    "The Lion King",
    "Titanic",
    "Avatar",
    "The Avengers",
    "Jurassic Park",
    "Back to the Future",
    "Toy Story",
    "Spirited Away",
    "The Terminator",
    "Rocky",
    "Braveheart",
    "The Wolf of Wall Street",
    "Django Unchained",
    "Mad Max: Fury Road",
    "La La Land",
    "The Social Network",
    "The Truman Show",
    "A Beautiful Mind",
    "Black Panther",
    "Iron Man",
    "The Batman",
    "Joker",
    "Shutter Island",
    "The Pianist",
    "Casablanca",
    "2001: A Space Odyssey",
    "Star Wars",
    "The Lord of the Rings",
    "Harry Potter and the Sorcerer's Stone",
    "Indiana Jones and the Last Crusade",
    "Good Will Hunting",
    "The Grand Budapest Hotel",
    "Her",
    "Moonlight",
    "The Big Lebowski",
    "No Country for Old Men",
    "Slumdog Millionaire",
];

const DESCRIPTIONS: &[&str] = &[
    "A gripping story filled with emotion and depth.",
    "An unforgettable journey of courage and discovery.",
    "A thrilling adventure that keeps you on the edge.",
    "A powerful drama exploring human relationships.",
    "A visually stunning film with a heartfelt narrative.",
    "A suspenseful ride packed with unexpected twists.",
    "A warm and inspiring tale of hope and resilience.",
    "A fast-paced story with intense action sequences.",
    "A beautifully crafted film with memorable characters.",
    "An emotional story that leaves a lasting impact.",
];

/// Generates `count` movies with ids `1..=count`.
pub fn generate_movies<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Movie> {
    (1..=count as u64)
        .map(|id| Movie {
            id: Some(id),
            title: pick(TITLES, rng).to_string(),
            genre: pick(&KNOWN_GENRES, rng).to_string(),
            rating: Some(round_tenths(rng.gen_range(MIN_RATING..=MAX_RATING))),
            year: Some(rng.gen_range(EARLIEST_YEAR..=LATEST_YEAR)),
            description: pick(DESCRIPTIONS, rng).to_string(),
        })
        .collect()
}

pub async fn write_catalog(path: &Path, movies: &[Movie]) -> Result<(), CatalogError> {
    let json = serde_json::to_vec_pretty(movies)?;
    tokio::fs::write(path, json)
        .await
        .map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// One CSV line, columns in `id,title,year,genre,rating,description` order.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: Option<u64>,
    title: &'a str,
    year: Option<i32>,
    genre: &'a str,
    rating: Option<f64>,
    description: &'a str,
}

impl<'a> From<&'a Movie> for CsvRow<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            id: movie.id,
            title: &movie.title,
            year: movie.year,
            genre: &movie.genre,
            rating: movie.rating,
            description: &movie.description,
        }
    }
}

/// Writes the movies as CSV with a header line.
pub async fn write_catalog_csv(path: &Path, movies: &[Movie]) -> Result<(), CatalogError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for movie in movies {
        writer.serialize(CsvRow::from(movie))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CatalogError::Csv(err.into_error().into()))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn pick<'a, R: Rng + ?Sized>(choices: &[&'a str], rng: &mut R) -> &'a str {
    choices.choose(rng).copied().unwrap_or_default()
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

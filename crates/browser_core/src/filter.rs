use rand::{seq::SliceRandom, Rng};
use shared::domain::{FilterCriteria, Movie};

/// Returns true when `movie` satisfies every constraint in `criteria`.
///
/// A movie without a rating only passes when no minimum rating is set.
pub fn matches(criteria: &FilterCriteria, movie: &Movie) -> bool {
    let genre_match = criteria
        .genre
        .as_deref()
        .map_or(true, |genre| movie.genre == genre);
    let rating_match = match movie.rating {
        Some(rating) => rating >= criteria.min_rating,
        None => criteria.min_rating <= 0.0,
    };
    let year_match = criteria.year.map_or(true, |year| movie.year == Some(year));

    genre_match && rating_match && year_match
}

/// Stable filter over the catalog. Order of the input is preserved.
pub fn filter<'a>(catalog: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    catalog
        .iter()
        .filter(|movie| matches(criteria, movie))
        .collect()
}

/// Picks one movie uniformly at random; empty when the catalog is empty.
pub fn pick_random(catalog: &[Movie]) -> Vec<&Movie> {
    pick_random_with(catalog, &mut rand::thread_rng())
}

pub fn pick_random_with<'a, R: Rng + ?Sized>(
    catalog: &'a [Movie],
    rng: &mut R,
) -> Vec<&'a Movie> {
    catalog.choose(rng).into_iter().collect()
}

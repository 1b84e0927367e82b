use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use chrono::{DateTime, Utc};
use shared::{
    domain::Movie,
    protocol::{CatalogState, CatalogStatus},
};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub mod generate;
mod source;

pub use source::{CatalogFetcher, CatalogSource};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write catalog file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: url::Url,
        source: reqwest::Error,
    },
    #[error("failed to encode catalog as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog payload is not a movie list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has already been settled")]
    AlreadySettled,
}

#[derive(Debug)]
enum Settled {
    Loaded {
        movies: Vec<Movie>,
        completed_at: DateTime<Utc>,
    },
    Failed {
        message: String,
        completed_at: DateTime<Utc>,
    },
}

/// Shared handle to the movie catalog.
///
/// The catalog settles exactly once, either with the loaded movies or with a
/// failure. Until then, and after a failure, it reads as empty.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    settled: Arc<OnceLock<Settled>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an already loaded catalog.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let catalog = Self::new();
        let _ = catalog.settled.set(Settled::Loaded {
            movies,
            completed_at: Utc::now(),
        });
        catalog
    }

    pub fn populate(&self, movies: Vec<Movie>) -> Result<(), CatalogError> {
        self.settled
            .set(Settled::Loaded {
                movies,
                completed_at: Utc::now(),
            })
            .map_err(|_| CatalogError::AlreadySettled)
    }

    pub fn mark_failed(&self, message: impl Into<String>) -> Result<(), CatalogError> {
        self.settled
            .set(Settled::Failed {
                message: message.into(),
                completed_at: Utc::now(),
            })
            .map_err(|_| CatalogError::AlreadySettled)
    }

    pub fn movies(&self) -> &[Movie] {
        match self.settled.get() {
            Some(Settled::Loaded { movies, .. }) => movies,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.movies().is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies().len()
    }

    pub fn status(&self) -> CatalogStatus {
        match self.settled.get() {
            None => CatalogStatus {
                state: CatalogState::Pending,
                movie_count: 0,
                completed_at: None,
                error: None,
            },
            Some(Settled::Loaded {
                movies,
                completed_at,
            }) => CatalogStatus {
                state: CatalogState::Loaded,
                movie_count: movies.len(),
                completed_at: Some(*completed_at),
                error: None,
            },
            Some(Settled::Failed {
                message,
                completed_at,
            }) => CatalogStatus {
                state: CatalogState::Failed,
                movie_count: 0,
                completed_at: Some(*completed_at),
                error: Some(message.clone()),
            },
        }
    }
}

/// Fetches and parses the catalog document.
///
/// The document must be a JSON array. Each entry is read leniently: an entry
/// that is not an object still yields a record, with every field empty.
pub async fn load_catalog(fetcher: &dyn CatalogFetcher) -> Result<Vec<Movie>, CatalogError> {
    let bytes = fetcher.fetch().await?;
    let records: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;
    let movies = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record).unwrap_or_else(|err| {
                warn!(index, error = %err, "catalog entry is not a movie record");
                Movie::default()
            })
        })
        .collect();
    Ok(movies)
}

/// Loads the catalog once and settles `catalog` with the outcome.
///
/// A failed load is logged and leaves the catalog empty. There is no retry.
pub async fn load_into(
    catalog: &Catalog,
    fetcher: &dyn CatalogFetcher,
) -> Result<usize, CatalogError> {
    let source = fetcher.describe();
    match load_catalog(fetcher).await {
        Ok(movies) => {
            let count = movies.len();
            if let Err(err) = catalog.populate(movies) {
                warn!(%source, count, "catalog already settled, discarding loaded movies");
                return Err(err);
            }
            info!(%source, count, "catalog loaded");
            Ok(count)
        }
        Err(err) => {
            error!(%source, error = %err, "failed to load catalog");
            if catalog.mark_failed(err.to_string()).is_err() {
                warn!(%source, "catalog already settled, load failure not recorded");
            }
            Err(err)
        }
    }
}

/// Starts the single catalog load in the background.
pub fn spawn_initial_load(catalog: Catalog, source: CatalogSource) -> JoinHandle<()> {
    tokio::spawn(async move {
        let _ = load_into(&catalog, &source).await;
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

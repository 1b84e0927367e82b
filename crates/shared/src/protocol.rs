use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{FilterCriteria, Movie};

/// Raw values of the search controls as submitted by the page form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub min_rating: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl SearchParams {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria::from_raw(
            self.genre.as_deref().unwrap_or_default(),
            self.min_rating.as_deref().unwrap_or_default(),
            self.year.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub criteria: FilterCriteria,
    pub count: usize,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogState {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatus {
    pub state: CatalogState,
    pub movie_count: usize,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_mean_any() {
        let params: SearchParams = serde_json::from_str("{}").expect("params");
        assert!(params.to_criteria().is_unconstrained());
    }

    #[test]
    fn params_convert_to_criteria() {
        let params = SearchParams {
            genre: Some("Comedy".into()),
            min_rating: Some("6".into()),
            year: Some("".into()),
        };
        let criteria = params.to_criteria();
        assert_eq!(criteria.genre.as_deref(), Some("Comedy"));
        assert_eq!(criteria.min_rating, 6.0);
        assert_eq!(criteria.year, None);
    }

    #[test]
    fn catalog_state_serializes_snake_case() {
        let json = serde_json::to_string(&CatalogState::Pending).expect("json");
        assert_eq!(json, "\"pending\"");
    }
}

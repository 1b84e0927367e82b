use serde::{Deserialize, Serialize};

/// Genres the sample datasets are drawn from. The catalog may carry others.
pub const KNOWN_GENRES: [&str; 10] = [
    "Action",
    "Drama",
    "Sci-Fi",
    "Crime",
    "Romance",
    "Thriller",
    "Animation",
    "Comedy",
    "Horror",
    "Adventure",
];

/// A single catalog entry.
///
/// Every field tolerates being absent, null or of the wrong type in the
/// source document so that a malformed record still loads and renders with
/// gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(
        default,
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

mod lenient {
    use serde::{de::IgnoredAny, Deserialize, Deserializer};

    /// Any JSON value, narrowed to the shapes a record field may usefully hold.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Int(i64),
        Float(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Loose::deserialize(deserializer)? {
            Loose::Text(text) => text,
            Loose::Int(n) => n.to_string(),
            Loose::Float(f) => f.to_string(),
            Loose::Other(_) => String::new(),
        })
    }

    pub(super) fn rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rating = match Loose::deserialize(deserializer)? {
            Loose::Int(n) => Some(n as f64),
            Loose::Float(f) => Some(f),
            Loose::Text(text) => text.trim().parse::<f64>().ok(),
            Loose::Other(_) => None,
        };
        Ok(rating.filter(|r| r.is_finite()))
    }

    pub(super) fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(whole_number(Loose::deserialize(deserializer)?).and_then(|n| i32::try_from(n).ok()))
    }

    pub(super) fn id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(whole_number(Loose::deserialize(deserializer)?).and_then(|n| u64::try_from(n).ok()))
    }

    fn whole_number(value: Loose) -> Option<i64> {
        let float = match value {
            Loose::Int(n) => return Some(n),
            Loose::Float(f) => f,
            Loose::Text(text) => {
                let text = text.trim();
                if let Ok(n) = text.parse::<i64>() {
                    return Some(n);
                }
                text.parse::<f64>().ok()?
            }
            Loose::Other(_) => return None,
        };
        (float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64)
            .then_some(float as i64)
    }
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        year: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            genre: genre.into(),
            rating: Some(rating),
            year: Some(year),
            description: description.into(),
        }
    }
}

/// Constraints for one search. The default value matches every movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub min_rating: f64,
    pub year: Option<i32>,
}

impl FilterCriteria {
    /// Builds criteria from raw control values.
    ///
    /// Blank genre means any genre, an unparsable rating means 0 and an
    /// unparsable or zero year means any year.
    pub fn from_raw(genre: &str, min_rating: &str, year: &str) -> Self {
        Self {
            genre: parse_genre(genre),
            min_rating: parse_min_rating(min_rating),
            year: parse_year(year),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_none() && self.min_rating <= 0.0 && self.year.is_none()
    }
}

fn parse_genre(raw: &str) -> Option<String> {
    let genre = raw.trim();
    (!genre.is_empty()).then(|| genre.to_string())
}

fn parse_min_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .unwrap_or(0.0)
}

fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|year| *year != 0)
}

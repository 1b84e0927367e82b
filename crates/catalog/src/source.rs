use std::{fmt, path::PathBuf};

use async_trait::async_trait;
use url::Url;

use crate::CatalogError;

/// Anything that can hand back the raw catalog document.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, CatalogError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Http(Url),
}

impl CatalogSource {
    /// `http` and `https` URLs are fetched over the network, anything else is
    /// treated as a filesystem path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(url),
            _ => Self::File(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

#[async_trait]
impl CatalogFetcher for CatalogSource {
    async fn fetch(&self) -> Result<Vec<u8>, CatalogError> {
        match self {
            Self::File(path) => tokio::fs::read(path)
                .await
                .map_err(|source| CatalogError::Read {
                    path: path.clone(),
                    source,
                }),
            Self::Http(url) => {
                let fetch_err = |source| CatalogError::Fetch {
                    url: url.clone(),
                    source,
                };
                let bytes = reqwest::get(url.clone())
                    .await
                    .map_err(fetch_err)?
                    .error_for_status()
                    .map_err(fetch_err)?
                    .bytes()
                    .await
                    .map_err(fetch_err)?;
                Ok(bytes.to_vec())
            }
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote_sources() {
        let source = CatalogSource::parse("https://example.com/movies.json");
        assert!(matches!(source, CatalogSource::Http(_)));
    }

    #[test]
    fn relative_paths_are_file_sources() {
        assert_eq!(
            CatalogSource::parse(" movies.json "),
            CatalogSource::File(PathBuf::from("movies.json"))
        );
        assert_eq!(
            CatalogSource::parse("./data/movies.json"),
            CatalogSource::File(PathBuf::from("./data/movies.json"))
        );
    }

    #[test]
    fn non_http_schemes_fall_back_to_paths() {
        assert!(matches!(
            CatalogSource::parse("C:\\data\\movies.json"),
            CatalogSource::File(_)
        ));
    }
}

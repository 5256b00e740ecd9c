//! Catalog: the read-only restaurant collection, loaded once at startup.
//!
//! The source document is a JSON array of [`Restaurant`] objects. A missing or
//! malformed document is a fatal startup condition; callers are expected to
//! report the [`CatalogError`] and exit.

use crate::search::{search, Match, SearchField};
use crate::types::{Price, Restaurant};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed catalog document")]
    Json(#[from] serde_json::Error),
}

/// Immutable restaurant collection. Construct once, then pass by reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        if restaurants.is_empty() {
            tracing::warn!("catalog is empty; every search will return no results");
        }
        Self { restaurants }
    }

    /// Read and parse the JSON document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let restaurants: Vec<Restaurant> =
            serde_json::from_str(&src).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), count = restaurants.len(), "catalog loaded");
        Ok(Self::new(restaurants))
    }

    /// Parse a JSON document held in memory.
    pub fn from_json_str(src: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(src)?))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Shorthand for [`search`] over this catalogue.
    pub fn search(&self, keyword: &str, field: SearchField, price: Option<Price>) -> Vec<Match<'_>> {
        search(&self.restaurants, keyword, field, price)
    }
}

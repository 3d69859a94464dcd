use recipe_graph::RecipeRecord;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read recipe data from {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse recipe data from {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Recipe source backed by a JSON document: an array of
/// `{id, name, ingredients}` records.
///
/// The store also exposes the file's last-modified timestamp, which the
/// graph cache uses as its freshness marker.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last-modified marker of the backing document.
    pub fn last_modified(&self) -> Result<SystemTime, StoreError> {
        std::fs::metadata(&self.path)
            .and_then(|metadata| metadata.modified())
            .map_err(|source| StoreError::Unreadable {
                path: self.path.clone(),
                source,
            })
    }

    /// Load and parse all recipe records.
    pub fn load(&self) -> Result<Vec<RecipeRecord>, StoreError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Unreadable {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<RecipeRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "loaded recipe records"
        );
        Ok(records)
    }
}

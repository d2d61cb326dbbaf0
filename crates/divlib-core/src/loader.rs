//! Data loading for the three record kinds
//!
//! Each kind lives at a fixed relative path under the site's data
//! directory. The body must be a JSON array; any other shape is
//! deliberately downgraded to an empty sequence rather than an error,
//! and a malformed array element degrades to an empty record. Only a
//! missing resource or a body that is not JSON at all fails the load.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{SiteError, SiteResult};
use crate::types::{BookRecord, GalleryRecord, StaffRecord};

/// Logical kind of a data resource, selecting its fixed relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Catalog,
    Staff,
    Gallery,
}

impl DataKind {
    /// Relative path of the JSON resource for this kind
    pub fn path(&self) -> &'static str {
        match self {
            DataKind::Catalog => "books.json",
            DataKind::Staff => "employees.json",
            DataKind::Gallery => "photos.json",
        }
    }
}

/// Source of raw resource bytes.
///
/// The seam between the loader and the outside world; tests inject
/// bodies directly, the app reads from the data directory.
pub trait Fetcher {
    fn fetch(&self, path: &str) -> impl std::future::Future<Output = SiteResult<Vec<u8>>>;
}

/// Fetcher reading resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Fetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> SiteResult<Vec<u8>> {
        let full = self.root.join(path);
        tokio::fs::read(&full)
            .await
            .map_err(|_| SiteError::Unavailable(full.display().to_string()))
    }
}

/// Loader for the three record sequences.
pub struct DataLoader<F> {
    fetcher: F,
}

impl<F: Fetcher> DataLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn load_books(&self) -> SiteResult<Vec<BookRecord>> {
        self.load(DataKind::Catalog).await
    }

    pub async fn load_staff(&self) -> SiteResult<Vec<StaffRecord>> {
        self.load(DataKind::Staff).await
    }

    pub async fn load_gallery(&self) -> SiteResult<Vec<GalleryRecord>> {
        self.load(DataKind::Gallery).await
    }

    async fn load<T>(&self, kind: DataKind) -> SiteResult<Vec<T>>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.fetcher.fetch(kind.path()).await?;
        let value: Value = serde_json::from_slice(&body)?;
        Ok(records_from_value(value))
    }
}

/// Turn a parsed JSON value into a record sequence.
///
/// Non-array values become an empty sequence; an element that does not
/// match the record shape becomes a default (all-fields-missing) record.
pub fn records_from_value<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).unwrap_or_else(|e| {
                    tracing::debug!("Malformed record element: {}", e);
                    T::default()
                })
            })
            .collect(),
        _ => {
            tracing::warn!("Data resource body is not an array, treating as empty");
            Vec::new()
        }
    }
}

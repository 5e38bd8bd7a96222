/// REST client for the external image store
///
/// The store exposes four operations:
/// - `GET /images` — the full ordered record set
/// - `POST /images` — create one record (store assigns the id)
/// - `DELETE /images/{id}` — remove one record
/// - `PATCH /images/{id}` — update one record's name
///
/// Every mutation is followed by a full reload elsewhere; this
/// client never caches anything.

use serde::Serialize;
use thiserror::Error;

use crate::state::data::{ImageRecord, UploadCandidate};

/// Base URL of the image store (the mock store from the dev setup)
pub const API_BASE_URL: &str = "http://localhost:3001";

/// Errors from talking to the image store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request to the image store failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("could not read image data from {url}: {source}")]
    ImageFetch {
        url: String,
        source: reqwest::Error,
    },
}

/// PATCH body: only the name field is updated on rename
#[derive(Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

/// Handle to the image store's REST API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ImageStore {
    client: reqwest::Client,
    base_url: String,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ImageStore {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn images_url(&self) -> String {
        format!("{}/images", self.base_url)
    }

    fn image_url(&self, id: i64) -> String {
        format!("{}/images/{}", self.base_url, id)
    }

    /// Fetch the full record set, in store order
    pub async fn get_all_images(&self) -> Result<Vec<ImageRecord>, StoreError> {
        let records = self
            .client
            .get(self.images_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ImageRecord>>()
            .await?;
        Ok(records)
    }

    /// Create one record; the store assigns and returns the id
    pub async fn create_image(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<ImageRecord, StoreError> {
        let created = self
            .client
            .post(self.images_url())
            .json(candidate)
            .send()
            .await?
            .error_for_status()?
            .json::<ImageRecord>()
            .await?;
        Ok(created)
    }

    /// Delete one record. Deleting a missing id is an error in the store.
    pub async fn delete_image(&self, id: i64) -> Result<(), StoreError> {
        self.client
            .delete(self.image_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Update only the name of one record
    pub async fn rename_image(&self, id: i64, name: &str) -> Result<ImageRecord, StoreError> {
        let updated = self
            .client
            .patch(self.image_url(id))
            .json(&RenameBody { name })
            .send()
            .await?
            .error_for_status()?
            .json::<ImageRecord>()
            .await?;
        Ok(updated)
    }

    /// Fetch raw bytes for a record whose url points at a remote image
    /// (records with embedded data URLs are decoded locally instead)
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, StoreError> {
        let map_err = |source: reqwest::Error| StoreError::ImageFetch {
            url: url.to_string(),
            source,
        };
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_err)?
            .error_for_status()
            .map_err(map_err)?
            .bytes()
            .await
            .map_err(map_err)?;
        Ok(bytes.to_vec())
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

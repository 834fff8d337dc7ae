//! Fetch layer
//!
//! The only suspension points in the app: the catalog document and the
//! external posts API. Failures map onto a small taxonomy that the modal
//! surfaces recover from by rendering an in-surface error region; nothing
//! here retries and nothing propagates to the page.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::BookRecord;
use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Catalog fetch failed at the transport level or returned non-success.
    #[error("The catalog could not be loaded ({0})")]
    CatalogUnavailable(String),
    /// Lookup succeeded at the transport level but no record matched.
    #[error("No record with id {0}")]
    RecordNotFound(u32),
    /// Single-record transport failure.
    #[error("The request failed ({0})")]
    RemoteFetchFailed(String),
}

/// One record from the external posts API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// GET `{base}catalog.json` and parse the full record sequence.
pub async fn fetch_catalog() -> Result<Vec<BookRecord>, ApiError> {
    let url = format!("{}catalog.json", config::base_url());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::CatalogUnavailable(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::CatalogUnavailable(format!("status {}", response.status())));
    }

    response
        .json::<Vec<BookRecord>>()
        .await
        .map_err(|e| ApiError::CatalogUnavailable(e.to_string()))
}

/// Locate one record in a freshly fetched catalog.
pub async fn fetch_book(id: u32) -> Result<BookRecord, ApiError> {
    let records = fetch_catalog().await?;
    records
        .into_iter()
        .find(|record| record.id == id)
        .ok_or(ApiError::RecordNotFound(id))
}

/// GET `{POSTS_API}/posts/{id}`.
pub async fn fetch_post(id: u32) -> Result<Post, ApiError> {
    let url = format!("{}/posts/{}", config::POSTS_API, id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::RemoteFetchFailed(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::RecordNotFound(id));
    }

    response
        .json::<Post>()
        .await
        .map_err(|e| ApiError::RemoteFetchFailed(e.to_string()))
}

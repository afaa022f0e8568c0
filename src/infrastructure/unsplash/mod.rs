// SPDX-License-Identifier: MPL-2.0
//! Unsplash adapter implementing the [`ImageSearch`] port.
//!
//! Requests go to the photo search endpoint with the query, page, page size
//! and access key as URL query parameters. Thumbnails are plain GETs on the
//! URLs the search returned.

mod payload;

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::port::{ApiCredential, BoxFuture, ImageSearch, SearchError, SearchRequest};
use crate::domain::search::SearchResults;
use crate::error::{self, Error};

/// Environment variable holding the Unsplash access key.
pub const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

const USER_AGENT: &str = concat!("IcedImageSearch/", env!("CARGO_PKG_VERSION"));

/// Thumbnail downloads allowed in flight at once. A page triggers one per image.
pub const MAX_CONCURRENT_THUMBNAILS: usize = 6;

/// Reads the access key from [`ACCESS_KEY_VAR`].
///
/// # Errors
///
/// Returns [`Error::Credential`] when the variable is unset or blank.
pub fn credential_from_env() -> error::Result<ApiCredential> {
    credential_from(std::env::var(ACCESS_KEY_VAR).ok())
}

fn credential_from(raw: Option<String>) -> error::Result<ApiCredential> {
    raw.and_then(ApiCredential::new)
        .ok_or_else(|| Error::Credential(format!("{ACCESS_KEY_VAR} is not set")))
}

/// `reqwest`-backed implementation of [`ImageSearch`].
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    api_url: String,
    credential: ApiCredential,
    http: Arc<reqwest::Client>,
    thumbnail_permits: Arc<Semaphore>,
}

impl UnsplashClient {
    /// Creates a client targeting `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Search`] if the HTTP client cannot be built (TLS
    /// backend initialisation failure).
    pub fn new(api_url: impl Into<String>, credential: ApiCredential) -> error::Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Search(SearchError::Transport(e.to_string())))?;

        Ok(Self {
            api_url: api_url.into(),
            credential,
            http: Arc::new(http),
            thumbnail_permits: Arc::new(Semaphore::new(MAX_CONCURRENT_THUMBNAILS)),
        })
    }

    /// Query parameters sent with `request`, in order.
    fn query_pairs(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        vec![
            ("query", request.query.as_str().to_string()),
            ("page", request.page.value().to_string()),
            ("per_page", request.per_page.to_string()),
            ("client_id", self.credential.expose().to_string()),
        ]
    }

    async fn get_bytes(&self, builder: reqwest::RequestBuilder) -> Result<Vec<u8>, SearchError> {
        let response = builder
            .send()
            .await
            .map_err(map_reqwest_error)?
            .error_for_status()
            .map_err(map_reqwest_error)?;

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(body.to_vec())
    }
}

impl ImageSearch for UnsplashClient {
    fn search(&self, request: SearchRequest) -> BoxFuture<'_, Result<SearchResults, SearchError>> {
        Box::pin(async move {
            log::debug!(
                "searching {:?} page {} ({} per page)",
                request.query.as_str(),
                request.page,
                request.per_page
            );

            let builder = self.http.get(&self.api_url).query(&self.query_pairs(&request));
            let body = self.get_bytes(builder).await?;
            payload::decode_search_results(&body)
        })
    }

    fn fetch_thumbnail(&self, url: String) -> BoxFuture<'_, Result<Vec<u8>, SearchError>> {
        Box::pin(async move {
            let _permit = self
                .thumbnail_permits
                .acquire()
                .await
                .map_err(|e| SearchError::Transport(e.to_string()))?;
            self.get_bytes(self.http.get(&url)).await
        })
    }
}

/// Non-success statuses keep their code; everything else is a transport failure.
///
/// The URL is stripped from the message since its query string carries the
/// access key.
fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    match err.status() {
        Some(status) => SearchError::Status(status.as_u16()),
        None => SearchError::Transport(err.without_url().to_string()),
    }
}

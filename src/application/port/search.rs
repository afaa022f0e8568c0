// SPDX-License-Identifier: MPL-2.0
//! Photo search port definition.
//!
//! This module defines the [`ImageSearch`] trait implemented by the HTTP
//! adapter and by in-memory doubles in tests.

use crate::domain::search::{PageNumber, SearchQuery, SearchResults, RESULTS_PER_PAGE};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

// =============================================================================
// SearchRequest
// =============================================================================

/// Everything the remote service needs for one page of results,
/// except the credential which the adapter owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Committed search text.
    pub query: SearchQuery,
    /// Requested page (1-based).
    pub page: PageNumber,
    /// Page size, always [`RESULTS_PER_PAGE`].
    pub per_page: u32,
}

impl SearchRequest {
    /// Builds a request for `query` at `page` with the fixed page size.
    #[must_use]
    pub fn new(query: SearchQuery, page: PageNumber) -> Self {
        Self {
            query,
            page,
            per_page: RESULTS_PER_PAGE,
        }
    }
}

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while talking to the search service.
///
/// The user only ever sees one generic message; the variant and its detail
/// are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status code.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body could not be decoded into search results.
    #[error("malformed response: {0}")]
    Malformed(String),
}

// =============================================================================
// ApiCredential
// =============================================================================

/// Access key sent with every request.
///
/// The `Debug` output is redacted so the key never lands in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Wraps a key, rejecting blank values.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the raw key for request construction.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(<redacted>)")
    }
}

// =============================================================================
// ImageSearch
// =============================================================================

/// Communicates with a photo search service.
pub trait ImageSearch: Send + Sync {
    /// Fetches one page of results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport failure, non-success status or
    /// an undecodable body.
    fn search(&self, request: SearchRequest) -> BoxFuture<'_, Result<SearchResults, SearchError>>;

    /// Downloads the raw bytes of a thumbnail.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the download fails.
    fn fetch_thumbnail(&self, url: String) -> BoxFuture<'_, Result<Vec<u8>, SearchError>>;
}

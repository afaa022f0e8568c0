// SPDX-License-Identifier: MPL-2.0
//! Search result and request status types.

use super::TotalPages;
use std::fmt;

/// Unique identifier of an image, as assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    /// Wraps a service-provided identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Unique identifier, used as the grid key.
    pub id: ImageId,
    /// Small (thumbnail resolution) display URL.
    pub thumbnail_url: String,
    /// Optional human readable description.
    pub description: Option<String>,
}

impl Image {
    /// Accessible text for the image; empty when the service gave none.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// One page of results for a `(query, page)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    /// Images in service order.
    pub images: Vec<Image>,
    /// Total page count for the query.
    pub total_pages: TotalPages,
}

/// Phase of the most recent fetch attempt. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// No fetch has been attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last applied response was successful.
    Succeeded,
    /// The last fetch failed. Carries the i18n key of the user-facing message.
    Failed {
        /// Localization key, never a raw error.
        message_key: &'static str,
    },
}

impl RequestStatus {
    /// Returns true while a request is in flight.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    /// Returns the user-facing message key when failed.
    #[must_use]
    pub fn failure_key(self) -> Option<&'static str> {
        match self {
            RequestStatus::Failed { message_key } => Some(message_key),
            _ => None,
        }
    }
}

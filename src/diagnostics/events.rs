// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use std::fmt;

/// A timestamped diagnostic record.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Stamps `kind` with the current time.
    #[must_use]
    pub fn now(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A search request was handed to the service.
    SearchIssued { serial: u64, query: String, page: u32 },
    /// A response replaced the result set.
    SearchSucceeded {
        serial: u64,
        images: usize,
        total_pages: u32,
    },
    /// A search failed. `detail` is the raw error, kept out of the UI.
    SearchFailed { serial: u64, detail: String },
    /// A response arrived for a request that is no longer the latest one.
    ResponseDiscarded { serial: u64, latest: Option<u64> },
    /// A thumbnail could not be downloaded or decoded.
    ThumbnailFailed { url: String, detail: String },
}

impl DiagnosticEventKind {
    /// Log level this event is mirrored at.
    #[must_use]
    pub fn level(&self) -> log::Level {
        match self {
            DiagnosticEventKind::SearchIssued { .. }
            | DiagnosticEventKind::SearchSucceeded { .. } => log::Level::Debug,
            DiagnosticEventKind::ResponseDiscarded { .. } => log::Level::Info,
            DiagnosticEventKind::ThumbnailFailed { .. } => log::Level::Warn,
            DiagnosticEventKind::SearchFailed { .. } => log::Level::Error,
        }
    }
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::SearchIssued { serial, query, page } => {
                write!(f, "search #{serial} issued: query={query:?} page={page}")
            }
            DiagnosticEventKind::SearchSucceeded {
                serial,
                images,
                total_pages,
            } => write!(
                f,
                "search #{serial} succeeded: {images} images, {total_pages} pages"
            ),
            DiagnosticEventKind::SearchFailed { serial, detail } => {
                write!(f, "search #{serial} failed: {detail}")
            }
            DiagnosticEventKind::ResponseDiscarded { serial, latest } => match latest {
                Some(latest) => write!(
                    f,
                    "response for search #{serial} discarded, latest is #{latest}"
                ),
                None => write!(f, "response for search #{serial} discarded"),
            },
            DiagnosticEventKind::ThumbnailFailed { url, detail } => {
                write!(f, "thumbnail {url} failed: {detail}")
            }
        }
    }
}

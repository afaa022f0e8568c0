// SPDX-License-Identifier: MPL-2.0
//! Search session controller.
//!
//! [`SearchSession`] owns the committed query, the current page, the result
//! set and the request status. It never performs I/O itself: operations that
//! need the remote service return a [`RequestTicket`], the caller runs the
//! request through an [`ImageSearch`](crate::application::port::ImageSearch)
//! and feeds the outcome back through [`SearchSession::apply_outcome`].
//!
//! ```
//! use iced_image_search::application::session::{Effect, SearchSession};
//! use iced_image_search::domain::search::{SearchResults, TotalPages};
//!
//! let mut session = SearchSession::default();
//! let ticket = session.submit_query("cats").expect("non-empty query");
//! assert!(session.is_loading());
//!
//! let results = SearchResults { images: Vec::new(), total_pages: TotalPages::new(3) };
//! assert_eq!(session.apply_outcome(&ticket, Ok(results)), Effect::ResultsReplaced);
//! assert!(session.show_next());
//! ```

mod policy;
mod presentation;
mod ticket;

pub use policy::{ResponseOrdering, StaleResults};
pub use presentation::Presentation;
pub use ticket::RequestTicket;

use crate::application::port::{SearchError, SearchRequest};
use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, Diagnostics};
use crate::domain::search::{
    Image, PageNumber, RequestStatus, SearchQuery, SearchResults, TotalPages,
};

/// i18n key of the only user-visible failure message.
pub const FETCH_ERROR_KEY: &str = "error-fetch-images";

/// Behaviour knobs of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub response_ordering: ResponseOrdering,
    pub stale_results: StaleResults,
    pub diagnostics_capacity: BufferCapacity,
}

/// What applying an outcome did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The outcome answered a superseded request and was dropped.
    Discarded,
    /// The result set and page count were replaced.
    ResultsReplaced,
    /// The session moved to the failed state.
    Failed,
}

/// State of one search view, from mount to unmount.
#[derive(Debug, Clone)]
pub struct SearchSession {
    pending_query: String,
    query: Option<SearchQuery>,
    page: PageNumber,
    results: Vec<Image>,
    total_pages: TotalPages,
    status: RequestStatus,
    next_serial: u64,
    latest: Option<u64>,
    config: SessionConfig,
    diagnostics: Diagnostics,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            pending_query: String::new(),
            query: None,
            page: PageNumber::FIRST,
            results: Vec::new(),
            total_pages: TotalPages::default(),
            status: RequestStatus::Idle,
            next_serial: 1,
            latest: None,
            config,
            diagnostics: Diagnostics::new(config.diagnostics_capacity),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Updates the text typed in the search field. Never issues a request.
    pub fn set_pending_query(&mut self, text: impl Into<String>) {
        self.pending_query = text.into();
    }

    /// Commits the pending query and fetches its first page.
    ///
    /// Blank input is a no-op: nothing is committed, the status is untouched
    /// and no request is returned.
    pub fn submit_search(&mut self) -> Option<RequestTicket> {
        let query = SearchQuery::parse(&self.pending_query)?;
        self.query = Some(query);
        self.page = PageNumber::FIRST;
        self.fetch_current_page()
    }

    /// Puts `text` in the search field, then behaves as [`Self::submit_search`].
    pub fn submit_query(&mut self, text: &str) -> Option<RequestTicket> {
        self.set_pending_query(text);
        self.submit_search()
    }

    /// Searches for a category shortcut. Identical to submitting `label`.
    pub fn select_category(&mut self, label: &str) -> Option<RequestTicket> {
        self.submit_query(label)
    }

    /// Moves one page forward if a later page exists.
    pub fn next_page(&mut self) -> Option<RequestTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.page = self.page.next();
        self.fetch_current_page()
    }

    /// Moves one page back unless already on the first page.
    pub fn previous_page(&mut self) -> Option<RequestTicket> {
        if !self.can_go_previous() {
            return None;
        }
        self.page = self.page.previous()?;
        self.fetch_current_page()
    }

    /// Issues a request for the committed query at the current page.
    ///
    /// Returns `None` when no query has been committed yet.
    pub fn fetch_current_page(&mut self) -> Option<RequestTicket> {
        let query = self.query.clone()?;

        self.status = RequestStatus::Loading;
        if self.config.stale_results == StaleResults::Clear {
            self.results.clear();
            self.total_pages = TotalPages::default();
        }

        let serial = self.next_serial;
        self.next_serial += 1;
        self.latest = Some(serial);

        self.diagnostics.record(DiagnosticEventKind::SearchIssued {
            serial,
            query: query.as_str().to_string(),
            page: self.page.value(),
        });

        Some(RequestTicket::new(
            serial,
            SearchRequest::new(query, self.page),
        ))
    }

    /// Applies the outcome of the request identified by `ticket`.
    pub fn apply_outcome(
        &mut self,
        ticket: &RequestTicket,
        outcome: Result<SearchResults, SearchError>,
    ) -> Effect {
        let serial = ticket.serial();
        if self.config.response_ordering == ResponseOrdering::LatestOnly
            && self.latest != Some(serial)
        {
            self.diagnostics
                .record(DiagnosticEventKind::ResponseDiscarded {
                    serial,
                    latest: self.latest,
                });
            return Effect::Discarded;
        }

        match outcome {
            Ok(results) => {
                self.diagnostics
                    .record(DiagnosticEventKind::SearchSucceeded {
                        serial,
                        images: results.images.len(),
                        total_pages: results.total_pages.value(),
                    });
                self.results = results.images;
                self.total_pages = results.total_pages;
                self.page = self.page.clamp_to(self.total_pages);
                self.status = RequestStatus::Succeeded;
                Effect::ResultsReplaced
            }
            Err(err) => {
                self.diagnostics.record(DiagnosticEventKind::SearchFailed {
                    serial,
                    detail: err.to_string(),
                });
                self.status = RequestStatus::Failed {
                    message_key: FETCH_ERROR_KEY,
                };
                Effect::Failed
            }
        }
    }

    /// Records an event in the session's diagnostics.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.diagnostics.record(kind);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Text currently in the search field.
    #[must_use]
    pub fn pending_query(&self) -> &str {
        &self.pending_query
    }

    /// Last committed query.
    #[must_use]
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn total_pages(&self) -> TotalPages {
        self.total_pages
    }

    #[must_use]
    pub fn results(&self) -> &[Image] {
        &self.results
    }

    #[must_use]
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// i18n key of the error banner, when the last fetch failed.
    #[must_use]
    pub fn error_key(&self) -> Option<&'static str> {
        self.status.failure_key()
    }

    /// Serial of the most recently issued request.
    #[must_use]
    pub fn latest_serial(&self) -> Option<u64> {
        self.latest
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub(crate) fn can_go_previous(&self) -> bool {
        !self.page.is_first()
    }

    pub(crate) fn can_go_next(&self) -> bool {
        self.total_pages.has_page_after(self.page)
    }

    /// "Previous" control visibility.
    #[must_use]
    pub fn show_previous(&self) -> bool {
        !self.is_loading() && self.can_go_previous()
    }

    /// "Next" control visibility.
    #[must_use]
    pub fn show_next(&self) -> bool {
        !self.is_loading() && self.can_go_next()
    }

    /// Everything the view needs, in one snapshot.
    #[must_use]
    pub fn presentation(&self) -> Presentation<'_> {
        Presentation::of(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

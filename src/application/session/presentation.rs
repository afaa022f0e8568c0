// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from session state to what the screen shows.

use super::SearchSession;
use crate::domain::search::{Image, RequestStatus};

/// Snapshot of everything the search screen renders.
///
/// Loading indicator, error banner and grid are mutually exclusive except
/// that a failure still shows whatever results are retained (the banner sits
/// above them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation<'a> {
    /// Show the loading indicator instead of grid and pagination.
    pub loading: bool,
    /// i18n key of the error banner, if any.
    pub error_key: Option<&'static str>,
    /// Images to render, in order. Empty while loading.
    pub grid: &'a [Image],
    /// "Previous" control visible.
    pub show_previous: bool,
    /// "Next" control visible.
    pub show_next: bool,
    /// A successful search matched nothing.
    pub show_empty: bool,
    /// Current 1-based page.
    pub page: u32,
    /// Page count reported by the service.
    pub total_pages: u32,
}

impl<'a> Presentation<'a> {
    /// Derives the snapshot from `session`.
    #[must_use]
    pub fn of(session: &'a SearchSession) -> Self {
        let status = session.status();
        let loading = status.is_loading();
        Self {
            loading,
            error_key: status.failure_key(),
            grid: if loading { &[] } else { session.results() },
            show_previous: !loading && session.can_go_previous(),
            show_next: !loading && session.can_go_next(),
            show_empty: status == RequestStatus::Succeeded
                && session.results().is_empty()
                && session.total_pages().value() == 0,
            page: session.page().value(),
            total_pages: session.total_pages().value(),
        }
    }
}

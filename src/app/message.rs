// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{ApiCredential, SearchError};
use crate::application::session::RequestTicket;
use crate::domain::search::SearchResults;
use crate::ui::search;
use iced::widget::image::Handle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    /// A search request finished. The ticket identifies which one.
    SearchCompleted {
        ticket: RequestTicket,
        result: Result<SearchResults, SearchError>,
    },
    /// A thumbnail download finished.
    ThumbnailLoaded {
        url: String,
        result: Result<Handle, SearchError>,
    },
    Tick(Instant), // Spinner animation while loading
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional query submitted as soon as the window opens.
    pub initial_query: Option<String>,
    /// Access key for the search service.
    pub credential: ApiCredential,
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The session decides what to fetch; these handlers turn its tickets into
//! `Task`s against the search port and feed outcomes back in. Each handler
//! runs inside a single `update` call, so a response is applied atomically.

use super::Message;
use crate::application::port::{ImageSearch, SearchError};
use crate::application::session::{Effect, RequestTicket, SearchSession};
use crate::diagnostics::DiagnosticEventKind;
use crate::domain::search::SearchResults;
use crate::media::ThumbnailCache;
use crate::ui::search;
use crate::ui::widgets::animated_spinner;
use iced::widget::image::Handle;
use iced::Task;
use std::sync::Arc;

/// Mutable view of the `App` fields the handlers touch.
pub struct UpdateContext<'a> {
    pub session: &'a mut SearchSession,
    pub client: &'a Arc<dyn ImageSearch>,
    pub thumbnails: &'a mut ThumbnailCache,
    pub spinner_rotation: &'a mut f32,
    pub config_warning: &'a mut Option<String>,
}

pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search::Message,
) -> Task<Message> {
    let ticket = match message {
        search::Message::QueryChanged(text) => {
            ctx.session.set_pending_query(text);
            return Task::none();
        }
        search::Message::Submit => ctx.session.submit_search(),
        search::Message::CategorySelected(label) => ctx.session.select_category(&label),
        search::Message::NextPage => ctx.session.next_page(),
        search::Message::PreviousPage => ctx.session.previous_page(),
    };

    if ticket.is_some() {
        *ctx.config_warning = None;
    }
    dispatch_search(ctx.client, ticket)
}

pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: &RequestTicket,
    result: Result<SearchResults, SearchError>,
) -> Task<Message> {
    match ctx.session.apply_outcome(ticket, result) {
        Effect::ResultsReplaced => fetch_thumbnails(ctx),
        Effect::Failed | Effect::Discarded => Task::none(),
    }
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<Handle, SearchError>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.thumbnails.insert(url, handle),
        Err(err) => {
            ctx.thumbnails.release(&url);
            ctx.session.record(DiagnosticEventKind::ThumbnailFailed {
                url,
                detail: err.to_string(),
            });
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.session.is_loading() {
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    }
    Task::none()
}

/// Runs the request carried by `ticket`, if any, on the async runtime.
pub fn dispatch_search(
    client: &Arc<dyn ImageSearch>,
    ticket: Option<RequestTicket>,
) -> Task<Message> {
    let Some(ticket) = ticket else {
        return Task::none();
    };

    let client = Arc::clone(client);
    let request = ticket.request().clone();
    Task::perform(
        async move { client.search(request).await },
        move |result| Message::SearchCompleted { ticket, result },
    )
}

/// Starts one download per result thumbnail not yet cached or in flight.
fn fetch_thumbnails(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let urls = ctx.thumbnails.claim_missing(
        ctx.session
            .results()
            .iter()
            .map(|image| image.thumbnail_url.as_str()),
    );
    log::debug!(
        "thumbnail cache: {} ({} to download)",
        ctx.thumbnails.stats(),
        urls.len()
    );

    Task::batch(urls.into_iter().map(|url| {
        let client = Arc::clone(ctx.client);
        Task::perform(
            async move {
                let result = client
                    .fetch_thumbnail(url.clone())
                    .await
                    .map(Handle::from_bytes);
                (url, result)
            },
            |(url, result)| Message::ThumbnailLoaded { url, result },
        )
    }))
}

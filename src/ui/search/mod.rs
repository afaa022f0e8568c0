// SPDX-License-Identifier: MPL-2.0
//! Search screen: search bar, category shortcuts, status, results grid and
//! pagination.
//!
//! The screen is a pure function of a [`Presentation`] snapshot plus the
//! pending query text. It emits [`Message`]s upward and holds no state.

pub mod category_bar;
mod pagination;
mod results_grid;
mod search_bar;
mod status;

use crate::application::session::Presentation;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{Column, Text};
use iced::{Element, Length};

/// Messages emitted by the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The text in the search field changed.
    QueryChanged(String),
    /// The search form was submitted (Enter or the search button).
    Submit,
    /// A category shortcut was pressed. Carries the configured label.
    CategorySelected(String),
    NextPage,
    PreviousPage,
}

/// Contextual data needed to render the search screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pending_query: &'a str,
    pub categories: &'a [String],
    pub presentation: Presentation<'a>,
    pub thumbnails: &'a ThumbnailCache,
    /// Grid tile edge length in logical pixels.
    pub thumbnail_size: f32,
    pub spinner_rotation: f32,
}

/// Render the search screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let presentation = &ctx.presentation;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("search-heading")).size(typography::TITLE_LG))
        .push(search_bar::view(ctx.i18n, ctx.pending_query))
        .push(category_bar::view(ctx.i18n, ctx.categories));

    if let Some(key) = presentation.error_key {
        content = content.push(status::error_banner(ctx.i18n, key));
    }

    if presentation.loading {
        return content
            .push(status::loading(ctx.i18n, ctx.spinner_rotation))
            .into();
    }

    if presentation.show_empty {
        content = content.push(status::empty(ctx.i18n));
    }

    content = content.push(results_grid::view(
        presentation.grid,
        ctx.thumbnails,
        ctx.thumbnail_size,
    ));

    if let Some(bar) = pagination::view(ctx.i18n, presentation) {
        content = content.push(bar);
    }

    content.into()
}

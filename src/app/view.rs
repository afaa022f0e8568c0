// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::application::session::SearchSession;
use crate::i18n::fluent::I18n;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::search::{self, ViewContext as SearchViewContext};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a SearchSession,
    pub categories: &'a [String],
    pub thumbnails: &'a ThumbnailCache,
    pub thumbnail_size: f32,
    pub spinner_rotation: f32,
    /// i18n key of a startup warning (unreadable settings file).
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = search::view(SearchViewContext {
        i18n: ctx.i18n,
        pending_query: ctx.session.pending_query(),
        categories: ctx.categories,
        presentation: ctx.session.presentation(),
        thumbnails: ctx.thumbnails,
        thumbnail_size: ctx.thumbnail_size,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Search);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .padding([spacing::XXS, spacing::LG]),
        );
    }

    Container::new(column.push(screen))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

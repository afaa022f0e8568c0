// SPDX-License-Identifier: MPL-2.0
//! Loading indicator, error banner and empty-state message.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Spinner plus "Loading..." label; replaces the grid and pagination.
pub fn loading(i18n: &I18n, rotation: f32) -> Element<'static, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element();

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(spinner)
        .push(Text::new(i18n.tr("loading")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

/// Fixed user-facing failure message. The raw error never gets here.
pub fn error_banner(i18n: &I18n, message_key: &str) -> Element<'static, Message> {
    Container::new(Text::new(i18n.tr(message_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::error_banner)
        .into()
}

pub fn empty(i18n: &I18n) -> Element<'static, Message> {
    Text::new(i18n.tr("empty-results"))
        .size(typography::BODY)
        .into()
}

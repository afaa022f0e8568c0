// SPDX-License-Identifier: MPL-2.0
//! Search text field and submit button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{Element, Length};

/// The field is bound to the pending query; Enter and the button both submit.
pub fn view<'a>(i18n: &I18n, pending_query: &'a str) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), pending_query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let submit = button(Text::new(i18n.tr("search-button")))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit);

    Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::SEARCH_BAR_MAX_WIDTH)
        .into()
}

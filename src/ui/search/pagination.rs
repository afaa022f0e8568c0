// SPDX-License-Identifier: MPL-2.0
//! Previous/next controls.

use super::Message;
use crate::application::session::Presentation;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Row, Text};
use iced::Element;

/// "Previous" iff page > 1, "Next" iff page < total pages, with the page
/// position between them. `None` when there is nothing to show.
pub fn view<'a>(i18n: &I18n, presentation: &Presentation<'_>) -> Option<Element<'a, Message>> {
    if presentation.total_pages == 0 && !presentation.show_previous {
        return None;
    }

    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    if presentation.show_previous {
        row = row.push(
            button(Text::new(i18n.tr("pagination-previous")))
                .on_press(Message::PreviousPage)
                .style(styles::button::primary),
        );
    }

    let page = presentation.page.to_string();
    let total = presentation.total_pages.to_string();
    row = row.push(
        Text::new(i18n.tr_with_args(
            "pagination-position",
            &[("page", page.as_str()), ("total", total.as_str())],
        ))
        .size(typography::BODY_SM),
    );

    if presentation.show_next {
        row = row.push(
            button(Text::new(i18n.tr("pagination-next")))
                .on_press(Message::NextPage)
                .style(styles::button::primary),
        );
    }

    Some(row.into())
}

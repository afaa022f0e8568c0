// SPDX-License-Identifier: MPL-2.0
//! Category shortcut buttons.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Row, Text};
use iced::Element;

/// Label as shown on the button: first letter upper-cased.
#[must_use]
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One button per label, in configured order. Pressing one sends the raw label.
pub fn view<'a>(i18n: &I18n, categories: &'a [String]) -> Element<'a, Message> {
    let buttons = categories.iter().map(|label| -> Element<'a, Message> {
        let chip = button(Text::new(display_label(label)).size(typography::BODY))
            .on_press(Message::CategorySelected(label.clone()))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::category);

        let tip = i18n.tr_with_args("category-tooltip", &[("category", label.as_str())]);
        styles::tooltip::styled(chip, tip, tooltip::Position::Bottom).into()
    });

    Row::with_children(buttons).spacing(spacing::XS).into()
}

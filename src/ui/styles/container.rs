// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Error banner shown above the results when a search fails.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Stand-in tile while a thumbnail is missing.
///
/// Derived from the active theme background so it reads in both modes.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_banner_uses_error_color() {
        let style = error_banner(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::ERROR_500));
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn placeholder_has_background_in_both_themes() {
        assert!(thumbnail_placeholder(&Theme::Light).background.is_some());
        assert!(thumbnail_placeholder(&Theme::Dark).background.is_some());
    }
}

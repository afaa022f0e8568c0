// SPDX-License-Identifier: MPL-2.0
//! Wrapping grid of thumbnails in result order.

use super::Message;
use crate::domain::search::Image;
use crate::media::ThumbnailCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{scrollable, tooltip, Container, Row, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(
    images: &'a [Image],
    thumbnails: &'a ThumbnailCache,
    size: f32,
) -> Element<'a, Message> {
    let tiles = images.iter().map(|image| tile(image, thumbnails, size));

    scrollable(
        Row::with_children(tiles)
            .spacing(spacing::SM)
            .wrap(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The downloaded thumbnail, or a placeholder card showing the description
/// until it arrives. The description doubles as the tooltip.
fn tile<'a>(image: &'a Image, thumbnails: &'a ThumbnailCache, size: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnails.peek(&image.thumbnail_url) {
        Some(handle) => iced::widget::image(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(image.alt_text()).size(typography::CAPTION))
            .padding(spacing::XS)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::thumbnail_placeholder)
            .into(),
    };

    match &image.description {
        Some(description) => {
            styles::tooltip::styled(content, description.clone(), tooltip::Position::Bottom)
                .into()
        }
        None => content,
    }
}

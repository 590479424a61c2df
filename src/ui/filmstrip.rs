// SPDX-License-Identifier: MPL-2.0
//! Horizontal filmstrip of captured photo thumbnails.

use crate::gallery::{PhotoId, PhotoStore};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the filmstrip.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user clicked the thumbnail of this photo.
    ThumbnailPressed(PhotoId),
}

/// Contextual data needed to render the filmstrip.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a PhotoStore,
    pub thumbnail_height: f32,
}

/// Renders the filmstrip; an empty store renders a one-line hint instead.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.store.is_empty() {
        return Container::new(
            Text::new(ctx.i18n.tr("filmstrip-empty-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fixed(ctx.thumbnail_height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into();
    }

    let mut strip = Row::new().spacing(spacing::SM);
    for photo in ctx.store.iter() {
        let thumbnail = Image::new(Handle::from_path(photo.uri.as_path()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(ctx.thumbnail_height))
            .height(Length::Fixed(ctx.thumbnail_height));

        strip = strip.push(
            button(thumbnail)
                .style(styles::buttons::thumbnail)
                .padding(0)
                .on_press(Message::ThumbnailPressed(photo.id)),
        );
    }

    scrollable(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

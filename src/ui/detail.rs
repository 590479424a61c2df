// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo view with caption.
//!
//! Receives only the target [`PhotoId`] through navigation and reads the
//! live store at render time. A target that is no longer resolvable renders
//! a placeholder instead of faulting.

use crate::gallery::{PhotoId, PhotoStore};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the detail screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a PhotoStore,
    pub target: PhotoId,
}

/// Renders the photo whose id matches the navigation target.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.store.get(ctx.target) {
        Some(photo) => {
            let full = Image::new(Handle::from_path(photo.uri.as_path()))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill);

            let caption = ctx
                .i18n
                .tr_with_args("detail-caption", &[("id", &photo.id.to_string())]);

            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(full)
                .push(Text::new(caption).size(typography::BODY).color(palette::WHITE))
                .into()
        }
        None => missing_state(ctx.i18n),
    };

    let back = button(Text::new(ctx.i18n.tr("detail-back")).size(typography::CAPTION))
        .style(styles::buttons::quiet)
        .on_press(Message::BackPressed);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(back)
            .push(content),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::containers::viewport)
    .into()
}

/// Placeholder when the target id resolves to nothing (stale navigation
/// entry or an id from a previous session).
fn missing_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("detail-missing-title"))
                .size(typography::TITLE)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("detail-missing-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

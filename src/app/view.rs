// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::gallery::PhotoStore;
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::design_tokens::sizing;
use crate::ui::detail;
use crate::ui::filmstrip;
use crate::ui::notifications;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub store: &'a PhotoStore,
    pub capture: &'a capture::State,
    pub notifications: &'a notifications::Manager,
    pub thumbnail_height: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::Detail(target) => detail::view(detail::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            target,
        })
        .map(Message::Detail),
    };

    let column = Column::new()
        .push(ctx.notifications.view(ctx.i18n).map(Message::Notification))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Capture pane above the filmstrip, the gallery composition.
fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let capture_pane = Container::new(
        capture::view(ctx.capture, capture::ViewContext { i18n: ctx.i18n }).map(Message::Capture),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let strip = Container::new(
        filmstrip::view(filmstrip::ViewContext {
            i18n: ctx.i18n,
            store: ctx.store,
            thumbnail_height: ctx.thumbnail_height,
        })
        .map(Message::Filmstrip),
    )
    .width(Length::Fill)
    .height(Length::Fixed(
        ctx.thumbnail_height + sizing::FILMSTRIP_PADDING,
    ));

    Column::new().push(capture_pane).push(strip).into()
}

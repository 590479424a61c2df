// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to. Handlers receive an [`UpdateContext`] with mutable
//! references to the parts of the application state they may touch.

use super::{Message, Screen, ScreenStack};
use crate::camera::{FeedEvent, Permission};
use crate::gallery::PhotoStore;
use crate::ui::capture;
use crate::ui::detail;
use crate::ui::filmstrip;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screens: &'a mut ScreenStack,
    pub store: &'a mut PhotoStore,
    pub capture: &'a mut capture::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles capture pane messages, appending captured photos to the store.
pub fn handle_capture_message(
    ctx: &mut UpdateContext<'_>,
    message: capture::Message,
) -> Task<Message> {
    // A dead feed is surfaced once, as an error toast.
    if let capture::Message::Feed(FeedEvent::Closed(error)) = &message {
        ctx.notifications.push(Notification::error(error.i18n_key()));
    }

    match capture::update(ctx.capture, message) {
        capture::Event::PhotoCaptured(uri) => {
            let id = ctx.store.append(uri);
            log::info!("captured photo {id} ({} in session)", ctx.store.len());
        }
        capture::Event::None => {}
    }

    Task::none()
}

/// Handles filmstrip messages: a thumbnail click pushes the detail route.
pub fn handle_filmstrip_message(
    ctx: &mut UpdateContext<'_>,
    message: filmstrip::Message,
) -> Task<Message> {
    match message {
        filmstrip::Message::ThumbnailPressed(id) => {
            ctx.screens.push(Screen::Detail(id));
        }
    }
    Task::none()
}

/// Handles detail screen messages.
pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: detail::Message,
) -> Task<Message> {
    match message {
        detail::Message::BackPressed => handle_navigate_back(ctx),
    }
}

/// Pops the navigation stack; a no-op on the gallery root.
pub fn handle_navigate_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.screens.pop();
    Task::none()
}

/// Records the camera permission result. Only the camera field is touched;
/// the media-library probe resolves independently.
pub fn handle_camera_permission(
    ctx: &mut UpdateContext<'_>,
    permission: Permission,
) -> Task<Message> {
    log::info!("camera permission resolved: {permission:?}");
    ctx.capture.set_camera_permission(permission);
    Task::none()
}

/// Records the media-library permission result.
pub fn handle_library_permission(
    ctx: &mut UpdateContext<'_>,
    permission: Permission,
) -> Task<Message> {
    log::info!("media library permission resolved: {permission:?}");
    ctx.capture.set_library_permission(permission);
    Task::none()
}

/// Handles notification messages (dismissals).
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    ctx.notifications.update(message);
    Task::none()
}

/// Periodic tick: expires auto-dismissing notifications.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

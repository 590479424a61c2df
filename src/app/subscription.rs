// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard) to messages
//! based on the current screen, plus the periodic tick for notification
//! auto-dismiss. The camera feed subscription itself lives in
//! `camera::feed` and is wired up in `App::subscription`.

use super::{Message, Screen};
use crate::ui::capture;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription for the current screen.
///
/// - Gallery: Space triggers the shutter.
/// - Detail: Escape pops back to the gallery.
///
/// Events already captured by a focused widget are left alone.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Space),
                    ..
                }) => Some(Message::Capture(capture::Message::CaptureRequested)),
                _ => None,
            }
        }),
        Screen::Detail(_) => event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            match event {
                event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => Some(Message::NavigateBack),
                _ => None,
            }
        }),
    }
}

/// Creates a periodic tick subscription while notifications are showing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

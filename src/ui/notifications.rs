// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Startup warnings (unreadable settings file) and camera feed failures are
//! surfaced here. Warnings auto-dismiss; errors stay until dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Color, Element, Length};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Warning that doesn't block operation (auto-dismisses).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl Severity {
    fn color(self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user. The message is an i18n key,
/// resolved at render time so a locale switch re-translates live toasts.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    fn expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|timeout| now.duration_since(self.created_at) >= timeout)
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification, queueing it if the visible set is full.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    pub fn dismiss(&mut self, id: NotificationId) {
        if let Some(position) = self.visible.iter().position(|n| n.id == id) {
            self.visible.remove(position);
            self.promote_from_queue();
        }
    }

    /// Drops expired notifications; called from the tick subscription.
    pub fn tick(&mut self, now: Instant) {
        self.visible.retain(|notification| !notification.expired(now));
        self.promote_from_queue();
    }

    pub fn has_any(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
        }
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }

    /// Renders the visible toasts as a banner column.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS);
        for notification in &self.visible {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(iced::Alignment::Center)
                .push(
                    Text::new(i18n.tr(&notification.message_key))
                        .size(typography::CAPTION)
                        .width(Length::Fill),
                )
                .push(
                    button(Text::new("×").size(typography::CAPTION))
                        .style(styles::buttons::quiet)
                        .on_press(Message::Dismiss(notification.id)),
                );

            column = column.push(
                container(row)
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::containers::toast(notification.severity.color())),
            );
        }
        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_fills_visible_then_queues() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::error("error-camera-general"));
        }
        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert_eq!(manager.queue.len(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::error("error-camera-general"));
        }
        let first = manager.visible.front().map(|n| n.id).expect("visible");
        manager.dismiss(first);
        assert_eq!(manager.visible.len(), MAX_VISIBLE);
        assert!(manager.queue.is_empty());
    }

    #[test]
    fn warnings_expire_errors_do_not() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("warning-config-invalid"));
        manager.push(Notification::error("error-camera-general"));

        let later = Instant::now() + Duration::from_secs(6);
        manager.tick(later);

        assert_eq!(manager.visible.len(), 1);
        assert_eq!(manager.visible[0].severity, Severity::Error);
    }

    #[test]
    fn has_any_reflects_both_sets() {
        let mut manager = Manager::new();
        assert!(!manager.has_any());
        manager.push(Notification::warning("warning-config-invalid"));
        assert!(manager.has_any());
    }
}

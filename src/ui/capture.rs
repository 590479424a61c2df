// SPDX-License-Identifier: MPL-2.0
//! Capture pane: live viewfinder, shutter button, and permission states.
//!
//! State down, messages up: the pane consumes camera feed events and
//! permission resolutions, and propagates captured photos to the parent as
//! an [`Event`]. It never touches the photo store itself.

use crate::camera::{FeedCommandSender, FeedEvent, Permission, PermissionSet};
use crate::error::CameraError;
use crate::gallery::PhotoUri;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Capture pane state.
#[derive(Debug, Default)]
pub struct State {
    permissions: PermissionSet,
    viewfinder: Option<Handle>,
    feed: Option<FeedCommandSender>,
    feed_closed: bool,
    last_error: Option<CameraError>,
}

/// Messages consumed by the capture pane.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event from the camera feed subscription.
    Feed(FeedEvent),
    /// The user pressed the shutter (button or Space).
    CaptureRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A capture was written to the media library and should be appended to
    /// the photo store.
    PhotoCaptured(PhotoUri),
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissions(&self) -> PermissionSet {
        self.permissions
    }

    pub fn set_camera_permission(&mut self, permission: Permission) {
        self.permissions.camera = permission;
    }

    pub fn set_library_permission(&mut self, permission: Permission) {
        self.permissions.media_library = permission;
    }

    /// Whether the feed died for good; stops the app re-subscribing.
    pub fn feed_closed(&self) -> bool {
        self.feed_closed
    }
}

/// Processes a capture pane message and returns the event for the parent.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CaptureRequested => {
            match &state.feed {
                Some(feed) => {
                    if let Err(error) = feed.capture() {
                        log::debug!("capture request dropped: {error}");
                    }
                }
                // No live camera: the request is a no-op by design.
                None => log::debug!("capture requested without an active camera; ignoring"),
            }
            Event::None
        }
        Message::Feed(event) => handle_feed_event(state, event),
    }
}

fn handle_feed_event(state: &mut State, event: FeedEvent) -> Event {
    match event {
        FeedEvent::Started(sender) => {
            state.feed = Some(sender);
            Event::None
        }
        FeedEvent::FrameReady(frame) => {
            state.viewfinder = Some(Handle::from_rgba(frame.width, frame.height, frame.rgba));
            Event::None
        }
        FeedEvent::Captured(uri) => {
            state.last_error = None;
            Event::PhotoCaptured(uri)
        }
        FeedEvent::CaptureFailed(error) => {
            state.last_error = Some(error);
            Event::None
        }
        FeedEvent::Closed(error) => {
            state.feed = None;
            state.viewfinder = None;
            state.feed_closed = true;
            state.last_error = Some(error);
            Event::None
        }
    }
}

/// Contextual data needed to render the capture pane.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the capture pane for the current permission and feed state.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let permissions = state.permissions;

    if permissions.any_denied() {
        let reason = if permissions.camera.is_denied() {
            ctx.i18n.tr("capture-denied-camera")
        } else {
            ctx.i18n.tr("capture-denied-library")
        };
        return placeholder(reason, Some(ctx.i18n.tr("capture-denied-hint")));
    }

    if !permissions.usable() {
        return placeholder(ctx.i18n.tr("capture-requesting-access"), None);
    }

    match &state.viewfinder {
        Some(handle) => viewfinder(handle, state, ctx),
        None => {
            let subtitle = state
                .last_error
                .as_ref()
                .map(|error| ctx.i18n.tr(error.i18n_key()));
            placeholder(ctx.i18n.tr("capture-starting"), subtitle)
        }
    }
}

fn viewfinder<'a>(
    handle: &'a Handle,
    state: &'a State,
    ctx: ViewContext<'a>,
) -> Element<'a, Message> {
    let preview = Image::new(handle.clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let shutter = button(
        Text::new(ctx.i18n.tr("capture-take-picture"))
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fixed(sizing::SHUTTER_MIN_WIDTH)),
    )
    .style(styles::buttons::primary)
    .padding([spacing::SM, spacing::LG])
    .on_press(Message::CaptureRequested);

    let mut controls = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(shutter);

    // non-fatal capture errors show up under the shutter
    if let Some(error) = &state.last_error {
        controls = controls.push(
            Text::new(ctx.i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    let content = Column::new()
        .push(preview)
        .push(
            Container::new(container(controls).padding(spacing::SM).style(styles::containers::overlay))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::SM),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::containers::viewport)
        .into()
}

/// Centered text placeholder used for the requesting/denied/starting states.
fn placeholder<'a>(title: String, subtitle: Option<String>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::BODY).color(palette::GRAY_400));

    if let Some(subtitle) = subtitle {
        content = content.push(
            Text::new(subtitle)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::containers::viewport)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ViewfinderFrame;
    use std::path::PathBuf;

    #[test]
    fn capture_without_feed_is_a_no_op() {
        let mut state = State::new();
        let event = update(&mut state, Message::CaptureRequested);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn frame_updates_viewfinder() {
        let mut state = State::new();
        let frame = ViewfinderFrame {
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };
        let event = update(&mut state, Message::Feed(FeedEvent::FrameReady(frame)));
        assert!(matches!(event, Event::None));
        assert!(state.viewfinder.is_some());
    }

    #[test]
    fn captured_event_propagates_uri() {
        let mut state = State::new();
        let uri = PhotoUri::new(PathBuf::from("/tmp/capture.jpg"));
        let event = update(&mut state, Message::Feed(FeedEvent::Captured(uri.clone())));
        match event {
            Event::PhotoCaptured(captured) => assert_eq!(captured, uri),
            Event::None => panic!("expected PhotoCaptured"),
        }
    }

    #[test]
    fn closed_feed_clears_viewfinder_and_sticks() {
        let mut state = State::new();
        let frame = ViewfinderFrame {
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };
        update(&mut state, Message::Feed(FeedEvent::FrameReady(frame)));
        update(
            &mut state,
            Message::Feed(FeedEvent::Closed(CameraError::NoDevice)),
        );
        assert!(state.viewfinder.is_none());
        assert!(state.feed_closed());
    }

    #[test]
    fn permission_setters_are_independent() {
        let mut state = State::new();
        state.set_camera_permission(Permission::Granted);
        assert_eq!(state.permissions().camera, Permission::Granted);
        assert_eq!(state.permissions().media_library, Permission::Unknown);

        state.set_library_permission(Permission::Denied);
        assert_eq!(state.permissions().camera, Permission::Granted);
        assert!(!state.permissions().usable());
    }
}

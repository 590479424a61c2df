// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (capture, gallery,
//! localization, preferences) and translates messages into side effects
//! like permission probes or photo-store appends. Policy decisions (window
//! sizing, which device to open, when the camera feed runs) stay close to
//! the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, ScreenStack};

use crate::camera::{self, DeviceSpec, Permission};
use crate::gallery::PhotoStore;
use crate::i18n::fluent::I18n;
use crate::ui::capture;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state that bridges UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screens: ScreenStack,
    store: PhotoStore,
    capture: capture::State,
    notifications: notifications::Manager,
    config: config::Config,
    /// Which capture device the feed opens.
    device: DeviceSpec,
    /// Whether the viewfinder preview is mirrored.
    mirror_preview: bool,
    /// Capture scratch directory; `None` when no data dir could be resolved.
    library_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screens.current())
            .field("photos", &self.store.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the two permission
    /// probes concurrently. Each probe resolves independently; the capture
    /// pane combines the results.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let device = if flags.synthetic_camera {
            DeviceSpec::Synthetic
        } else {
            DeviceSpec::Index(flags.device.unwrap_or_else(|| config.device_index()))
        };

        let library_dir = paths::captures_dir();
        let mirror_preview = config.mirror_preview();

        let mut app = App {
            i18n,
            screens: ScreenStack::new(),
            store: PhotoStore::new(),
            capture: capture::State::new(),
            notifications: notifications::Manager::new(),
            config,
            device,
            mirror_preview,
            library_dir: library_dir.clone(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        let mut probes = vec![Task::perform(
            camera::request_camera_access(device),
            Message::CameraPermissionResolved,
        )];

        match library_dir {
            Some(dir) => probes.push(Task::perform(
                camera::request_library_access(dir),
                Message::LibraryPermissionResolved,
            )),
            None => {
                log::warn!("no data directory could be resolved; media library unavailable");
                app.capture.set_library_permission(Permission::Denied);
            }
        }

        (app, Task::batch(probes))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screens: &mut self.screens,
            store: &mut self.store,
            capture: &mut self.capture,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Capture(message) => update::handle_capture_message(&mut ctx, message),
            Message::Filmstrip(message) => update::handle_filmstrip_message(&mut ctx, message),
            Message::Detail(message) => update::handle_detail_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::CameraPermissionResolved(permission) => {
                update::handle_camera_permission(&mut ctx, permission)
            }
            Message::LibraryPermissionResolved(permission) => {
                update::handle_library_permission(&mut ctx, permission)
            }
            Message::NavigateBack => update::handle_navigate_back(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screens.current(),
            store: &self.store,
            capture: &self.capture,
            notifications: &self.notifications,
            thumbnail_height: self.config.thumbnail_height(),
        })
    }

    /// The camera feed runs only while both permissions are granted and the
    /// feed has not died; keyboard routing follows the current screen.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![subscription::create_event_subscription(
            self.screens.current(),
        )];

        if self.capture.permissions().usable() && !self.capture.feed_closed() {
            if let Some(dir) = &self.library_dir {
                subscriptions.push(
                    camera::feed::run(camera::FeedConfig {
                        device: self.device,
                        mirror_preview: self.mirror_preview,
                        library_dir: dir.clone(),
                    })
                    .map(|event| Message::Capture(capture::Message::Feed(event))),
                );
            }
        }

        subscriptions.push(subscription::create_tick_subscription(
            self.notifications.has_any(),
        ));

        Subscription::batch(subscriptions)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }
}

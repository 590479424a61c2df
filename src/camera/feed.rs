// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for the live camera feed.
//!
//! A dedicated worker thread owns the capture backend (device handles do not
//! move across await points) and streams viewfinder frames into the UI event
//! loop. Commands flow the other way over an unbounded channel exposed
//! through [`FeedCommandSender`], which the UI receives in the
//! [`FeedEvent::Started`] event.
//!
//! Channel lifetimes scope every async resolution: when the subscription is
//! dropped, the event channel closes and the worker exits on its next send;
//! a worker event arriving after teardown lands in a closed channel and is
//! discarded instead of touching dead state.

use super::backend::{self, CameraBackend};
use super::{library, DeviceSpec};
use crate::error::CameraError;
use crate::gallery::PhotoUri;
use iced::futures::SinkExt;
use iced::stream;
use iced::Subscription;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Subscription id for the camera feed. One feed exists per session, so the
/// id is a unit marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CameraFeedId;

/// How many viewfinder frames may be in flight before the worker starts
/// dropping them. Dropping is preferable to queueing: the viewfinder should
/// show now, not three frames ago.
const FRAME_CHANNEL_CAPACITY: usize = 4;

/// Commands the UI can send to the feed worker.
#[derive(Debug, Clone, Copy)]
enum FeedCommand {
    Capture,
}

/// Handle for sending commands to the feed worker from the UI.
/// Cloneable; stored in the capture pane state once the feed has started.
#[derive(Clone)]
pub struct FeedCommandSender {
    tx: mpsc::UnboundedSender<FeedCommand>,
}

impl FeedCommandSender {
    /// Requests a full-resolution capture of the next frame.
    pub fn capture(&self) -> Result<(), CameraError> {
        self.tx
            .send(FeedCommand::Capture)
            .map_err(|_| CameraError::StreamFailed("camera worker not running".to_string()))
    }
}

impl fmt::Debug for FeedCommandSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

/// A viewfinder frame ready for display.
#[derive(Debug, Clone)]
pub struct ViewfinderFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Events emitted by the camera feed subscription.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// Feed started; provides the command sender for capture requests.
    Started(FeedCommandSender),

    /// A new viewfinder frame is ready.
    FrameReady(ViewfinderFrame),

    /// A requested capture was written to the media library.
    Captured(PhotoUri),

    /// A requested capture failed; the feed keeps running.
    CaptureFailed(CameraError),

    /// The feed died and will not deliver further frames.
    Closed(CameraError),
}

/// Static configuration the feed worker needs.
#[derive(Debug, Clone, Hash)]
pub struct FeedConfig {
    pub device: DeviceSpec,
    pub mirror_preview: bool,
    pub library_dir: PathBuf,
}

/// Creates the camera feed subscription.
///
/// The subscription spawns the worker thread on first poll, forwards its
/// events into the runtime, and ends the worker by dropping the event
/// channel when the subscription itself is dropped.
pub fn run(config: FeedConfig) -> Subscription<FeedEvent> {
    Subscription::run_with((CameraFeedId, config), |(_, config)| {
        let config = config.clone();
        stream::channel(FRAME_CHANNEL_CAPACITY, move |mut output: iced::futures::channel::mpsc::Sender<FeedEvent>| async move {
            let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
            let (event_tx, mut event_rx) = mpsc::channel(FRAME_CHANNEL_CAPACITY);

            let worker = std::thread::Builder::new()
                .name("camera-feed".to_string())
                .spawn(move || worker_loop(config, cmd_rx, event_tx));

            if worker.is_err() {
                let _ = output
                    .send(FeedEvent::Closed(CameraError::Other(
                        "failed to spawn camera worker".to_string(),
                    )))
                    .await;
                return;
            }

            let _ = output
                .send(FeedEvent::Started(FeedCommandSender { tx: cmd_tx }))
                .await;

            while let Some(event) = event_rx.recv().await {
                if output.send(event).await.is_err() {
                    break;
                }
            }
        })
    })
}

/// Blocking loop run on the worker thread.
///
/// Polls commands between frames so a capture request is served with the
/// next frame off the device. A full frame channel drops the frame rather
/// than blocking the device; capture results and errors always go through.
fn worker_loop(
    config: FeedConfig,
    mut commands: mpsc::UnboundedReceiver<FeedCommand>,
    events: mpsc::Sender<FeedEvent>,
) {
    let mut backend = match backend::create(&config.device) {
        Ok(backend) => backend,
        Err(error) => {
            let _ = events.blocking_send(FeedEvent::Closed(error));
            return;
        }
    };

    if let Err(error) = backend.open() {
        let _ = events.blocking_send(FeedEvent::Closed(error));
        return;
    }

    log::info!("camera feed started ({:?})", config.device);

    loop {
        match commands.try_recv() {
            Ok(FeedCommand::Capture) => {
                let event = match take_picture(backend.as_mut(), &config.library_dir) {
                    Ok(uri) => FeedEvent::Captured(uri),
                    Err(error) => {
                        log::warn!("capture failed: {error}");
                        FeedEvent::CaptureFailed(error)
                    }
                };
                if events.blocking_send(event).is_err() {
                    return;
                }
            }
            Err(mpsc::error::TryRecvError::Disconnected) => {
                log::info!("camera feed command channel closed, stopping");
                return;
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        match backend.frame() {
            Ok(mut frame) => {
                if config.mirror_preview {
                    frame.mirror_horizontal();
                }
                let event = FeedEvent::FrameReady(ViewfinderFrame {
                    width: frame.width,
                    height: frame.height,
                    rgba: frame.rgba,
                });
                match events.try_send(event) {
                    Ok(()) => {}
                    // UI is behind; drop this frame
                    Err(mpsc::error::TrySendError::Full(_)) => {}
                    Err(mpsc::error::TrySendError::Closed(_)) => return,
                }
            }
            Err(error) => {
                log::error!("camera stream died: {error}");
                let _ = events.blocking_send(FeedEvent::Closed(error));
                return;
            }
        }
    }
}

/// Grabs the next frame at full resolution and writes it to the library.
fn take_picture(
    backend: &mut dyn CameraBackend,
    library_dir: &Path,
) -> Result<PhotoUri, CameraError> {
    let frame = backend
        .frame()
        .map_err(|error| CameraError::CaptureFailed(error.to_string()))?;
    library::save_capture(library_dir, &frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn worker_streams_frames_and_serves_captures() {
        let dir = tempdir().expect("tempdir");
        let config = FeedConfig {
            device: DeviceSpec::Synthetic,
            mirror_preview: false,
            library_dir: dir.path().to_path_buf(),
        };

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::channel(FRAME_CHANNEL_CAPACITY);
        let handle = std::thread::spawn(move || worker_loop(config, cmd_rx, event_tx));

        // first event must be a frame
        let first = event_rx.recv().await.expect("frame event");
        assert!(matches!(first, FeedEvent::FrameReady(_)));

        cmd_tx.send(FeedCommand::Capture).expect("send capture");

        // drain until the capture result arrives
        let uri = loop {
            match event_rx.recv().await.expect("event") {
                FeedEvent::Captured(uri) => break uri,
                FeedEvent::FrameReady(_) => continue,
                other => panic!("unexpected event: {other:?}"),
            }
        };
        assert!(uri.as_path().exists());

        // dropping the receiver stops the worker
        drop(event_rx);
        drop(cmd_tx);
        handle.join().expect("worker should exit cleanly");
    }

    #[test]
    fn command_sender_reports_closed_worker() {
        let (tx, rx) = mpsc::unbounded_channel();
        let sender = FeedCommandSender { tx };
        drop(rx);
        assert!(sender.capture().is_err());
    }
}

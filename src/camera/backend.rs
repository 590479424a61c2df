// SPDX-License-Identifier: MPL-2.0
//! Capture backend seam.
//!
//! Everything above this module talks to the camera through the
//! [`CameraBackend`] trait; the concrete device access lives in the
//! per-backend modules. Backends are created and driven on the feed worker
//! thread, never on the UI thread.

use super::nokhwa_backend::NokhwaBackend;
use super::synthetic::SyntheticBackend;
use super::{DeviceSpec, Permission};
use crate::error::CameraError;

/// A single frame as delivered by a backend: tightly packed RGBA.
#[derive(Debug, Clone)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl RawFrame {
    /// Flips the frame horizontally in place.
    ///
    /// Used for the viewfinder preview only; captures keep the sensor
    /// orientation.
    pub fn mirror_horizontal(&mut self) {
        let width = self.width as usize;
        let row_bytes = width * 4;
        for row in self.rgba.chunks_exact_mut(row_bytes) {
            for x in 0..width / 2 {
                let left = x * 4;
                let right = (width - 1 - x) * 4;
                for offset in 0..4 {
                    row.swap(left + offset, right + offset);
                }
            }
        }
    }
}

/// Live handle to a capture device.
pub trait CameraBackend {
    /// Starts the device stream. Must be called once before [`Self::frame`].
    fn open(&mut self) -> Result<(), CameraError>;

    /// Blocks until the next frame is available and returns it.
    fn frame(&mut self) -> Result<RawFrame, CameraError>;
}

/// Creates the backend for a device spec.
pub fn create(spec: &DeviceSpec) -> Result<Box<dyn CameraBackend>, CameraError> {
    match spec {
        DeviceSpec::Index(index) => Ok(Box::new(NokhwaBackend::new(*index)?)),
        DeviceSpec::Synthetic => Ok(Box::new(SyntheticBackend::new())),
    }
}

/// Probes whether a device for `spec` is present and reachable.
pub fn probe(spec: &DeviceSpec) -> Permission {
    match spec {
        DeviceSpec::Synthetic => Permission::Granted,
        DeviceSpec::Index(_) => {
            if NokhwaBackend::device_available() {
                Permission::Granted
            } else {
                Permission::Denied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reverses_each_row() {
        // 2x2 frame with distinct pixels
        let mut frame = RawFrame {
            width: 2,
            height: 2,
            rgba: vec![
                1, 1, 1, 255, 2, 2, 2, 255, // row 0: A B
                3, 3, 3, 255, 4, 4, 4, 255, // row 1: C D
            ],
        };
        frame.mirror_horizontal();
        assert_eq!(
            frame.rgba,
            vec![
                2, 2, 2, 255, 1, 1, 1, 255, // row 0: B A
                4, 4, 4, 255, 3, 3, 3, 255, // row 1: D C
            ]
        );
    }

    #[test]
    fn mirror_twice_is_identity() {
        let original = RawFrame {
            width: 3,
            height: 1,
            rgba: vec![
                10, 0, 0, 255, 20, 0, 0, 255, 30, 0, 0, 255,
            ],
        };
        let mut frame = original.clone();
        frame.mirror_horizontal();
        frame.mirror_horizontal();
        assert_eq!(frame.rgba, original.rgba);
    }

    #[test]
    fn create_synthetic_backend_opens_and_produces_frames() {
        let mut backend = create(&DeviceSpec::Synthetic).expect("synthetic backend");
        backend.open().expect("open should succeed");
        let frame = backend.frame().expect("frame should succeed");
        assert_eq!(
            frame.rgba.len(),
            (frame.width * frame.height * 4) as usize
        );
    }
}

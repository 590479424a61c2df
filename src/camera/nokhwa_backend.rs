// SPDX-License-Identifier: MPL-2.0
//! Real capture devices via the `nokhwa` crate.
//!
//! `nokhwa` abstracts the platform capture APIs (V4L2, AVFoundation, Media
//! Foundation); this module keeps all of its types behind the
//! [`CameraBackend`] seam so the rest of the crate never sees them.

use super::backend::{CameraBackend, RawFrame};
use crate::error::CameraError;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;

pub struct NokhwaBackend {
    camera: Camera,
}

impl NokhwaBackend {
    /// Opens the device at `index` requesting the highest available
    /// resolution. The stream is not started until [`CameraBackend::open`].
    pub fn new(index: u32) -> Result<Self, CameraError> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|e| CameraError::from_backend(&e.to_string()))?;
        Ok(Self { camera })
    }

    /// Whether at least one capture device can be enumerated.
    pub fn device_available() -> bool {
        match nokhwa::query(ApiBackend::Auto) {
            Ok(devices) => !devices.is_empty(),
            Err(error) => {
                log::debug!("device enumeration failed: {error}");
                false
            }
        }
    }
}

impl CameraBackend for NokhwaBackend {
    fn open(&mut self) -> Result<(), CameraError> {
        self.camera
            .open_stream()
            .map_err(|e| CameraError::from_backend(&e.to_string()))
    }

    fn frame(&mut self) -> Result<RawFrame, CameraError> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| CameraError::from_backend(&e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::from_backend(&e.to_string()))?;

        let (width, height) = (decoded.width(), decoded.height());
        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in decoded.pixels() {
            rgba.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 255]);
        }

        Ok(RawFrame {
            width,
            height,
            rgba,
        })
    }
}

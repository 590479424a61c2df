// SPDX-License-Identifier: MPL-2.0
//! Session media library: the scratch directory captures are written into.
//!
//! The directory exists so the GUI toolkit has file-backed image handles to
//! render; nothing is read back across sessions and nothing indexes it.
//! "Media library permission" on this platform means the directory can be
//! created and written.

use super::backend::RawFrame;
use crate::error::CameraError;
use crate::gallery::PhotoUri;
use std::path::Path;

/// Creates the capture directory, probing writability in the process.
pub fn ensure_library_dir(dir: &Path) -> crate::error::Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Encodes a captured frame as JPEG and writes it into the library.
///
/// Returns the opaque reference the photo store keeps; the filename carries
/// a wall-clock timestamp purely so concurrent sessions never collide.
pub fn save_capture(dir: &Path, frame: &RawFrame) -> Result<PhotoUri, CameraError> {
    let filename = format!(
        "capture-{}.jpg",
        chrono::Local::now().format("%Y%m%d-%H%M%S%3f")
    );
    let path = dir.join(filename);

    let buffer: image_rs::RgbaImage =
        image_rs::ImageBuffer::from_raw(frame.width, frame.height, frame.rgba.clone())
            .ok_or_else(|| {
                CameraError::CaptureFailed("frame buffer does not match its dimensions".to_string())
            })?;

    // JPEG has no alpha channel; captures are opaque anyway
    image_rs::DynamicImage::ImageRgba8(buffer)
        .to_rgb8()
        .save_with_format(&path, image_rs::ImageFormat::Jpeg)
        .map_err(|e| CameraError::CaptureFailed(e.to_string()))?;

    log::debug!("capture written to {}", path.display());
    Ok(PhotoUri::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn solid_frame(width: u32, height: u32) -> RawFrame {
        RawFrame {
            width,
            height,
            rgba: vec![127; (width * height * 4) as usize],
        }
    }

    #[test]
    fn ensure_library_dir_creates_nested_path() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("captures").join("session");
        ensure_library_dir(&nested).expect("should create");
        assert!(nested.is_dir());
    }

    #[test]
    fn save_capture_writes_decodable_jpeg() {
        let dir = tempdir().expect("tempdir");
        let uri = save_capture(dir.path(), &solid_frame(8, 6)).expect("save");

        assert!(uri.as_path().exists());
        let decoded = image_rs::open(uri.as_path()).expect("decodable");
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 6);
    }

    #[test]
    fn save_capture_rejects_malformed_frame() {
        let dir = tempdir().expect("tempdir");
        let bad = RawFrame {
            width: 8,
            height: 6,
            rgba: vec![0; 10], // too short for 8x6 RGBA
        };
        let result = save_capture(dir.path(), &bad);
        assert!(matches!(result, Err(CameraError::CaptureFailed(_))));
    }
}

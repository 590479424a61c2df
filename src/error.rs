// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Camera(CameraError),
}

/// Specific error types for camera capture issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// No capture device could be found on the system
    NoDevice,

    /// The device exists but access to it was refused
    AccessDenied,

    /// The device stream could not be started or died mid-session
    StreamFailed(String),

    /// A single capture attempt failed (grab, encode, or write)
    CaptureFailed(String),

    /// Generic error with raw message
    Other(String),
}

impl CameraError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CameraError::NoDevice => "error-camera-no-device",
            CameraError::AccessDenied => "error-camera-access-denied",
            CameraError::StreamFailed(_) => "error-camera-stream-failed",
            CameraError::CaptureFailed(_) => "error-camera-capture-failed",
            CameraError::Other(_) => "error-camera-general",
        }
    }

    /// Attempts to classify a raw backend error message into a specific
    /// `CameraError` type. Capture backends report plain strings; the
    /// classification drives which localized message the user sees.
    pub fn from_backend(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("permission denied")
            || msg_lower.contains("not authorized")
            || msg_lower.contains("access denied")
        {
            return CameraError::AccessDenied;
        }

        if msg_lower.contains("no device")
            || msg_lower.contains("not found")
            || msg_lower.contains("no such device")
            || msg_lower.contains("no such file")
        {
            return CameraError::NoDevice;
        }

        if msg_lower.contains("stream")
            || msg_lower.contains("busy")
            || msg_lower.contains("format")
            || msg_lower.contains("timeout")
        {
            return CameraError::StreamFailed(msg.to_string());
        }

        CameraError::Other(msg.to_string())
    }
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::NoDevice => write!(f, "No camera device found"),
            CameraError::AccessDenied => write!(f, "Camera access denied"),
            CameraError::StreamFailed(msg) => write!(f, "Camera stream failed: {}", msg),
            CameraError::CaptureFailed(msg) => write!(f, "Capture failed: {}", msg),
            CameraError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Camera(e) => write!(f, "Camera Error: {}", e),
        }
    }
}

impl From<CameraError> for Error {
    fn from(err: CameraError) -> Self {
        Error::Camera(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn camera_error_from_backend_access() {
        let err = CameraError::from_backend("V4L2: Permission denied");
        assert_eq!(err, CameraError::AccessDenied);
    }

    #[test]
    fn camera_error_from_backend_no_device() {
        let err = CameraError::from_backend("No such device");
        assert_eq!(err, CameraError::NoDevice);
    }

    #[test]
    fn camera_error_from_backend_stream() {
        let err = CameraError::from_backend("Device or resource busy");
        assert!(matches!(err, CameraError::StreamFailed(_)));
    }

    #[test]
    fn camera_error_from_backend_other() {
        let err = CameraError::from_backend("something unexpected");
        assert!(matches!(err, CameraError::Other(_)));
    }

    #[test]
    fn camera_error_i18n_keys() {
        assert_eq!(CameraError::NoDevice.i18n_key(), "error-camera-no-device");
        assert_eq!(
            CameraError::AccessDenied.i18n_key(),
            "error-camera-access-denied"
        );
        assert_eq!(
            CameraError::CaptureFailed(String::new()).i18n_key(),
            "error-camera-capture-failed"
        );
    }

    #[test]
    fn camera_error_display() {
        let err = CameraError::StreamFailed("pipeline stalled".to_string());
        assert!(format!("{}", err).contains("pipeline stalled"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Photo reference types.

use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier of a captured photo.
///
/// Wraps the photo's zero-based position in capture order; its decimal
/// rendering ("0", "1", ...) is the photo's user-visible identifier.
/// Assigned once at capture time and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(u32);

impl PhotoId {
    pub(crate) fn from_position(position: usize) -> Self {
        Self(position as u32)
    }

    /// The zero-based capture position this id was assigned from.
    pub fn position(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to captured image data.
///
/// The application never decodes or interprets the referenced data itself;
/// rendering hands the reference to the toolkit's image widget as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUri(PathBuf);

impl PhotoUri {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for PhotoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for PhotoUri {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// A captured photo: identifier plus an opaque reference to its image data.
/// Created exactly once per capture, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub uri: PhotoUri,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_id_renders_as_decimal_position() {
        assert_eq!(PhotoId::from_position(0).to_string(), "0");
        assert_eq!(PhotoId::from_position(12).to_string(), "12");
    }

    #[test]
    fn photo_uri_preserves_path() {
        let uri = PhotoUri::new(PathBuf::from("/tmp/capture-000.jpg"));
        assert_eq!(uri.as_path(), Path::new("/tmp/capture-000.jpg"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Camera capture layer.
//!
//! The platform camera is an external collaborator reached through the
//! [`backend::CameraBackend`] seam: a real backend wraps the `nokhwa`
//! capture crate, and a synthetic test-pattern backend implements the same
//! trait for tests and for machines without a device.
//!
//! Access is modelled as two independent permissions (camera device and
//! media library), requested concurrently at startup and combined with
//! logical AND by [`PermissionSet::usable`]. The live viewfinder itself is
//! driven by [`feed`], a worker thread bridged into the UI event loop
//! through an Iced subscription.

pub mod backend;
pub mod feed;
pub mod library;
mod nokhwa_backend;
mod synthetic;

pub use backend::{CameraBackend, RawFrame};
pub use feed::{FeedCommandSender, FeedConfig, FeedEvent, ViewfinderFrame};

use std::path::PathBuf;

/// Outcome of a permission request, tri-state so the UI can distinguish
/// "still waiting" from an actual denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl Permission {
    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }

    pub fn is_denied(self) -> bool {
        self == Permission::Denied
    }

    pub fn is_resolved(self) -> bool {
        self != Permission::Unknown
    }
}

/// The two permissions the capture flow depends on, tracked independently.
///
/// The camera feature is usable only if both underlying requests report
/// granted; the requests resolve asynchronously and in either order, and
/// each resolution updates only its own field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionSet {
    pub camera: Permission,
    pub media_library: Permission,
}

impl PermissionSet {
    pub fn usable(&self) -> bool {
        self.camera.is_granted() && self.media_library.is_granted()
    }

    pub fn any_denied(&self) -> bool {
        self.camera.is_denied() || self.media_library.is_denied()
    }

    pub fn resolved(&self) -> bool {
        self.camera.is_resolved() && self.media_library.is_resolved()
    }
}

/// Which capture device to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceSpec {
    /// A real device addressed by platform index.
    Index(u32),
    /// The built-in test-pattern generator.
    Synthetic,
}

/// Requests access to the capture device.
///
/// Desktop translation of the platform permission dialog: granted when the
/// backend can enumerate a device for `spec`. Probing touches the device
/// layer, so it runs on the blocking pool.
pub async fn request_camera_access(spec: DeviceSpec) -> Permission {
    match tokio::task::spawn_blocking(move || backend::probe(&spec)).await {
        Ok(permission) => permission,
        Err(join_error) => {
            log::warn!("camera permission probe did not complete: {join_error}");
            Permission::Denied
        }
    }
}

/// Requests access to the media library (the session capture directory).
///
/// Granted when the directory can be created and written.
pub async fn request_library_access(dir: PathBuf) -> Permission {
    match tokio::task::spawn_blocking(move || library::ensure_library_dir(&dir)).await {
        Ok(Ok(())) => Permission::Granted,
        Ok(Err(error)) => {
            log::warn!("media library unavailable: {error}");
            Permission::Denied
        }
        Err(join_error) => {
            log::warn!("media library probe did not complete: {join_error}");
            Permission::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_permission_set_is_unresolved() {
        let set = PermissionSet::default();
        assert!(!set.usable());
        assert!(!set.any_denied());
        assert!(!set.resolved());
    }

    #[test]
    fn usable_requires_both_grants() {
        let mut set = PermissionSet::default();
        set.camera = Permission::Granted;
        assert!(!set.usable());
        set.media_library = Permission::Granted;
        assert!(set.usable());
    }

    #[test]
    fn resolution_order_does_not_change_outcome() {
        // library denied first, camera granted second
        let mut first = PermissionSet::default();
        first.media_library = Permission::Denied;
        first.camera = Permission::Granted;

        // camera granted first, library denied second
        let mut second = PermissionSet::default();
        second.camera = Permission::Granted;
        second.media_library = Permission::Denied;

        assert_eq!(first, second);
        assert!(!first.usable());
        assert!(first.any_denied());
    }

    #[test]
    fn synthetic_probe_is_always_granted() {
        assert_eq!(backend::probe(&DeviceSpec::Synthetic), Permission::Granted);
    }
}

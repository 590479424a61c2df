// SPDX-License-Identifier: MPL-2.0
//! In-memory ordered store of captured photos.

use super::{Photo, PhotoId, PhotoUri};

/// Ordered sequence of captured photos, held in memory for the lifetime of
/// the session.
///
/// Append is the only mutation; nothing is ever removed or updated, so a
/// photo's id always equals its position in the sequence.
#[derive(Debug, Default)]
pub struct PhotoStore {
    photos: Vec<Photo>,
}

impl PhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a captured image reference and returns the assigned id.
    ///
    /// The id is derived from the store length before the append, so the
    /// first photo is "0", the second "1", and so on.
    pub fn append(&mut self, uri: PhotoUri) -> PhotoId {
        let id = PhotoId::from_position(self.photos.len());
        self.photos.push(Photo { id, uri });
        id
    }

    /// Looks up a photo by id with a linear scan.
    ///
    /// Ids are positions by construction, but the lookup stays a scan so a
    /// stale id from a popped screen degrades to `None` instead of indexing
    /// out of bounds.
    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn uri(name: &str) -> PhotoUri {
        PhotoUri::new(PathBuf::from(name))
    }

    #[test]
    fn append_assigns_sequential_ids() {
        let mut store = PhotoStore::new();
        for i in 0..20 {
            let id = store.append(uri(&format!("photo-{i}.jpg")));
            assert_eq!(id.to_string(), i.to_string());
        }
        assert_eq!(store.len(), 20);
        for (i, photo) in store.iter().enumerate() {
            assert_eq!(photo.id.to_string(), i.to_string());
        }
    }

    #[test]
    fn get_returns_matching_photo() {
        let mut store = PhotoStore::new();
        store.append(uri("a"));
        let id = store.append(uri("b"));
        let photo = store.get(id).expect("photo should exist");
        assert_eq!(photo.uri, uri("b"));
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let mut store = PhotoStore::new();
        store.append(uri("a"));
        assert!(store.get(PhotoId::from_position(5)).is_none());
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = PhotoStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}

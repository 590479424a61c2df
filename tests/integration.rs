// SPDX-License-Identifier: MPL-2.0
use iced_shutter::app::config::{self, Config};
use iced_shutter::app::{Screen, ScreenStack};
use iced_shutter::camera::backend::{self, CameraBackend};
use iced_shutter::camera::{library, DeviceSpec, Permission, PermissionSet};
use iced_shutter::gallery::{PhotoStore, PhotoUri};
use iced_shutter::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_capture_order_assigns_decimal_ids() {
    let mut store = PhotoStore::new();
    for i in 0..10 {
        let uri = PhotoUri::new(std::path::PathBuf::from(format!("/tmp/photo-{i}.jpg")));
        let id = store.append(uri);
        assert_eq!(id.to_string(), i.to_string());
    }
    assert_eq!(store.len(), 10);

    // every assigned id resolves back to its photo
    for (i, photo) in store.iter().enumerate() {
        let found = store.get(photo.id).expect("photo should be found by id");
        assert_eq!(found.id.to_string(), i.to_string());
    }
}

#[test]
fn test_navigation_gallery_to_detail_and_back() {
    let mut store = PhotoStore::new();
    let id = store.append(PhotoUri::new(std::path::PathBuf::from("/tmp/a.jpg")));

    let mut screens = ScreenStack::new();
    assert_eq!(screens.current(), Screen::Gallery);

    screens.push(Screen::Detail(id));
    assert_eq!(screens.current(), Screen::Detail(id));
    assert_eq!(screens.depth(), 2);

    assert!(screens.pop());
    assert_eq!(screens.current(), Screen::Gallery);

    // popping the root does nothing
    assert!(!screens.pop());
    assert_eq!(screens.current(), Screen::Gallery);
}

#[test]
fn test_permissions_require_both_grants_in_any_order() {
    let mut set = PermissionSet::default();
    set.media_library = Permission::Granted;
    assert!(!set.usable());
    set.camera = Permission::Granted;
    assert!(set.usable());

    let mut denied = PermissionSet::default();
    denied.camera = Permission::Granted;
    denied.media_library = Permission::Denied;
    assert!(!denied.usable());
    assert!(denied.any_denied());
}

#[test]
fn test_synthetic_capture_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // media-library probe: directory creation
    library::ensure_library_dir(dir.path()).expect("library dir should be writable");

    // camera probe: synthetic device is always present
    assert_eq!(
        backend::probe(&DeviceSpec::Synthetic),
        Permission::Granted
    );

    // open, grab a frame, save it the way the feed worker does
    let mut camera = backend::create(&DeviceSpec::Synthetic).expect("backend");
    camera.open().expect("open");
    let frame = camera.frame().expect("frame");
    let uri = library::save_capture(dir.path(), &frame).expect("save capture");

    let decoded = image_rs::open(uri.as_path()).expect("capture should be a decodable image");
    assert_eq!(decoded.width(), frame.width);
    assert_eq!(decoded.height(), frame.height);

    // appending the capture gives it the next sequential id
    let mut store = PhotoStore::new();
    let id = store.append(uri);
    assert_eq!(id.to_string(), "0");
}

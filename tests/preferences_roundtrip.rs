use std::fs;
use std::path::PathBuf;

use egui_mesh3d::{Preferences, PreferencesStore, DEFAULT_PERSPECTIVE_ZOOM};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("egui_mesh3d_{}_{name}.json", std::process::id()))
}

#[test]
fn test_save_then_load_roundtrip() {
    let path = temp_path("roundtrip");
    let store = PreferencesStore::new(&path);

    let mut prefs = Preferences::default();
    prefs.display.dashed_edges = true;
    prefs.display.perspective = false;
    prefs.display.round_points = false;
    prefs.display.hide_points = true;
    prefs.color.background = [10., 20., 30., 128.];
    prefs.color.vertex = [1., 2., 3.];
    prefs.color.edge = [200., 100., 50.];
    prefs.size.edge_width = 2;
    prefs.size.vertex_size = 7;
    prefs.size.zoom = 0.42;

    store.save(&prefs);
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded, prefs);
}

#[test]
fn test_missing_file_yields_defaults() {
    let store = PreferencesStore::new(temp_path("missing_never_written"));
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn test_malformed_file_yields_defaults() {
    let path = temp_path("malformed");
    fs::write(&path, "not a settings document {").unwrap();

    let store = PreferencesStore::new(&path);
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded, Preferences::default());
}

#[test]
fn test_partial_file_defaults_remaining_keys() {
    let path = temp_path("partial");
    fs::write(
        &path,
        r#"{ "color": { "edge": [0.0, 255.0, 0.0] }, "display": { "hide_points": true } }"#,
    )
    .unwrap();

    let store = PreferencesStore::new(&path);
    let loaded = store.load();
    fs::remove_file(&path).ok();

    assert_eq!(loaded.color.edge, [0., 255., 0.]);
    assert!(loaded.display.hide_points);
    // Everything absent from the file keeps its default.
    assert_eq!(loaded.color.vertex, [0., 0., 0.]);
    assert!(loaded.display.perspective);
    assert_eq!(loaded.size.edge_width, 5);
    assert_eq!(loaded.size.zoom, DEFAULT_PERSPECTIVE_ZOOM);
}

#[test]
fn test_save_if_changed_skips_unchanged_document() {
    let path = temp_path("changed");
    let store = PreferencesStore::new(&path);

    let mut prefs = Preferences::default();
    store.save_if_changed(&prefs);
    assert!(path.exists());

    // An unchanged document must not be rewritten.
    fs::remove_file(&path).unwrap();
    store.save_if_changed(&prefs);
    assert!(!path.exists());

    prefs.size.vertex_size = 9;
    store.save_if_changed(&prefs);
    assert!(path.exists());

    fs::remove_file(&path).ok();
}

mod camera;
mod draw;
mod helpers;
mod mesh;
mod metadata;
mod preferences;
mod settings;
mod view;

#[cfg(feature = "events")]
pub mod events;

pub use self::camera::{
    Camera, Projection, DEFAULT_ORTHOGRAPHIC_ZOOM, DEFAULT_PERSPECTIVE_ZOOM,
};
pub use self::draw::DrawContext;
pub use self::helpers::{sample_cube, sample_pyramid};
pub use self::mesh::WireMesh;
pub use self::metadata::{reset_metadata, Metadata};
pub use self::preferences::{
    ColorPreferences, DisplayPreferences, Preferences, PreferencesStore, SizePreferences,
};
pub use self::settings::SettingsNavigation;
pub use self::view::{get_metrics, MeshView};

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::camera::{Projection, DEFAULT_PERSPECTIVE_ZOOM};

const CONFIG_DIR: &str = "egui_mesh3d";
const FILE_NAME: &str = "settings.json";

/// Line and point style toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    /// Draw edges stippled instead of solid.
    pub dashed_edges: bool,
    /// Perspective projection; orthographic when false.
    pub perspective: bool,
    /// Round point markers; square when false.
    pub round_points: bool,
    /// Skip the vertex pass entirely.
    pub hide_points: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            dashed_edges: false,
            perspective: true,
            round_points: true,
            hide_points: false,
        }
    }
}

/// Color components on a 0-255 scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPreferences {
    pub background: [f32; 4],
    pub vertex: [f32; 3],
    pub edge: [f32; 3],
}

impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            background: [0., 0., 0., 255.],
            vertex: [0., 0., 0.],
            edge: [255., 0., 45.],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizePreferences {
    /// Edge stroke width in pixels.
    pub edge_width: u32,
    /// Point marker diameter in pixels.
    pub vertex_size: u32,
    /// Last camera zoom, restored on the next start.
    pub zoom: f32,
}

impl Default for SizePreferences {
    fn default() -> Self {
        Self {
            edge_width: 5,
            vertex_size: 1,
            zoom: DEFAULT_PERSPECTIVE_ZOOM,
        }
    }
}

/// The persisted display-preference document.
///
/// Every group and every key falls back to its default independently, so
/// a partially written file restores what it has and defaults the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub display: DisplayPreferences,
    pub color: ColorPreferences,
    pub size: SizePreferences,
}

impl Preferences {
    pub fn background_color(&self) -> Color32 {
        let [r, g, b, a] = self.color.background;
        Color32::from_rgba_unmultiplied(component(r), component(g), component(b), component(a))
    }

    pub fn vertex_color(&self) -> Color32 {
        let [r, g, b] = self.color.vertex;
        Color32::from_rgb(component(r), component(g), component(b))
    }

    pub fn edge_color(&self) -> Color32 {
        let [r, g, b] = self.color.edge;
        Color32::from_rgb(component(r), component(g), component(b))
    }

    pub fn projection(&self) -> Projection {
        if self.display.perspective {
            Projection::Perspective
        } else {
            Projection::Orthographic
        }
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.display.perspective = projection == Projection::Perspective;
    }
}

fn component(v: f32) -> u8 {
    v.clamp(0., 255.) as u8
}

/// File store for [`Preferences`].
///
/// Loading never fails: any unreadable or malformed file yields the
/// defaults. Saving swallows IO errors after logging them; a viewer
/// must not stop drawing because a preferences write failed.
#[derive(Debug, Default)]
pub struct PreferencesStore {
    path: PathBuf,
    last_written: RefCell<Option<String>>,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_written: RefCell::new(None),
        }
    }

    /// The conventional location under the user's home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, falling back to defaults on any failure.
    pub fn load(&self) -> Preferences {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    log::debug!("malformed preferences at {:?}: {e}", self.path);
                    Preferences::default()
                }
            },
            Err(e) => {
                log::debug!("no preferences at {:?}: {e}", self.path);
                Preferences::default()
            }
        }
    }

    /// Writes the document unconditionally.
    pub fn save(&self, prefs: &Preferences) {
        match serde_json::to_string_pretty(prefs) {
            Ok(raw) => self.write(raw),
            Err(e) => log::error!("failed to serialize preferences: {e}"),
        }
    }

    /// Writes the document unless it matches the last write from this
    /// store handle. Meant for a per-frame caller.
    pub fn save_if_changed(&self, prefs: &Preferences) {
        let raw = match serde_json::to_string_pretty(prefs) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("failed to serialize preferences: {e}");
                return;
            }
        };
        if self.last_written.borrow().as_deref() == Some(raw.as_str()) {
            return;
        }
        self.write(raw);
    }

    fn write(&self, raw: String) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::error!("failed to create {parent:?}: {e}");
                return;
            }
        }
        match fs::write(&self.path, &raw) {
            Ok(()) => *self.last_written.borrow_mut() = Some(raw),
            Err(e) => log::error!("failed to write preferences to {:?}: {e}", self.path),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Preferences::default();
        assert!(!p.display.dashed_edges);
        assert!(p.display.perspective);
        assert!(p.display.round_points);
        assert!(!p.display.hide_points);
        assert_eq!(p.color.background, [0., 0., 0., 255.]);
        assert_eq!(p.color.vertex, [0., 0., 0.]);
        assert_eq!(p.color.edge, [255., 0., 45.]);
        assert_eq!(p.size.edge_width, 5);
        assert_eq!(p.size.vertex_size, 1);
        assert_eq!(p.size.zoom, DEFAULT_PERSPECTIVE_ZOOM);
    }

    #[test]
    fn test_color_conversion_clamps() {
        let mut p = Preferences::default();
        p.color.edge = [300., -20., 45.];
        assert_eq!(p.edge_color(), Color32::from_rgb(255, 0, 45));
    }

    #[test]
    fn test_projection_mapping() {
        let mut p = Preferences::default();
        assert_eq!(p.projection(), Projection::Perspective);
        p.set_projection(Projection::Orthographic);
        assert!(!p.display.perspective);
        assert_eq!(p.projection(), Projection::Orthographic);
    }

    #[test]
    fn test_partial_document_defaults_missing_keys() {
        let raw = r#"{ "display": { "dashed_edges": true }, "size": { "zoom": -3.5 } }"#;
        let p: Preferences = serde_json::from_str(raw).unwrap();
        assert!(p.display.dashed_edges);
        assert!(p.display.perspective);
        assert_eq!(p.size.zoom, -3.5);
        assert_eq!(p.size.edge_width, 5);
        assert_eq!(p.color.edge, [255., 0., 45.]);
    }
}

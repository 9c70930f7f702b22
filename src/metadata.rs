use egui::{Id, Ui};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

const KEY_PREFIX: &str = "egui_mesh3d_metadata";

/// Per-widget-instance navigation state kept in egui's persisted data
/// between frames.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the frame is the first one
    pub first_frame: bool,
    /// Current camera transform
    pub camera: Camera,
    /// Last measured time to draw the frame (milliseconds)
    pub last_draw_time_ms: f32,
    /// Custom key to identify the metadata
    id: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            camera: Camera::default(),
            last_draw_time_ms: 0.,
            id: String::new(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(self.get_key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.get_key()), self);
        });
    }

    /// Get key which is used to store metadata in egui cache.
    pub fn get_key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

/// Resets [`Metadata`] state
pub fn reset_metadata(ui: &mut Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_key_includes_custom_id() {
        assert_eq!(Metadata::new(None).get_key(), "egui_mesh3d_metadata_");
        assert_eq!(
            Metadata::new(Some("side".to_string())).get_key(),
            "egui_mesh3d_metadata_side"
        );
    }

    #[test]
    fn test_default_is_first_frame() {
        let m = Metadata::default();
        assert!(m.first_frame);
        assert_eq!(m.camera, Camera::default());
        assert_eq!(m.last_draw_time_ms, 0.);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadRotate {
    /// Rotation change in degrees around (x, y)
    pub diff: [f32; 2],
    /// Resulting rotation in degrees
    pub new_rotation: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTranslate {
    /// Translation change
    pub diff: [f32; 2],
    /// Resulting translation
    pub new_translation: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadZoom {
    /// Zoom change
    pub diff: f32,
    /// Resulting zoom
    pub new_zoom: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadProjection {
    /// True for perspective, false for orthographic
    pub perspective: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadResetView {
    /// Zoom after the reset
    pub new_zoom: f32,
}

/// Camera change reported by the widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    Rotate(PayloadRotate),
    Translate(PayloadTranslate),
    Zoom(PayloadZoom),
    Projection(PayloadProjection),
    ResetView(PayloadResetView),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_rotate() {
        let event = Event::Rotate(PayloadRotate {
            diff: [1.0, 2.0],
            new_rotation: [3.0, 4.0],
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"Rotate":{"diff":[1.0,2.0],"new_rotation":[3.0,4.0]}}"#
        );

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_translate() {
        let event = Event::Translate(PayloadTranslate {
            diff: [0.5, -0.5],
            new_translation: [2.0, 1.0],
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"Translate":{"diff":[0.5,-0.5],"new_translation":[2.0,1.0]}}"#
        );

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_zoom() {
        let event = Event::Zoom(PayloadZoom {
            diff: -1.0,
            new_zoom: -11.0,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Zoom":{"diff":-1.0,"new_zoom":-11.0}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_projection() {
        let event = Event::Projection(PayloadProjection { perspective: false });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Projection":{"perspective":false}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_reset_view() {
        let event = Event::ResetView(PayloadResetView { new_zoom: -10.0 });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"ResetView":{"new_zoom":-10.0}}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

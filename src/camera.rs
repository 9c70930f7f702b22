use egui::{Pos2, Rect};
use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Default zoom for the perspective mode: a negative offset along the
/// view axis.
pub const DEFAULT_PERSPECTIVE_ZOOM: f32 = -10.;
/// Default zoom for the orthographic mode: a uniform scale factor.
pub const DEFAULT_ORTHOGRAPHIC_ZOOM: f32 = 0.1;

const NEAR: f32 = 1.;
const FAR: f32 = 1_000_000.;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    Perspective,
    Orthographic,
}

impl Projection {
    pub const ALL: [Projection; 2] = [Projection::Perspective, Projection::Orthographic];

    pub fn label(self) -> &'static str {
        match self {
            Projection::Perspective => "Perspective",
            Projection::Orthographic => "Orthographic",
        }
    }

    /// Zoom value a freshly entered mode starts from.
    pub fn default_zoom(self) -> f32 {
        match self {
            Projection::Perspective => DEFAULT_PERSPECTIVE_ZOOM,
            Projection::Orthographic => DEFAULT_ORTHOGRAPHIC_ZOOM,
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// View transform state the input handlers mutate.
///
/// Rotation is stored in degrees around the x and y axes. The meaning of
/// `zoom` depends on the projection: a translation along the view axis
/// in perspective mode, a uniform scale in orthographic mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub rotation: Vec2,
    pub translation: Vec2,
    pub zoom: f32,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            rotation: Vec2::new(1., 1.),
            translation: Vec2::ZERO,
            zoom: DEFAULT_PERSPECTIVE_ZOOM,
            projection: Projection::Perspective,
        }
    }
}

impl Camera {
    /// Full clip-space matrix for the current state.
    ///
    /// The model is rotated around x, then y; the zoom is applied as a
    /// view-axis translation (perspective) or a uniform scale
    /// (orthographic) together with the pan translation.
    pub fn clip_matrix(&self) -> Mat4 {
        let rotate = Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians());

        match self.projection {
            Projection::Perspective => {
                let frustum = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1., NEAR, FAR);
                let place = Mat4::from_translation(Vec3::new(
                    self.translation.x,
                    self.translation.y,
                    self.zoom,
                ));
                frustum * place * rotate
            }
            Projection::Orthographic => {
                let ortho = Mat4::orthographic_rh_gl(-1., 1., -1., 1., -1., FAR);
                let scale = Mat4::from_scale(Vec3::splat(self.zoom));
                ortho * scale * rotate
            }
        }
    }

    /// Projects a point into viewport coordinates.
    ///
    /// Returns `None` for points at or behind the projection plane and
    /// for degenerate viewports, so callers can drop the primitive.
    pub fn project(&self, point: Vec3, viewport: Rect) -> Option<Pos2> {
        if viewport.width() <= 0. || viewport.height() <= 0. {
            return None;
        }

        let clip: Vec4 = self.clip_matrix() * point.extend(1.);
        if clip.w <= f32::EPSILON {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        if !ndc.x.is_finite() || !ndc.y.is_finite() {
            return None;
        }

        Some(Pos2::new(
            viewport.left() + (ndc.x + 1.) / 2. * viewport.width(),
            viewport.top() + (1. - ndc.y) / 2. * viewport.height(),
        ))
    }

    /// Accumulates a drag rotation, in degrees around (x, y).
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotation += delta;
    }

    /// Accumulates a drag translation.
    pub fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// One wheel notch of zoom. `speed` is the multiplicative step minus
    /// one. The direction inverts between projections because the zoom
    /// value is a negative offset in one and a positive scale in the
    /// other; the sign of `zoom` never changes.
    pub fn wheel_zoom(&mut self, scroll_up: bool, speed: f32) {
        let factor = 1. + speed;
        let toward = match self.projection {
            Projection::Perspective => self.zoom / factor,
            Projection::Orthographic => self.zoom * factor,
        };
        let away = match self.projection {
            Projection::Perspective => self.zoom * factor,
            Projection::Orthographic => self.zoom / factor,
        };
        self.zoom = if scroll_up { toward } else { away };
    }

    /// Back to the home position: translation and zoom only, the
    /// rotation and projection are kept.
    pub fn reset_view(&mut self) {
        self.translation = Vec2::ZERO;
        self.zoom = DEFAULT_PERSPECTIVE_ZOOM;
    }

    pub fn set_perspective(&mut self) {
        self.projection = Projection::Perspective;
        self.translation = Vec2::ZERO;
        self.zoom = DEFAULT_PERSPECTIVE_ZOOM;
    }

    pub fn set_orthographic(&mut self) {
        self.projection = Projection::Orthographic;
        self.translation = Vec2::ZERO;
        self.zoom = DEFAULT_ORTHOGRAPHIC_ZOOM;
    }
}

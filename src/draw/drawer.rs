use egui::{Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::camera::Camera;
use crate::mesh::WireMesh;
use crate::preferences::Preferences;

// Stipple period of the dashed edge style, in pixels.
const DASH_LENGTH: f32 = 8.;
const GAP_LENGTH: f32 = 8.;

/// Everything the paint pass needs about the current widget state.
pub struct DrawContext<'a> {
    pub painter: &'a Painter,
    pub viewport: Rect,
    pub camera: &'a Camera,
    pub prefs: &'a Preferences,
}

/// One immediate-mode paint pass over the mesh: background first, then
/// edges, then vertices so points sit on top.
pub struct Drawer<'a> {
    ctx: &'a DrawContext<'a>,
    mesh: &'a WireMesh,
}

impl<'a> Drawer<'a> {
    pub fn new(mesh: &'a WireMesh, ctx: &'a DrawContext<'a>) -> Self {
        Drawer { ctx, mesh }
    }

    pub fn draw(self) {
        self.draw_background();
        self.draw_edges();
        self.draw_vertices();
    }

    fn draw_background(&self) {
        self.ctx
            .painter
            .rect_filled(self.ctx.viewport, 0., self.ctx.prefs.background_color());
    }

    fn draw_edges(&self) {
        let stroke = Stroke::new(
            self.ctx.prefs.size.edge_width as f32,
            self.ctx.prefs.edge_color(),
        );
        let dashed = self.ctx.prefs.display.dashed_edges;

        let vertices = self.mesh.vertices();
        for [start, end] in self.mesh.edges() {
            let Some(a) = self.project(vertices[*start as usize]) else {
                continue;
            };
            let Some(b) = self.project(vertices[*end as usize]) else {
                continue;
            };

            if dashed {
                self.ctx.painter.extend(Shape::dashed_line(
                    &[a, b],
                    stroke,
                    DASH_LENGTH,
                    GAP_LENGTH,
                ));
            } else {
                self.ctx.painter.line_segment([a, b], stroke);
            }
        }
    }

    fn draw_vertices(&self) {
        if self.ctx.prefs.display.hide_points {
            return;
        }

        let color = self.ctx.prefs.vertex_color();
        let size = self.ctx.prefs.size.vertex_size as f32;
        let round = self.ctx.prefs.display.round_points;

        for v in self.mesh.vertices() {
            let Some(pos) = self.project(*v) else {
                continue;
            };

            if round {
                self.ctx.painter.circle_filled(pos, size / 2., color);
            } else {
                self.ctx
                    .painter
                    .rect_filled(Rect::from_center_size(pos, Vec2::splat(size)), 0., color);
            }
        }
    }

    fn project(&self, point: glam::Vec3) -> Option<Pos2> {
        self.ctx.camera.project(point, self.ctx.viewport)
    }
}

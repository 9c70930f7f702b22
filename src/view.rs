use egui::{Key, PointerButton, Response, Sense, Ui, Widget};
use instant::Instant;

use crate::draw::drawer::Drawer;
use crate::draw::DrawContext;
use crate::mesh::WireMesh;
use crate::metadata::Metadata;
use crate::preferences::{Preferences, PreferencesStore};
use crate::settings::SettingsNavigation;

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadProjection, PayloadResetView, PayloadRotate, PayloadTranslate,
    PayloadZoom,
};

/// Widget for displaying and navigating a wireframe mesh.
///
/// It implements [`egui::Widget`] and can be used like any other widget.
///
/// The widget borrows the [`WireMesh`] to draw and the [`Preferences`]
/// that style it. Navigation state (rotation, translation, zoom,
/// projection) lives in egui's persisted data per widget instance; the
/// zoom and projection are mirrored back into the preference document
/// every frame so they survive restarts through the attached
/// [`PreferencesStore`].
///
/// Input mapping: primary-button drag rotates, middle-button drag
/// translates, wheel scroll zooms, and while the pointer is over the
/// widget `R` resets the view, `O` switches to orthographic and `P` to
/// perspective projection.
pub struct MeshView<'a> {
    mesh: &'a WireMesh,
    prefs: &'a mut Preferences,

    store: Option<&'a PreferencesStore>,
    settings_navigation: SettingsNavigation,
    custom_id: Option<String>,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl Widget for &mut MeshView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (resp, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let mut meta = Metadata::new(self.custom_id.clone()).load(ui);
        self.seed_from_prefs(&mut meta);

        self.handle_rotation(&resp, &mut meta);
        self.handle_translation(&resp, &mut meta);
        self.handle_zoom(ui, &resp, &mut meta);
        self.handle_shortcuts(ui, &resp, &mut meta);

        let t_draw = Instant::now();
        Drawer::new(
            self.mesh,
            &DrawContext {
                painter: &painter,
                viewport: resp.rect,
                camera: &meta.camera,
                prefs: &*self.prefs,
            },
        )
        .draw();
        meta.last_draw_time_ms = t_draw.elapsed().as_secs_f32() * 1000.;

        // Mirror the camera back into the preference document so the
        // next start restores zoom and projection.
        self.prefs.size.zoom = meta.camera.zoom;
        self.prefs.set_projection(meta.camera.projection);
        if let Some(store) = self.store {
            store.save_if_changed(self.prefs);
        }

        meta.save(ui);

        resp
    }
}

impl<'a> MeshView<'a> {
    /// Creates a new `MeshView` widget with default navigation settings.
    /// To customize navigation use the `with_navigations` method.
    pub fn new(mesh: &'a WireMesh, prefs: &'a mut Preferences) -> Self {
        Self {
            mesh,
            prefs,

            store: None,
            settings_navigation: SettingsNavigation::default(),
            custom_id: None,

            #[cfg(feature = "events")]
            events_sink: None,
        }
    }

    /// Modifies default behaviour of navigation settings.
    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    /// Attaches the store the preference document is written through at
    /// the end of every frame (skipping unchanged writes).
    pub fn with_store(mut self, store: &'a PreferencesStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets a custom unique ID for this widget instance. Useful when you
    /// have multiple viewers in the same UI and want to keep their
    /// navigation state separate.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }

    #[cfg(feature = "events")]
    /// Supply a sink that will receive camera-change events.
    /// Works with `crossbeam::channel::Sender<Event>`, closures
    /// `Fn(Event)`, or custom implementations.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    /// On the instance's first frame the camera starts from the restored
    /// preference document; afterwards the metadata copy is
    /// authoritative.
    fn seed_from_prefs(&self, meta: &mut Metadata) {
        if !meta.first_frame {
            return;
        }

        meta.camera.zoom = self.prefs.size.zoom;
        meta.camera.projection = self.prefs.projection();
        meta.first_frame = false;
    }

    fn handle_rotation(&self, resp: &Response, meta: &mut Metadata) {
        if !self.settings_navigation.rotation_enabled {
            return;
        }
        if !resp.dragged_by(PointerButton::Primary) {
            return;
        }

        let drag = resp.drag_delta();
        if drag == egui::Vec2::ZERO {
            return;
        }

        // Horizontal drag spins around the y axis, vertical around x.
        let delta =
            glam::Vec2::new(drag.y, drag.x) * self.settings_navigation.rotation_speed;
        meta.camera.rotate(delta);

        #[cfg(feature = "events")]
        self.publish_event(Event::Rotate(PayloadRotate {
            diff: delta.to_array(),
            new_rotation: meta.camera.rotation.to_array(),
        }));
    }

    fn handle_translation(&self, resp: &Response, meta: &mut Metadata) {
        if !self.settings_navigation.translation_enabled {
            return;
        }
        // One gesture at a time; a primary-button rotation wins.
        if resp.dragged_by(PointerButton::Primary) {
            return;
        }
        if !resp.dragged_by(PointerButton::Middle) {
            return;
        }

        let drag = resp.drag_delta();
        if drag == egui::Vec2::ZERO {
            return;
        }

        // Screen y grows downward, model y upward.
        let delta =
            glam::Vec2::new(drag.x, -drag.y) * self.settings_navigation.translation_speed;
        meta.camera.translate(delta);

        #[cfg(feature = "events")]
        self.publish_event(Event::Translate(PayloadTranslate {
            diff: delta.to_array(),
            new_translation: meta.camera.translation.to_array(),
        }));
    }

    fn handle_zoom(&self, ui: &Ui, resp: &Response, meta: &mut Metadata) {
        if !self.settings_navigation.zoom_enabled {
            return;
        }
        if !resp.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll == 0. {
            return;
        }

        #[cfg(feature = "events")]
        let before = meta.camera.zoom;

        meta.camera
            .wheel_zoom(scroll > 0., self.settings_navigation.zoom_speed);

        #[cfg(feature = "events")]
        self.publish_event(Event::Zoom(PayloadZoom {
            diff: meta.camera.zoom - before,
            new_zoom: meta.camera.zoom,
        }));
    }

    fn handle_shortcuts(&self, ui: &Ui, resp: &Response, meta: &mut Metadata) {
        if !self.settings_navigation.shortcuts_enabled {
            return;
        }
        if !resp.hovered() {
            return;
        }

        if ui.input(|i| i.key_pressed(Key::R)) {
            meta.camera.reset_view();

            #[cfg(feature = "events")]
            self.publish_event(Event::ResetView(PayloadResetView {
                new_zoom: meta.camera.zoom,
            }));
        }

        if ui.input(|i| i.key_pressed(Key::O)) {
            meta.camera.set_orthographic();

            #[cfg(feature = "events")]
            self.publish_event(Event::Projection(PayloadProjection { perspective: false }));
        }

        if ui.input(|i| i.key_pressed(Key::P)) {
            meta.camera.set_perspective();

            #[cfg(feature = "events")]
            self.publish_event(Event::Projection(PayloadProjection { perspective: true }));
        }
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}

/// Returns the last measured draw time in milliseconds for a widget
/// instance.
pub fn get_metrics(ui: &Ui, id: Option<String>) -> f32 {
    Metadata::new(id).load(ui).last_draw_time_ms
}

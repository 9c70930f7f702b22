use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::Context;
use egui_mesh3d::{
    reset_metadata, sample_cube, sample_pyramid, get_metrics, MeshView, Preferences,
    PreferencesStore, WireMesh,
};

enum Sample {
    Cube,
    Pyramid,
}

pub struct ViewerApp {
    mesh: WireMesh,
    prefs: Preferences,
    store: PreferencesStore,
}

impl ViewerApp {
    fn new(_: &CreationContext<'_>) -> Self {
        let store = PreferencesStore::default_path()
            .map(PreferencesStore::new)
            .unwrap_or_default();
        let prefs = store.load();
        log::info!("preferences loaded from {:?}", store.path());

        Self {
            mesh: sample_cube(2.),
            prefs,
            store,
        }
    }

    fn set_sample(&mut self, sample: &Sample) {
        self.mesh = match sample {
            Sample::Cube => sample_cube(2.),
            Sample::Pyramid => sample_pyramid(2.),
        };
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Model");
        ui.horizontal(|ui| {
            if ui.button("Cube").clicked() {
                self.set_sample(&Sample::Cube);
            }
            if ui.button("Pyramid").clicked() {
                self.set_sample(&Sample::Pyramid);
            }
        });
        ui.label(format!(
            "{} vertices, {} edges",
            self.mesh.vertex_count(),
            self.mesh.edge_count()
        ));

        ui.separator();
        ui.heading("Display");
        ui.checkbox(&mut self.prefs.display.dashed_edges, "dashed edges");
        ui.checkbox(&mut self.prefs.display.round_points, "round points");
        ui.checkbox(&mut self.prefs.display.hide_points, "hide points");
        ui.add(
            egui::Slider::new(&mut self.prefs.size.edge_width, 1..=20).text("edge width"),
        );
        ui.add(
            egui::Slider::new(&mut self.prefs.size.vertex_size, 1..=30).text("vertex size"),
        );

        ui.separator();
        ui.heading("Colors");
        color_row(ui, "background", &mut self.prefs.color.background[..3]);
        color_row(ui, "vertices", &mut self.prefs.color.vertex);
        color_row(ui, "edges", &mut self.prefs.color.edge);

        ui.separator();
        ui.heading("Navigation");
        ui.label("drag: rotate");
        ui.label("middle drag: translate");
        ui.label("wheel: zoom");
        ui.label("R / O / P: reset, orthographic, perspective");
        ui.label(format!("projection: {}", self.prefs.projection()));
        if ui.button("reset view").clicked() {
            reset_metadata(ui, None);
        }

        ui.separator();
        ui.label(format!("draw: {:.2} ms", get_metrics(ui, None)));
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, components: &mut [f32]) {
    let mut rgb = [
        components[0].clamp(0., 255.) as u8,
        components[1].clamp(0., 255.) as u8,
        components[2].clamp(0., 255.) as u8,
    ];
    ui.horizontal(|ui| {
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            components[0] = f32::from(rgb[0]);
            components[1] = f32::from(rgb[1]);
            components[2] = f32::from(rgb[2]);
        }
        ui.label(label);
    });
}

impl App for ViewerApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.controls(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut MeshView::new(&self.mesh, &mut self.prefs).with_store(&self.store));
        });
    }
}

fn main() {
    env_logger::init();
    run_native(
        "egui_mesh3d demo",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(ViewerApp::new(cc)))),
    )
    .unwrap();
}

//! fourier-epicycles - Fourier Epicycle Visualizer
//!
//! Decomposes a closed path into rotating vectors with a discrete Fourier
//! transform, then animates the vectors chained end to end so their tip
//! redraws the path.
//!
//! ## Pipeline
//! - A preset shape, a freehand stroke or an imported SVG supplies points
//! - The points are resampled evenly by arc length and recentered
//! - The Fourier engine computes the spectrum (only when the path changes)
//! - Every frame the clock advances and the epicycles are drawn at `t`

use eframe::egui;

mod animation;
mod fourier;
mod input;
mod render;
mod settings;
mod shapes;

use animation::AnimationClock;
use fourier::{FourierEngine, SamplePoint};
use input::FreehandCapture;
use render::{chain_epicycles, CanvasFrame, CanvasSettings, EpicycleCanvas, Trail};
use settings::AppSettings;
use shapes::{prepare_path, shape_to_points, Shape, ShapeKind, SvgOptions, SvgShape, PRESET_SIZE};

/// Default number of resampled points fed to the engine
const DEFAULT_SAMPLE_COUNT: usize = 200;
const MIN_SAMPLE_COUNT: usize = 8;
const MAX_SAMPLE_COUNT: usize = 1000;

/// Default number of points kept in the trail
const DEFAULT_TRAIL_LENGTH: usize = 600;
const MIN_TRAIL_LENGTH: usize = 2;
const MAX_TRAIL_LENGTH: usize = 5000;

/// Points used to build parametric presets before resampling
const PRESET_DETAIL: usize = 1024;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting fourier-epicycles");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Fourier Epicycles"),
        ..Default::default()
    };

    eframe::run_native(
        "fourier-epicycles",
        options,
        Box::new(|cc| Ok(Box::new(EpicycleApp::new(cc)))),
    )
}

/// Main application state
pub struct EpicycleApp {
    engine: FourierEngine,
    clock: AnimationClock,
    trail: Trail,
    capture: FreehandCapture,
    canvas: EpicycleCanvas,
    show_settings: bool,

    // Path source
    selected_shape: ShapeKind,
    sample_count: usize,
    recenter: bool,
    /// Last completed freehand stroke (raw, before resampling)
    freehand_path: Option<Vec<SamplePoint>>,
    /// Last imported SVG outline
    svg: Option<SvgShape>,
    /// The resampled path the current spectrum was computed from
    target: Vec<SamplePoint>,
    needs_recompute: bool,

    /// Number of epicycles drawn (0 = all)
    epicycle_limit: usize,

    status: String,
}

impl EpicycleApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::headless();
        AppSettings::load().apply(&mut app);
        app
    }

    /// Application state without a window or loaded settings
    fn headless() -> Self {
        let defaults = AppSettings::default();
        Self {
            engine: FourierEngine::new(),
            clock: AnimationClock::new(defaults.speed),
            trail: Trail::new(defaults.trail_length),
            capture: FreehandCapture::new(),
            canvas: EpicycleCanvas::new(CanvasSettings::default()),
            show_settings: defaults.show_settings,
            selected_shape: defaults.selected_shape,
            sample_count: defaults.sample_count,
            recenter: defaults.recenter,
            freehand_path: None,
            svg: None,
            target: Vec::new(),
            needs_recompute: true,
            epicycle_limit: defaults.epicycle_limit,
            status: "Ready".to_string(),
        }
    }

    /// Truncation passed to the engine
    fn limit(&self) -> Option<usize> {
        match self.epicycle_limit {
            0 => None,
            n => Some(n),
        }
    }

    /// Raw points for the selected source, if it has any
    ///
    /// Presets are sampled densely here; `prepare_path` brings every source
    /// down to `sample_count`.
    fn source_points(&self) -> Option<Vec<SamplePoint>> {
        match self.selected_shape.build(PRESET_SIZE, PRESET_DETAIL) {
            Some(shape) => {
                log::debug!(
                    "Sampling {} (outline length {:.3})",
                    shape.name(),
                    shape.length()
                );
                Some(shape_to_points(shape.as_ref(), PRESET_DETAIL))
            }
            None => match self.selected_shape {
                ShapeKind::Freehand => self.freehand_path.clone(),
                ShapeKind::Svg => self.svg.as_ref().map(|svg| svg.points().to_vec()),
                _ => None,
            },
        }
    }

    /// Name of the current source for the status line
    fn source_label(&self) -> String {
        match (&self.selected_shape, &self.svg) {
            (ShapeKind::Svg, Some(svg)) => {
                format!("{} ({} subpaths)", svg.name(), svg.subpath_count())
            }
            (kind, _) => kind.name().to_string(),
        }
    }

    /// Rebuild the spectrum from the selected source
    ///
    /// On bad input the previous spectrum stays in place and the problem is
    /// reported in the status line.
    fn recompute(&mut self) {
        self.needs_recompute = false;

        let Some(raw) = self.source_points() else {
            self.engine.compute_transform(&[]);
            self.target.clear();
            self.trail.clear();
            self.status = format!("No {} path yet", self.selected_shape.name());
            return;
        };

        match prepare_path(&raw, self.sample_count, self.recenter) {
            Ok(path) => {
                self.engine.compute_transform(&path);
                self.target = path;
                self.trail.clear();
                self.clock.reset();
                self.status = format!("{}: {} epicycles", self.source_label(), self.engine.len());
                log::info!(
                    "Recomputed {} from {} raw points into {} terms",
                    self.selected_shape.name(),
                    raw.len(),
                    self.engine.len()
                );
            }
            Err(e) => {
                log::warn!("Keeping previous path: {}", e);
                self.status = format!("Could not use path: {}", e);
            }
        }
    }

    /// Ask for an SVG file and switch to it
    fn import_svg(&mut self) {
        let Some(file) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .pick_file()
        else {
            return;
        };

        match SvgShape::load(&file, &SvgOptions::default()) {
            Ok(svg) => {
                self.svg = Some(svg);
                self.selected_shape = ShapeKind::Svg;
                self.needs_recompute = true;
            }
            Err(e) => {
                log::warn!("Failed to import {}: {}", file.display(), e);
                self.status = format!("SVG import failed: {}", e);
            }
        }
    }

    /// Advance the animation by `dt` seconds and record the pen position
    fn step(&mut self, dt: f64) {
        let moved = !self.clock.paused;
        if self.clock.advance(dt) {
            log::debug!("Completed cycle {}", self.clock.completed_cycles());
        }
        if moved && !self.engine.is_empty() {
            let phase = self.clock.phase();
            let tip = match self.limit() {
                None => self.engine.evaluate(phase),
                limit => self.engine.evaluate_truncated(phase, limit),
            };
            self.trail.push(tip);
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Space) {
                self.clock.toggle_pause();
            }
            if i.key_pressed(egui::Key::R) {
                self.clock.reset();
                self.trail.clear();
            }
            if i.key_pressed(egui::Key::Escape) && self.capture.is_drawing() {
                log::info!("Freehand stroke cancelled");
                self.capture.cancel();
            }
        });
    }

    /// Feed canvas drags into the freehand capture
    fn handle_drawing(&mut self, response: &egui::Response, viewport: &render::Viewport) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.capture.begin(viewport.to_world(pos));
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.capture.extend(viewport.to_world(pos));
            }
        }

        if response.drag_stopped() {
            if let Some(stroke) = self.capture.finish() {
                log::info!("Captured freehand stroke with {} points", stroke.len());
                self.freehand_path = Some(stroke);
                self.selected_shape = ShapeKind::Freehand;
                self.needs_recompute = true;
            }
        }
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Shape");
        ui.separator();

        egui::ComboBox::from_label("Source")
            .selected_text(self.selected_shape.name())
            .show_ui(ui, |ui| {
                for kind in ShapeKind::presets() {
                    if ui
                        .selectable_value(&mut self.selected_shape, *kind, kind.name())
                        .clicked()
                    {
                        self.needs_recompute = true;
                    }
                }
                if self.freehand_path.is_some()
                    && ui
                        .selectable_value(&mut self.selected_shape, ShapeKind::Freehand, "Freehand")
                        .clicked()
                {
                    self.needs_recompute = true;
                }
                if self.svg.is_some()
                    && ui
                        .selectable_value(&mut self.selected_shape, ShapeKind::Svg, "SVG")
                        .clicked()
                {
                    self.needs_recompute = true;
                }
            });

        if ui.button("Import SVG…").clicked() {
            self.import_svg();
        }
        ui.small("Drag on the canvas to draw your own shape.");

        if ui
            .add(
                egui::Slider::new(&mut self.sample_count, MIN_SAMPLE_COUNT..=MAX_SAMPLE_COUNT)
                    .text("Samples")
                    .logarithmic(true),
            )
            .changed()
        {
            self.needs_recompute = true;
        }
        if ui.checkbox(&mut self.recenter, "Recenter path").changed() {
            self.needs_recompute = true;
        }

        ui.separator();
        ui.heading("Animation");

        let term_count = self.engine.len().max(1);
        let mut show_all = self.epicycle_limit == 0;
        if ui.checkbox(&mut show_all, "All epicycles").changed() {
            self.epicycle_limit = if show_all { 0 } else { term_count.min(100) };
        }
        if !show_all {
            // Keep the slider meaningful after the term count shrinks
            self.epicycle_limit = self.epicycle_limit.clamp(1, term_count);
            ui.add(egui::Slider::new(&mut self.epicycle_limit, 1..=term_count).text("Epicycles"));
        }

        ui.add(egui::Slider::new(&mut self.clock.speed, -0.5..=0.5).text("Speed (cycles/s)"));

        ui.horizontal(|ui| {
            let label = if self.clock.paused { "▶ Resume" } else { "⏸ Pause" };
            if ui.button(label).clicked() {
                self.clock.toggle_pause();
            }
            if ui.button("⟲ Reset").clicked() {
                self.clock.reset();
                self.trail.clear();
            }
        });

        let mut trail_length = self.trail.capacity();
        if ui
            .add(
                egui::Slider::new(&mut trail_length, MIN_TRAIL_LENGTH..=MAX_TRAIL_LENGTH)
                    .text("Trail length")
                    .logarithmic(true),
            )
            .changed()
        {
            self.trail.set_capacity(trail_length);
        }

        ui.separator();
        ui.collapsing("Display", |ui| {
            let settings = &mut self.canvas.settings;
            ui.add(egui::Slider::new(&mut settings.zoom, 0.1..=4.0).text("Zoom"));
            ui.checkbox(&mut settings.show_circles, "Circles");
            ui.checkbox(&mut settings.show_arms, "Arms");
            ui.checkbox(&mut settings.show_trail, "Trail");
            ui.checkbox(&mut settings.show_glow, "Glow");
            ui.checkbox(&mut settings.show_target, "Target outline");
            ui.checkbox(&mut settings.show_grid, "Grid");
        });

        ui.separator();
        ui.heading("Info");
        ui.label(format!("Samples (N): {}", self.engine.sample_count()));
        let shown = self.limit().map_or(self.engine.len(), |n| n.min(self.engine.len()));
        ui.label(format!("Epicycles shown: {} / {}", shown, self.engine.len()));
        let active = self
            .engine
            .terms()
            .iter()
            .filter(|term| term.magnitude() > 1e-9)
            .count();
        ui.label(format!("Non-zero terms: {}", active));
        let spectrum = self.engine.snapshot();
        if let Some(term) = spectrum.dominant() {
            ui.label(format!(
                "Largest: k = {}, r = {:.3}",
                term.frequency_index,
                term.magnitude()
            ));
        }
        ui.label(format!("t = {:.3} (cycle {})", self.clock.phase(), self.clock.completed_cycles()));
        ui.small("Space: pause · R: reset · Esc: cancel stroke");
    }
}

impl eframe::App for EpicycleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if self.needs_recompute {
            self.recompute();
        }

        self.handle_keys(ctx);
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.step(dt);

        if ctx.input(|i| i.viewport().close_requested()) {
            AppSettings::from_app(self).save();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Fourier Epicycles");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();
                ui.label(&self.status);
            });
        });

        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(240.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.settings_panel(ui));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let phase = self.clock.phase();
            let states = self.engine.epicycle_states(phase, self.limit());
            let links = chain_epicycles(&states, SamplePoint::ORIGIN);

            let frame = CanvasFrame {
                links: &links,
                trail: &self.trail,
                tip: links.last().map(|link| link.tip),
                target: &self.target,
                stroke: self.capture.points(),
            };
            let (response, viewport) = self.canvas.show(ui, &frame);
            self.handle_drawing(&response, &viewport);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_recompute() {
        let mut app = EpicycleApp::headless();
        app.selected_shape = ShapeKind::Circle;
        app.sample_count = 64;
        app.recompute();

        assert_eq!(app.engine.len(), 64);
        assert_eq!(app.target.len(), 64);
        assert!(!app.needs_recompute);

        // A circle is a single dominant epicycle
        let spectrum = app.engine.snapshot();
        let dominant = spectrum.dominant().unwrap();
        assert_eq!(dominant.frequency_index, 1);
        assert!((dominant.magnitude() - PRESET_SIZE).abs() < 1e-4);
    }

    #[test]
    fn test_every_preset_recomputes() {
        let mut app = EpicycleApp::headless();
        for kind in ShapeKind::presets() {
            app.selected_shape = *kind;
            app.recompute();
            assert_eq!(app.engine.len(), app.sample_count, "{}", kind.name());
        }
    }

    #[test]
    fn test_freehand_without_stroke_clears_engine() {
        let mut app = EpicycleApp::headless();
        app.recompute();
        assert!(!app.engine.is_empty());

        app.selected_shape = ShapeKind::Freehand;
        app.recompute();
        assert!(app.engine.is_empty());
        assert!(app.target.is_empty());
    }

    #[test]
    fn test_bad_stroke_keeps_previous_spectrum() {
        let mut app = EpicycleApp::headless();
        app.selected_shape = ShapeKind::Square;
        app.recompute();
        let before = app.engine.len();

        app.freehand_path = Some(vec![SamplePoint::new(0.1, 0.1); 5]);
        app.selected_shape = ShapeKind::Freehand;
        app.recompute();

        assert_eq!(app.engine.len(), before);
        assert!(app.status.contains("zero length"));
    }

    #[test]
    fn test_freehand_stroke_is_recentered() {
        let mut app = EpicycleApp::headless();
        app.sample_count = 32;
        app.freehand_path = Some(vec![
            SamplePoint::new(0.5, 0.5),
            SamplePoint::new(0.7, 0.5),
            SamplePoint::new(0.7, 0.7),
        ]);
        app.selected_shape = ShapeKind::Freehand;
        app.recompute();

        assert_eq!(app.engine.len(), 32);
        // Centered paths have no DC offset
        let dc = app
            .engine
            .terms()
            .iter()
            .find(|term| term.frequency_index == 0)
            .unwrap();
        assert!(dc.magnitude() < 1e-9);
    }

    #[test]
    fn test_step_feeds_trail() {
        let mut app = EpicycleApp::headless();
        app.selected_shape = ShapeKind::Circle;
        app.recompute();

        app.step(1.0 / 60.0);
        app.step(1.0 / 60.0);
        assert_eq!(app.trail.len(), 2);

        app.clock.paused = true;
        app.step(1.0 / 60.0);
        assert_eq!(app.trail.len(), 2);
    }

    #[test]
    fn test_presets_are_sampled_densely() {
        let mut app = EpicycleApp::headless();
        app.selected_shape = ShapeKind::Star;
        app.sample_count = 32;
        assert_eq!(app.source_points().unwrap().len(), PRESET_DETAIL);

        app.recompute();
        assert_eq!(app.target.len(), 32);
    }

    #[test]
    fn test_svg_source_in_status() {
        let data = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <path d="M 10 90 L 50 10 L 90 90 Z"/>
            <path d="M 40 70 L 60 70 L 50 50 Z"/>
        </svg>"#;
        let mut app = EpicycleApp::headless();
        app.svg = Some(SvgShape::from_data(data.as_bytes(), "badge", &SvgOptions::default()).unwrap());
        app.selected_shape = ShapeKind::Svg;
        app.recompute();

        assert_eq!(app.engine.len(), app.sample_count);
        assert!(app.status.starts_with("badge (2 subpaths)"), "{}", app.status);
    }

    #[test]
    fn test_limit_zero_means_all() {
        let mut app = EpicycleApp::headless();
        app.epicycle_limit = 0;
        assert_eq!(app.limit(), None);
        app.epicycle_limit = 7;
        assert_eq!(app.limit(), Some(7));
    }
}

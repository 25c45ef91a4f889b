use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use flight_viz::aircraft::{presets, AircraftPreset, FlightParameters, Parameter};
use flight_viz::config::SimulatorConfig;
use flight_viz::render::{format_ratio, RenderAdapter, Snapshot};
use flight_viz::sim::SimController;
use flight_viz::tutorial::{TutorialProgress, STEPS};

const CANVAS_W: f32 = 800.0;
const CANVAS_H: f32 = 600.0;
const ARROW_MAX_PX: f32 = 120.0;
const TUTORIAL_ADVANCE_DELAY: Duration = Duration::from_secs(2);
const PLOT_WINDOW: usize = 400;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let mut config = SimulatorConfig::default();
    config.integrator.record_history = true;
    config.integrator.max_history = Some(PLOT_WINDOW);

    let presets = presets::all();
    let mut sim = SimController::new(config, FlightParameters::default());
    if let Some(p) = presets.iter().find(|p| p.id == presets::DEFAULT_PRESET) {
        sim.apply_preset(p);
    }

    let app = FlightViz {
        sim,
        presets,
        canvas: Canvas::default(),
        tutorial: TutorialProgress::new(),
        advance_at: None,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };
    eframe::run_native("Four Forces of Flight", options, Box::new(|_| Ok(Box::new(app))))
}

struct FlightViz {
    sim: SimController,
    presets: Vec<AircraftPreset>,
    canvas: Canvas,
    tutorial: TutorialProgress,
    advance_at: Option<Instant>,
}

impl FlightViz {
    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Aircraft");
        let current = self.sim.preset_id().unwrap_or(presets::DEFAULT_PRESET).to_owned();
        let mut selected = current.clone();
        egui::ComboBox::from_id_salt("preset")
            .selected_text(
                self.presets
                    .iter()
                    .find(|p| p.id == selected)
                    .map_or("custom", |p| p.name.as_str()),
            )
            .show_ui(ui, |ui| {
                for p in &self.presets {
                    ui.selectable_value(&mut selected, p.id.clone(), &p.name);
                }
            });
        if selected != current {
            if let Some(p) = self.presets.iter().find(|p| p.id == selected) {
                self.sim.apply_preset(p);
            }
        }

        ui.separator();
        ui.heading("Controls");
        for param in Parameter::ALL {
            let range = param.range();
            let mut value = self.sim.parameters().get(param);
            let slider = egui::Slider::new(&mut value, range.min..=range.max)
                .step_by(range.step)
                .text(param.label())
                .suffix(format!(" {}", param.unit()));
            if ui.add(slider).changed() {
                self.sim.set(param, value);
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            let label = if self.sim.is_running() { "Pause" } else { "Start" };
            if ui.button(label).clicked() {
                self.sim.toggle();
            }
            if ui.button("Reset").clicked() {
                self.sim.reset();
            }
        });
        ui.label(format!("Ticks: {}   t = {:.1} s", self.sim.ticks(), self.sim.state().time));
    }

    fn readout(&self, ui: &mut egui::Ui, snap: &Snapshot) {
        ui.heading("Forces");
        let f = &snap.forces;
        egui::Grid::new("forces").num_columns(2).striped(true).show(ui, |ui| {
            for (name, value) in [
                ("Lift", f.lift_n),
                ("Drag", f.drag_n),
                ("Thrust", f.thrust_n),
                ("Weight", f.weight_n),
            ] {
                ui.label(name);
                ui.label(format!("{:>10.0} N", value));
                ui.end_row();
            }
        });

        ui.separator();
        ui.heading("Performance");
        let m = &snap.metrics;
        ui.label(format!("L/D ratio: {}", format_ratio(m.lift_to_drag, 2)));
        ui.label(format!("Wing loading: {:.1} kg/m^2", m.wing_loading_kg_m2));
        ui.label(format!("Power loading: {} kg/W", format_ratio(m.power_loading_kg_w, 4)));
        ui.label(format!(
            "Air density: {:.3} kg/m^3 ({:.0} % of sea level)",
            m.air_density,
            m.density_ratio * 100.0
        ));
        ui.label(format!("Trend: {:?} / {:?}", snap.trends.vertical, snap.trends.horizontal));

        ui.separator();
        ui.heading("Feedback");
        let color = if snap.feedback.advisory.is_warning() {
            Color32::from_rgb(230, 120, 40)
        } else {
            Color32::from_rgb(80, 180, 100)
        };
        ui.colored_label(color, snap.feedback.advisory.message());
        for tip in &snap.feedback.tips {
            ui.label(format!("• {tip}"));
        }
    }

    fn tutorial_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.heading("Tutorial");
        if !self.tutorial.is_active() {
            if ui.button("Start tutorial").clicked() {
                self.tutorial.start();
                self.advance_at = None;
            }
            return;
        }

        if self.tutorial.observe(self.sim.parameters()).is_some() {
            self.advance_at = Some(now + TUTORIAL_ADVANCE_DELAY);
        }
        if self.advance_at.is_some_and(|at| now >= at) {
            self.tutorial.advance();
            self.advance_at = None;
        }

        if let Some(step) = self.tutorial.current() {
            ui.label(format!(
                "Step {} of {}: {}",
                self.tutorial.current_index() + 1,
                STEPS.len(),
                step.title
            ));
            if self.tutorial.is_complete(step.id) {
                ui.colored_label(Color32::from_rgb(80, 180, 100), "Step complete");
            }
        }
        ui.label(format!(
            "Completed {} / {}",
            self.tutorial.completed_count(),
            TutorialProgress::gradable_count()
        ));
        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                self.tutorial.back();
                self.advance_at = None;
            }
            if ui.button("Next").clicked() {
                self.tutorial.advance();
                self.advance_at = None;
            }
            if ui.button("Exit").clicked() {
                self.tutorial.stop();
            }
        });
    }

    fn force_plot(&self, ui: &mut egui::Ui) {
        let window = self.sim.history();
        let series = |pick: fn(&flight_viz::physics::Forces) -> f64| {
            let points: Vec<[f64; 2]> =
                window.iter().map(|r| [r.state.time, pick(&r.forces) / 1000.0]).collect();
            PlotPoints::from(points)
        };

        Plot::new("force_history")
            .height(ui.available_height())
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("kN")
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new("Lift", series(|f| f.lift_n)));
                plot_ui.line(Line::new("Weight", series(|f| f.weight_n)));
                plot_ui.line(Line::new("Thrust", series(|f| f.thrust_n)));
                plot_ui.line(Line::new("Drag", series(|f| f.drag_n)));
            });
    }
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.sim.toggle();
        }
        self.sim.pump_at(now);

        let snapshot = self.sim.snapshot();
        if let Err(err) = self.canvas.render(&snapshot) {
            tracing::warn!(%err, "canvas render failed");
        }

        egui::SidePanel::left("controls").min_width(280.0).show(ctx, |ui| {
            self.controls(ui);
            ui.separator();
            self.tutorial_panel(ui, now);
        });

        egui::SidePanel::right("readout").min_width(260.0).show(ctx, |ui| {
            self.readout(ui, &snapshot);
        });

        egui::TopBottomPanel::bottom("history")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| self.force_plot(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.canvas.paint(ui));

        match self.sim.until_next_tick() {
            Some(wait) => ctx.request_repaint_after(wait),
            None if self.advance_at.is_some() => ctx.request_repaint_after(Duration::from_millis(100)),
            None => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Flight canvas
// ---------------------------------------------------------------------------

/// Draws the aircraft and its four force arrows from the latest snapshot.
#[derive(Default)]
struct Canvas {
    snapshot: Option<Snapshot>,
}

impl RenderAdapter for Canvas {
    fn render(&mut self, snapshot: &Snapshot) -> flight_viz::Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}

impl Canvas {
    fn paint(&self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, Color32::from_rgb(135, 190, 235));

        let Some(snap) = &self.snapshot else {
            return;
        };

        // World coordinates share the screen's +Y-down convention.
        let sx = rect.width() / CANVAS_W;
        let sy = rect.height() / CANVAS_H;
        let center = Pos2::new(
            rect.min.x + snap.state.pos.x as f32 * sx,
            rect.min.y + snap.state.pos.y as f32 * sy,
        );

        // Nose-up pitch is a counter-clockwise rotation on screen.
        let angle = -(snap.state.rotation as f32);
        let (sin, cos) = angle.sin_cos();
        let rotate = |v: Vec2| center + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos);

        let fuselage = [
            Vec2::new(42.0, 0.0),
            Vec2::new(-30.0, -8.0),
            Vec2::new(-42.0, 0.0),
            Vec2::new(-30.0, 8.0),
        ];
        let fin = [Vec2::new(-26.0, -7.0), Vec2::new(-38.0, -22.0), Vec2::new(-42.0, -1.0)];
        let fill = if snap.stalled { Color32::from_rgb(200, 60, 60) } else { Color32::WHITE };
        let outline = Stroke::new(1.5, Color32::DARK_GRAY);
        for part in [&fin[..], &fuselage[..]] {
            painter.add(egui::Shape::convex_polygon(
                part.iter().map(|v| rotate(*v)).collect(),
                fill,
                outline,
            ));
        }
        painter.line_segment(
            [rotate(Vec2::new(8.0, -28.0)), rotate(Vec2::new(-6.0, 28.0))],
            Stroke::new(4.0, Color32::DARK_GRAY),
        );

        let f = &snap.forces;
        let largest = [f.lift_n, f.drag_n, f.thrust_n, f.weight_n]
            .into_iter()
            .fold(1.0_f64, f64::max);
        let scale = |n: f64| (n / largest) as f32 * ARROW_MAX_PX;

        let arrows = [
            (Vec2::new(0.0, -scale(f.lift_n)), Color32::from_rgb(40, 160, 60), "Lift"),
            (Vec2::new(0.0, scale(f.weight_n)), Color32::from_rgb(120, 70, 30), "Weight"),
            (Vec2::new(scale(f.thrust_n), 0.0), Color32::from_rgb(40, 80, 200), "Thrust"),
            (Vec2::new(-scale(f.drag_n), 0.0), Color32::from_rgb(200, 50, 50), "Drag"),
        ];
        for (vec, color, label) in arrows {
            if vec.length() < 1.0 {
                continue;
            }
            painter.arrow(center, vec, Stroke::new(3.0, color));
            painter.text(
                center + vec + vec.normalized() * 14.0,
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(13.0),
                color,
            );
        }

        if snap.stalled {
            painter.text(
                Pos2::new(rect.center().x, rect.min.y + 30.0),
                Align2::CENTER_CENTER,
                "STALL WARNING",
                FontId::proportional(28.0),
                Color32::from_rgb(200, 30, 30),
            );
        }

        let status = if snap.running { "running" } else { "paused" };
        painter.text(
            rect.left_bottom() + Vec2::new(10.0, -10.0),
            Align2::LEFT_BOTTOM,
            format!("{status}   climb {:+.1} m/s", snap.state.climb_rate()),
            FontId::monospace(13.0),
            Color32::BLACK,
        );
    }
}

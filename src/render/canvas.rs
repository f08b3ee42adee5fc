//! Epicycle canvas widget
//!
//! Draws one animation frame:
//! - the target outline the epicycles are approximating
//! - nested epicycle circles with their rotating arms
//! - the fading trail left by the pen tip
//! - a glow around the pen tip
//! - the stroke currently being drawn with the mouse
//!
//! All inputs are in world space; the widget maps them through a
//! `Viewport` fitted to the space it is given.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use super::chain::EpicycleLink;
use super::trail::Trail;
use super::viewport::Viewport;
use crate::fourier::SamplePoint;

const NEON_PINK: Color32 = Color32::from_rgb(255, 110, 199);
const CYAN: Color32 = Color32::from_rgb(0, 240, 255);
const PURPLE: Color32 = Color32::from_rgb(185, 103, 255);

/// Alpha applied to epicycle outlines so they stay behind the trail
const EPICYCLE_ALPHA: u8 = 150;

/// Display settings for the canvas
#[derive(Clone, Debug)]
pub struct CanvasSettings {
    pub background: Color32,
    /// Zoom factor (1.0 = world [-1, 1] fills the shorter side)
    pub zoom: f32,
    pub show_circles: bool,
    pub show_arms: bool,
    pub show_trail: bool,
    pub show_glow: bool,
    pub show_target: bool,
    pub show_grid: bool,
    pub trail_width: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(8, 8, 20),
            zoom: 0.9,
            show_circles: true,
            show_arms: true,
            show_trail: true,
            show_glow: true,
            show_target: false,
            show_grid: false,
            trail_width: 2.5,
        }
    }
}

/// Everything needed to draw one frame
pub struct CanvasFrame<'a> {
    pub links: &'a [EpicycleLink],
    pub trail: &'a Trail,
    /// Current pen position
    pub tip: Option<SamplePoint>,
    /// Resampled path the spectrum was computed from
    pub target: &'a [SamplePoint],
    /// Freehand stroke in progress (or just released)
    pub stroke: &'a [SamplePoint],
}

/// Canvas widget for the epicycle animation
#[derive(Default)]
pub struct EpicycleCanvas {
    pub settings: CanvasSettings,
}

impl EpicycleCanvas {
    pub fn new(settings: CanvasSettings) -> Self {
        Self { settings }
    }

    /// Draw the frame into all available space
    ///
    /// Returns the response (sensing drags, for freehand input) and the
    /// viewport used, so pointer positions can be mapped back to world space.
    pub fn show(&self, ui: &mut egui::Ui, frame: &CanvasFrame<'_>) -> (egui::Response, Viewport) {
        let size = ui.available_size().max(Vec2::splat(64.0));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let rect = response.rect;
        let viewport = Viewport::new(rect, self.settings.zoom);

        painter.rect_filled(rect, 4.0, self.settings.background);

        if self.settings.show_grid {
            draw_grid(&painter, rect, &viewport);
        }
        if self.settings.show_target {
            draw_outline(&painter, &viewport, frame.target, true);
        }
        if self.settings.show_circles || self.settings.show_arms {
            self.draw_epicycles(&painter, &viewport, frame.links);
        }
        if self.settings.show_trail {
            self.draw_trail(&painter, &viewport, frame.trail);
        }
        if self.settings.show_glow {
            if let Some(tip) = frame.tip {
                draw_glow(&painter, viewport.to_screen(tip));
            }
        }
        draw_outline(&painter, &viewport, frame.stroke, false);

        (response, viewport)
    }

    /// Draw circles, center dots and arms, largest epicycle first
    fn draw_epicycles(&self, painter: &egui::Painter, viewport: &Viewport, links: &[EpicycleLink]) {
        let count = links.len();
        for (i, link) in links.iter().enumerate() {
            let color = with_alpha(epicycle_color(i, count, link.frequency_index), EPICYCLE_ALPHA);
            let center = viewport.to_screen(link.center);
            let tip = viewport.to_screen(link.tip);

            if self.settings.show_circles {
                let radius = viewport.length_to_screen(link.radius);
                // Sub-pixel circles only add noise
                if radius >= 0.5 {
                    painter.circle_stroke(center, radius, Stroke::new(1.5, color));
                    painter.circle_filled(center, 2.0, color);
                }
            }
            if self.settings.show_arms {
                painter.line_segment([center, tip], Stroke::new(1.0, with_alpha(Color32::WHITE, 120)));
            }
        }
    }

    /// Draw the trail with a quadratic fade and a pink → cyan → purple gradient
    fn draw_trail(&self, painter: &egui::Painter, viewport: &Viewport, trail: &Trail) {
        let len = trail.len();
        if len < 2 {
            return;
        }

        let points: Vec<Pos2> = trail.iter().map(|p| viewport.to_screen(p)).collect();
        for (i, segment) in points.windows(2).enumerate() {
            let t = (i + 1) as f32 / len as f32;
            let fade = t * t;
            let alpha = (fade * 255.0 * 1.6).min(255.0) as u8;

            let color = if t < 0.5 {
                lerp_color(NEON_PINK, CYAN, t * 2.0)
            } else {
                lerp_color(CYAN, PURPLE, (t - 0.5) * 2.0)
            };

            painter.line_segment(
                [segment[0], segment[1]],
                Stroke::new(self.settings.trail_width, with_alpha(color, alpha)),
            );
        }
    }
}

/// Faint grid with emphasized axes through the world origin
fn draw_grid(painter: &egui::Painter, rect: Rect, viewport: &Viewport) {
    let grid = Stroke::new(0.5, Color32::from_rgba_unmultiplied(60, 60, 100, 60));
    let axis = Stroke::new(1.0, Color32::from_rgba_unmultiplied(90, 90, 150, 110));

    for i in -10..=10 {
        let v = i as f64 / 10.0;
        let stroke = if i == 0 { axis } else { grid };

        let x = viewport.to_screen(SamplePoint::new(v, 0.0)).x;
        if rect.x_range().contains(x) {
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        }
        let y = viewport.to_screen(SamplePoint::new(0.0, v)).y;
        if rect.y_range().contains(y) {
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        }
    }
}

/// Draw a polyline through `points`, optionally closing it
fn draw_outline(painter: &egui::Painter, viewport: &Viewport, points: &[SamplePoint], closed: bool) {
    if points.len() < 2 {
        return;
    }

    let color = if closed {
        Color32::from_rgba_unmultiplied(255, 255, 255, 40)
    } else {
        Color32::from_rgba_unmultiplied(255, 255, 255, 180)
    };
    let stroke = Stroke::new(1.0, color);

    let screen: Vec<Pos2> = points.iter().map(|p| viewport.to_screen(*p)).collect();
    for segment in screen.windows(2) {
        painter.line_segment([segment[0], segment[1]], stroke);
    }
    if closed {
        painter.line_segment([screen[screen.len() - 1], screen[0]], stroke);
    }
}

/// Multi-layer cyan glow with a bright center
fn draw_glow(painter: &egui::Painter, position: Pos2) {
    for i in (1..=5).rev() {
        let radius = i as f32 * 3.0;
        let alpha = (50 / i) as u8;
        painter.circle_filled(position, radius, with_alpha(CYAN, alpha));
    }
    painter.circle_filled(position, 2.0, Color32::WHITE);
}

/// Color of the `index`-th of `count` epicycles
///
/// The largest circles are cyan. Smaller ones shade towards pink when they
/// turn counter-clockwise (k > 0) and towards purple when they turn
/// clockwise (k < 0).
fn epicycle_color(index: usize, count: usize, frequency_index: i64) -> Color32 {
    if count <= 1 {
        return CYAN;
    }
    let far = if frequency_index < 0 { PURPLE } else { NEON_PINK };
    lerp_color(CYAN, far, index as f32 / (count - 1) as f32)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

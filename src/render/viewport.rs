//! Mapping between world space and screen space
//!
//! World space is y-up with the origin at the center; screen space is
//! egui's y-down pixel coordinates.

use eframe::egui::{Pos2, Rect};

use crate::fourier::SamplePoint;

/// A square view of world space centered in a screen rectangle
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    center: Pos2,
    /// Pixels per world unit
    scale: f64,
}

impl Viewport {
    /// Fit world [-1, 1] into the shorter side of `rect`, times `zoom`
    pub fn new(rect: Rect, zoom: f32) -> Self {
        let side = rect.width().min(rect.height()) as f64;
        Self {
            center: rect.center(),
            scale: (side / 2.0 * zoom as f64).max(f64::EPSILON),
        }
    }

    pub fn to_screen(&self, point: SamplePoint) -> Pos2 {
        Pos2::new(
            self.center.x + (point.x * self.scale) as f32,
            self.center.y - (point.y * self.scale) as f32, // Flip Y
        )
    }

    pub fn to_world(&self, pos: Pos2) -> SamplePoint {
        SamplePoint::new(
            (pos.x - self.center.x) as f64 / self.scale,
            (self.center.y - pos.y) as f64 / self.scale,
        )
    }

    /// Convert a world-space length (e.g. a radius) to pixels
    pub fn length_to_screen(&self, length: f64) -> f32 {
        (length * self.scale) as f32
    }
}

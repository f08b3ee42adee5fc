//! Primitive shapes - Circle, Rectangle, Polygon
//!
//! These are the preset outlines offered in the shape picker.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::traits::Shape;

/// A circle centered at (cx, cy) with given radius
///
/// ## Parametric Equation
/// ```text
/// x = cx + radius * cos(t * 2π)
/// y = cy + radius * sin(t * 2π)
/// ```
#[derive(Clone, Debug)]
pub struct Circle {
    /// Center X coordinate
    pub cx: f64,
    /// Center Y coordinate
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    /// Create a new circle at the origin with given radius
    pub fn new(radius: f64) -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            radius,
        }
    }
}

impl Shape for Circle {
    fn sample(&self, t: f64) -> (f64, f64) {
        let angle = t * TAU;
        let x = self.cx + self.radius * angle.cos();
        let y = self.cy + self.radius * angle.sin();
        (x, y)
    }

    fn name(&self) -> &str {
        "Circle"
    }

    fn length(&self) -> f64 {
        TAU * self.radius
    }
}

/// A rectangle centered at (cx, cy) with given width and height
///
/// The rectangle is traced starting from the top-left corner,
/// going clockwise: top → right → bottom → left
#[derive(Clone, Debug)]
pub struct Rectangle {
    pub cx: f64,
    pub cy: f64,
    /// Half-width (distance from center to edge)
    pub half_width: f64,
    /// Half-height (distance from center to edge)
    pub half_height: f64,
}

impl Rectangle {
    /// Create a rectangle at the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            cx: 0.0,
            cy: 0.0,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Create a square at the origin
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.cx - self.half_width, self.cy + self.half_height), // Top-left
            (self.cx + self.half_width, self.cy + self.half_height), // Top-right
            (self.cx + self.half_width, self.cy - self.half_height), // Bottom-right
            (self.cx - self.half_width, self.cy - self.half_height), // Bottom-left
        ]
    }

    fn edge_fraction(&self) -> [f64; 4] {
        let perimeter = self.length();
        if perimeter == 0.0 {
            return [0.25; 4];
        }
        let w = 2.0 * self.half_width / perimeter;
        let h = 2.0 * self.half_height / perimeter;
        [w, h, w, h]
    }
}

impl Shape for Rectangle {
    fn sample(&self, t: f64) -> (f64, f64) {
        let corners = self.corners();
        let t = t.rem_euclid(1.0);

        // Walk the edges by arc length so wide rectangles stay uniform
        let mut start = 0.0;
        for (edge, fraction) in self.edge_fraction().into_iter().enumerate() {
            let end = start + fraction;
            if t < end || edge == 3 {
                let local_t = if fraction > 0.0 { (t - start) / fraction } else { 0.0 };
                let (x1, y1) = corners[edge];
                let (x2, y2) = corners[(edge + 1) % 4];
                return (x1 + local_t * (x2 - x1), y1 + local_t * (y2 - y1));
            }
            start = end;
        }

        corners[0]
    }

    fn name(&self) -> &str {
        "Rectangle"
    }

    fn length(&self) -> f64 {
        4.0 * (self.half_width + self.half_height)
    }
}

/// A polygon defined by a list of vertices
///
/// The polygon is traced by connecting consecutive vertices,
/// with the last vertex connecting back to the first.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
    /// Cached edge lengths for uniform sampling
    edge_lengths: Vec<f64>,
    total_length: f64,
    name: &'static str,
}

impl Polygon {
    /// Create a polygon from vertices
    ///
    /// # Panics
    /// Panics if fewer than 3 vertices are provided
    pub fn new(vertices: Vec<(f64, f64)>, name: &'static str) -> Self {
        assert!(vertices.len() >= 3, "Polygon requires at least 3 vertices");

        let n = vertices.len();
        let edge_lengths: Vec<f64> = (0..n)
            .map(|i| {
                let (x1, y1) = vertices[i];
                let (x2, y2) = vertices[(i + 1) % n];
                (x2 - x1).hypot(y2 - y1)
            })
            .collect();
        let total_length = edge_lengths.iter().sum();

        Self {
            vertices,
            edge_lengths,
            total_length,
            name,
        }
    }

    /// Create a star with n spikes alternating between two radii
    ///
    /// The first spike points straight up.
    pub fn star(n: usize, outer_radius: f64, inner_radius: f64) -> Self {
        assert!(n >= 3, "Star requires at least 3 points");

        let total_points = n * 2;
        let vertices = (0..total_points)
            .map(|i| {
                let angle = FRAC_PI_2 - (i as f64 / total_points as f64) * TAU;
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                (radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Self::new(vertices, "Star")
    }
}

impl Shape for Polygon {
    fn sample(&self, t: f64) -> (f64, f64) {
        if self.total_length == 0.0 {
            return self.vertices[0];
        }

        let target_dist = t.rem_euclid(1.0) * self.total_length;
        let mut accumulated = 0.0;

        for (i, &edge_len) in self.edge_lengths.iter().enumerate() {
            if accumulated + edge_len >= target_dist || i == self.edge_lengths.len() - 1 {
                let local_t = if edge_len > 0.0 {
                    ((target_dist - accumulated) / edge_len).min(1.0)
                } else {
                    0.0
                };

                let (x1, y1) = self.vertices[i];
                let (x2, y2) = self.vertices[(i + 1) % self.vertices.len()];

                return (x1 + local_t * (x2 - x1), y1 + local_t * (y2 - y1));
            }
            accumulated += edge_len;
        }

        self.vertices[0]
    }

    fn name(&self) -> &str {
        self.name
    }

    fn length(&self) -> f64 {
        self.total_length
    }
}

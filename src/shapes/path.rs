//! Path type - arbitrary sequences of points
//!
//! A Path is a shape defined by a list of points. It backs:
//! - Hand-drawn strokes
//! - Imported SVG outlines
//! - Curves that are easiest to write as point lists (heart, infinity)

use std::f64::consts::{PI, TAU};

use super::traits::Shape;
use crate::fourier::SamplePoint;

/// A closed path defined by a sequence of points
///
/// Points are connected in order and the last point joins back to the
/// first. The parametrization covers that closing segment.
#[derive(Clone, Debug)]
pub struct Path {
    points: Vec<SamplePoint>,
    /// Cached segment lengths for arc-length sampling
    segment_lengths: Vec<f64>,
    total_length: f64,
    name: String,
}

impl Path {
    /// Create a closed path from points
    pub fn closed(points: Vec<SamplePoint>, name: impl Into<String>) -> Self {
        let segment_lengths: Vec<f64> = (0..points.len())
            .map(|i| points[i].distance(points[(i + 1) % points.len()]))
            .collect();
        let total_length = segment_lengths.iter().sum();

        Self {
            points,
            segment_lengths,
            total_length,
            name: name.into(),
        }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Create a heart shape
    ///
    /// Uses the classic parametric heart
    /// `x = 16 sin³t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`,
    /// starting at the bottom tip.
    pub fn heart(scale: f64, num_points: usize) -> Self {
        let points = (0..num_points)
            .map(|i| {
                let t = i as f64 / num_points as f64 * TAU - PI;
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                // The raw curve spans roughly [-17, 17]
                SamplePoint::new(x * scale / 17.0, y * scale / 17.0)
            })
            .collect();

        Self::closed(points, "Heart")
    }

    /// Create an infinity symbol (lemniscate of Gerono)
    ///
    /// `x = cos t`, `y = sin t · cos t`
    pub fn infinity(scale: f64, num_points: usize) -> Self {
        let points = (0..num_points)
            .map(|i| {
                let t = i as f64 / num_points as f64 * TAU;
                SamplePoint::new(scale * t.cos(), scale * t.sin() * t.cos())
            })
            .collect();

        Self::closed(points, "Infinity")
    }
}

impl Shape for Path {
    fn sample(&self, t: f64) -> (f64, f64) {
        let Some(&first) = self.points.first() else {
            return (0.0, 0.0);
        };

        if self.points.len() == 1 || self.total_length == 0.0 {
            return (first.x, first.y);
        }

        let target_dist = t.rem_euclid(1.0) * self.total_length;
        let mut accumulated = 0.0;

        for (i, &seg_len) in self.segment_lengths.iter().enumerate() {
            if accumulated + seg_len >= target_dist || i == self.segment_lengths.len() - 1 {
                let local_t = if seg_len > 0.0 {
                    ((target_dist - accumulated) / seg_len).min(1.0)
                } else {
                    0.0
                };

                let a = self.points[i];
                let b = self.points[(i + 1) % self.points.len()];
                let p = a.lerp(b, local_t);
                return (p.x, p.y);
            }
            accumulated += seg_len;
        }

        (first.x, first.y)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> f64 {
        self.total_length
    }
}

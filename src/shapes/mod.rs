//! Shapes module - sources of closed paths for the Fourier engine
//!
//! This module provides:
//! - `Shape` trait for abstracting over different shape types
//! - Preset shapes: Circle, Square, Star, Heart, Infinity
//! - `Path` type for arbitrary point sequences (hand-drawn strokes)
//! - SVG import
//! - Preprocessing: arc-length resampling and recentering

mod path;
mod preprocess;
mod primitives;
mod svg;
mod traits;

pub use path::Path;
#[allow(unused_imports)]
pub use preprocess::{center_path, prepare_path, resample_path, PathError, MIN_PATH_POINTS};
pub use primitives::{Circle, Polygon, Rectangle};
#[allow(unused_imports)]
pub use svg::{SvgError, SvgOptions, SvgShape};
pub use traits::{BoxedShape, Shape};

use serde::{Deserialize, Serialize};

use crate::fourier::SamplePoint;

/// Default size of preset shapes in world units
pub const PRESET_SIZE: f64 = 0.8;

/// Inner radius of the preset star relative to its outer radius
const STAR_INNER_RATIO: f64 = 0.4;

/// Where the current path comes from
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Star,
    Heart,
    Infinity,
    /// Drawn with the mouse
    Freehand,
    /// Imported from an SVG file
    Svg,
}

impl ShapeKind {
    /// Shapes that can be generated without user input
    pub fn presets() -> &'static [ShapeKind] {
        &[
            ShapeKind::Circle,
            ShapeKind::Square,
            ShapeKind::Star,
            ShapeKind::Heart,
            ShapeKind::Infinity,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Star => "Star",
            ShapeKind::Heart => "Heart",
            ShapeKind::Infinity => "Infinity",
            ShapeKind::Freehand => "Freehand",
            ShapeKind::Svg => "SVG",
        }
    }

    /// Build the preset shape, or `None` for user-supplied sources
    pub fn build(&self, size: f64, detail: usize) -> Option<BoxedShape> {
        match self {
            ShapeKind::Circle => Some(Box::new(Circle::new(size))),
            ShapeKind::Square => Some(Box::new(Rectangle::square(size * 1.6))),
            ShapeKind::Star => Some(Box::new(Polygon::star(5, size, size * STAR_INNER_RATIO))),
            ShapeKind::Heart => Some(Box::new(Path::heart(size, detail))),
            ShapeKind::Infinity => Some(Box::new(Path::infinity(size * 1.1, detail))),
            ShapeKind::Freehand | ShapeKind::Svg => None,
        }
    }
}

/// Sample a shape at `num_samples` evenly spaced parameter values
///
/// `t` runs over [0, 1) so closed shapes do not repeat their start point.
pub fn shape_to_points<S: Shape + ?Sized>(shape: &S, num_samples: usize) -> Vec<SamplePoint> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / num_samples as f64;
            SamplePoint::from(shape.sample(t))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_to_points() {
        let points = shape_to_points(&Circle::new(1.0), 4);
        assert_eq!(points.len(), 4);
        assert!((points[1].x).abs() < 1e-12);
        assert!((points[1].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_presets_build() {
        for kind in ShapeKind::presets() {
            let shape = kind.build(PRESET_SIZE, 256).expect("preset shape");
            let points = shape_to_points(shape.as_ref(), 64);
            assert_eq!(points.len(), 64);
            for p in &points {
                assert!(p.x.abs() <= 1.0 && p.y.abs() <= 1.0, "{} out of view", kind.name());
            }
        }
    }

    #[test]
    fn test_user_sources_have_no_preset() {
        assert!(ShapeKind::Freehand.build(PRESET_SIZE, 64).is_none());
        assert!(ShapeKind::Svg.build(PRESET_SIZE, 64).is_none());
    }
}

//! SVG import - load SVG outlines as closed paths
//!
//! This module handles:
//! - Loading SVG files from disk
//! - Parsing SVG paths using usvg
//! - Flattening Bézier curves to point sequences
//! - Normalizing coordinates into the world view (y-up, centered)
//!
//! Every subpath is appended to a single closed outline. The Fourier engine
//! needs one traversal, so jumps between subpaths become straight strokes.

use std::path::Path as FilePath;

use thiserror::Error;
use usvg::tiny_skia_path::{PathSegment, Point};

use super::path::Path;
use super::traits::Shape;
use crate::fourier::SamplePoint;

/// Largest coordinate of a normalized outline
const FIT_EXTENT: f64 = 0.9;

/// Errors that can occur during SVG import
#[derive(Error, Debug)]
pub enum SvgError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse SVG: {0}")]
    Parse(String),

    #[error("SVG contains no paths")]
    NoPaths,
}

/// Options for SVG import
pub struct SvgOptions {
    /// Number of points to sample per curve segment
    pub curve_samples: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { curve_samples: 16 }
    }
}

/// An imported SVG flattened to one closed outline
#[derive(Clone)]
pub struct SvgShape {
    outline: Path,
    subpath_count: usize,
}

impl SvgShape {
    /// Load an SVG from a file
    pub fn load(path: impl AsRef<FilePath>, options: &SvgOptions) -> Result<Self, SvgError> {
        let path = path.as_ref();
        let svg_data = std::fs::read(path)?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("SVG")
            .to_string();

        Self::from_data(&svg_data, &name, options)
    }

    /// Parse SVG from raw data
    pub fn from_data(data: &[u8], name: &str, options: &SvgOptions) -> Result<Self, SvgError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| SvgError::Parse(e.to_string()))?;

        let mut collector = OutlineCollector {
            curve_samples: options.curve_samples.max(1),
            points: Vec::new(),
            subpath_count: 0,
        };
        collector.visit_group(tree.root());

        if collector.points.len() < 2 {
            return Err(SvgError::NoPaths);
        }

        let points = normalize(&collector.points);
        log::info!(
            "Imported SVG '{}': {} subpaths, {} points",
            name,
            collector.subpath_count,
            points.len()
        );

        Ok(Self {
            outline: Path::closed(points, name),
            subpath_count: collector.subpath_count,
        })
    }

    pub fn subpath_count(&self) -> usize {
        self.subpath_count
    }

    pub fn points(&self) -> &[SamplePoint] {
        self.outline.points()
    }
}

impl Shape for SvgShape {
    fn sample(&self, t: f64) -> (f64, f64) {
        self.outline.sample(t)
    }

    fn name(&self) -> &str {
        self.outline.name()
    }

    fn length(&self) -> f64 {
        self.outline.length()
    }
}

/// Walks the usvg tree and flattens every path into canvas coordinates
struct OutlineCollector {
    curve_samples: usize,
    points: Vec<SamplePoint>,
    subpath_count: usize,
}

impl OutlineCollector {
    fn visit_group(&mut self, group: &usvg::Group) {
        for child in group.children() {
            match child {
                usvg::Node::Path(ref path) => self.visit_path(path),
                usvg::Node::Group(ref subgroup) => self.visit_group(subgroup),
                _ => {}
            }
        }
    }

    fn visit_path(&mut self, path: &usvg::Path) {
        let transform = path.abs_transform();
        let map = |p: Point| -> SamplePoint {
            let mut p = p;
            transform.map_point(&mut p);
            SamplePoint::new(p.x as f64, p.y as f64)
        };

        let mut current: Option<SamplePoint> = None;
        for segment in path.data().segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    self.subpath_count += 1;
                    let start = map(p);
                    self.points.push(start);
                    current = Some(start);
                }
                PathSegment::LineTo(p) => {
                    let end = map(p);
                    self.points.push(end);
                    current = Some(end);
                }
                PathSegment::QuadTo(p1, p2) => {
                    if let Some(start) = current {
                        let ctrl = map(p1);
                        let end = map(p2);
                        for i in 1..=self.curve_samples {
                            let t = i as f64 / self.curve_samples as f64;
                            self.points.push(quadratic_bezier(start, ctrl, end, t));
                        }
                        current = Some(end);
                    }
                }
                PathSegment::CubicTo(p1, p2, p3) => {
                    if let Some(start) = current {
                        let ctrl1 = map(p1);
                        let ctrl2 = map(p2);
                        let end = map(p3);
                        for i in 1..=self.curve_samples {
                            let t = i as f64 / self.curve_samples as f64;
                            self.points.push(cubic_bezier(start, ctrl1, ctrl2, end, t));
                        }
                        current = Some(end);
                    }
                }
                // The outline is closed as a whole; the next MoveTo or the
                // final wrap-around joins this subpath to its neighbour
                PathSegment::Close => {}
            }
        }
    }
}

/// Fit points into [-FIT_EXTENT, FIT_EXTENT], keeping aspect ratio
///
/// SVG y grows downwards, so the result is flipped into y-up world space.
fn normalize(points: &[SamplePoint]) -> Vec<SamplePoint> {
    let (min_x, max_x, min_y, max_y) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(lx, hx, ly, hy), p| (lx.min(p.x), hx.max(p.x), ly.min(p.y), hy.max(p.y)),
    );

    let cx = (min_x + max_x) / 2.0;
    let cy = (min_y + max_y) / 2.0;
    let half_extent = ((max_x - min_x).max(max_y - min_y) / 2.0).max(f64::EPSILON);
    let scale = FIT_EXTENT / half_extent;

    points
        .iter()
        .map(|p| SamplePoint::new((p.x - cx) * scale, -(p.y - cy) * scale))
        .collect()
}

/// Evaluate a quadratic Bézier curve at parameter t
fn quadratic_bezier(p0: SamplePoint, p1: SamplePoint, p2: SamplePoint, t: f64) -> SamplePoint {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;

    SamplePoint::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Evaluate a cubic Bézier curve at parameter t
fn cubic_bezier(
    p0: SamplePoint,
    p1: SamplePoint,
    p2: SamplePoint,
    p3: SamplePoint,
    t: f64,
) -> SamplePoint {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;

    SamplePoint::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <path d="M 10 90 L 50 10 L 90 90 Z" fill="black"/>
    </svg>"#;

    #[test]
    fn test_quadratic_bezier() {
        let p0 = SamplePoint::new(0.0, 0.0);
        let p1 = SamplePoint::new(0.5, 1.0);
        let p2 = SamplePoint::new(1.0, 0.0);

        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);

        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cubic_bezier() {
        let p0 = SamplePoint::new(0.0, 0.0);
        let p1 = SamplePoint::new(0.33, 1.0);
        let p2 = SamplePoint::new(0.66, 1.0);
        let p3 = SamplePoint::new(1.0, 0.0);

        assert_eq!(cubic_bezier(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_normalize_flips_and_fits() {
        let points = vec![
            SamplePoint::new(10.0, 10.0),
            SamplePoint::new(110.0, 10.0),
            SamplePoint::new(110.0, 60.0),
        ];
        let normalized = normalize(&points);

        // Wider axis spans exactly [-0.9, 0.9]
        assert!((normalized[0].x + 0.9).abs() < 1e-12);
        assert!((normalized[1].x - 0.9).abs() < 1e-12);
        // Top of the SVG ends up on top in world space
        assert!(normalized[0].y > normalized[2].y);
    }

    #[test]
    fn test_import_triangle() {
        let shape = SvgShape::from_data(TRIANGLE_SVG.as_bytes(), "triangle", &SvgOptions::default())
            .unwrap();
        assert_eq!(shape.subpath_count(), 1);
        assert_eq!(shape.name(), "triangle");
        assert!(shape.points().len() >= 3);

        // Apex is at the top after the y flip
        let apex = shape
            .points()
            .iter()
            .fold(f64::NEG_INFINITY, |top, p| top.max(p.y));
        assert!((apex - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_import_without_paths() {
        let empty = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;
        let result = SvgShape::from_data(empty.as_bytes(), "empty", &SvgOptions::default());
        assert!(matches!(result, Err(SvgError::NoPaths)));
    }

    #[test]
    fn test_import_garbage() {
        let result = SvgShape::from_data(b"not an svg", "junk", &SvgOptions::default());
        assert!(matches!(result, Err(SvgError::Parse(_))));
    }
}

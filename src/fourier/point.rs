//! 2D sample point shared by shapes, preprocessing and the engine

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A point on a path in world coordinates
///
/// World space is y-up with the origin at the center of the view.
/// Preset shapes fit in [-1, 1] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub const ORIGIN: SamplePoint = SamplePoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: SamplePoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other` by factor `t`
    pub fn lerp(&self, other: SamplePoint, t: f64) -> SamplePoint {
        SamplePoint::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Interpret the point as the complex number `x + i·y`
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Complex64> for SamplePoint {
    fn from(c: Complex64) -> Self {
        Self { x: c.re, y: c.im }
    }
}

impl From<SamplePoint> for Complex64 {
    fn from(p: SamplePoint) -> Self {
        p.to_complex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_conversion() {
        let p = SamplePoint::new(3.0, -4.0);
        let c = p.to_complex();
        assert_eq!(c.re, 3.0);
        assert_eq!(c.im, -4.0);
        assert_eq!(SamplePoint::from(c), p);
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = SamplePoint::new(0.0, 0.0);
        let b = SamplePoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);

        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 1.5).abs() < 1e-12);
        assert!((mid.y - 2.0).abs() < 1e-12);
    }
}

//! Freehand stroke capture
//!
//! Collects world-space points while the user drags across the canvas.
//! A stroke starts on press, grows while the pointer moves and is handed
//! back on release so the driver can resample it and recompute the
//! spectrum.

use crate::fourier::SamplePoint;
use crate::shapes::MIN_PATH_POINTS;

/// Default minimum spacing between captured points, in world units
const DEFAULT_MIN_SPACING: f64 = 0.005;

/// Records a single stroke at a time
#[derive(Clone, Debug)]
pub struct FreehandCapture {
    points: Vec<SamplePoint>,
    drawing: bool,
    /// Moves shorter than this are dropped to keep jitter out of the stroke
    min_spacing: f64,
}

impl Default for FreehandCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl FreehandCapture {
    pub fn new() -> Self {
        Self::with_min_spacing(DEFAULT_MIN_SPACING)
    }

    pub fn with_min_spacing(min_spacing: f64) -> Self {
        Self {
            points: Vec::new(),
            drawing: false,
            min_spacing: min_spacing.max(0.0),
        }
    }

    /// Start a new stroke, discarding any previous one
    pub fn begin(&mut self, point: SamplePoint) {
        self.points.clear();
        self.points.push(point);
        self.drawing = true;
    }

    /// Add a point to the stroke in progress
    ///
    /// Ignored when no stroke is active or the point is too close to the
    /// previous one.
    pub fn extend(&mut self, point: SamplePoint) {
        if !self.drawing {
            return;
        }
        if let Some(last) = self.points.last() {
            if last.distance(point) < self.min_spacing {
                return;
            }
        }
        self.points.push(point);
    }

    /// End the stroke and take its points
    ///
    /// Returns `None` if nothing was being drawn or the stroke is too short
    /// to form an outline. The stroke stays visible through `points()`
    /// until the next `begin` or `cancel`.
    pub fn finish(&mut self) -> Option<Vec<SamplePoint>> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;

        if self.points.len() < MIN_PATH_POINTS {
            log::debug!("Discarding stroke with {} points", self.points.len());
            return None;
        }
        Some(self.points.clone())
    }

    /// Abort the stroke in progress
    pub fn cancel(&mut self) {
        self.drawing = false;
        self.points.clear();
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_lifecycle() {
        let mut capture = FreehandCapture::with_min_spacing(0.0);
        assert!(!capture.is_drawing());

        capture.begin(SamplePoint::new(0.0, 0.0));
        capture.extend(SamplePoint::new(0.5, 0.0));
        capture.extend(SamplePoint::new(0.5, 0.5));
        assert!(capture.is_drawing());

        let stroke = capture.finish().unwrap();
        assert_eq!(stroke.len(), 3);
        assert!(!capture.is_drawing());
        // Stroke stays visible after release
        assert_eq!(capture.points().len(), 3);
    }

    #[test]
    fn test_extend_without_begin_is_ignored() {
        let mut capture = FreehandCapture::new();
        capture.extend(SamplePoint::new(0.1, 0.1));
        assert!(capture.points().is_empty());
        assert!(capture.finish().is_none());
    }

    #[test]
    fn test_min_spacing_filters_jitter() {
        let mut capture = FreehandCapture::with_min_spacing(0.1);
        capture.begin(SamplePoint::new(0.0, 0.0));
        capture.extend(SamplePoint::new(0.01, 0.0));
        capture.extend(SamplePoint::new(0.2, 0.0));
        assert_eq!(capture.points().len(), 2);
    }

    #[test]
    fn test_single_click_is_not_a_stroke() {
        let mut capture = FreehandCapture::new();
        capture.begin(SamplePoint::new(0.3, 0.3));
        assert!(capture.finish().is_none());
    }

    #[test]
    fn test_begin_discards_previous_stroke() {
        let mut capture = FreehandCapture::with_min_spacing(0.0);
        capture.begin(SamplePoint::new(0.0, 0.0));
        capture.extend(SamplePoint::new(1.0, 0.0));
        capture.finish();

        capture.begin(SamplePoint::new(-1.0, -1.0));
        assert_eq!(capture.points(), &[SamplePoint::new(-1.0, -1.0)]);

        capture.cancel();
        assert!(capture.points().is_empty());
        assert!(!capture.is_drawing());
    }
}

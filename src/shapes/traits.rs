//! Shape trait definition
//!
//! The `Shape` trait abstracts over everything that can feed the Fourier
//! engine: preset curves, hand-drawn strokes and imported SVG outlines.

/// A closed curve described parametrically
///
/// ## Parametric Representation
///
/// - `t = 0.0` → Start of the shape
/// - `t = 0.5` → Halfway along the outline
/// - `t = 1.0` → Back at the start for closed shapes
///
/// ## Coordinate System
///
/// World coordinates are y-up with (0, 0) at the center of the view.
/// Preset shapes stay within [-1, 1] on both axes.
pub trait Shape: Send + Sync {
    /// Sample the shape at parameter t in [0, 1)
    fn sample(&self, t: f64) -> (f64, f64);

    /// Get the name of this shape (for UI display)
    fn name(&self) -> &str;

    /// Approximate outline length
    ///
    /// Default implementation returns 1.0 (suitable for simple shapes).
    fn length(&self) -> f64 {
        1.0
    }
}

/// A boxed shape for dynamic dispatch
///
/// The driver picks a preset at runtime, so shapes are handed around as
/// `Box<dyn Shape>`.
pub type BoxedShape = Box<dyn Shape>;

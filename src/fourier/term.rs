//! Frequency terms and per-frame epicycle state

use std::f64::consts::TAU;

use num_complex::Complex64;

use super::point::SamplePoint;

/// One DFT basis term: harmonic number `k` and its complex coefficient
///
/// Terms are immutable once computed. Magnitude and phase are derived
/// on demand rather than stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyTerm {
    /// Harmonic number; negative values rotate clockwise
    pub frequency_index: i64,
    /// Complex Fourier coefficient for this harmonic
    pub coefficient: Complex64,
}

impl FrequencyTerm {
    pub fn new(frequency_index: i64, coefficient: Complex64) -> Self {
        Self {
            frequency_index,
            coefficient,
        }
    }

    /// Radius of the epicycle (`|coefficient|`)
    pub fn magnitude(&self) -> f64 {
        self.coefficient.norm()
    }

    /// Static phase of the coefficient in radians
    pub fn phase(&self) -> f64 {
        self.coefficient.arg()
    }

    /// Rotation angle `2π·k·t` contributed by time
    fn rotation(&self, t: f64) -> f64 {
        TAU * self.frequency_index as f64 * t
    }

    /// The coefficient rotated to time `t`: `c · e^(i·2π·k·t)`
    pub fn rotated(&self, t: f64) -> Complex64 {
        self.coefficient * Complex64::from_polar(1.0, self.rotation(t))
    }

    /// Full epicycle state of this term at time `t`
    pub fn state_at(&self, t: f64) -> EpicycleState {
        EpicycleState {
            radius: self.magnitude(),
            frequency_index: self.frequency_index,
            phase: self.phase() + self.rotation(t),
            local_offset: self.rotated(t),
        }
    }
}

/// Geometry of a single epicycle at one instant
///
/// `local_offset` is the displacement this term adds to its predecessor's
/// tip. Absolute centers depend on the origin and chaining order chosen by
/// whoever draws the epicycles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpicycleState {
    pub radius: f64,
    pub frequency_index: i64,
    /// Instantaneous rotation angle: static phase plus `2π·k·t`
    pub phase: f64,
    pub local_offset: Complex64,
}

impl EpicycleState {
    /// The local offset as a world-space displacement
    pub fn offset(&self) -> SamplePoint {
        SamplePoint::from(self.local_offset)
    }
}

//! Decomposition engine - DFT of a sampled path and its reconstruction
//!
//! The engine computes one complex coefficient per harmonic of an N-point
//! path with a direct O(N²) summation, then keeps the terms sorted by
//! descending magnitude so that truncating to the first few terms keeps the
//! largest epicycles.
//!
//! ## Cost
//!
//! `compute_transform` is quadratic in the sample count. It must only run
//! when the path changes, never once per animation frame. `evaluate` and
//! `epicycle_states` are linear in the number of retained terms.
//!
//! ## Snapshots
//!
//! Computed terms live in an immutable `Spectrum` behind an `Arc`.
//! Recomputing swaps in a new `Arc`, so a reader holding a snapshot from
//! `FourierEngine::snapshot` keeps a consistent term set while the engine
//! moves on. Readers on other threads share snapshots freely; replacement
//! itself needs `&mut FourierEngine`, which gives the writer exclusive access.

use std::f64::consts::TAU;
use std::ops::Range;
use std::sync::Arc;

use num_complex::Complex64;

use super::point::SamplePoint;
use super::term::{EpicycleState, FrequencyTerm};

/// Harmonic numbers computed for an `n`-point path
///
/// Starts at `-⌊n/2⌋` and spans exactly `n` consecutive integers, which is
/// `[-n/2, n/2)` for even `n` and the symmetric `[-(n-1)/2, (n-1)/2]` for
/// odd `n`. A single point yields only the DC term.
fn frequency_range(n: usize) -> Range<i64> {
    let n = n as i64;
    let k_min = -(n / 2);
    k_min..k_min + n
}

/// Forward DFT coefficient for harmonic `k`:
/// `(1/N) · Σ point(n) · e^(-i·2π·k·n/N)`
fn coefficient(path: &[SamplePoint], k: i64) -> Complex64 {
    let n = path.len() as i64;
    let sum = path
        .iter()
        .enumerate()
        .fold(Complex64::new(0.0, 0.0), |acc, (i, point)| {
            // Reduce k·i modulo N first so the angle stays small for large N
            let step = (k * i as i64).rem_euclid(n);
            let angle = -TAU * step as f64 / n as f64;
            acc + point.to_complex() * Complex64::from_polar(1.0, angle)
        });
    sum / n as f64
}

/// An immutable set of frequency terms computed from one path
///
/// Terms are stored in descending magnitude order. Ties keep ascending
/// frequency order. The empty spectrum is a valid state: it evaluates to
/// the origin and has no epicycles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    terms: Vec<FrequencyTerm>,
    sample_count: usize,
}

impl Spectrum {
    /// The spectrum of an empty path
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compute the DFT of `path` and sort the terms by magnitude
    pub fn from_path(path: &[SamplePoint]) -> Self {
        if path.is_empty() {
            return Self::empty();
        }

        let mut terms: Vec<FrequencyTerm> = frequency_range(path.len())
            .map(|k| FrequencyTerm::new(k, coefficient(path, k)))
            .collect();

        // sort_by is stable, so equal magnitudes stay in frequency order
        terms.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));

        Self {
            terms,
            sample_count: path.len(),
        }
    }

    /// All terms in descending magnitude order
    pub fn terms(&self) -> &[FrequencyTerm] {
        &self.terms
    }

    /// Number of path samples the spectrum was computed from
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The largest-magnitude term, if any
    pub fn dominant(&self) -> Option<&FrequencyTerm> {
        self.terms.first()
    }

    /// The leading terms kept by a truncation limit
    ///
    /// `None` and `Some(0)` keep every term; larger limits are capped at
    /// the number of terms.
    pub fn retained(&self, limit: Option<usize>) -> &[FrequencyTerm] {
        match limit {
            Some(limit) if limit > 0 => &self.terms[..limit.min(self.terms.len())],
            _ => &self.terms,
        }
    }

    /// Reconstructed point at time `t` using every term
    ///
    /// Periodic in `t` with period 1. At `t = n/N` this reproduces sample
    /// `n` of the original path.
    pub fn evaluate(&self, t: f64) -> SamplePoint {
        self.evaluate_truncated(t, None)
    }

    /// Reconstructed point at time `t` using only the leading `limit` terms
    ///
    /// Summation runs in stored order. Different orders can differ in the
    /// last few bits of the result; that is rounding, not a different sum.
    pub fn evaluate_truncated(&self, t: f64, limit: Option<usize>) -> SamplePoint {
        let sum = self
            .retained(limit)
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, term| acc + term.rotated(t));
        SamplePoint::from(sum)
    }

    /// Per-term epicycle geometry at time `t`, in stored order
    pub fn epicycle_states(&self, t: f64, limit: Option<usize>) -> Vec<EpicycleState> {
        self.retained(limit)
            .iter()
            .map(|term| term.state_at(t))
            .collect()
    }
}

/// Owns the current spectrum and replaces it wholesale on recomputation
#[derive(Clone, Debug, Default)]
pub struct FourierEngine {
    spectrum: Arc<Spectrum>,
}

impl FourierEngine {
    /// Create an engine in the empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decompose `path` into frequency terms, replacing any previous result
    ///
    /// An empty path clears the engine. This is quadratic in `path.len()`.
    pub fn compute_transform(&mut self, path: &[SamplePoint]) {
        let spectrum = Spectrum::from_path(path);

        match spectrum.dominant() {
            Some(term) => log::debug!(
                "Computed {} terms from {} samples (dominant k={}, |c|={:.4})",
                spectrum.len(),
                spectrum.sample_count(),
                term.frequency_index,
                term.magnitude()
            ),
            None => log::debug!("Cleared spectrum (empty path)"),
        }

        self.spectrum = Arc::new(spectrum);
    }

    /// Share the current spectrum with a reader
    pub fn snapshot(&self) -> Arc<Spectrum> {
        Arc::clone(&self.spectrum)
    }

    pub fn terms(&self) -> &[FrequencyTerm] {
        self.spectrum.terms()
    }

    pub fn sample_count(&self) -> usize {
        self.spectrum.sample_count()
    }

    pub fn len(&self) -> usize {
        self.spectrum.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectrum.is_empty()
    }

    /// Reconstructed point at time `t` (origin when empty)
    pub fn evaluate(&self, t: f64) -> SamplePoint {
        self.spectrum.evaluate(t)
    }

    /// Reconstructed point at time `t` from the leading `limit` terms
    pub fn evaluate_truncated(&self, t: f64, limit: Option<usize>) -> SamplePoint {
        self.spectrum.evaluate_truncated(t, limit)
    }

    /// Epicycle geometry at time `t`, largest first (empty when empty)
    pub fn epicycle_states(&self, t: f64, limit: Option<usize>) -> Vec<EpicycleState> {
        self.spectrum.epicycle_states(t, limit)
    }
}

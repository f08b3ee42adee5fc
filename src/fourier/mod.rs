//! Fourier module - decomposes closed paths into rotating vectors
//!
//! This module provides:
//! - `SamplePoint` for 2D path coordinates
//! - `FrequencyTerm` and `EpicycleState` describing individual epicycles
//! - `Spectrum`, an immutable snapshot of computed terms
//! - `FourierEngine`, which owns the current spectrum
//!
//! ## Sign Convention
//!
//! The forward transform uses `e^(-i·2πkn/N)` and reconstruction uses
//! `e^(+i·2πkt)`. A counter-clockwise path (in y-up coordinates) therefore
//! produces a dominant term with positive frequency index.

mod engine;
mod point;
mod term;

#[allow(unused_imports)]
pub use engine::{FourierEngine, Spectrum};
pub use point::SamplePoint;
#[allow(unused_imports)]
pub use term::{EpicycleState, FrequencyTerm};

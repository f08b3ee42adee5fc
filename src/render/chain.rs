//! Chaining epicycles tip-to-tail
//!
//! The engine reports each term's displacement relative to the previous
//! term. Drawing needs absolute centers, so the offsets are accumulated
//! here starting from a chosen origin.

use crate::fourier::{EpicycleState, SamplePoint};

/// One epicycle placed in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpicycleLink {
    /// Center of the circle (the previous link's tip)
    pub center: SamplePoint,
    /// End of the rotating arm
    pub tip: SamplePoint,
    pub radius: f64,
    pub frequency_index: i64,
}

/// Accumulate local offsets into absolute circle centers
///
/// The last link's tip is the reconstructed point for the same truncation.
pub fn chain_epicycles(states: &[EpicycleState], origin: SamplePoint) -> Vec<EpicycleLink> {
    let mut center = origin;
    states
        .iter()
        .map(|state| {
            let offset = state.offset();
            let tip = SamplePoint::new(center.x + offset.x, center.y + offset.y);
            let link = EpicycleLink {
                center,
                tip,
                radius: state.radius,
                frequency_index: state.frequency_index,
            };
            center = tip;
            link
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourier::FourierEngine;

    #[test]
    fn test_chain_ends_at_reconstruction() {
        let path: Vec<SamplePoint> = (0..16)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / 16.0;
                SamplePoint::new(0.7 * a.cos() + 0.1 * (3.0 * a).sin(), 0.4 * a.sin())
            })
            .collect();
        let mut engine = FourierEngine::new();
        engine.compute_transform(&path);

        let t = 0.3;
        let links = chain_epicycles(&engine.epicycle_states(t, None), SamplePoint::ORIGIN);
        let tip = links.last().unwrap().tip;
        let expected = engine.evaluate(t);
        assert!((tip.x - expected.x).abs() < 1e-12);
        assert!((tip.y - expected.y).abs() < 1e-12);

        for pair in links.windows(2) {
            assert_eq!(pair[0].tip, pair[1].center);
        }
    }

    #[test]
    fn test_chain_starts_at_origin() {
        let mut engine = FourierEngine::new();
        engine.compute_transform(&[SamplePoint::new(1.0, 0.0), SamplePoint::new(-1.0, 0.0)]);

        let origin = SamplePoint::new(0.5, 0.5);
        let links = chain_epicycles(&engine.epicycle_states(0.0, Some(1)), origin);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].center, origin);
    }

    #[test]
    fn test_empty_chain() {
        assert!(chain_epicycles(&[], SamplePoint::ORIGIN).is_empty());
    }
}

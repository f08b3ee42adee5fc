//! Path preprocessing - uniform resampling and recentering
//!
//! The Fourier engine reconstructs low frequencies best when samples are
//! evenly spaced along the outline. Raw input (mouse strokes, flattened
//! SVG curves) is anything but, so every path goes through here before it
//! reaches the engine.

use thiserror::Error;

use crate::fourier::SamplePoint;

/// Minimum number of input points for a path to have an outline at all
pub const MIN_PATH_POINTS: usize = 2;

/// Errors that can occur while preparing a path
#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("Path has {got} points, need at least {need}")]
    TooFewPoints { got: usize, need: usize },

    #[error("Path has zero length")]
    ZeroLength,

    #[error("Cannot resample to {0} points")]
    InvalidTarget(usize),
}

/// Resample a closed path to `target` points evenly spaced by arc length
///
/// The segment from the last point back to the first counts as part of the
/// outline. The first output point equals the first input point, and the
/// last output point sits one spacing before it, so no sample repeats.
pub fn resample_path(path: &[SamplePoint], target: usize) -> Result<Vec<SamplePoint>, PathError> {
    if target == 0 {
        return Err(PathError::InvalidTarget(target));
    }
    if path.len() < MIN_PATH_POINTS {
        return Err(PathError::TooFewPoints {
            got: path.len(),
            need: MIN_PATH_POINTS,
        });
    }

    let n = path.len();
    let segment_lengths: Vec<f64> = (0..n)
        .map(|i| path[i].distance(path[(i + 1) % n]))
        .collect();
    let total_length: f64 = segment_lengths.iter().sum();

    // Also rejects NaN lengths from non-finite input
    if !(total_length > 0.0) {
        return Err(PathError::ZeroLength);
    }

    let spacing = total_length / target as f64;
    let mut resampled = Vec::with_capacity(target);
    let mut segment = 0;
    let mut segment_start = 0.0;

    for i in 0..target {
        let target_dist = i as f64 * spacing;

        // Find the segment containing this distance
        while segment < n - 1 && segment_start + segment_lengths[segment] < target_dist {
            segment_start += segment_lengths[segment];
            segment += 1;
        }

        let seg_len = segment_lengths[segment];
        let local_t = if seg_len > 0.0 {
            ((target_dist - segment_start) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        resampled.push(path[segment].lerp(path[(segment + 1) % n], local_t));
    }

    Ok(resampled)
}

/// Translate a path so that its centroid lands on `center`
pub fn center_path(path: &[SamplePoint], center: SamplePoint) -> Vec<SamplePoint> {
    if path.is_empty() {
        return Vec::new();
    }

    let count = path.len() as f64;
    let (sum_x, sum_y) = path
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let dx = center.x - sum_x / count;
    let dy = center.y - sum_y / count;

    path.iter()
        .map(|p| SamplePoint::new(p.x + dx, p.y + dy))
        .collect()
}

/// Resample a raw path and optionally recenter it at the origin
pub fn prepare_path(
    raw: &[SamplePoint],
    target: usize,
    recenter: bool,
) -> Result<Vec<SamplePoint>, PathError> {
    let resampled = resample_path(raw, target)?;
    if recenter {
        Ok(center_path(&resampled, SamplePoint::ORIGIN))
    } else {
        Ok(resampled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<SamplePoint> {
        vec![
            SamplePoint::new(0.0, 0.0),
            SamplePoint::new(1.0, 0.0),
            SamplePoint::new(1.0, 1.0),
            SamplePoint::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_resample_uniform_spacing() {
        let resampled = resample_path(&unit_square(), 8).unwrap();
        assert_eq!(resampled.len(), 8);
        assert_eq!(resampled[0], SamplePoint::new(0.0, 0.0));
        assert!((resampled[1].x - 0.5).abs() < 1e-12);
        assert!((resampled[7].y - 0.5).abs() < 1e-12);

        // Every gap, including last -> first, is half a unit
        for i in 0..8 {
            let gap = resampled[i].distance(resampled[(i + 1) % 8]);
            assert!((gap - 0.5).abs() < 1e-12, "gap {} = {}", i, gap);
        }
    }

    #[test]
    fn test_resample_uneven_input() {
        // Dense points along one edge, a single jump along the rest
        let mut path: Vec<SamplePoint> = (0..50)
            .map(|i| SamplePoint::new(i as f64 / 50.0, 0.0))
            .collect();
        path.push(SamplePoint::new(1.0, 0.0));
        path.push(SamplePoint::new(1.0, 1.0));
        path.push(SamplePoint::new(0.0, 1.0));

        let resampled = resample_path(&path, 40).unwrap();
        assert_eq!(resampled.len(), 40);
        for i in 0..40 {
            let gap = resampled[i].distance(resampled[(i + 1) % 40]);
            assert!((gap - 0.1).abs() < 1e-9);
        }
    }

    #[test]
    fn test_resample_skips_duplicate_points() {
        let mut path = unit_square();
        path.insert(1, SamplePoint::new(0.0, 0.0));
        let resampled = resample_path(&path, 4).unwrap();
        assert_eq!(resampled[1], SamplePoint::new(1.0, 0.0));
    }

    #[test]
    fn test_resample_errors() {
        assert_eq!(
            resample_path(&[SamplePoint::new(1.0, 1.0)], 10),
            Err(PathError::TooFewPoints { got: 1, need: 2 })
        );
        assert_eq!(
            resample_path(&[SamplePoint::ORIGIN; 5], 10),
            Err(PathError::ZeroLength)
        );
        assert_eq!(
            resample_path(&unit_square(), 0),
            Err(PathError::InvalidTarget(0))
        );
    }

    #[test]
    fn test_center_path() {
        let centered = center_path(&unit_square(), SamplePoint::ORIGIN);
        assert_eq!(centered[0], SamplePoint::new(-0.5, -0.5));
        assert_eq!(centered[2], SamplePoint::new(0.5, 0.5));
        assert!(center_path(&[], SamplePoint::ORIGIN).is_empty());
    }

    #[test]
    fn test_prepare_path() {
        let prepared = prepare_path(&unit_square(), 16, true).unwrap();
        assert_eq!(prepared.len(), 16);

        let (sx, sy) = prepared.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
        assert!(sx.abs() < 1e-9 && sy.abs() < 1e-9);
    }
}

//! Trail of recently traced points
//!
//! A fixed-capacity circular buffer. The newest point overwrites the
//! oldest once the buffer is full, which gives the trail its bounded,
//! fading tail.

use crate::fourier::SamplePoint;

/// Circular buffer of traced world-space points
#[derive(Clone, Debug)]
pub struct Trail {
    points: Vec<SamplePoint>,
    /// Next slot to overwrite
    write_pos: usize,
    /// Number of valid points (saturates at capacity)
    len: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: vec![SamplePoint::ORIGIN; capacity],
            write_pos: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, point: SamplePoint) {
        let capacity = self.points.len();
        let pos = self.write_pos;
        self.points[pos] = point;
        self.write_pos = (pos + 1) % capacity;
        self.len = (self.len + 1).min(capacity);
    }

    /// Points in chronological order (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        let capacity = self.points.len();
        let start = (self.write_pos + capacity - self.len) % capacity;
        (0..self.len).map(move |i| self.points[(start + i) % capacity])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Change the capacity, keeping the most recent points
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity.max(1) == self.capacity() {
            return;
        }
        let recent: Vec<SamplePoint> = self.iter().collect();
        let keep = recent.len().min(capacity.max(1));

        *self = Self::new(capacity);
        for point in &recent[recent.len() - keep..] {
            self.push(*point);
        }
    }

    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64) -> SamplePoint {
        SamplePoint::new(x, 0.0)
    }

    #[test]
    fn test_push_and_iter() {
        let mut trail = Trail::new(4);
        trail.push(p(1.0));
        trail.push(p(2.0));
        trail.push(p(3.0));

        let xs: Vec<f64> = trail.iter().map(|q| q.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_circular_wrap() {
        let mut trail = Trail::new(3);
        for x in 1..=4 {
            trail.push(p(x as f64));
        }

        let xs: Vec<f64> = trail.iter().map(|q| q.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn test_set_capacity_keeps_recent() {
        let mut trail = Trail::new(5);
        for x in 1..=5 {
            trail.push(p(x as f64));
        }
        trail.set_capacity(2);

        let xs: Vec<f64> = trail.iter().map(|q| q.x).collect();
        assert_eq!(xs, vec![4.0, 5.0]);
        assert_eq!(trail.capacity(), 2);

        trail.set_capacity(10);
        trail.push(p(6.0));
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut trail = Trail::new(3);
        trail.push(p(1.0));
        trail.clear();
        assert_eq!(trail.len(), 0);
        assert_eq!(trail.iter().count(), 0);
    }
}

//! QPSK constellation (2 bits per symbol)
//!
//! Points sit on the unit circle at odd multiples of 45°:
//! pt0 → 45°  ("11")
//! pt1 → 135° ("01")
//! pt2 → 225° ("00")
//! pt3 → 315° ("10")

use num_complex::Complex64;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constellation {
    points: [Complex64; 4],
}

impl Constellation {
    pub fn qpsk() -> Self {
        let points = std::array::from_fn(|k| {
            let arg = PI * (2 * k + 1) as f64 / 4.0;
            Complex64::new(arg.cos(), arg.sin())
        });
        Self { points }
    }

    /// Map one bit pair, first bit is the more significant one.
    #[inline]
    pub fn map(&self, first: bool, second: bool) -> Complex64 {
        match (first, second) {
            (true, true) => self.points[0],
            (false, true) => self.points[1],
            (false, false) => self.points[2],
            (true, false) => self.points[3],
        }
    }

    pub fn points(&self) -> &[Complex64; 4] {
        &self.points
    }
}

impl Default for Constellation {
    fn default() -> Self {
        Self::qpsk()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_on_unit_circle() {
        let constellation = Constellation::qpsk();
        for (k, point) in constellation.points().iter().enumerate() {
            assert!(
                (point.norm() - 1.0).abs() < 1e-12,
                "Point {} magnitude: {}",
                k,
                point.norm()
            );
        }
    }

    #[test]
    fn test_points_spaced_quarter_turn() {
        let points = *Constellation::qpsk().points();
        for k in 0..4 {
            let next = points[(k + 1) % 4];
            // Rotating by +90° takes each point to the next one
            let rotated = points[k] * Complex64::new(0.0, 1.0);
            assert!(
                (rotated - next).norm() < 1e-12,
                "pt{} rotated {:?} != pt{} {:?}",
                k,
                rotated,
                (k + 1) % 4,
                next
            );
        }
        assert!((points[0].arg() - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_bit_pair_mapping() {
        let constellation = Constellation::qpsk();
        let points = constellation.points();
        assert_eq!(constellation.map(true, true), points[0]);
        assert_eq!(constellation.map(false, true), points[1]);
        assert_eq!(constellation.map(false, false), points[2]);
        assert_eq!(constellation.map(true, false), points[3]);
    }

    #[test]
    fn test_quadrants() {
        let c = Constellation::qpsk();
        let p = c.map(true, true);
        assert!(p.re > 0.0 && p.im > 0.0);
        let p = c.map(false, true);
        assert!(p.re < 0.0 && p.im > 0.0);
        let p = c.map(false, false);
        assert!(p.re < 0.0 && p.im < 0.0);
        let p = c.map(true, false);
        assert!(p.re > 0.0 && p.im < 0.0);
    }
}

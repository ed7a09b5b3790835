//! Straight-line distance between positioned things.

use crate::traits::Positioned;

/// Euclidean distance between two points.
pub fn distance<A, B>(a: &A, b: &B) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Cable length along a run of points, summing consecutive segments.
///
/// Zero for fewer than two points.
pub fn chain_length<P: Positioned>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pole;

    #[test]
    fn test_same_point_is_zero() {
        let p = Pole::new("a", 36.1, -115.1);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_known_distance() {
        assert_eq!(distance(&(0.0, 0.0), &(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_symmetric_and_non_negative() {
        let points = [(0.0, 0.0), (-2.5, 7.0), (13.0, -1.25), (1e6, 1e-6)];
        for a in &points {
            for b in &points {
                let ab = distance(a, b);
                assert_eq!(ab, distance(b, a));
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn test_mixed_types() {
        let pole = Pole::new("a", 1.0, 1.0);
        assert_eq!(distance(&pole, &(1.0, 3.0)), 2.0);
    }

    #[test]
    fn test_chain_length() {
        let points = [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)];
        assert_eq!(chain_length(&points), 7.0);
        assert_eq!(chain_length(&points[..1]), 0.0);
        assert_eq!(chain_length::<(f64, f64)>(&[]), 0.0);
    }
}

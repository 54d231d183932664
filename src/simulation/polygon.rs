//! Polygon shapes for vehicles
//!
//! A shape is a fixed list of offsets around the vehicle centre. Instances of
//! the same vehicle kind share one shape; only position and rotation differ.

use anyhow::{bail, Result};
use std::sync::Arc;

use super::types::Position;

/// An immutable polygon template in vehicle-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Arc<[Position]>,
}

impl Polygon {
    /// Build a polygon from local offsets
    ///
    /// Fails when fewer than three points are given or any coordinate is
    /// not finite, since containment is meaningless for such shapes.
    pub fn new(points: &[Position]) -> Result<Self> {
        if points.len() < 3 {
            bail!("Polygon needs at least 3 points, got {}", points.len());
        }
        if let Some(bad) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            bail!("Polygon point {:?} is not finite", bad);
        }
        Ok(Self {
            points: points.into(),
        })
    }

    /// Build a polygon from `(x, y)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let points: Vec<Position> = pairs.iter().map(|&(x, y)| Position::new(x, y)).collect();
        Self::new(&points)
    }

    pub fn local_points(&self) -> &[Position] {
        &self.points
    }

    /// Rotate every offset by `rotation` degrees, then translate by `position`
    pub fn transformed_points(&self, position: Position, rotation: f64) -> Vec<Position> {
        self.points
            .iter()
            .map(|p| {
                let r = p.rotated(rotation);
                Position::new(r.x + position.x, r.y + position.y)
            })
            .collect()
    }

    /// Point containment against the polygon placed at `position`/`rotation`
    pub fn contains(&self, position: Position, rotation: f64, point: Position) -> bool {
        contains_point(&self.transformed_points(position, rotation), point)
    }
}

/// Crossing-number test of `point` against a world-space vertex ring
///
/// Casts a ray from the point toward negative y and counts edge crossings.
/// Rings with fewer than three vertices never contain anything.
pub fn contains_point(ring: &[Position], point: Position) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut crossings = 0usize;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];

        let spans = (a.x < point.x && point.x <= b.x) || (b.x < point.x && point.x <= a.x);
        if spans {
            let edge_y = a.y + (b.y - a.y) / (b.x - a.x) * (point.x - a.x);
            if point.y > edge_y {
                crossings += 1;
            }
        }
    }

    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_pairs(&[(-5.0, 5.0), (5.0, 5.0), (5.0, -5.0), (-5.0, -5.0)]).unwrap()
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(Polygon::from_pairs(&[]).is_err());
        assert!(Polygon::from_pairs(&[(0.0, 0.0), (1.0, 1.0)]).is_err());
        assert!(Polygon::from_pairs(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)]).is_err());
        assert!(Polygon::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]).is_ok());
    }

    #[test]
    fn transform_translates_without_rotation() {
        let points = square().transformed_points(Position::new(100.0, 50.0), 0.0);
        assert_eq!(points[0], Position::new(95.0, 55.0));
        assert_eq!(points[2], Position::new(105.0, 45.0));
    }

    #[test]
    fn transform_rotates_quarter_turn() {
        let shape = Polygon::from_pairs(&[(10.0, 0.0), (0.0, 1.0), (0.0, -1.0)]).unwrap();
        let points = shape.transformed_points(Position::default(), 90.0);
        assert!((points[0].x).abs() < 1e-9);
        assert!((points[0].y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn contains_centre_and_rejects_outside() {
        let shape = square();
        let at = Position::new(20.0, 20.0);
        assert!(shape.contains(at, 0.0, Position::new(20.0, 20.0)));
        assert!(shape.contains(at, 0.0, Position::new(24.0, 16.0)));
        assert!(!shape.contains(at, 0.0, Position::new(26.0, 20.0)));
        assert!(!shape.contains(at, 0.0, Position::new(20.0, 30.0)));
    }

    #[test]
    fn contains_follows_rotation() {
        // Thin bar along y; a quarter turn lays it along x
        let bar = Polygon::from_pairs(&[(-1.0, 20.0), (-1.0, -20.0), (1.0, -20.0), (1.0, 20.0)])
            .unwrap();
        let origin = Position::default();
        assert!(bar.contains(origin, 0.0, Position::new(0.0, 15.0)));
        assert!(!bar.contains(origin, 0.0, Position::new(15.0, 0.0)));
        assert!(bar.contains(origin, 90.0, Position::new(15.0, 0.0)));
        assert!(!bar.contains(origin, 90.0, Position::new(0.0, 15.0)));
    }

    #[test]
    fn concave_notch_is_outside() {
        let u_shape = Polygon::from_pairs(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ])
        .unwrap();
        let origin = Position::default();
        assert!(!u_shape.contains(origin, 0.0, Position::new(15.0, 20.0)));
        assert!(u_shape.contains(origin, 0.0, Position::new(5.0, 20.0)));
        assert!(u_shape.contains(origin, 0.0, Position::new(15.0, 5.0)));
    }

    #[test]
    fn short_ring_contains_nothing() {
        let ring = [Position::new(0.0, 0.0), Position::new(10.0, 10.0)];
        assert!(!contains_point(&ring, Position::new(5.0, 5.0)));
    }
}

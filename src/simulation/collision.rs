//! Pairwise vehicle collision test
//!
//! Two vehicles collide when a vertex of either outline lies inside the
//! other. Overlaps where no vertex crosses (two thin bars laid in a plus
//! sign) are not reported.

use super::polygon::contains_point;
use super::types::Position;
use super::vehicle::Vehicle;

/// Whether `a` and `b` overlap by vertex containment
pub fn collides(a: &Vehicle, b: &Vehicle) -> bool {
    outlines_overlap(&a.points(), &b.points())
}

/// Whether a vertex of either world-space outline lies inside the other
pub fn outlines_overlap(a: &[Position], b: &[Position]) -> bool {
    b.iter().any(|p| contains_point(a, *p)) || a.iter().any(|p| contains_point(b, *p))
}

/// All unordered index pairs `(i, j)` with `i < j` whose vehicles collide
pub fn colliding_pairs(vehicles: &[Vehicle]) -> Vec<(usize, usize)> {
    let outlines: Vec<_> = vehicles.iter().map(Vehicle::points).collect();
    let mut pairs = Vec::new();

    for i in 0..outlines.len() {
        for j in (i + 1)..outlines.len() {
            if outlines_overlap(&outlines[i], &outlines[j]) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

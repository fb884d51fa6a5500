//! Planar point predicates used by label association

use crate::types::Vector2;

/// Point-in-ring test by ray casting (even-odd rule).
///
/// The ring is treated as implicitly closed. Handles concave rings; points
/// exactly on an edge may land on either side, which is acceptable for
/// label anchors that never sit on boundaries by construction.
pub fn point_in_ring(point: Vector2, ring: &[Vector2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Mean of the ring vertices.
///
/// Not the area centroid, but a stable anchor for nearest-polygon distance
/// ranking, matching how survey sheets place their labels.
pub fn vertex_centroid(ring: &[Vector2]) -> Vector2 {
    if ring.is_empty() {
        return Vector2::ZERO;
    }
    let sum = ring
        .iter()
        .fold(Vector2::ZERO, |acc, v| acc + *v);
    sum / (ring.len() as f64)
}

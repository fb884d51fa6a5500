//! Geometry normalization
//!
//! Converts heterogeneous raw entities into [`NormalizedPolygon`] rings.
//! Rings hold at least 3 distinct vertices, the first vertex is not
//! repeated at the end, and closure is implicit. Degenerate inputs
//! normalize to `None` and are reported by the pipeline, never propagated.

pub mod metrics;
pub mod predicates;

pub use metrics::Metrics;

use crate::config::AnalysisConfig;
use crate::entities::{EntityGeometry, EntityKind, RawEntity};
use crate::types::{BoundingBox2D, Color, EntityId, Vector2};
use std::f64::consts::TAU;

/// Two vertices closer than this are treated as coincident
const COINCIDENT_EPS: f64 = 1e-9;

/// Rings whose absolute signed area falls below this are degenerate
const DEGENERATE_AREA_EPS: f64 = 1e-9;

/// A canonical polygon boundary derived from one raw entity
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPolygon {
    /// Id of the source entity
    pub id: EntityId,
    /// Layer name carried over from the source
    pub layer: String,
    /// Resolved color carried over from the source
    pub color: Color,
    /// Closed ring; first vertex is not repeated at the end
    pub ring: Vec<Vector2>,
    /// Kind of the source entity
    pub source_kind: EntityKind,
    /// Radius of the source circle, present only for circle sources so
    /// metrics can use the closed-form area and circumference
    pub circle_radius: Option<f64>,
}

impl NormalizedPolygon {
    /// Number of ring vertices
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// Axis-aligned bounds of the ring
    pub fn bounding_box(&self) -> BoundingBox2D {
        // A normalized ring always has >= 3 vertices
        BoundingBox2D::from_points(&self.ring).expect("normalized ring is never empty")
    }

    /// Mean of the ring vertices
    pub fn centroid(&self) -> Vector2 {
        predicates::vertex_centroid(&self.ring)
    }
}

/// Normalize a raw entity into a polygon boundary.
///
/// Circles tessellate into `config.circle_segments` ring points with the
/// radius preserved for exact metrics. Polylines use the vertex list as
/// given; a trailing vertex coincident with the first is dropped so closure
/// stays implicit. Lines, arcs and text-bearing kinds are not polygonal
/// (see [`open_path`] for the boundary-segment view) and return `None`, as
/// do degenerate inputs with fewer than 3 distinct vertices or zero area.
pub fn normalize(entity: &RawEntity, config: &AnalysisConfig) -> Option<NormalizedPolygon> {
    let (ring, circle_radius) = match &entity.geometry {
        EntityGeometry::Circle { center, radius } => {
            if !(radius.is_finite() && *radius > 0.0) {
                return None;
            }
            (
                tessellate_circle(*center, *radius, config.circle_segments),
                Some(*radius),
            )
        }
        EntityGeometry::Polyline { vertices, .. } => (dedup_ring(vertices), None),
        _ => return None,
    };

    if ring.len() < 3 {
        return None;
    }
    if metrics::signed_area(&ring).abs() < DEGENERATE_AREA_EPS {
        return None;
    }

    Some(NormalizedPolygon {
        id: entity.id,
        layer: entity.layer.clone(),
        color: entity.color,
        ring,
        source_kind: entity.kind(),
        circle_radius,
    })
}

/// The open point chain of a boundary-segment entity.
///
/// Lines and arcs never form polygons on their own; callers merging
/// boundary segments into a polyline-equivalent take the chains from here,
/// concatenate them, and re-submit the result as a closed polyline. For a
/// polyline marked closed by the source the first vertex is appended so the
/// chain ends where it starts.
pub fn open_path(entity: &RawEntity, config: &AnalysisConfig) -> Option<Vec<Vector2>> {
    match &entity.geometry {
        EntityGeometry::Line { start, end } => {
            if start.distance(end) < COINCIDENT_EPS {
                return None;
            }
            Some(vec![*start, *end])
        }
        EntityGeometry::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        } => {
            if !(radius.is_finite() && *radius > 0.0) {
                return None;
            }
            Some(tessellate_arc(
                *center,
                *radius,
                *start_angle,
                *end_angle,
                config.arc_segments,
            ))
        }
        EntityGeometry::Polyline { vertices, closed } => {
            let mut path = dedup_consecutive(vertices);
            if path.len() < 2 {
                return None;
            }
            if *closed && path.first() != path.last() {
                path.push(path[0]);
            }
            Some(path)
        }
        _ => None,
    }
}

/// Evenly spaced ring points on a circle, counter-clockwise from angle 0
fn tessellate_circle(center: Vector2, radius: f64, segments: usize) -> Vec<Vector2> {
    (0..segments)
        .map(|i| {
            let angle = TAU * (i as f64) / (segments as f64);
            point_on_circle(center, radius, angle)
        })
        .collect()
}

/// Arc points from start to end angle, counter-clockwise
fn tessellate_arc(
    center: Vector2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
) -> Vec<Vector2> {
    let mut sweep = end_angle - start_angle;
    if sweep <= 0.0 {
        sweep += TAU;
    }
    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * (i as f64) / (segments as f64);
            point_on_circle(center, radius, angle)
        })
        .collect()
}

fn point_on_circle(center: Vector2, radius: f64, angle: f64) -> Vector2 {
    Vector2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Drop consecutive coincident vertices
fn dedup_consecutive(vertices: &[Vector2]) -> Vec<Vector2> {
    let mut out: Vec<Vector2> = Vec::with_capacity(vertices.len());
    for v in vertices {
        match out.last() {
            Some(prev) if prev.distance(v) < COINCIDENT_EPS => {}
            _ => out.push(*v),
        }
    }
    out
}

/// Dedup a vertex list into ring form: consecutive duplicates removed and a
/// trailing vertex coincident with the first dropped
fn dedup_ring(vertices: &[Vector2]) -> Vec<Vector2> {
    let mut ring = dedup_consecutive(vertices);
    if ring.len() > 1 && ring[0].distance(&ring[ring.len() - 1]) < COINCIDENT_EPS {
        ring.pop();
    }
    ring
}

//! Shared builders for synthetic drawings.
//!
//! The canonical survey sheet used across the integration suites: three
//! parcels whose classification, labels and reconciliation outcomes are
//! known in advance. Any new pipeline behavior worth an end-to-end test
//! should extend these builders rather than inventing a new sheet.

#![allow(dead_code)]

use plot_tools::{Color, EntityId, RawEntity, Vector2};

/// Axis-aligned rectangle as a closed polyline
pub fn rect(
    id: u64,
    layer: &str,
    color: Color,
    origin: Vector2,
    width: f64,
    height: f64,
) -> RawEntity {
    RawEntity::polyline(
        EntityId::new(id),
        layer,
        color,
        vec![
            origin,
            origin + Vector2::new(width, 0.0),
            origin + Vector2::new(width, height),
            origin + Vector2::new(0.0, height),
        ],
        true,
    )
}

/// Annotation text at a point
pub fn text(id: u64, position: Vector2, content: &str) -> RawEntity {
    RawEntity::text(EntityId::new(id), "ANNOT", Color::ByLayer, position, content)
}

/// The reference sheet: an original 5x5 parcel (raw area 25), a final 5x4
/// parcel (raw area 20) and a 1x5 parcel on a pending layer (raw area 5),
/// with matching plot-number labels on the first two.
///
/// With the default scale factor of 20 the original-minus-final area delta
/// is (25 - 20) * 400 = 2000 sq m.
pub fn reference_sheet() -> Vec<RawEntity> {
    vec![
        rect(1, "ZoneA", Color::GREEN, Vector2::new(0.0, 0.0), 5.0, 5.0),
        rect(2, "ZoneA", Color::RED, Vector2::new(10.0, 0.0), 5.0, 4.0),
        rect(3, "Pending1", Color::ByLayer, Vector2::new(20.0, 0.0), 1.0, 5.0),
        text(4, Vector2::new(2.5, 2.5), "1"),
        text(5, Vector2::new(12.5, 2.0), "1"),
    ]
}

//! Input entity model
//!
//! The drawing parser hands over a flat, ordered sequence of [`RawEntity`]
//! records. Only the entity kinds relevant to plot extraction are modeled;
//! everything else is filtered out upstream. Geometry payloads are a closed
//! tagged variant, so the normalizer dispatches over [`EntityGeometry`]
//! instead of probing attributes.

use crate::types::{Color, EntityId, Vector2};
use std::fmt;

/// Discriminant for the supported entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Circle,
    Arc,
    Polyline,
    Text,
    MText,
    Insert,
}

impl EntityKind {
    /// DXF-style type name
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Line => "LINE",
            EntityKind::Circle => "CIRCLE",
            EntityKind::Arc => "ARC",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Text => "TEXT",
            EntityKind::MText => "MTEXT",
            EntityKind::Insert => "INSERT",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific geometry payload of a raw entity
#[derive(Debug, Clone, PartialEq)]
pub enum EntityGeometry {
    /// A straight segment between two points
    Line { start: Vector2, end: Vector2 },
    /// A full circle
    Circle { center: Vector2, radius: f64 },
    /// A circular arc, counter-clockwise from start to end angle (radians)
    Arc {
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// A vertex chain, optionally marked closed by the source
    Polyline { vertices: Vec<Vector2>, closed: bool },
    /// Single-line text at an anchor point
    Text { anchor: Vector2, content: String },
    /// Multi-line text at an anchor point
    MText { anchor: Vector2, content: String },
    /// A block reference placed at an anchor point
    Insert { anchor: Vector2, block_name: String },
}

/// A raw drawing entity as produced by the external parser
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntity {
    /// Unique id assigned by the parser
    pub id: EntityId,
    /// Layer name
    pub layer: String,
    /// Resolved entity color
    pub color: Color,
    /// Kind-specific geometry
    pub geometry: EntityGeometry,
}

impl RawEntity {
    /// Create a raw entity from its parts
    pub fn new(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        geometry: EntityGeometry,
    ) -> Self {
        Self {
            id,
            layer: layer.into(),
            color,
            geometry,
        }
    }

    /// Create a line entity
    pub fn line(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        start: Vector2,
        end: Vector2,
    ) -> Self {
        Self::new(id, layer, color, EntityGeometry::Line { start, end })
    }

    /// Create a circle entity
    pub fn circle(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        center: Vector2,
        radius: f64,
    ) -> Self {
        Self::new(id, layer, color, EntityGeometry::Circle { center, radius })
    }

    /// Create an arc entity (angles in radians, counter-clockwise sweep)
    pub fn arc(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        center: Vector2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self::new(
            id,
            layer,
            color,
            EntityGeometry::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
        )
    }

    /// Create a polyline entity
    pub fn polyline(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        vertices: Vec<Vector2>,
        closed: bool,
    ) -> Self {
        Self::new(id, layer, color, EntityGeometry::Polyline { vertices, closed })
    }

    /// Create a single-line text entity
    pub fn text(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        anchor: Vector2,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            layer,
            color,
            EntityGeometry::Text {
                anchor,
                content: content.into(),
            },
        )
    }

    /// Create a multi-line text entity
    pub fn mtext(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        anchor: Vector2,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            layer,
            color,
            EntityGeometry::MText {
                anchor,
                content: content.into(),
            },
        )
    }

    /// Create a block-reference entity
    pub fn insert(
        id: EntityId,
        layer: impl Into<String>,
        color: Color,
        anchor: Vector2,
        block_name: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            layer,
            color,
            EntityGeometry::Insert {
                anchor,
                block_name: block_name.into(),
            },
        )
    }

    /// The kind discriminant of this entity
    pub fn kind(&self) -> EntityKind {
        match self.geometry {
            EntityGeometry::Line { .. } => EntityKind::Line,
            EntityGeometry::Circle { .. } => EntityKind::Circle,
            EntityGeometry::Arc { .. } => EntityKind::Arc,
            EntityGeometry::Polyline { .. } => EntityKind::Polyline,
            EntityGeometry::Text { .. } => EntityKind::Text,
            EntityGeometry::MText { .. } => EntityKind::MText,
            EntityGeometry::Insert { .. } => EntityKind::Insert,
        }
    }

    /// Anchor point for text-bearing kinds (Text, MText, Insert)
    pub fn anchor(&self) -> Option<Vector2> {
        match &self.geometry {
            EntityGeometry::Text { anchor, .. }
            | EntityGeometry::MText { anchor, .. }
            | EntityGeometry::Insert { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// Text content for text-bearing kinds; the block name for inserts
    pub fn text_content(&self) -> Option<&str> {
        match &self.geometry {
            EntityGeometry::Text { content, .. } | EntityGeometry::MText { content, .. } => {
                Some(content)
            }
            EntityGeometry::Insert { block_name, .. } => Some(block_name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        let e = RawEntity::circle(
            EntityId::new(1),
            "PLOTS",
            Color::GREEN,
            Vector2::ZERO,
            5.0,
        );
        assert_eq!(e.kind(), EntityKind::Circle);
        assert_eq!(e.kind().as_str(), "CIRCLE");
        assert!(e.anchor().is_none());
        assert!(e.text_content().is_none());
    }

    #[test]
    fn test_text_accessors() {
        let t = RawEntity::text(
            EntityId::new(2),
            "ANNOT",
            Color::ByLayer,
            Vector2::new(3.0, 4.0),
            "30/A",
        );
        assert_eq!(t.anchor(), Some(Vector2::new(3.0, 4.0)));
        assert_eq!(t.text_content(), Some("30/A"));
    }

    #[test]
    fn test_insert_block_name_is_text() {
        let i = RawEntity::insert(
            EntityId::new(3),
            "BLOCKS",
            Color::ByBlock,
            Vector2::ZERO,
            "R.S. 12",
        );
        assert_eq!(i.kind(), EntityKind::Insert);
        assert_eq!(i.text_content(), Some("R.S. 12"));
    }
}

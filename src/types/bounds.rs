//! 2D bounding box
//!
//! Used as a cheap pre-filter before the exact point-in-ring test during
//! label association.

use super::Vector2;
use std::fmt;

/// Axis-aligned 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox2D {
            min: *first,
            max: *first,
        };
        for point in points.iter().skip(1) {
            bbox.expand_to_include(*point);
        }
        Some(bbox)
    }

    /// Width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox2D[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            Vector2::new(1.0, 5.0),
            Vector2::new(-2.0, 3.0),
            Vector2::new(4.0, 0.0),
        ];
        let bbox = BoundingBox2D::from_points(&points).unwrap();
        assert_eq!(bbox.min, Vector2::new(-2.0, 0.0));
        assert_eq!(bbox.max, Vector2::new(4.0, 5.0));
        assert!(BoundingBox2D::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox2D::new(Vector2::ZERO, Vector2::new(10.0, 10.0));
        assert!(bbox.contains(Vector2::new(5.0, 5.0)));
        assert!(bbox.contains(Vector2::new(0.0, 10.0)));
        assert!(!bbox.contains(Vector2::new(10.1, 5.0)));
    }

    #[test]
    fn test_dimensions() {
        let bbox = BoundingBox2D::new(Vector2::new(1.0, 2.0), Vector2::new(4.0, 8.0));
        assert_eq!(bbox.width(), 3.0);
        assert_eq!(bbox.height(), 6.0);
        assert_eq!(bbox.center(), Vector2::new(2.5, 5.0));
    }
}

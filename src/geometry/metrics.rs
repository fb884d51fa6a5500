//! Area and perimeter computation
//!
//! Raw-unit metrics come from the shoelace formula and the closed-ring
//! perimeter sum; circle sources use the exact closed forms instead of
//! their tessellation. Unit conversion applies a caller-supplied scale
//! factor (drawing units per meter) and fixed constants.

use super::NormalizedPolygon;
use crate::error::{PlotError, Result};
use crate::types::Vector2;
use std::f64::consts::PI;

/// Square yards per square meter
pub const SQYD_PER_SQM: f64 = 1.19599;
/// Yards per meter
pub const YD_PER_M: f64 = 1.09361;

/// Area and perimeter of one polygon in raw and converted units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Area in squared drawing units
    pub area_raw: f64,
    /// Perimeter in drawing units
    pub perimeter_raw: f64,
    /// Area in square meters
    pub area_sqm: f64,
    /// Area in square yards
    pub area_sqyd: f64,
    /// Perimeter in meters
    pub perimeter_m: f64,
    /// Perimeter in yards
    pub perimeter_yd: f64,
}

impl Metrics {
    /// Convert raw-unit measurements with the given scale factor.
    ///
    /// The scale factor is drawing units per meter; a non-positive or
    /// non-finite value is a configuration error.
    pub fn from_raw(area_raw: f64, perimeter_raw: f64, scale_factor: f64) -> Result<Self> {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(PlotError::InvalidScaleFactor(scale_factor));
        }
        let area_sqm = area_raw * scale_factor * scale_factor;
        let perimeter_m = perimeter_raw * scale_factor;
        Ok(Metrics {
            area_raw,
            perimeter_raw,
            area_sqm,
            area_sqyd: area_sqm * SQYD_PER_SQM,
            perimeter_m,
            perimeter_yd: perimeter_m * YD_PER_M,
        })
    }
}

/// Raw area and perimeter of a normalized polygon.
///
/// Circle sources use `π·r²` and `2π·r` exactly; the tessellated ring is an
/// approximation kept for containment tests and rendering only.
pub fn compute(polygon: &NormalizedPolygon) -> (f64, f64) {
    if let Some(radius) = polygon.circle_radius {
        (PI * radius * radius, 2.0 * PI * radius)
    } else {
        (signed_area(&polygon.ring).abs(), ring_perimeter(&polygon.ring))
    }
}

/// Signed shoelace area of a ring; positive for counter-clockwise winding.
///
/// Accumulates with Neumaier compensation so cancellation on long rings far
/// from the origin does not eat the result.
pub fn signed_area(ring: &[Vector2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        let term = ring[i].cross(&ring[j]);
        let t = sum + term;
        if sum.abs() >= term.abs() {
            compensation += (sum - t) + term;
        } else {
            compensation += (term - t) + sum;
        }
        sum = t;
    }
    0.5 * (sum + compensation)
}

/// Perimeter of a ring treated as closed
pub fn ring_perimeter(ring: &[Vector2]) -> f64 {
    if ring.len() < 2 {
        return 0.0;
    }
    let mut perimeter = 0.0;
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        perimeter += ring[i].distance(&ring[j]);
    }
    perimeter
}

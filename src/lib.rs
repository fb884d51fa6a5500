//! # plot-tools-rs
//!
//! Geometric plot extraction, classification and survey reconciliation for
//! CAD drawings.
//!
//! The crate consumes the entity stream of an external drawing parser and
//! turns it into a structured survey report: boundaries become canonical
//! polygons, polygons get areas and perimeters in several unit systems,
//! color and layer heuristics sort them into survey categories, nearby text
//! annotations are parsed into plot and survey numbers and attached to the
//! polygon they annotate, and the original survey set is reconciled against
//! the final allotment.
//!
//! ## Quick Start
//!
//! ```rust
//! use plot_tools::{analyze, AnalysisConfig, Color, EntityId, RawEntity, Vector2};
//!
//! let entities = vec![
//!     RawEntity::polyline(
//!         EntityId::new(1),
//!         "ZoneA",
//!         Color::GREEN,
//!         vec![
//!             Vector2::new(0.0, 0.0),
//!             Vector2::new(5.0, 0.0),
//!             Vector2::new(5.0, 5.0),
//!             Vector2::new(0.0, 5.0),
//!         ],
//!         true,
//!     ),
//!     RawEntity::text(EntityId::new(2), "ANNOT", Color::ByLayer, Vector2::new(2.5, 2.5), "30/A"),
//! ];
//!
//! let report = analyze(&entities, &AnalysisConfig::default())?;
//! assert_eq!(report.plots.len(), 1);
//! assert_eq!(report.plots[0].plot_number.as_ref().unwrap().value, "30/A");
//! # Ok::<(), plot_tools::PlotError>(())
//! ```
//!
//! ## Pipeline
//!
//! Data flows strictly downward, one pure stage at a time:
//!
//! - raw entities → normalized polygons ([`geometry`])
//! - polygons → metrics ([`geometry::metrics`]) and categories ([`classify`])
//! - text annotations → labels attached to polygons ([`labels`])
//! - original vs. final sets → reconciliation ([`reconcile`])
//! - everything → [`PlotReport`] ([`report`])
//!
//! Only configuration errors abort a run. Degenerate geometry, orphaned or
//! duplicate labels and every tie-break taken are collected as
//! [`Diagnostic`] items alongside the successful results.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod reconcile;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{PlotError, Result};
pub use types::{BoundingBox2D, Color, EntityId, Vector2};

// Re-export the entity model
pub use entities::{EntityGeometry, EntityKind, RawEntity};

// Re-export pipeline stages
pub use classify::{classify, Category};
pub use config::AnalysisConfig;
pub use diagnostics::{Diagnostic, DiagnosticCollection, DiagnosticKind};
pub use geometry::{normalize, open_path, Metrics, NormalizedPolygon};
pub use labels::{match_labels, parse_label, LabelAssignment, LabelKind, PlotLabel, TextAnchor};
pub use reconcile::{reconcile, ReconciliationResult};
pub use report::{analyze, Plot, PlotReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config_round_trip() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        let report = analyze(&[], &config).unwrap();
        assert!(report.plots.is_empty());
    }
}

//! Report model and the analysis pipeline
//!
//! `analyze` runs the full transformation: normalize and measure every
//! entity (in parallel, merged back in input order), classify, parse and
//! associate annotation labels, then reconcile the Original set against the
//! Final set. The result is an in-memory [`PlotReport`] for an external
//! renderer or exporter; nothing is written anywhere.

use crate::classify::{classify, Category};
use crate::config::AnalysisConfig;
use crate::diagnostics::{Diagnostic, DiagnosticCollection, DiagnosticKind};
use crate::entities::{EntityKind, RawEntity};
use crate::geometry::{self, metrics, Metrics, NormalizedPolygon};
use crate::labels::{match_labels, parse_label, LabelKind, PlotLabel, TextAnchor};
use crate::reconcile::{reconcile, ReconciliationResult};
use crate::types::EntityId;
use crate::Result;
use rayon::prelude::*;

/// One reportable parcel: a classified polygon with metrics and labels
#[derive(Debug, Clone)]
pub struct Plot {
    /// Back-reference to the source polygon
    pub polygon_id: EntityId,
    /// Layer the boundary was drawn on
    pub layer: String,
    /// Kind of the source entity
    pub source_kind: EntityKind,
    /// Assigned survey category
    pub category: Category,
    /// Area and perimeter in raw and converted units
    pub metrics: Metrics,
    /// Plot number, when one was associated
    pub plot_number: Option<PlotLabel>,
    /// Survey number, when one was associated
    pub survey_number: Option<PlotLabel>,
}

/// The assembled analysis result
#[derive(Debug, Clone)]
pub struct PlotReport {
    /// All plots in stable input order
    pub plots: Vec<Plot>,
    /// Original-versus-final comparison
    pub reconciliation: ReconciliationResult,
    /// Everything non-fatal the run encountered
    pub diagnostics: Vec<Diagnostic>,
}

impl PlotReport {
    /// Plots of one category, input order preserved
    pub fn plots_in(&self, category: Category) -> impl Iterator<Item = &Plot> + '_ {
        self.plots.iter().filter(move |p| p.category == category)
    }

    /// Number of plots in one category
    pub fn count(&self, category: Category) -> usize {
        self.plots_in(category).count()
    }

    /// Total area of one category in square meters
    pub fn total_area_sqm(&self, category: Category) -> f64 {
        self.plots_in(category).map(|p| p.metrics.area_sqm).sum()
    }

    /// Total perimeter of one category in meters
    pub fn total_perimeter_m(&self, category: Category) -> f64 {
        self.plots_in(category).map(|p| p.metrics.perimeter_m).sum()
    }
}

/// Per-entity outcome of the parallel normalize-and-measure stage
enum Staged {
    Polygon {
        polygon: NormalizedPolygon,
        area_raw: f64,
        perimeter_raw: f64,
    },
    Degenerate {
        id: EntityId,
        kind: EntityKind,
    },
    Skipped,
}

/// Run the full analysis pipeline over a sequence of raw entities.
///
/// Fails only on configuration errors; every per-entity problem is
/// recovered locally and reported through `PlotReport::diagnostics`.
pub fn analyze(entities: &[RawEntity], config: &AnalysisConfig) -> Result<PlotReport> {
    config.validate()?;
    let mut diagnostics = DiagnosticCollection::new();

    // Stage 1: normalize + raw metrics. Entities are independent here, so
    // the work shards freely; collect() keeps input order for the merge.
    let staged: Vec<Staged> = entities
        .par_iter()
        .map(|entity| match geometry::normalize(entity, config) {
            Some(polygon) => {
                let (area_raw, perimeter_raw) = metrics::compute(&polygon);
                Staged::Polygon {
                    polygon,
                    area_raw,
                    perimeter_raw,
                }
            }
            None if matches!(entity.kind(), EntityKind::Circle | EntityKind::Polyline) => {
                Staged::Degenerate {
                    id: entity.id,
                    kind: entity.kind(),
                }
            }
            None => Staged::Skipped,
        })
        .collect();

    let mut polygons: Vec<NormalizedPolygon> = Vec::new();
    let mut measured: Vec<Metrics> = Vec::new();
    for outcome in staged {
        match outcome {
            Staged::Polygon {
                polygon,
                area_raw,
                perimeter_raw,
            } => {
                measured.push(Metrics::from_raw(area_raw, perimeter_raw, config.scale_factor)?);
                polygons.push(polygon);
            }
            Staged::Degenerate { id, kind } => diagnostics.record(
                DiagnosticKind::DegenerateGeometry,
                format!("{} {} has no usable polygon boundary", kind, id),
                vec![id],
            ),
            Staged::Skipped => {}
        }
    }

    // Stage 2: classification (pure, per polygon)
    let categories: Vec<Category> = polygons.iter().map(|p| classify(p, config)).collect();

    // Stage 3: label parsing and association over the complete polygon set
    let mut anchors: Vec<TextAnchor> = Vec::new();
    for entity in entities {
        let (Some(position), Some(content)) = (entity.anchor(), entity.text_content()) else {
            continue;
        };
        if content.trim().is_empty() {
            continue;
        }
        let label = parse_label(content);
        if label.kind == LabelKind::Unrecognized {
            diagnostics.record(
                DiagnosticKind::UnrecognizedLabel,
                format!("text {:?} matched no plot or survey pattern", content),
                vec![entity.id],
            );
        } else {
            anchors.push(TextAnchor {
                id: entity.id,
                position,
                label,
            });
        }
    }
    let mut assignments = match_labels(&anchors, &polygons, config, &mut diagnostics);

    // Stage 4: assemble plots in input order
    let plots: Vec<Plot> = polygons
        .into_iter()
        .zip(measured)
        .zip(categories)
        .map(|((polygon, metrics), category)| {
            let assignment = assignments.remove(&polygon.id).unwrap_or_default();
            Plot {
                polygon_id: polygon.id,
                layer: polygon.layer,
                source_kind: polygon.source_kind,
                category,
                metrics,
                plot_number: assignment.plot_number,
                survey_number: assignment.survey_number,
            }
        })
        .collect();

    // Stage 5: reconcile Original against Final
    let original: Vec<Plot> = plots
        .iter()
        .filter(|p| p.category == Category::Original)
        .cloned()
        .collect();
    let final_plots: Vec<Plot> = plots
        .iter()
        .filter(|p| p.category == Category::Final)
        .cloned()
        .collect();
    let reconciliation = reconcile(&original, &final_plots);

    Ok(PlotReport {
        plots,
        reconciliation,
        diagnostics: diagnostics.into_vec(),
    })
}

//! Original-versus-final reconciliation
//!
//! Compares the classified Original and Final plot sets to surface parcels
//! that were surveyed but never allotted (pending) and parcels carrying a
//! survey number without a plot number (unassigned). Reads only; both
//! input sequences stay untouched.

use crate::report::Plot;
use ahash::AHashSet;

/// Outcome of comparing the original survey against the final allotment
#[derive(Debug, Clone, Default)]
pub struct ReconciliationResult {
    /// Plots from either set with a survey number but no plot number,
    /// original set first, input order preserved
    pub unassigned: Vec<Plot>,
    /// Original plots whose plot number has no equal among the final plots
    pub pending: Vec<Plot>,
    /// Total original area minus total final area, in square meters;
    /// negative means the allotment covers more ground than the survey
    pub area_delta: f64,
}

/// Reconcile the Original plot set against the Final plot set.
///
/// Pending matching compares canonicalized plot-number strings, never
/// object identity. Original plots without a plot number cannot take part
/// in that comparison; they surface through `unassigned` when they carry a
/// survey number.
pub fn reconcile(original: &[Plot], final_plots: &[Plot]) -> ReconciliationResult {
    let unassigned: Vec<Plot> = original
        .iter()
        .chain(final_plots.iter())
        .filter(|p| p.survey_number.is_some() && p.plot_number.is_none())
        .cloned()
        .collect();

    let final_numbers: AHashSet<&str> = final_plots
        .iter()
        .filter_map(|p| p.plot_number.as_ref().map(|l| l.value.as_str()))
        .collect();

    let pending: Vec<Plot> = original
        .iter()
        .filter(|p| {
            p.plot_number
                .as_ref()
                .is_some_and(|l| !final_numbers.contains(l.value.as_str()))
        })
        .cloned()
        .collect();

    let original_area: f64 = original.iter().map(|p| p.metrics.area_sqm).sum();
    let final_area: f64 = final_plots.iter().map(|p| p.metrics.area_sqm).sum();

    ReconciliationResult {
        unassigned,
        pending,
        area_delta: original_area - final_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use crate::entities::EntityKind;
    use crate::geometry::Metrics;
    use crate::labels::{LabelKind, PlotLabel};
    use crate::types::EntityId;

    fn plot(
        id: u64,
        category: Category,
        area_sqm: f64,
        plot_number: Option<&str>,
        survey_number: Option<&str>,
    ) -> Plot {
        Plot {
            polygon_id: EntityId::new(id),
            layer: "ZoneA".to_string(),
            source_kind: EntityKind::Polyline,
            category,
            metrics: Metrics::from_raw(area_sqm, 0.0, 1.0).unwrap(),
            plot_number: plot_number.map(|v| PlotLabel {
                raw_text: v.to_string(),
                kind: LabelKind::PlotNumber,
                value: v.to_string(),
            }),
            survey_number: survey_number.map(|v| PlotLabel {
                raw_text: v.to_string(),
                kind: LabelKind::SurveyNumber,
                value: v.to_string(),
            }),
        }
    }

    #[test]
    fn test_pending_by_plot_number() {
        let original = vec![
            plot(1, Category::Original, 100.0, Some("1"), None),
            plot(2, Category::Original, 100.0, Some("2"), None),
            plot(3, Category::Original, 100.0, Some("3"), None),
        ];
        let final_plots = vec![
            plot(4, Category::Final, 100.0, Some("1"), None),
            plot(5, Category::Final, 100.0, Some("2"), None),
        ];

        let result = reconcile(&original, &final_plots);
        assert_eq!(result.pending.len(), 1);
        assert_eq!(result.pending[0].plot_number.as_ref().unwrap().value, "3");
        assert!((result.area_delta - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unassigned_from_either_set() {
        let original = vec![plot(1, Category::Original, 50.0, None, Some("12"))];
        let final_plots = vec![plot(2, Category::Final, 50.0, None, Some("13"))];

        let result = reconcile(&original, &final_plots);
        assert_eq!(result.unassigned.len(), 2);
        assert_eq!(result.unassigned[0].polygon_id, EntityId::new(1));
        assert_eq!(result.unassigned[1].polygon_id, EntityId::new(2));
        // Label-less originals never reach the pending list
        assert!(result.pending.is_empty());
    }

    #[test]
    fn test_signed_area_delta() {
        let original = vec![plot(1, Category::Original, 80.0, Some("1"), None)];
        let final_plots = vec![plot(2, Category::Final, 100.0, Some("1"), None)];

        let result = reconcile(&original, &final_plots);
        assert!((result.area_delta + 20.0).abs() < 1e-9);
        assert!(result.pending.is_empty());
    }

    #[test]
    fn test_inputs_not_consumed() {
        let original = vec![plot(1, Category::Original, 1.0, Some("9"), None)];
        let final_plots: Vec<Plot> = Vec::new();
        let first = reconcile(&original, &final_plots);
        let second = reconcile(&original, &final_plots);
        assert_eq!(first.pending.len(), second.pending.len());
    }
}

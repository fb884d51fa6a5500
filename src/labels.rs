//! Plot-number and survey-number labels
//!
//! Free-floating text annotations carry the human-readable identity of a
//! parcel. This module canonicalizes the text into [`PlotLabel`] values and
//! associates each recognized label with the polygon it annotates:
//! containment first, then smallest-area tie-break for nested rings, then
//! nearest-centroid fallback within the configured distance. Everything the
//! matcher resolves by tie-break or fallback is diagnosed, never silent.

use crate::config::AnalysisConfig;
use crate::diagnostics::{DiagnosticCollection, DiagnosticKind};
use crate::geometry::{metrics, predicates, NormalizedPolygon};
use crate::types::{BoundingBox2D, EntityId, Vector2};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

/// What a piece of annotation text turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelKind {
    /// Allotted plot number ("30", "30A", "30/A", "1-5")
    PlotNumber,
    /// Survey number ("R.S. 12", "SURVEY NO. 5")
    SurveyNumber,
    /// Matched no known pattern; dropped from association
    Unrecognized,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::PlotNumber => write!(f, "plot number"),
            LabelKind::SurveyNumber => write!(f, "survey number"),
            LabelKind::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// A parsed annotation label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotLabel {
    /// The annotation text as it appeared in the drawing
    pub raw_text: String,
    /// Label classification
    pub kind: LabelKind,
    /// Canonical form used for comparison and reporting
    pub value: String,
}

/// A recognized label together with its anchor position
#[derive(Debug, Clone)]
pub struct TextAnchor {
    /// Id of the source text entity
    pub id: EntityId,
    /// Anchor point of the annotation
    pub position: Vector2,
    /// The parsed label
    pub label: PlotLabel,
}

/// Labels attached to one polygon; at most one of each kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAssignment {
    pub plot_number: Option<PlotLabel>,
    pub survey_number: Option<PlotLabel>,
}

static SURVEY_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:R\.?\s*S\.?|SURVEY|S\.?\s*NO\.?)\s*(?:NO\.?\s*)?([0-9]+[A-Z]?(?:/[0-9A-Z]+)?)$")
        .unwrap()
});

static SURVEY_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+[A-Z]?(?:/[0-9A-Z]+)?)\s*SURVEY$").unwrap());

static PLOT_VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+[A-Z]?(?:/[0-9A-Z]+)?|[A-Z][0-9]+(?:-[A-Z][0-9]+)?|[0-9]+-[0-9]+)$")
        .unwrap()
});

/// Parse and canonicalize a raw annotation string.
///
/// Survey-number spellings are checked first (`R.S. 12`, `SURVEY NO. 5`,
/// `S NO 3`, `12 SURVEY`); everything else is stripped of the common
/// plot-number prefixes (`PLOT`, `P`, `NO`) and punctuation, then validated
/// against the plot-number forms: bare integer, alphanumeric suffix,
/// fraction, range. Text matching neither comes back `Unrecognized`.
pub fn parse_label(raw: &str) -> PlotLabel {
    let upper = raw.trim().to_uppercase();
    if let Some(value) = survey_value(&upper) {
        return PlotLabel {
            raw_text: raw.to_string(),
            kind: LabelKind::SurveyNumber,
            value,
        };
    }
    let value = canonical_plot_value(&upper);
    if !value.is_empty() && PLOT_VALUE_RE.is_match(&value) {
        return PlotLabel {
            raw_text: raw.to_string(),
            kind: LabelKind::PlotNumber,
            value,
        };
    }
    PlotLabel {
        raw_text: raw.to_string(),
        kind: LabelKind::Unrecognized,
        value: upper,
    }
}

fn survey_value(upper: &str) -> Option<String> {
    SURVEY_PREFIX_RE
        .captures(upper)
        .or_else(|| SURVEY_SUFFIX_RE.captures(upper))
        .map(|caps| caps[1].to_string())
}

fn canonical_plot_value(upper: &str) -> String {
    let mut s = upper.trim();
    for prefix in ["PLOT", "P", "NO"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
        }
    }
    s.chars()
        .filter(|c| *c != '#' && *c != '.' && !c.is_whitespace())
        .collect()
}

struct PolygonInfo {
    bbox: BoundingBox2D,
    centroid: Vector2,
    area: f64,
}

/// Associate recognized labels with the polygons they annotate.
///
/// Per anchor: containment by exactly one ring attaches there; containment
/// by several attaches to the smallest-area ring (`AmbiguousMatch`
/// diagnostic, equal areas resolved by input order); containment by none
/// falls back to the nearest vertex centroid within
/// `config.max_association_distance` (`LowConfidenceMatch`) or the label is
/// orphaned (`OrphanedLabel`). When several labels of the same kind resolve
/// to one polygon, the one nearest that polygon's centroid wins and the
/// rest are diagnosed as `DuplicateLabel`.
pub fn match_labels(
    anchors: &[TextAnchor],
    polygons: &[NormalizedPolygon],
    config: &AnalysisConfig,
    diagnostics: &mut DiagnosticCollection,
) -> AHashMap<EntityId, LabelAssignment> {
    let info: Vec<PolygonInfo> = polygons
        .iter()
        .map(|p| PolygonInfo {
            bbox: p.bounding_box(),
            centroid: p.centroid(),
            area: metrics::compute(p).0,
        })
        .collect();

    // (polygon index, label kind) -> (centroid distance, anchor index)
    let mut candidates: AHashMap<(usize, LabelKind), Vec<(f64, usize)>> = AHashMap::new();

    for (anchor_index, anchor) in anchors.iter().enumerate() {
        if anchor.label.kind == LabelKind::Unrecognized {
            continue;
        }

        let containing: Vec<usize> = (0..polygons.len())
            .filter(|&pi| {
                info[pi].bbox.contains(anchor.position)
                    && predicates::point_in_ring(anchor.position, &polygons[pi].ring)
            })
            .collect();

        let target = match containing.len() {
            1 => Some(containing[0]),
            0 => nearest_fallback(anchor, polygons, &info, config, diagnostics),
            count => {
                let mut best = containing[0];
                for &pi in &containing[1..] {
                    if info[pi].area < info[best].area {
                        best = pi;
                    }
                }
                let mut related = vec![anchor.id];
                related.extend(containing.iter().map(|&pi| polygons[pi].id));
                diagnostics.record(
                    DiagnosticKind::AmbiguousMatch,
                    format!(
                        "label {:?} contained by {} polygons; attached to smallest {}",
                        anchor.label.value, count, polygons[best].id
                    ),
                    related,
                );
                Some(best)
            }
        };

        if let Some(pi) = target {
            let distance = anchor.position.distance(&info[pi].centroid);
            candidates
                .entry((pi, anchor.label.kind))
                .or_default()
                .push((distance, anchor_index));
        }
    }

    let mut assignments: AHashMap<EntityId, LabelAssignment> = AHashMap::new();
    let mut entries: Vec<_> = candidates.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for ((pi, kind), mut list) in entries {
        list.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let polygon = &polygons[pi];
        let winner = &anchors[list[0].1];
        let slot = assignments.entry(polygon.id).or_default();
        match kind {
            LabelKind::PlotNumber => slot.plot_number = Some(winner.label.clone()),
            LabelKind::SurveyNumber => slot.survey_number = Some(winner.label.clone()),
            LabelKind::Unrecognized => {}
        }
        for &(_, loser_index) in &list[1..] {
            let loser = &anchors[loser_index];
            diagnostics.record(
                DiagnosticKind::DuplicateLabel,
                format!(
                    "{} {:?} lost to nearer {:?} on polygon {}",
                    kind, loser.label.value, winner.label.value, polygon.id
                ),
                vec![loser.id, polygon.id],
            );
        }
    }

    assignments
}

fn nearest_fallback(
    anchor: &TextAnchor,
    polygons: &[NormalizedPolygon],
    info: &[PolygonInfo],
    config: &AnalysisConfig,
    diagnostics: &mut DiagnosticCollection,
) -> Option<usize> {
    let nearest = info
        .iter()
        .enumerate()
        .map(|(pi, i)| (pi, anchor.position.distance(&i.centroid)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    match nearest {
        Some((pi, distance)) if distance <= config.max_association_distance => {
            diagnostics.record(
                DiagnosticKind::LowConfidenceMatch,
                format!(
                    "label {:?} attached to polygon {} by centroid distance {:.3}",
                    anchor.label.value, polygons[pi].id, distance
                ),
                vec![anchor.id, polygons[pi].id],
            );
            Some(pi)
        }
        _ => {
            diagnostics.record(
                DiagnosticKind::OrphanedLabel,
                format!(
                    "label {:?} has no polygon within distance {}",
                    anchor.label.value, config.max_association_distance
                ),
                vec![anchor.id],
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityKind;
    use crate::types::Color;

    #[test]
    fn test_parse_plot_numbers() {
        for (raw, value) in [
            ("30", "30"),
            (" 30A ", "30A"),
            ("30/A", "30/A"),
            ("1/2", "1/2"),
            ("1-5", "1-5"),
            ("A1-A5", "A1-A5"),
            ("PLOT 7", "7"),
            ("plot #12", "12"),
            ("P30", "30"),
            ("NO. 4", "4"),
            ("B2", "B2"),
        ] {
            let label = parse_label(raw);
            assert_eq!(label.kind, LabelKind::PlotNumber, "raw {:?}", raw);
            assert_eq!(label.value, value, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_parse_survey_numbers() {
        for (raw, value) in [
            ("R.S. 12", "12"),
            ("RS 12", "12"),
            ("SURVEY NO. 5", "5"),
            ("survey 30/A", "30/A"),
            ("S NO 3", "3"),
            ("12 SURVEY", "12"),
        ] {
            let label = parse_label(raw);
            assert_eq!(label.kind, LabelKind::SurveyNumber, "raw {:?}", raw);
            assert_eq!(label.value, value, "raw {:?}", raw);
        }
    }

    #[test]
    fn test_parse_unrecognized() {
        for raw in ["NORTH ARROW", "SCALE 1:2000", "", "ROAD"] {
            assert_eq!(parse_label(raw).kind, LabelKind::Unrecognized, "raw {:?}", raw);
        }
    }

    fn square_polygon(id: u64, origin: Vector2, size: f64) -> NormalizedPolygon {
        NormalizedPolygon {
            id: EntityId::new(id),
            layer: "ZoneA".to_string(),
            color: Color::GREEN,
            ring: vec![
                origin,
                origin + Vector2::new(size, 0.0),
                origin + Vector2::new(size, size),
                origin + Vector2::new(0.0, size),
            ],
            source_kind: EntityKind::Polyline,
            circle_radius: None,
        }
    }

    fn anchor(id: u64, position: Vector2, raw: &str) -> TextAnchor {
        TextAnchor {
            id: EntityId::new(id),
            position,
            label: parse_label(raw),
        }
    }

    #[test]
    fn test_contained_label_attaches() {
        let polygons = vec![square_polygon(1, Vector2::ZERO, 10.0)];
        let anchors = vec![anchor(10, Vector2::new(5.0, 5.0), "30")];
        let mut diagnostics = DiagnosticCollection::new();
        let config = AnalysisConfig::default();

        let assignments = match_labels(&anchors, &polygons, &config, &mut diagnostics);
        let assignment = &assignments[&EntityId::new(1)];
        assert_eq!(assignment.plot_number.as_ref().unwrap().value, "30");
        assert!(assignment.survey_number.is_none());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_nested_rings_attach_to_smallest() {
        let polygons = vec![
            square_polygon(1, Vector2::ZERO, 10.0),
            square_polygon(2, Vector2::new(3.0, 3.0), 3.0),
        ];
        let anchors = vec![anchor(10, Vector2::new(4.0, 4.0), "7")];
        let mut diagnostics = DiagnosticCollection::new();
        let config = AnalysisConfig::default();

        let assignments = match_labels(&anchors, &polygons, &config, &mut diagnostics);
        assert!(assignments.contains_key(&EntityId::new(2)));
        assert!(!assignments.contains_key(&EntityId::new(1)));
        assert!(diagnostics.has_kind(DiagnosticKind::AmbiguousMatch));
    }

    #[test]
    fn test_orphan_beyond_distance() {
        let polygons = vec![square_polygon(1, Vector2::ZERO, 10.0)];
        let anchors = vec![anchor(10, Vector2::new(500.0, 500.0), "30")];
        let mut diagnostics = DiagnosticCollection::new();
        let config = AnalysisConfig::default();

        let assignments = match_labels(&anchors, &polygons, &config, &mut diagnostics);
        assert!(assignments.is_empty());
        assert!(diagnostics.has_kind(DiagnosticKind::OrphanedLabel));
    }

    #[test]
    fn test_duplicate_keeps_nearest() {
        let polygons = vec![square_polygon(1, Vector2::ZERO, 10.0)];
        let anchors = vec![
            anchor(10, Vector2::new(8.0, 8.0), "22"),
            anchor(11, Vector2::new(5.5, 5.5), "33"),
        ];
        let mut diagnostics = DiagnosticCollection::new();
        let config = AnalysisConfig::default();

        let assignments = match_labels(&anchors, &polygons, &config, &mut diagnostics);
        let assignment = &assignments[&EntityId::new(1)];
        // Anchor 11 sits nearer the centroid (5, 5)
        assert_eq!(assignment.plot_number.as_ref().unwrap().value, "33");
        assert_eq!(diagnostics.of_kind(DiagnosticKind::DuplicateLabel).len(), 1);
    }
}

//! Survey category classification
//!
//! Assigns each normalized polygon to a category from its explicit color
//! code or, failing that, from layer-name keywords. Color is authoritative
//! when present; keywords are a fallback for drawings without consistent
//! color use. The resolution order is fixed and deterministic.

use crate::config::AnalysisConfig;
use crate::geometry::NormalizedPolygon;
use indexmap::IndexSet;
use std::fmt;

/// Survey category of a plot boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Surveyed parcel prior to final allotment
    Original,
    /// Allotted parcel after reconciliation
    Final,
    /// Parcel on hold, not yet allotted
    Pending,
    /// Parcel without an assignment
    Unassigned,
    /// Catch-all for everything not matched by any rule
    Other,
}

impl Category {
    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Original => "Original",
            Category::Final => "Final",
            Category::Pending => "Pending",
            Category::Unassigned => "Unassigned",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a polygon against the configured color and keyword rules.
///
/// Resolution order, first match wins:
/// 1. exact color-code match against `color_rules`;
/// 2. case-insensitive layer-name substring match, checked for `Pending`,
///    then `Unassigned`, then the `Original`/`Final` keyword sets. A layer
///    matching both of the latter is ambiguous without a color signal and
///    falls through to `Other`;
/// 3. no match at all is `Other`.
pub fn classify(polygon: &NormalizedPolygon, config: &AnalysisConfig) -> Category {
    if let Some(code) = polygon.color.classification_code() {
        if let Some(category) = config.color_rules.get(&code) {
            return *category;
        }
    }

    let layer = polygon.layer.to_lowercase();
    for category in [Category::Pending, Category::Unassigned] {
        if layer_matches(&layer, config.keyword_rules.get(&category)) {
            return category;
        }
    }

    let original = layer_matches(&layer, config.keyword_rules.get(&Category::Original));
    let final_ = layer_matches(&layer, config.keyword_rules.get(&Category::Final));
    match (original, final_) {
        (true, false) => Category::Original,
        (false, true) => Category::Final,
        _ => Category::Other,
    }
}

fn layer_matches(layer: &str, keywords: Option<&IndexSet<String>>) -> bool {
    keywords.is_some_and(|set| set.iter().any(|kw| layer.contains(kw.as_str())))
}

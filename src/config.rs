//! Analysis configuration
//!
//! The core reads nothing from the environment or disk; every tunable comes
//! in through [`AnalysisConfig`]. `Default` reproduces the drawing
//! conventions of the survey sheets this tool was built for (1 cm = 20 m,
//! green originals, red finals) as a caller convenience.

use crate::classify::Category;
use crate::error::{PlotError, Result};
use indexmap::{IndexMap, IndexSet};

/// Minimum tessellation density for full circles
pub const MIN_CIRCLE_SEGMENTS: usize = 8;
/// Minimum tessellation density for arcs
pub const MIN_ARC_SEGMENTS: usize = 2;

/// Caller-supplied configuration for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Drawing units per meter; must be positive and finite
    pub scale_factor: f64,
    /// Exact ACI color code to category mapping, highest classification precedence
    pub color_rules: IndexMap<i16, Category>,
    /// Lowercase layer-name substrings per category, fallback classification signal
    pub keyword_rules: IndexMap<Category, IndexSet<String>>,
    /// Maximum centroid distance (drawing units) for label fallback association
    pub max_association_distance: f64,
    /// Ring points for tessellating full circles
    pub circle_segments: usize,
    /// Spans for tessellating arcs
    pub arc_segments: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let mut color_rules = IndexMap::new();
        color_rules.insert(3, Category::Original); // green
        color_rules.insert(1, Category::Final); // red

        let mut keyword_rules: IndexMap<Category, IndexSet<String>> = IndexMap::new();
        keyword_rules.insert(
            Category::Pending,
            keywords(&["pending", "hold", "reserved", "temporary"]),
        );
        keyword_rules.insert(
            Category::Unassigned,
            keywords(&["unassigned", "unknown", "undefined"]),
        );
        // The plot-ish keywords cannot distinguish original from final on
        // their own; both sets carry them and the classifier treats the
        // overlap as ambiguous.
        keyword_rules.insert(
            Category::Original,
            keywords(&["plot", "area", "zone", "lot", "parcel"]),
        );
        keyword_rules.insert(
            Category::Final,
            keywords(&["plot", "area", "zone", "lot", "parcel"]),
        );

        Self {
            scale_factor: 20.0,
            color_rules,
            keyword_rules,
            max_association_distance: 50.0,
            circle_segments: 64,
            arc_segments: 32,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration.
    ///
    /// Fails with a [`PlotError`] on any value the pipeline cannot work
    /// with; a failed validation aborts the whole run with no partial
    /// results.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(PlotError::InvalidScaleFactor(self.scale_factor));
        }
        if !(self.max_association_distance.is_finite() && self.max_association_distance > 0.0) {
            return Err(PlotError::InvalidAssociationDistance(
                self.max_association_distance,
            ));
        }
        if self.circle_segments < MIN_CIRCLE_SEGMENTS {
            return Err(PlotError::InvalidTessellation {
                kind: "circle",
                segments: self.circle_segments,
                minimum: MIN_CIRCLE_SEGMENTS,
            });
        }
        if self.arc_segments < MIN_ARC_SEGMENTS {
            return Err(PlotError::InvalidTessellation {
                kind: "arc",
                segments: self.arc_segments,
                minimum: MIN_ARC_SEGMENTS,
            });
        }
        for (category, words) in &self.keyword_rules {
            for word in words {
                if word.is_empty() || word.chars().any(|c| c.is_uppercase()) {
                    return Err(PlotError::MalformedKeyword {
                        category: category.to_string(),
                        keyword: word.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn keywords(words: &[&str]) -> IndexSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

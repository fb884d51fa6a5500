//! Analysis diagnostic system.
//!
//! Non-fatal issues encountered while normalizing geometry or matching
//! labels are collected as `Diagnostic` items rather than being silently
//! dropped or causing hard errors.
//!
//! After a run the caller can inspect [`crate::report::PlotReport::diagnostics`]
//! to see what was encountered.

use crate::types::EntityId;
use std::fmt;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Entity could not be normalized into a usable polygon.
    DegenerateGeometry,
    /// Text entity matched no plot-number or survey-number pattern.
    UnrecognizedLabel,
    /// Recognized label found no polygon within the association distance.
    OrphanedLabel,
    /// A second label of the same kind resolved to an already-labeled polygon.
    DuplicateLabel,
    /// A containment or duplicate tie-break was invoked.
    AmbiguousMatch,
    /// Label attached by nearest-centroid fallback rather than containment.
    LowConfidenceMatch,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGeometry => write!(f, "DegenerateGeometry"),
            Self::UnrecognizedLabel => write!(f, "UnrecognizedLabel"),
            Self::OrphanedLabel => write!(f, "OrphanedLabel"),
            Self::DuplicateLabel => write!(f, "DuplicateLabel"),
            Self::AmbiguousMatch => write!(f, "AmbiguousMatch"),
            Self::LowConfidenceMatch => write!(f, "LowConfidenceMatch"),
        }
    }
}

/// A single diagnostic produced during analysis.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The category of the issue.
    pub kind: DiagnosticKind,
    /// A human-readable description.
    pub detail: String,
    /// Entities involved (label entity first, then polygons where relevant).
    pub related: Vec<EntityId>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(kind: DiagnosticKind, detail: impl Into<String>, related: Vec<EntityId>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            related,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.detail)?;
        if !self.related.is_empty() {
            write!(f, " (entities:")?;
            for id in &self.related {
                write!(f, " {}", id)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Collects diagnostics during an analysis run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    items: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a diagnostic.
    pub fn record(&mut self, kind: DiagnosticKind, detail: impl Into<String>, related: Vec<EntityId>) {
        self.items.push(Diagnostic::new(kind, detail, related));
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Get all diagnostics of a specific kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.items.iter().filter(|d| d.kind == kind).collect()
    }

    /// Check whether any diagnostic of the given kind exists.
    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.items.iter().any(|d| d.kind == kind)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for DiagnosticCollection {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

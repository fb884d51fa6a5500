//! Error types for plot analysis
//!
//! Only configuration problems are fatal. Per-entity geometry and label
//! issues are recovered locally and surfaced through
//! [`crate::diagnostics::DiagnosticCollection`] instead.

use thiserror::Error;

/// Main error type for plot analysis operations
#[derive(Debug, Error)]
pub enum PlotError {
    /// Scale factor must be positive and finite
    #[error("invalid scale factor: {0} (must be positive and finite)")]
    InvalidScaleFactor(f64),

    /// Label association distance must be positive and finite
    #[error("invalid association distance: {0} (must be positive and finite)")]
    InvalidAssociationDistance(f64),

    /// Tessellation density below the usable minimum
    #[error("tessellation too coarse for {kind}: {segments} segments (minimum {minimum})")]
    InvalidTessellation {
        kind: &'static str,
        segments: usize,
        minimum: usize,
    },

    /// A keyword rule entry that can never match a lowercased layer name
    #[error("malformed keyword rule for {category}: {keyword:?} (keywords must be lowercase and non-empty)")]
    MalformedKeyword { category: String, keyword: String },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for plot analysis operations
pub type Result<T> = std::result::Result<T, PlotError>;

impl From<String> for PlotError {
    fn from(s: String) -> Self {
        PlotError::Custom(s)
    }
}

impl From<&str> for PlotError {
    fn from(s: &str) -> Self {
        PlotError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_display() {
        let err = PlotError::InvalidScaleFactor(-1.0);
        assert_eq!(
            err.to_string(),
            "invalid scale factor: -1 (must be positive and finite)"
        );
    }

    #[test]
    fn test_keyword_error_display() {
        let err = PlotError::MalformedKeyword {
            category: "Pending".to_string(),
            keyword: "HOLD".to_string(),
        };
        assert!(err.to_string().contains("Pending"));
        assert!(err.to_string().contains("HOLD"));
    }

    #[test]
    fn test_string_conversion() {
        let err: PlotError = "something went wrong".into();
        assert!(matches!(err, PlotError::Custom(_)));
    }
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown {field} option '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    // ========================================================================
    // Patch Errors
    // ========================================================================
    #[error("Marker '{marker}' not found in {file}")]
    PatchMarkerMissing { file: String, marker: &'static str },

    #[error("Marker '{marker}' appears {count} times in {file}, expected exactly once")]
    PatchMarkerAmbiguous {
        file: String,
        marker: &'static str,
        count: usize,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-app, my_app, dashboard2".into(),
            ],
            Self::InvalidChoice { field, value } => vec![
                format!("'{}' is not a valid {}", value, field),
                "Check the [defaults] table of your configuration file".into(),
            ],
            Self::PatchMarkerMissing { file, marker } => vec![
                format!("{} no longer contains '{}'", file, marker),
                "The generator template may have changed its layout".into(),
                "Add `tailwindcss()` to the plugins array by hand".into(),
            ],
            Self::PatchMarkerAmbiguous { file, .. } => vec![
                format!("{} declares more than one plugins array", file),
                "Add `tailwindcss()` to the plugins array by hand".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidChoice { .. } => {
                ErrorCategory::Validation
            }
            Self::PatchMarkerMissing { .. } | Self::PatchMarkerAmbiguous { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

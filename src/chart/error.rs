//! Chart Adapter Errors

use thiserror::Error;

/// Chart adapter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A tooltip or legend was rendered without a mounted chart container
    #[error("chart renderers must be used within a chart container (no chart mounted in this render context)")]
    OutsideContainer,

    /// A series declared both a single color and a theme color map
    #[error("series '{key}' declares both `color` and `theme`; use one or the other")]
    ConflictingColor { key: String },

    /// A standalone series entry declared both a single color and a theme
    #[error("series declares both `color` and `theme`; use one or the other")]
    ConflictingSeriesColor,

    /// The configuration could not be parsed
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::InvalidConfig(err.to_string())
    }
}

/// Result type for chart adapter operations
pub type ChartResult<T> = Result<T, ChartError>;

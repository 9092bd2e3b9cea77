use rectsel_geometry::Rect;
use thiserror::Error;

/// Rejected host configuration. The selector state is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspectRatio(f64),

    #[error("container size must be finite and non-negative, got {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("rectangle has non-finite components: {0:?}")]
    InvalidRectangle(Rect),
}

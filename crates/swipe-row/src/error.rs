use thiserror::Error;

/// Caller mistakes. Degenerate geometry is not an error: an unmeasured row
/// simply does not open.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwipeError {
    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidThreshold(f32),
    #[error("button {index} has an unusable fixed width ({width})")]
    InvalidFixedWidth { index: usize, width: f32 },
    #[error("no action button at index {index} (row has {len})")]
    ButtonOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = SwipeError> = std::result::Result<T, E>;

//! Primitive error types

use thiserror::Error;

/// Primitive errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    /// Aspect ratios must be finite and positive
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidRatio(f32),

    /// A toolbar item index was out of range
    #[error("toolbar has no item at index {index} ({len} items)")]
    NoSuchItem { index: usize, len: usize },
}

/// Result type for primitive operations
pub type Result<T> = std::result::Result<T, PrimitiveError>;

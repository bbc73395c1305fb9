//! Core error types

use thiserror::Error;

/// Errors raised when constructing shape primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A color channel fell outside the 0-255 range
    #[error("color channels must be within 0..=255, got rgb({r},{g},{b})")]
    InvalidColor { r: i32, g: i32, b: i32 },

    /// A width or height was negative (or zero where a visible shape needs it)
    #[error("invalid shape size: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Result type for core constructors
pub type Result<T> = std::result::Result<T, ShapeError>;

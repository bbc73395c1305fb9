//! Exporter error types

use thiserror::Error;

/// Errors raised when configuring an exporter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The SVG exporter needs a positive ticks-per-second speed
    #[error("ticks per second must be positive, got {0}")]
    InvalidSpeed(i32),
}

/// Result type for exporter construction
pub type Result<T> = std::result::Result<T, ExportError>;

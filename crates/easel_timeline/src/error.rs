//! Timeline error types
//!
//! Every error here is a data or programming error surfaced synchronously;
//! nothing is transient or retried. A rejected mutation leaves the prior
//! state entirely unchanged.

use easel_core::ShapeError;
use thiserror::Error;

/// Errors raised by the timeline engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Invalid shape data inside a motion (color channels, negative sizes)
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A motion keyframe carried a tick at or below zero
    #[error("tick values must be positive, got {start} to {end}")]
    NonPositiveTick { start: i32, end: i32 },

    /// A motion ended before it started
    #[error("end tick must not precede start tick, got {start} to {end}")]
    ReversedTicks { start: i32, end: i32 },

    /// A motion's start state does not continue the previous motion's end state
    #[error("motion starting at tick {start} teleports shape '{id}'")]
    Teleportation { id: String, start: i32 },

    /// A shape with this id already exists in the scene
    #[error("shape id already exists: '{0}'")]
    DuplicateShapeId(String),

    /// No shape with this id exists in the scene
    #[error("no shape with id '{0}'")]
    UnknownShapeId(String),

    /// Canvas width or height was negative at build time
    #[error("canvas bounds must be non-negative, got {width}x{height}")]
    InvalidCanvasBounds { width: i32, height: i32 },
}

/// Result type for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

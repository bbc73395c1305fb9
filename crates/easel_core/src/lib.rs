//! Easel Core Primitives
//!
//! Value types shared by the timeline engine and the exporters:
//!
//! - **Color / Location**: component-wise value types with the display
//!   formats the exporters rely on
//! - **Shape**: a shape identity plus its transient rendered state, with an
//!   explicit invisible sentinel
//! - **Keyframe**: a pure snapshot of a shape's visual state at one tick

pub mod color;
pub mod error;
pub mod keyframe;
pub mod location;
pub mod shape;

pub use color::Color;
pub use error::ShapeError;
pub use keyframe::Keyframe;
pub use location::Location;
pub use shape::{Shape, ShapeKind, ShapeState};

//! Easel Timeline Engine
//!
//! Computes the exact visual state of every shape in a scene at an arbitrary
//! tick from a sparse set of authored keyframes:
//!
//! - **Motion**: linear interpolation between two keyframes with a per-tick
//!   state cache built once at construction
//! - **AnimatedShape**: an ordered motion chain with the continuity ("no
//!   teleportation") invariant enforced on append
//! - **Scene**: canvas bounds plus every animated shape, and the query
//!   surface renderers and exporters consume
//! - **SceneBuilder**: the construction contract a scene-description reader
//!   drives
//!
//! The engine is synchronous and single-threaded; queries return independent
//! copies and mutations are atomic with respect to a single caller.

pub mod animated_shape;
pub mod builder;
pub mod error;
pub mod motion;
pub mod scene;

pub use animated_shape::AnimatedShape;
pub use builder::SceneBuilder;
pub use error::{Result, TimelineError};
pub use motion::Motion;
pub use scene::{CanvasBounds, Scene, UnknownIdPolicy};

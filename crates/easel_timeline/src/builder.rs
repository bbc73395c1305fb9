//! Construction contract for scenes read from a declarative description
//!
//! A scene-description reader drives this surface: set the canvas bounds,
//! declare shapes, add motions, then build. The builder owns every default
//! explicitly; nothing here is process-wide state.

use easel_core::{Keyframe, Shape, ShapeKind};
use tracing::{debug, trace, warn};

use crate::animated_shape::AnimatedShape;
use crate::error::{Result, TimelineError};
use crate::motion::Motion;
use crate::scene::{CanvasBounds, Scene, UnknownIdPolicy};

/// Builds a [`Scene`] from declarative build calls.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    bounds: CanvasBounds,
    id_policy: UnknownIdPolicy,
    shapes: Vec<AnimatedShape>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the canvas bounds; negative width or height is rejected.
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<&mut Self> {
        self.bounds = CanvasBounds::new(x, y, width, height)?;
        Ok(self)
    }

    /// Choose how motions for undeclared ids are handled, both while
    /// building and in the built scene.
    pub fn unknown_id_policy(&mut self, policy: UnknownIdPolicy) -> &mut Self {
        self.id_policy = policy;
        self
    }

    /// Declare an invisible shape under a unique name.
    ///
    /// The kind string follows the declarative format: `"ellipse"` maps to
    /// an oval, anything else to a rectangle.
    pub fn declare_shape(&mut self, name: &str, kind: &str) -> Result<&mut Self> {
        if self.shapes.iter().any(|s| s.id() == name) {
            return Err(TimelineError::DuplicateShapeId(name.to_string()));
        }
        let kind = if kind == "ellipse" {
            ShapeKind::Oval
        } else {
            ShapeKind::Rectangle
        };
        debug!(name, ?kind, "shape declared");
        self.shapes.push(AnimatedShape::new(Shape::new(name, kind)));
        Ok(self)
    }

    /// Construct a motion between two keyframes and route it to `name`.
    ///
    /// A pin (equal ticks, equal state) seeds the shape's first keyframe
    /// when it has none and is dropped as a no-op otherwise. Degenerate pins
    /// whose states differ go through normal validation.
    pub fn add_motion(&mut self, name: &str, from: Keyframe, to: Keyframe) -> Result<&mut Self> {
        let motion = Motion::new(from, to)?;
        let is_pin = from.tick == to.tick && from.state() == to.state();
        match self.shapes.iter_mut().find(|s| s.id() == name) {
            Some(shape) => {
                if is_pin && !shape.motions().is_empty() {
                    trace!(id = name, tick = from.tick, "pin motion dropped");
                    return Ok(self);
                }
                shape.add_motion(motion)?;
            }
            None => match self.id_policy {
                UnknownIdPolicy::Lenient => {
                    warn!(id = name, "motion for undeclared shape ignored")
                }
                UnknownIdPolicy::Strict => {
                    return Err(TimelineError::UnknownShapeId(name.to_string()))
                }
            },
        }
        Ok(self)
    }

    /// Finalize and return the scene.
    pub fn build(self) -> Scene {
        debug!(shapes = self.shapes.len(), "scene built");
        Scene::from_parts(self.bounds, self.shapes, self.id_policy)
    }
}

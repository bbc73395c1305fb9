//! The timeline model: canvas bounds plus every animated shape

use easel_core::Shape;
use tracing::{debug, warn};

use crate::animated_shape::AnimatedShape;
use crate::error::{Result, TimelineError};
use crate::motion::Motion;

/// Canvas bounds, fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CanvasBounds {
    /// Bounds used when a scene description never sets any.
    pub const DEFAULT: CanvasBounds = CanvasBounds {
        x: 200,
        y: 200,
        width: 500,
        height: 500,
    };

    /// Validated constructor; width and height must be non-negative.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(TimelineError::InvalidCanvasBounds { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How [`Scene::add_motion`] treats an id no declared shape carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownIdPolicy {
    /// Log and ignore the motion.
    #[default]
    Lenient,
    /// Reject with [`TimelineError::UnknownShapeId`].
    Strict,
}

/// The timeline model for one animation.
///
/// Owns the canvas bounds, the animated shapes keyed by unique id (insertion
/// order preserved for the exporters), and the current tick cursor. All read
/// accessors return independent copies: a renderer retaining a snapshot is
/// unaffected by later ticks.
#[derive(Clone, Debug)]
pub struct Scene {
    bounds: CanvasBounds,
    shapes: Vec<AnimatedShape>,
    tick: i32,
    id_policy: UnknownIdPolicy,
}

impl Scene {
    /// An empty scene with the given bounds and routing policy.
    pub fn new(bounds: CanvasBounds, id_policy: UnknownIdPolicy) -> Self {
        Self {
            bounds,
            shapes: Vec::new(),
            tick: 1,
            id_policy,
        }
    }

    pub(crate) fn from_parts(
        bounds: CanvasBounds,
        shapes: Vec<AnimatedShape>,
        id_policy: UnknownIdPolicy,
    ) -> Self {
        Self {
            bounds,
            shapes,
            tick: 1,
            id_policy,
        }
    }

    /// Start building a scene from declarative build calls.
    pub fn builder() -> crate::builder::SceneBuilder {
        crate::builder::SceneBuilder::new()
    }

    fn find(&self, id: &str) -> Option<&AnimatedShape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn ensure_unique(&self, id: &str) -> Result<()> {
        if self.find(id).is_some() {
            return Err(TimelineError::DuplicateShapeId(id.to_string()));
        }
        Ok(())
    }

    /// Add a shape with no motions yet; its id must be unused.
    pub fn add_shape(&mut self, shape: Shape) -> Result<()> {
        self.ensure_unique(shape.id())?;
        debug!(id = shape.id(), "shape added");
        self.shapes.push(AnimatedShape::new(shape));
        Ok(())
    }

    /// Add a shape together with its motion history; its id must be unused.
    pub fn add_animated_shape(&mut self, shape: AnimatedShape) -> Result<()> {
        self.ensure_unique(shape.id())?;
        self.shapes.push(shape);
        Ok(())
    }

    /// Route a motion to the shape with the matching id.
    ///
    /// An unknown id is ignored or rejected depending on the scene's
    /// [`UnknownIdPolicy`].
    pub fn add_motion(&mut self, id: &str, motion: Motion) -> Result<()> {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(shape) => shape.add_motion(motion),
            None => match self.id_policy {
                UnknownIdPolicy::Lenient => {
                    warn!(id, "motion for unknown shape id ignored");
                    Ok(())
                }
                UnknownIdPolicy::Strict => Err(TimelineError::UnknownShapeId(id.to_string())),
            },
        }
    }

    /// Advance the tick cursor and every shape's live state to `tick`.
    pub fn apply_tick(&mut self, tick: i32) {
        self.tick = tick;
        for shape in &mut self.shapes {
            shape.apply_tick(tick);
        }
    }

    /// Remove every shape from the scene.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Independent copies of every shape's live rendered state.
    pub fn shapes(&self) -> Vec<Shape> {
        self.shapes.iter().map(AnimatedShape::shape).collect()
    }

    /// The live rendered state of one shape.
    pub fn shape(&self, id: &str) -> Result<Shape> {
        self.find(id)
            .map(AnimatedShape::shape)
            .ok_or_else(|| TimelineError::UnknownShapeId(id.to_string()))
    }

    /// One shape evaluated at `tick`, without touching the cursor or any
    /// live state.
    pub fn shape_at(&self, id: &str, tick: i32) -> Result<Shape> {
        self.find(id)
            .map(|s| s.shape_at(tick))
            .ok_or_else(|| TimelineError::UnknownShapeId(id.to_string()))
    }

    /// Every shape evaluated at `tick`, without touching the cursor or any
    /// live state.
    pub fn shapes_at(&self, tick: i32) -> Vec<Shape> {
        self.shapes.iter().map(|s| s.shape_at(tick)).collect()
    }

    /// Full motion and keyframe history per shape, copied.
    pub fn animated_shapes(&self) -> Vec<AnimatedShape> {
        self.shapes.clone()
    }

    /// The animation's overall duration: the max last tick over all shapes,
    /// or 1 for an empty scene.
    pub fn last_tick(&self) -> i32 {
        self.shapes
            .iter()
            .map(AnimatedShape::last_tick)
            .fold(1, i32::max)
    }

    /// The current tick cursor.
    pub fn tick(&self) -> i32 {
        self.tick
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn canvas_width(&self) -> i32 {
        self.bounds.width
    }

    pub fn canvas_height(&self) -> i32 {
        self.bounds.height
    }

    pub fn canvas_starting_x(&self) -> i32 {
        self.bounds.x
    }

    pub fn canvas_starting_y(&self) -> i32 {
        self.bounds.y
    }
}

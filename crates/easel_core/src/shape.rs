//! Shape identities and their rendered state

use crate::color::Color;
use crate::error::{Result, ShapeError};
use crate::keyframe::Keyframe;
use crate::location::Location;

/// The closed set of drawable shape kinds.
///
/// Exporters match on this explicitly to pick their kind-specific labels and
/// coordinate conventions; the shape itself never renders anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Oval,
}

impl ShapeKind {
    /// Label used by the textual description format.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Oval => "Oval",
        }
    }

    /// Element name used by the SVG format.
    pub fn svg_element(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::Oval => "ellipse",
        }
    }
}

/// The visible attributes of a shape at one instant.
///
/// Also the unit of the per-tick interpolation cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeState {
    pub width: i32,
    pub height: i32,
    pub color: Color,
    pub location: Location,
}

/// A shape identity plus its current rendered state.
///
/// `state == None` is the invisible sentinel: an invisible shape carries no
/// valid width/height/color/location and equals only another invisible shape
/// of the same id and kind. Identity and kind are immutable once created;
/// only the rendered state varies per query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    state: Option<ShapeState>,
}

impl Shape {
    /// Create an invisible shape with the given id.
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            state: None,
        }
    }

    /// Create a visible shape; width and height must be positive.
    pub fn with_state(
        id: impl Into<String>,
        kind: ShapeKind,
        width: i32,
        height: i32,
        color: Color,
        location: Location,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ShapeError::InvalidSize { width, height });
        }
        Ok(Self {
            id: id.into(),
            kind,
            state: Some(ShapeState {
                width,
                height,
                color,
                location,
            }),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The rendered state, or `None` while invisible.
    pub fn state(&self) -> Option<&ShapeState> {
        self.state.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    /// Overwrite the rendered state, making the shape visible.
    pub fn set_state(&mut self, state: ShapeState) {
        self.state = Some(state);
    }

    /// Drop the rendered state entirely.
    pub fn make_invisible(&mut self) {
        self.state = None;
    }

    /// Overwrite the rendered state with a keyframe's snapshot.
    pub fn apply_keyframe(&mut self, keyframe: &Keyframe) {
        self.set_state(keyframe.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0).unwrap()
    }

    #[test]
    fn starts_invisible() {
        let shape = Shape::new("R", ShapeKind::Rectangle);
        assert!(!shape.is_visible());
        assert!(shape.state().is_none());
    }

    #[test]
    fn visible_construction_validates_size() {
        assert!(Shape::with_state("R", ShapeKind::Rectangle, 50, 100, red(), Location::new(0, 0)).is_ok());
        assert_eq!(
            Shape::with_state("R", ShapeKind::Rectangle, 0, 100, red(), Location::new(0, 0)),
            Err(ShapeError::InvalidSize { width: 0, height: 100 })
        );
        assert_eq!(
            Shape::with_state("R", ShapeKind::Rectangle, 50, -1, red(), Location::new(0, 0)),
            Err(ShapeError::InvalidSize { width: 50, height: -1 })
        );
    }

    #[test]
    fn invisible_shapes_equal_only_by_identity() {
        let a = Shape::new("R", ShapeKind::Rectangle);
        let b = Shape::new("R", ShapeKind::Rectangle);
        let c = Shape::new("S", ShapeKind::Rectangle);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut visible = Shape::new("R", ShapeKind::Rectangle);
        visible.set_state(ShapeState {
            width: 10,
            height: 10,
            color: red(),
            location: Location::new(0, 0),
        });
        assert_ne!(a, visible);
    }

    #[test]
    fn set_state_then_invisible_round_trip() {
        let mut shape = Shape::new("C", ShapeKind::Oval);
        shape.set_state(ShapeState {
            width: 120,
            height: 60,
            color: red(),
            location: Location::new(440, 70),
        });
        assert!(shape.is_visible());
        shape.make_invisible();
        assert_eq!(shape, Shape::new("C", ShapeKind::Oval));
    }
}

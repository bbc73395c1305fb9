//! Keyframe snapshots

use crate::color::Color;
use crate::error::Result;
use crate::location::Location;
use crate::shape::ShapeState;

/// A snapshot of a shape's full visual state at one tick.
///
/// Pure data with no behavior of its own; validation happens where keyframes
/// are combined into motions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyframe {
    pub tick: i32,
    pub location: Location,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Keyframe {
    pub const fn new(tick: i32, location: Location, width: i32, height: i32, color: Color) -> Self {
        Self {
            tick,
            location,
            width,
            height,
            color,
        }
    }

    /// Build a keyframe from the raw integer fields of the declarative scene
    /// format, validating the color channels.
    pub fn from_values(
        tick: i32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<Self> {
        Ok(Self::new(
            tick,
            Location::new(x, y),
            width,
            height,
            Color::new(r, g, b)?,
        ))
    }

    /// The visible state this keyframe pins.
    pub fn state(&self) -> ShapeState {
        ShapeState {
            width: self.width,
            height: self.height,
            color: self.color,
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn from_values_validates_color() {
        assert!(Keyframe::from_values(1, 0, 0, 10, 10, 255, 0, 0).is_ok());
        assert_eq!(
            Keyframe::from_values(1, 0, 0, 10, 10, 300, 0, 0),
            Err(ShapeError::InvalidColor { r: 300, g: 0, b: 0 })
        );
    }

    #[test]
    fn state_carries_every_field() {
        let kf = Keyframe::from_values(6, 440, 70, 120, 60, 0, 0, 255).unwrap();
        let state = kf.state();
        assert_eq!(state.width, 120);
        assert_eq!(state.height, 60);
        assert_eq!(state.location, Location::new(440, 70));
        assert_eq!(state.color, Color::new(0, 0, 255).unwrap());
    }
}

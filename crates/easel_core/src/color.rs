//! Color value type

use std::fmt;

use crate::error::{Result, ShapeError};

/// An RGB color with 8-bit channels.
///
/// Channels are validated at construction, so interpolation code can rely on
/// every stored value being in range. Displays as `rgb(r,g,b)`, the exact
/// form both exporters emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a color, rejecting any channel outside 0..=255.
    pub fn new(r: i32, g: i32, b: i32) -> Result<Self> {
        let in_range = |v: i32| (0..=255).contains(&v);
        if !in_range(r) || !in_range(g) || !in_range(b) {
            return Err(ShapeError::InvalidColor { r, g, b });
        }
        Ok(Self {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        })
    }

    /// Create a color from channels already known to be 8-bit.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> i32 {
        i32::from(self.r)
    }

    pub fn g(&self) -> i32 {
        i32::from(self.g)
    }

    pub fn b(&self) -> i32 {
        i32::from(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

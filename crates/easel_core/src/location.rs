//! Location value type

use std::fmt;

/// An integer position on the canvas. Displays as `(x,y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_component() {
        assert_eq!(Location::new(3, -4), Location::new(3, -4));
        assert_ne!(Location::new(3, -4), Location::new(-4, 3));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Location::new(200, 200).to_string(), "(200,200)");
        assert_eq!(Location::new(-5, 0).to_string(), "(-5,0)");
    }
}

//! Real-valued grid coordinates

use std::fmt;
use std::ops::Add;

/// A position on the growth grid, in cell units relative to the grid centre
///
/// All operations return new values; a `Point` is never mutated in place
/// once it is part of a node or segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// The grid origin
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by a factor
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Coordinates as an `[x, y]` pair
    pub const fn as_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Whether this is the zero vector
    pub fn is_zero(self) -> bool {
        self == Self::ORIGIN
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

//! Growth headings and relative moves
//!
//! A node grows along one of four cardinal headings. Each level it picks a
//! [`Move`] expressed in its own frame (straight on, veer left, veer right or
//! stop), and [`offset_for`] rotates that choice into absolute grid
//! coordinates. The grid's y axis grows downward, matching screen space.

use crate::io::error::{CircuitError, invalid_parameter};
use crate::spatial::point::Point;
use std::fmt;
use std::str::FromStr;

/// Cardinal axis a lineage grows along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Towards negative y
    Up,
    /// Towards positive x
    Right,
    /// Towards positive y
    Down,
    /// Towards negative x
    Left,
}

impl Orientation {
    /// Every orientation, in seeding order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Human-readable label used in traces
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Right => "Right",
            Self::Down => "Down",
            Self::Left => "Left",
        }
    }

    /// Whether growth happens along the y axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Unit step straight ahead
    const fn forward(self) -> [i8; 2] {
        match self {
            Self::Up => [0, -1],
            Self::Right => [1, 0],
            Self::Down => [0, 1],
            Self::Left => [-1, 0],
        }
    }

    // Forward rotated a quarter turn clockwise on screen
    const fn right_hand(self) -> [i8; 2] {
        match self {
            Self::Up => [1, 0],
            Self::Right => [0, 1],
            Self::Down => [-1, 0],
            Self::Left => [0, -1],
        }
    }

    /// Coordinate of `point` along this orientation's growth axis
    pub const fn along(self, point: Point) -> f64 {
        if self.is_vertical() { point.y } else { point.x }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decision for one node in one level, relative to its own orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Continue straight ahead
    StepUp,
    /// Veer diagonally to the left of the heading
    StepUpLeft,
    /// Veer diagonally to the right of the heading
    StepUpRight,
    /// Close the lineage in place
    Terminate,
}

impl Move {
    /// Every move that produces a successor
    pub const STEPS: [Self; 3] = [Self::StepUp, Self::StepUpLeft, Self::StepUpRight];

    /// Label lookup shared by traces and weight-table parsing
    const LABELS: [(Self, &'static str); 4] = [
        (Self::StepUp, "up"),
        (Self::StepUpLeft, "up-left"),
        (Self::StepUpRight, "up-right"),
        (Self::Terminate, "end"),
    ];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(candidate, _)| *candidate == self)
            .map_or("?", |(_, label)| label)
    }

    /// Whether this move ends the lineage
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = CircuitError;

    /// Parses step labels only; `end` is never a weighted choice
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::LABELS
            .iter()
            .find(|(candidate, name)| *name == label && !candidate.is_terminal())
            .map(|(candidate, _)| *candidate)
            .ok_or_else(|| {
                invalid_parameter("move", &label, &"expected one of up, up-left, up-right")
            })
    }
}

/// Absolute grid offset produced by applying `action` to a node facing `orientation`
///
/// Each component is in {-1, 0, 1}; only [`Move::Terminate`] yields the zero vector.
pub fn offset_for(action: Move, orientation: Orientation) -> Point {
    let [fx, fy] = orientation.forward();
    let [rx, ry] = orientation.right_hand();

    let [x, y] = match action {
        Move::Terminate => [0, 0],
        Move::StepUp => [fx, fy],
        Move::StepUpLeft => [fx - rx, fy - ry],
        Move::StepUpRight => [fx + rx, fy + ry],
    };

    Point::new(f64::from(x), f64::from(y))
}

//! Frontier nodes, emitted segments and split strategies

use crate::io::error::CircuitError;
use crate::spatial::direction::{Move, Orientation, offset_for};
use crate::spatial::point::Point;
use std::fmt;
use std::str::FromStr;

/// A live growth point on the frontier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Grid position
    pub position: Point,
    /// Heading inherited from the originating seed
    pub orientation: Orientation,
    /// Number of non-terminating moves since the seed
    pub level: u32,
}

impl Node {
    /// Create a node
    pub const fn new(position: Point, orientation: Orientation, level: u32) -> Self {
        Self {
            position,
            orientation,
            level,
        }
    }

    /// The four level-zero seeds at the origin, one per orientation
    pub fn seeds() -> Vec<Self> {
        Orientation::ALL
            .iter()
            .map(|&orientation| Self::new(Point::ORIGIN, orientation, 0))
            .collect()
    }

    /// Position reached by applying `action`
    pub fn target(&self, action: Move) -> Point {
        self.position + offset_for(action, self.orientation)
    }

    /// Successor one level deeper at `position`, keeping the heading
    #[must_use]
    pub const fn successor(&self, position: Point) -> Self {
        Self::new(position, self.orientation, self.level + 1)
    }

    /// Coordinate along the node's own growth axis
    pub const fn along_axis(&self) -> f64 {
        self.orientation.along(self.position)
    }

    /// Whether `other` sits in the same row, i.e. shares the growth axis and
    /// the along-axis coordinate
    pub fn shares_row(&self, other: &Self) -> bool {
        self.orientation.is_vertical() == other.orientation.is_vertical()
            && (self.along_axis() - other.along_axis()).abs() < f64::EPSILON
    }
}

/// One transition emitted by the generator
///
/// `end` equals `start` for [`Move::Terminate`]; otherwise it is `start` plus
/// the move's offset rotated into `orientation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Decision that produced the segment
    pub action: Move,
    /// Heading of the source node
    pub orientation: Orientation,
    /// Source node position
    pub start: Point,
    /// Destination position
    pub end: Point,
    /// Level of the source node
    pub level: u32,
}

impl Segment {
    /// Segment for `action` taken by `node`
    pub fn from_node(node: &Node, action: Move) -> Self {
        Self {
            action,
            orientation: node.orientation,
            start: node.position,
            end: node.target(action),
            level: node.level,
        }
    }

    /// Whether this segment closes its lineage
    pub const fn is_terminal(&self) -> bool {
        self.action.is_terminal()
    }
}

/// How many branch attempts a node makes in one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitStrategy {
    /// One move
    NoSplit,
    /// Up to two distinct moves
    SplitTwo,
    /// Up to three distinct moves
    SplitThree,
}

impl SplitStrategy {
    /// Every strategy, in table order
    pub const ALL: [Self; 3] = [Self::NoSplit, Self::SplitTwo, Self::SplitThree];

    /// Number of distinct moves to attempt
    pub const fn branch_count(self) -> usize {
        match self {
            Self::NoSplit => 1,
            Self::SplitTwo => 2,
            Self::SplitThree => 3,
        }
    }

    /// Label used in weight tables and traces
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoSplit => "no-split",
            Self::SplitTwo => "split-2",
            Self::SplitThree => "split-3",
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SplitStrategy {
    type Err = CircuitError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.label() == label)
            .ok_or_else(|| CircuitError::InvalidSplitStrategy {
                label: label.to_string(),
            })
    }
}

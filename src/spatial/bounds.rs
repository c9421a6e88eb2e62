//! Symmetric grid bounds centred on the origin

use crate::algorithm::node::Node;
use crate::spatial::direction::Orientation;
use crate::spatial::point::Point;

/// Rectangle spanning `±half_width` by `±half_height` around the origin
///
/// Cell counts are incremented by one on construction so that the outer
/// boundary itself can be reached by growth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    width: f64,
    height: f64,
}

impl GridBounds {
    /// Bounds for a grid of `cells_wide` by `cells_high` cells
    pub fn from_cells(cells_wide: u32, cells_high: u32) -> Self {
        Self {
            width: f64::from(cells_wide) + 1.0,
            height: f64::from(cells_high) + 1.0,
        }
    }

    /// Incremented horizontal extent
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Incremented vertical extent
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Half of the incremented horizontal extent
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of the incremented vertical extent
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Extent along the growth axis of `orientation`
    pub const fn extent_along(&self, orientation: Orientation) -> f64 {
        if orientation.is_vertical() {
            self.height
        } else {
            self.width
        }
    }

    /// Whether `point` lies inside the rectangle, boundary included
    pub fn contains(&self, point: Point) -> bool {
        let (hw, hh) = (self.half_width(), self.half_height());
        -hw <= point.x && point.x <= hw && -hh <= point.y && point.y <= hh
    }
}

/// Whether `node` lies within `±half_width` horizontally and `±half_height` vertically
pub fn in_bounds(node: &Node, half_width: f64, half_height: f64) -> bool {
    let Point { x, y } = node.position;
    -half_width <= x && x <= half_width && -half_height <= y && y <= half_height
}

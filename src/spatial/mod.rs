//! Grid geometry for the growth engine

/// Symmetric bounds around the grid origin
pub mod bounds;
/// Orientations, relative moves and their absolute offsets
pub mod direction;
/// Real-valued grid coordinates
pub mod point;

pub use bounds::GridBounds;
pub use direction::{Move, Orientation, offset_for};
pub use point::Point;

//! Tests for symmetric grid bounds

#[cfg(test)]
mod tests {
    use circuitgrow::algorithm::node::Node;
    use circuitgrow::spatial::bounds::{GridBounds, in_bounds};
    use circuitgrow::spatial::direction::Orientation;
    use circuitgrow::spatial::point::Point;

    // Tests cell counts are incremented before halving
    // Verified by halving the raw cell counts
    #[test]
    fn test_extents_are_incremented() {
        let bounds = GridBounds::from_cells(1, 3);

        assert!((bounds.width() - 2.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 4.0).abs() < f64::EPSILON);
        assert!((bounds.half_width() - 1.0).abs() < f64::EPSILON);
        assert!((bounds.half_height() - 2.0).abs() < f64::EPSILON);
        assert!((bounds.extent_along(Orientation::Right) - 2.0).abs() < f64::EPSILON);
        assert!((bounds.extent_along(Orientation::Up) - 4.0).abs() < f64::EPSILON);
    }

    // Tests the origin is always inside and the boundary is reachable
    // Verified by using strict comparisons
    #[test]
    fn test_contains_boundary() {
        let bounds = GridBounds::from_cells(1, 1);

        assert!(bounds.contains(Point::ORIGIN));
        assert!(bounds.contains(Point::new(1.0, -1.0)));
        assert!(bounds.contains(Point::new(-1.0, 1.0)));
        assert!(!bounds.contains(Point::new(1.01, 0.0)));
        assert!(!bounds.contains(Point::new(0.0, -2.0)));
    }

    // Tests the node-level check agrees with the rectangle
    // Verified by swapping the horizontal and vertical extents
    #[test]
    fn test_in_bounds_node() {
        let bounds = GridBounds::from_cells(9, 3);
        let (hw, hh) = (bounds.half_width(), bounds.half_height());

        let origin = Node::new(Point::ORIGIN, Orientation::Up, 0);
        let wide = Node::new(Point::new(5.0, 0.0), Orientation::Right, 5);
        let tall = Node::new(Point::new(0.0, 3.0), Orientation::Down, 3);
        let beyond = Node::new(Point::new(6.0, 0.0), Orientation::Right, 6);

        assert!(in_bounds(&origin, hw, hh));
        assert!(in_bounds(&wide, hw, hh));
        assert!(!in_bounds(&tall, hw, hh));
        assert!(!in_bounds(&beyond, hw, hh));
    }
}

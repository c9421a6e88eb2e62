//! Tests for canvas layout and level-stamped rasterization

#[cfg(test)]
mod tests {
    use circuitgrow::algorithm::node::{Node, Segment};
    use circuitgrow::io::raster::{CanvasLayout, LevelRaster};
    use circuitgrow::spatial::direction::{Move, Orientation};
    use circuitgrow::spatial::point::Point;

    fn step(x: f64, y: f64, orientation: Orientation, level: u32) -> Segment {
        Segment::from_node(&Node::new(Point::new(x, y), orientation, level), Move::StepUp)
    }

    // Tests zero dimensions are rejected
    // Verified by removing the cell size check
    #[test]
    fn test_layout_validation() {
        assert!(CanvasLayout::new(0, 100, 10).is_err());
        assert!(CanvasLayout::new(100, 0, 10).is_err());
        assert!(CanvasLayout::new(100, 100, 0).is_err());
        assert!(CanvasLayout::new(100, 100, 10).is_ok());
    }

    // Tests cell counts floor and never drop below one
    // Verified by rounding cell counts up
    #[test]
    fn test_layout_cells() {
        let layout = CanvasLayout::new(105, 45, 10).unwrap();
        assert_eq!((layout.cells_wide(), layout.cells_high()), (10, 4));

        let tiny = CanvasLayout::new(5, 5, 10).unwrap();
        assert_eq!((tiny.cells_wide(), tiny.cells_high()), (1, 1));
    }

    // Tests grid points map around the canvas centre
    // Verified by omitting the centre offset
    #[test]
    fn test_to_canvas() {
        let layout = CanvasLayout::new(100, 60, 10).unwrap();

        assert_eq!(layout.to_canvas(Point::ORIGIN), Point::new(50.0, 30.0));
        assert_eq!(layout.to_canvas(Point::new(-1.0, 2.0)), Point::new(40.0, 50.0));
    }

    // Tests a straight segment stamps every pixel between its endpoints
    // Verified by stopping the line one step short
    #[test]
    fn test_draw_line_segment() {
        let mut raster = LevelRaster::new(CanvasLayout::new(100, 100, 10).unwrap());
        assert_eq!(raster.deepest_level(), None);

        raster.draw_segment(&step(0.0, 0.0, Orientation::Up, 0));

        assert_eq!(raster.deepest_level(), Some(0));
        assert_eq!(raster.drawn_pixels(0), 11);
        assert_eq!(raster.level_at(50, 50), Some(0));
        assert_eq!(raster.level_at(50, 40), Some(0));
        assert_eq!(raster.level_at(50, 39), None);
        assert_eq!(raster.level_at(500, 500), None);
    }

    // Tests overlapping pixels keep the earliest level
    // Verified by overwriting stamps unconditionally
    #[test]
    fn test_stamps_keep_earliest_level() {
        let mut raster = LevelRaster::new(CanvasLayout::new(100, 100, 10).unwrap());

        raster.draw_segments(&[
            step(0.0, 0.0, Orientation::Up, 0),
            step(0.0, -1.0, Orientation::Up, 3),
        ]);

        assert_eq!(raster.deepest_level(), Some(3));
        assert_eq!(raster.level_at(50, 40), Some(0));
        assert_eq!(raster.level_at(50, 35), Some(3));
        assert_eq!(raster.drawn_pixels(0), 11);
        assert_eq!(raster.drawn_pixels(3), 21);
        assert_eq!(raster.drawn().count(), 21);
    }

    // Tests end caps draw near their start point only
    // Verified by drawing terminations as full-length lines
    #[test]
    fn test_end_cap_stays_local() {
        let mut raster = LevelRaster::new(CanvasLayout::new(100, 100, 20).unwrap());
        let node = Node::new(Point::ORIGIN, Orientation::Right, 2);

        raster.draw_segment(&Segment::from_node(&node, Move::Terminate));

        assert_eq!(raster.deepest_level(), Some(2));
        assert!(raster.drawn_pixels(2) > 0);
        assert!(raster.drawn().all(|(x, y, level)| {
            level == 2 && (50..=60).contains(&x) && (45..=55).contains(&y)
        }));
    }

    // Tests segments leaving the canvas are clipped silently
    // Verified by wrapping out-of-range coordinates
    #[test]
    fn test_clipping() {
        let mut raster = LevelRaster::new(CanvasLayout::new(40, 40, 20).unwrap());

        raster.draw_segment(&step(2.0, 0.0, Orientation::Right, 1));
        raster.draw_segment(&step(-2.0, 0.0, Orientation::Left, 1));

        assert_eq!(raster.deepest_level(), Some(1));
        assert_eq!(raster.drawn_pixels(1), 0);
    }
}

//! Tests for point arithmetic

#[cfg(test)]
mod tests {
    use circuitgrow::spatial::point::Point;

    // Tests translation and scaling return new values
    // Verified by scaling only the x coordinate
    #[test]
    fn test_add_and_scale() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(-0.5, 3.0);

        assert_eq!(a + b, Point::new(1.0, 1.0));
        assert_eq!(a.scale(2.0), Point::new(3.0, -4.0));
        assert_eq!(a, Point::new(1.5, -2.0));
        assert_eq!(a.as_array(), [1.5, -2.0]);
    }

    // Tests the zero check and display format
    // Verified by swapping coordinates in the display output
    #[test]
    fn test_zero_and_display() {
        assert!(Point::ORIGIN.is_zero());
        assert!(Point::new(-0.0, 0.0).is_zero());
        assert!(!Point::new(0.0, 1.0).is_zero());
        assert_eq!(Point::new(2.0, -1.5).to_string(), "(2, -1.5)");
    }
}

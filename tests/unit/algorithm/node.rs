//! Tests for frontier nodes, segments and split strategy labels

#[cfg(test)]
mod tests {
    use circuitgrow::algorithm::node::{Node, Segment, SplitStrategy};
    use circuitgrow::io::error::CircuitError;
    use circuitgrow::spatial::direction::{Move, Orientation};
    use circuitgrow::spatial::point::Point;

    // Tests seeds cover every orientation at the origin on level zero
    // Verified by duplicating the first orientation
    #[test]
    fn test_seeds_are_one_per_orientation() {
        let seeds = Node::seeds();

        assert_eq!(
            seeds.iter().map(|node| node.orientation).collect::<Vec<_>>(),
            Orientation::ALL.to_vec()
        );
        assert!(
            seeds
                .iter()
                .all(|node| node.position == Point::ORIGIN && node.level == 0)
        );
    }

    // Tests successors keep the heading and go one level deeper
    // Verified by resetting the level of successors
    #[test]
    fn test_successor_increments_level() {
        let node = Node::new(Point::new(2.0, 3.0), Orientation::Left, 4);
        let next = node.successor(node.target(Move::StepUp));

        assert_eq!(next.position, Point::new(1.0, 3.0));
        assert_eq!(next.orientation, Orientation::Left);
        assert_eq!(next.level, 5);
    }

    // Tests termination segments have zero length
    // Verified by offsetting terminal segments one step forward
    #[test]
    fn test_terminal_segment_ends_where_it_starts() {
        let node = Node::new(Point::new(-1.0, 4.0), Orientation::Down, 4);

        let terminal = Segment::from_node(&node, Move::Terminate);
        assert!(terminal.is_terminal());
        assert_eq!(terminal.start, terminal.end);
        assert_eq!(terminal.level, 4);

        let step = Segment::from_node(&node, Move::StepUpLeft);
        assert!(!step.is_terminal());
        assert_eq!(step.start, node.position);
        assert_eq!(step.end, Point::new(0.0, 5.0));
        assert_eq!(step.orientation, Orientation::Down);
    }

    // Tests rows are shared only along the same axis and coordinate
    // Verified by comparing y coordinates regardless of orientation
    #[test]
    fn test_shares_row() {
        let a = Node::new(Point::new(0.0, 2.0), Orientation::Down, 2);
        let b = Node::new(Point::new(3.0, 2.0), Orientation::Up, 2);
        let c = Node::new(Point::new(2.0, 2.0), Orientation::Right, 2);
        let d = Node::new(Point::new(0.0, 3.0), Orientation::Down, 3);

        assert!(a.shares_row(&b));
        assert!(!a.shares_row(&c));
        assert!(!a.shares_row(&d));
        assert!(a.shares_row(&a));
    }

    // Tests split strategies map to their branch counts and parse from labels
    // Verified by swapping the split-2 and split-3 labels
    #[test]
    fn test_split_strategy_labels_and_counts() {
        for strategy in SplitStrategy::ALL {
            let parsed: SplitStrategy = strategy.label().parse().expect("label should parse");
            assert_eq!(parsed, strategy);
        }

        assert_eq!(SplitStrategy::NoSplit.branch_count(), 1);
        assert_eq!(SplitStrategy::SplitTwo.branch_count(), 2);
        assert_eq!(SplitStrategy::SplitThree.branch_count(), 3);
    }

    // Tests unknown split labels are reported as invalid strategies
    // Verified by mapping unknown labels to no-split
    #[test]
    fn test_invalid_split_strategy_label() {
        let result = "slpit-2".parse::<SplitStrategy>();

        match result {
            Err(CircuitError::InvalidSplitStrategy { label }) => assert_eq!(label, "slpit-2"),
            other => unreachable!("Expected InvalidSplitStrategy, got {other:?}"),
        }
    }
}

//! Tests for weighted label selection and mass-conserving removal

#[cfg(test)]
mod tests {
    use circuitgrow::io::error::CircuitError;
    use circuitgrow::math::probability::ProbabilityTable;
    use circuitgrow::math::random::ScriptedSource;

    fn abc() -> ProbabilityTable<char> {
        ProbabilityTable::new("abc", vec![('a', 0.5), ('b', 0.25), ('c', 0.25)])
    }

    // Tests cumulative selection in table order
    // Verified by iterating labels in reverse
    #[test]
    fn test_choose_follows_cumulative_weights() {
        let table = abc();

        assert_eq!(table.choose(0.0).ok(), Some('a'));
        assert_eq!(table.choose(0.5).ok(), Some('a'));
        assert_eq!(table.choose(0.51).ok(), Some('b'));
        assert_eq!(table.choose(0.75).ok(), Some('b'));
        assert_eq!(table.choose(0.99).ok(), Some('c'));
    }

    // Tests zero-weight labels are never selected, even for a zero sample
    // Verified by dropping the positive-weight condition
    #[test]
    fn test_choose_skips_zero_weight_labels() {
        let table = ProbabilityTable::new("gated", vec![(true, 0.0), (false, 1.0)]);

        assert_eq!(table.choose(0.0).ok(), Some(false));
        assert_eq!(table.choose(0.999).ok(), Some(false));
    }

    // Tests a table that cannot absorb the sample fails instead of guessing
    // Verified by returning the last label on exhaustion
    #[test]
    fn test_choose_reports_malformed_table() {
        let table = ProbabilityTable::new("short", vec![('x', 0.2), ('y', 0.3)]);

        match table.choose(0.9) {
            Err(CircuitError::MalformedTable {
                table,
                sample,
                total,
            }) => {
                assert_eq!(table, "short");
                assert!((sample - 0.9).abs() < f64::EPSILON);
                assert!((total - 0.5).abs() < f64::EPSILON);
            }
            other => unreachable!("Expected MalformedTable, got {other:?}"),
        }

        let empty: ProbabilityTable<char> = ProbabilityTable::new("empty", Vec::new());
        assert!(empty.choose(0.0).is_err());
    }

    // Tests removal keeps total mass and drops the label, for every label
    // Verified by redistributing over all labels including the removed one
    #[test]
    fn test_without_conserves_mass() {
        let tables = [
            abc(),
            ProbabilityTable::new("skewed", vec![('a', 0.9), ('b', 0.1), ('c', 0.0)]),
            ProbabilityTable::new("pair", vec![('a', 0.3), ('b', 0.7)]),
        ];

        for table in &tables {
            for label in table.labels() {
                let reduced = table.without(label);

                assert_eq!(reduced.len(), table.len() - 1);
                assert!(reduced.weight(label).is_none());
                assert!((reduced.total() - table.total()).abs() < 1e-12);
            }
        }
    }

    // Tests removed weight is split evenly between the remaining labels
    // Verified by assigning the removed weight to the first remaining label
    #[test]
    fn test_without_redistributes_evenly() {
        let reduced = abc().without('a');

        assert_eq!(reduced.labels().collect::<Vec<_>>(), vec!['b', 'c']);
        assert!((reduced.weight('b').unwrap_or(0.0) - 0.5).abs() < f64::EPSILON);
        assert!((reduced.weight('c').unwrap_or(0.0) - 0.5).abs() < f64::EPSILON);
    }

    // Tests edge cases of removal
    // Verified by dividing by zero remaining labels
    #[test]
    fn test_without_edge_cases() {
        let single = ProbabilityTable::new("single", vec![('a', 1.0)]);
        assert!(single.without('a').is_empty());

        let table = abc();
        assert_eq!(table.without('z'), table);
    }

    // Tests validation of user-supplied tables
    // Verified by accepting tables that sum to less than one
    #[test]
    fn test_validated_rejects_bad_tables() {
        assert!(ProbabilityTable::validated("ok", vec![('a', 0.5), ('b', 0.5)]).is_ok());
        assert!(ProbabilityTable::<char>::validated("empty", Vec::new()).is_err());
        assert!(ProbabilityTable::validated("negative", vec![('a', 1.5), ('b', -0.5)]).is_err());
        assert!(ProbabilityTable::validated("short", vec![('a', 0.5), ('b', 0.4)]).is_err());
        assert!(ProbabilityTable::validated("nan", vec![('a', f64::NAN), ('b', 1.0)]).is_err());
    }

    // Tests drawing consumes exactly one sample
    // Verified by drawing twice per call
    #[test]
    fn test_draw_uses_one_sample() {
        let table = abc();
        let mut source = ScriptedSource::new(vec![0.1, 0.6, 0.9]);

        assert_eq!(table.draw(&mut source).ok(), Some('a'));
        assert_eq!(table.draw(&mut source).ok(), Some('b'));
        assert_eq!(table.draw(&mut source).ok(), Some('c'));
        assert_eq!(source.consumed(), 3);
    }
}

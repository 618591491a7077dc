mod tests {
    use dodge_cube_light::graph::{
        BACKWARD, Direction, FORWARD, Junction, crossing_direction, entry_led, junction, parity,
    };
    use dodge_cube_light::topology::{EDGE_COUNT, first_led, last_led};

    const DIRECTIONS: [Direction; 2] = [Direction::Forward, Direction::Backward];

    fn targets(j: Junction) -> Vec<usize> {
        (0..j.arity()).map(|choice| j.edge(choice)).collect()
    }

    #[test]
    fn test_forward_row_zero() {
        assert_eq!(FORWARD[0], Junction::PassThrough(12));
        assert_eq!(BACKWARD[0], Junction::Branch(3, 4));
    }

    #[test]
    fn test_targets_are_valid_edges() {
        for e in 0..EDGE_COUNT {
            for direction in DIRECTIONS {
                for to in targets(junction(e, direction)) {
                    assert!(to < EDGE_COUNT);
                    assert_ne!(to, e, "edge {e} loops onto itself");
                }
            }
        }
    }

    #[test]
    fn test_junction_kind_follows_parity() {
        for e in 0..EDGE_COUNT {
            let (ahead, behind) = (FORWARD[e], BACKWARD[e]);
            if parity(e) {
                assert!(matches!(ahead, Junction::PassThrough(_)), "edge {e}");
                assert!(matches!(behind, Junction::Branch(_, _)), "edge {e}");
            } else {
                assert!(matches!(ahead, Junction::Branch(_, _)), "edge {e}");
                assert!(matches!(behind, Junction::PassThrough(_)), "edge {e}");
            }
        }
    }

    #[test]
    fn test_crossings_are_reversible() {
        // Turning around right after a crossing leads back onto the edge we came from
        for e in 0..EDGE_COUNT {
            for direction in DIRECTIONS {
                for to in targets(junction(e, direction)) {
                    let entered = crossing_direction(e, to, direction);
                    assert!(
                        junction(to, entered.flipped()).contains(e),
                        "edge {e} -> {to} is one way"
                    );
                }
            }
        }
    }

    #[test]
    fn test_crossing_direction() {
        assert_eq!(
            crossing_direction(0, 12, Direction::Forward),
            Direction::Backward
        );
        assert_eq!(
            crossing_direction(1, 2, Direction::Forward),
            Direction::Forward
        );
        assert_eq!(
            crossing_direction(0, 3, Direction::Backward),
            Direction::Backward
        );
        assert_eq!(
            crossing_direction(0, 4, Direction::Backward),
            Direction::Forward
        );
    }

    #[test]
    fn test_entry_led() {
        assert_eq!(entry_led(5, Direction::Forward), first_led(5));
        assert_eq!(entry_led(5, Direction::Backward), last_led(5));
    }

    #[test]
    fn test_junction_edge_choice_wraps() {
        let branch = Junction::Branch(2, 17);
        assert_eq!(branch.edge(0), 2);
        assert_eq!(branch.edge(1), 17);
        assert_eq!(branch.edge(2), 2);
        assert_eq!(Junction::PassThrough(9).edge(1), 9);
        assert!(branch.contains(17));
        assert!(!branch.contains(3));
    }
}

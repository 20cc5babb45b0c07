//! Tests for search algorithms.

use super::*;

// ============================================================================
// Linear Search Tests
// ============================================================================

mod linear {
    use super::*;

    #[test]
    fn test_found_in_unsorted() {
        let data = [11, 4, 30, 110, 20, 2, 70, 45];
        assert_eq!(linear_search(&data, 110), SearchOutcome::Found(3));
        assert_eq!(linear_search(&data, 45), SearchOutcome::Found(7));
    }

    #[test]
    fn test_returns_first_match() {
        let data = [5, 1, 5, 5];
        assert_eq!(linear_search(&data, 5), SearchOutcome::Found(0));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(linear_search(&[1, 2, 3], 6), SearchOutcome::NotFound);
    }

    #[test]
    fn test_empty() {
        assert_eq!(linear_search(&[], 1), SearchOutcome::NotFound);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(linear_search(&[42], 42), SearchOutcome::Found(0));
        assert_eq!(linear_search(&[42], 7), SearchOutcome::NotFound);
    }

    #[test]
    fn test_negative_values() {
        let data = [-3, -1, 0, 2];
        assert_eq!(linear_search(&data, -1), SearchOutcome::Found(1));
    }
}

// ============================================================================
// Binary Search Tests
// ============================================================================

mod binary {
    use super::*;

    #[test]
    fn test_found_everywhere() {
        let data: Vec<i64> = (0..50).map(|i| i * 3 + 1).collect();
        for (i, &value) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, value), SearchOutcome::Found(i));
        }
    }

    #[test]
    fn test_not_found_between_and_outside() {
        let data = [10, 20, 30, 40];
        assert_eq!(binary_search(&data, 5), SearchOutcome::NotFound);
        assert_eq!(binary_search(&data, 25), SearchOutcome::NotFound);
        assert_eq!(binary_search(&data, 45), SearchOutcome::NotFound);
    }

    #[test]
    fn test_below_first_element_terminates() {
        // Exercises the high = mid - 1 step at mid == 0.
        assert_eq!(binary_search(&[7], 3), SearchOutcome::NotFound);
        assert_eq!(binary_search(&[7, 9], 3), SearchOutcome::NotFound);
    }

    #[test]
    fn test_empty() {
        assert_eq!(binary_search(&[], 1), SearchOutcome::NotFound);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(binary_search(&[42], 42), SearchOutcome::Found(0));
    }

    #[test]
    fn test_probe_order_matches_floor_midpoint() {
        // First probe of [0, 4] is index 2.
        let data = [3, 3, 3, 3, 3];
        assert_eq!(binary_search(&data, 3), SearchOutcome::Found(2));
    }

    #[test]
    fn test_unsorted_input_does_not_panic() {
        let data = [9, 1, 8, 2, 7, 3];
        for target in -2..12 {
            let _ = binary_search(&data, target);
        }
    }

    #[test]
    fn test_extreme_values() {
        let data = [i64::MIN, 0, i64::MAX];
        assert_eq!(binary_search(&data, i64::MIN), SearchOutcome::Found(0));
        assert_eq!(binary_search(&data, i64::MAX), SearchOutcome::Found(2));
    }
}

// ============================================================================
// Agreement Tests
// ============================================================================

mod agreement {
    use super::*;

    #[test]
    fn test_binary_agrees_with_linear_on_sorted() {
        let data: Vec<i64> = vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100];
        for target in 0..=101 {
            let linear = linear_search(&data, target);
            let binary = binary_search(&data, target);
            assert_eq!(linear.is_found(), binary.is_found(), "target {}", target);
            if let Some(index) = binary.index() {
                assert_eq!(data[index], target);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let data = [2, 3, 5, 7, 11, 13];
        for algorithm in AlgorithmKind::ALL {
            let first = algorithm.search(&data, 11);
            let second = algorithm.search(&data, 11);
            assert_eq!(first, second);
        }
    }
}

// ============================================================================
// Algorithm Kind / Timing Tests
// ============================================================================

mod kind {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(AlgorithmKind::Linear.label(), "Lineal");
        assert_eq!(AlgorithmKind::Binary.label(), "Binaria");
        assert!(!AlgorithmKind::Linear.requires_sorted());
        assert!(AlgorithmKind::Binary.requires_sorted());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Linear".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Linear));
        assert_eq!("binaria".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Binary));
        assert!("ternary".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn test_timed_search_reports_outcome() {
        let data: Vec<i64> = (1..=1000).collect();
        let timed = timed_search(&AlgorithmKind::Linear, &data, 500);
        assert_eq!(timed.outcome, SearchOutcome::Found(499));
        assert!(timed.elapsed_ms() >= 0.0);
    }

    #[test]
    fn test_outcome_conversions() {
        assert_eq!(SearchOutcome::from(Some(3)), SearchOutcome::Found(3));
        assert_eq!(SearchOutcome::from(None), SearchOutcome::NotFound);
        assert_eq!(Option::<usize>::from(SearchOutcome::Found(1)), Some(1));
        assert_eq!(SearchOutcome::NotFound.to_string(), "not found");
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("-17"), Ok(-17));
        assert!(matches!(
            parse_target("1.5"),
            Err(SearchBenchError::InvalidTarget(_))
        ));
        assert!(matches!(parse_target(""), Err(SearchBenchError::InvalidTarget(_))));
    }
}

//! Cross-crate checks of search agreement and benchmark shape on fixture data.

use searchbench_benchmark::{Benchmark, BenchmarkConfig, CsvExporter};
use searchbench_core::{
    binary_search, linear_search, AlgorithmKind, SearchAlgorithm, SearchOutcome, TargetPolicy,
};
use searchbench_test::{
    absent_values, seeded_dataset, stepped_dataset, unsorted_sequence, with_duplicates,
    FIXTURE_SEED,
};

#[test]
fn linear_finds_every_element_of_unsorted_input() {
    let values = unsorted_sequence();
    for (i, &value) in values.iter().enumerate() {
        assert_eq!(linear_search(&values, value), SearchOutcome::Found(i));
    }
    assert_eq!(linear_search(&values, 999), SearchOutcome::NotFound);
}

#[test]
fn binary_agrees_with_linear_on_generated_data() {
    let data = seeded_dataset(2_000);

    for &value in data.iter().step_by(37) {
        let linear = linear_search(&data, value);
        let binary = binary_search(&data, value);
        assert_eq!(linear, binary, "distinct values share one index");
    }

    for value in absent_values(&data) {
        assert_eq!(linear_search(&data, value), SearchOutcome::NotFound);
        assert_eq!(binary_search(&data, value), SearchOutcome::NotFound);
    }
}

#[test]
fn binary_with_duplicates_lands_on_a_match() {
    let values = with_duplicates(50, 6);
    let SearchOutcome::Found(index) = binary_search(&values, 50) else {
        panic!("duplicate value must be found");
    };
    assert_eq!(values[index], 50);
    assert!(linear_search(&values, 50).is_found());
}

#[test]
fn single_element_and_empty() {
    for algorithm in AlgorithmKind::ALL {
        assert_eq!(algorithm.search(&[], 3), SearchOutcome::NotFound);
        assert_eq!(algorithm.search(&[3], 3), SearchOutcome::Found(0));
    }
}

#[test]
fn stepped_dataset_positions() {
    let data = stepped_dataset(10, 10, 100);
    assert_eq!(binary_search(&data, 500), SearchOutcome::Found(49));
    assert_eq!(binary_search(&data, 505), SearchOutcome::NotFound);
}

#[test]
fn benchmark_report_shape_and_export() {
    let config = BenchmarkConfig::new("Fixture")
        .with_sizes(vec![100, 1000])
        .with_repetitions(3)
        .with_seed(FIXTURE_SEED)
        .with_target(TargetPolicy::Middle);
    let report = Benchmark::new(config).run().unwrap();

    let map = report.to_map();
    assert_eq!(map.len(), 2);
    for averages in map.values() {
        assert_eq!(averages.len(), 2);
        assert!(averages.iter().all(|&ms| ms >= 0.0));
    }

    let csv = CsvExporter::to_string(&report);
    assert_eq!(csv.lines().count(), 1 + 2 * 2);
    assert!(csv.contains("\n100,Lineal,"));
    assert!(csv.contains("\n1000,Binaria,"));
}

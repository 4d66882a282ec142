//! End-to-end tests for the public API surface.

use approx::assert_relative_eq;
use simplestat::prelude::*;

#[test]
fn mean_matches_arithmetic_average() {
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
    assert_eq!(mean(&[1, 2, 3, 4]).unwrap(), 2.5);
    assert_relative_eq!(
        mean(&[0.1, 0.2, 0.3]).unwrap(),
        0.2,
        epsilon = 1e-12
    );
}

#[test]
fn mean_of_empty_input_fails() {
    let empty: [f64; 0] = [];
    assert_eq!(mean(&empty), Err(StatsError::EmptyInput));
}

#[test]
fn median_handles_odd_and_even_lengths() {
    assert_eq!(median(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
    assert_eq!(median(&[1, 2, 3, 4]).unwrap(), 2.5);
    // Order of the input does not matter.
    assert_eq!(median(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap(), 3.0);
    assert_eq!(median(&[9.0]).unwrap(), 9.0);
}

#[test]
fn mode_returns_the_most_frequent_value() {
    assert_eq!(mode(&[1, 2, 2, 3, 4]).unwrap(), 2);
    assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]).unwrap(), 2.0);
}

#[test]
fn mode_fails_without_a_strict_winner() {
    // All distinct values are unique.
    assert_eq!(mode(&[1, 2, 3]), Err(StatsError::NoUniqueMode));
    // All distinct values tie at two occurrences.
    assert_eq!(mode(&[1, 1, 2, 2]), Err(StatsError::NoUniqueMode));
    // A single repeated value is every distinct value tied with itself.
    assert_eq!(mode(&[5, 5, 5]), Err(StatsError::NoUniqueMode));
}

#[test]
fn variance_sample_and_population() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(variance(&data, VarianceMethod::Sample).unwrap(), 2.5);
    assert_eq!(variance(&data, VarianceMethod::Population).unwrap(), 2.0);
    assert_eq!(
        variance(&[1.0], VarianceMethod::Sample),
        Err(StatsError::InsufficientSampleSize { got: 1, min: 2 })
    );
}

#[test]
fn standard_deviation_rounds_to_expected_value() {
    let sd = standard_deviation(&[1.0, 2.0, 3.0, 4.0, 5.0], VarianceMethod::Sample).unwrap();
    assert_eq!((sd * 100.0).round() / 100.0, 1.58);
    assert_relative_eq!(sd * sd, 2.5, epsilon = 1e-12);
}

#[test]
fn range_spans_min_to_max() {
    assert_eq!(range_of_values(&[1, 2, 3, 4, 5]).unwrap(), 4);
    // Type-preserving: integer inputs give an integer result.
    let r: u32 = range_of_values(&[7u32, 3, 9]).unwrap();
    assert_eq!(r, 6);
    assert_eq!(range_of_values(&[-1.5, 2.0, 0.25]).unwrap(), 3.5);

    let empty: [i64; 0] = [];
    assert_eq!(range_of_values(&empty), Err(StatsError::EmptyInput));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let data = [0.1, 0.7, 0.2, 0.7, 0.9, 0.3];

    let first = mean(&data).unwrap();
    let second = mean(&data).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let first = standard_deviation(&data, VarianceMethod::Sample).unwrap();
    let second = standard_deviation(&data, VarianceMethod::Sample).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());

    let first = median(&data).unwrap();
    let second = median(&data).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn describe_agrees_with_individual_operations() {
    let data = [1.0, 2.0, 2.0, 3.0, 4.0];
    let summary = Descriptive::new().describe(&data).unwrap();

    assert_eq!(summary.count, data.len());
    assert_eq!(summary.mean, mean(&data).unwrap());
    assert_eq!(summary.median, median(&data).unwrap());
    assert_eq!(summary.mode, Some(mode(&data).unwrap()));
    assert_eq!(
        summary.variance,
        variance(&data, VarianceMethod::Sample).unwrap()
    );
    assert_eq!(
        summary.std_dev,
        standard_deviation(&data, VarianceMethod::Sample).unwrap()
    );
    assert_eq!(summary.range, range_of_values(&data).unwrap());
    assert_eq!(summary.variance_method, VarianceMethod::Sample);
}

#[test]
fn describe_with_population_estimator() {
    let summary = Descriptive::new()
        .variance_method(VarianceMethod::Population)
        .describe(&[1, 2, 2, 3, 4])
        .unwrap();

    assert_eq!(summary.variance_method, VarianceMethod::Population);
    assert_relative_eq!(summary.variance, 1.04, epsilon = 1e-12);
    assert_eq!(summary.mode, Some(2));
    assert_eq!(summary.range, 3);

    let rendered = summary.to_string();
    assert!(rendered.contains("Variance method: population"));
    assert!(rendered.contains("Mode: 2"));
}

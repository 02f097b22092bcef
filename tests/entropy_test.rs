// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for perfection entropies.

mod common;

use approx::assert_relative_eq;
use common::Fixture;
use pseudoperfect_entropy::entropy::{shannon, shannon_closed_form, DEFAULT_Q};
use pseudoperfect_entropy::state::Counters;
use pseudoperfect_entropy::{Precision, PreciseEntropy, SearchOptions};

#[test]
fn test_entropy_of_six_and_twelve() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let options = SearchOptions::default();

    let six = ctx.perfection_entropy(6u64, &options).unwrap();
    assert_eq!(six.len(), 1);
    assert_relative_eq!(six[0].entropy, 1.4591479170272448, epsilon = 1e-12);

    // (2, 4, 6) is (1, 2, 3) scaled, so their entropies agree
    let twelve = ctx.perfection_entropy(12u64, &options).unwrap();
    assert_eq!(twelve.len(), 2);
    assert_relative_eq!(twelve[0].entropy, six[0].entropy, epsilon = 1e-12);
    assert_relative_eq!(twelve[1].entropy, 1.7295739585136223, epsilon = 1e-12);
}

#[test]
fn test_input_forms() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let options = SearchOptions::default();

    let from_int = ctx.perfection_entropy(20i32, &options).unwrap();
    let from_text = ctx.perfection_entropy("20", &options).unwrap();
    assert_eq!(from_int, from_text);
    assert_relative_eq!(from_int[0].entropy, 1.6804820237218405, epsilon = 1e-12);
}

#[test]
fn test_integral_float_is_rejected() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let options = SearchOptions::default();

    assert!(ctx.perfection_entropy(20.0f64, &options).unwrap().is_empty());
    assert!(ctx.perfection_entropy("20.0", &options).unwrap().is_empty());
    assert_eq!(ctx.statistics.get(Counters::RejectedInputs), 2);
}

#[test]
fn test_invalid_input_is_empty() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let options = SearchOptions::default();

    assert!(ctx.perfection_entropy(0u64, &options).unwrap().is_empty());
    assert!(ctx.perfection_entropy(-5i32, &options).unwrap().is_empty());
    assert!(ctx.perfection_entropy(2.5f64, &options).unwrap().is_empty());
    assert!(ctx.perfection_entropy(f64::NAN, &options).unwrap().is_empty());
    assert!(ctx.perfection_entropy(u128::MAX, &options).unwrap().is_empty());
    assert!(ctx.tsallis_perfection_entropy(-1i64, DEFAULT_Q, &options).unwrap().is_empty());
    assert!(ctx
        .precise_perfection_entropy("twelve", Precision::Exact, &options)
        .unwrap()
        .is_empty());
    assert_eq!(ctx.statistics.get(Counters::RejectedInputs), 7);
    assert_eq!(ctx.statistics.get(Counters::CandidatesExamined), 0);
}

#[test]
fn test_weird_number_has_no_entropy() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    assert!(ctx
        .perfection_entropy(70u64, &SearchOptions::exhaustive())
        .unwrap()
        .is_empty());
}

#[test]
fn test_tsallis_entropy() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let records = ctx
        .tsallis_perfection_entropy(12u64, DEFAULT_Q, &SearchOptions::default())
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_relative_eq!(records[0].entropy, 22.0 / 36.0, epsilon = 1e-12);
    // 1 - (1 + 4 + 9 + 36) / 144
    assert_relative_eq!(records[1].entropy, 94.0 / 144.0, epsilon = 1e-12);
}

#[test]
fn test_precise_entropy() {
    let fixture = Fixture::new();
    let mut ctx = fixture.context();
    let options = SearchOptions::default();

    let decimal = ctx
        .precise_perfection_entropy(20u64, Precision::Digits(10), &options)
        .unwrap();
    assert_eq!(decimal[0].entropy.to_string(), "1.6804820237");

    let exact = ctx
        .precise_perfection_entropy(12u64, Precision::Exact, &options)
        .unwrap();
    assert_eq!(exact.len(), 2);
    assert_eq!(exact[0].entropy.to_string(), "2/3 + 1/2*log2(3)");
    for record in &exact {
        assert!(matches!(record.entropy, PreciseEntropy::ClosedForm(_)));
        assert_relative_eq!(
            record.entropy.to_f64(),
            shannon(12, record.partition.parts()),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_closed_form_of_perfect_numbers() {
    // Perfect numbers 2^(p-1)(2^p - 1): only the Mersenne prime appears in a log
    let form = shannon_closed_form(496, &[1, 2, 4, 8, 16, 31, 62, 124, 248]);
    assert_eq!(form.logs().keys().copied().collect::<Vec<_>>(), vec![31]);
    assert_relative_eq!(
        form.to_f64(),
        shannon(496, &[1, 2, 4, 8, 16, 31, 62, 124, 248]),
        epsilon = 1e-12
    );
}

#[test]
fn test_multiplicity_entropy() {
    let fixture = Fixture::new();
    let ctx = fixture.context();
    assert_eq!(ctx.multiplicity_entropy(1), 0.0);
    assert_eq!(ctx.multiplicity_entropy(7), 0.0);
    assert_eq!(ctx.multiplicity_entropy(1024), 0.0);
    assert_relative_eq!(ctx.multiplicity_entropy(6), 1.0, epsilon = 1e-12);
    // 360 = 2^3 · 3^2 · 5
    let expected = shannon(6, &[3, 2, 1]);
    assert_relative_eq!(ctx.multiplicity_entropy(360), expected, epsilon = 1e-12);
}

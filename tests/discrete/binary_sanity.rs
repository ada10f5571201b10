// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use rstest::*;
use tsentropy::estimators::GlobalValue;
use tsentropy::estimators::approaches::discrete::binary::binary_shannon;
use tsentropy::estimators::approaches::discrete::{BinaryEntropy, BinaryWeighting};
use tsentropy::estimators::error::EntropyError;

use crate::test_helpers::{generate_bits, same_bits};

fn bien(bits: &[f64], weighting: BinaryWeighting) -> f64 {
    BinaryEntropy::new(bits.to_vec(), weighting)
        .unwrap()
        .global_value()
}

#[rstest]
#[case(BinaryWeighting::Standard)]
#[case(BinaryWeighting::Tres)]
fn constant_sequences_have_zero_entropy(#[case] weighting: BinaryWeighting) {
    assert_eq!(bien(&[0.0; 8], weighting), 0.0);
    assert_eq!(bien(&[1.0; 8], weighting), 0.0);
}

#[rstest]
#[case(BinaryWeighting::Standard)]
#[case(BinaryWeighting::Tres)]
fn short_sequences_are_nan(#[case] weighting: BinaryWeighting) {
    assert!(bien(&[], weighting).is_nan());
    assert!(bien(&[1.0], weighting).is_nan());
}

#[rstest]
#[case(BinaryWeighting::Standard)]
#[case(BinaryWeighting::Tres)]
fn two_distinct_bits_is_one(#[case] weighting: BinaryWeighting) {
    assert_abs_diff_eq!(bien(&[0.0, 1.0], weighting), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(bien(&[1.0, 0.0], weighting), 1.0, epsilon = 1e-15);
}

#[test]
fn alternating_length_four() {
    // Only the 0th order contributes (p = 1/2); the first derivative is all ones.
    let bits = [0.0, 1.0, 0.0, 1.0];
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Standard), 1.0 / 7.0, epsilon = 1e-15);
    let tres_norm = 1.0 + 3f64.log2() + 2.0;
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Tres), 1.0 / tres_norm, epsilon = 1e-15);
}

#[test]
fn alternating_length_six() {
    let bits = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Standard), 1.0 / 31.0, epsilon = 1e-15);
    // Σ_{k=0}^{4} log2(k+2) = log2(2·3·4·5·6)
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Tres), 1.0 / 720f64.log2(), epsilon = 1e-14);
}

#[test]
fn two_contributing_orders() {
    // 0011 -> p0 = 1/2; derivative 010 -> p1 = 1/3; derivative 11 stops.
    let bits = [0.0, 0.0, 1.0, 1.0];
    let h1 = binary_shannon(1.0 / 3.0);
    let standard = (1.0 + 2.0 * h1) / 7.0;
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Standard), standard, epsilon = 1e-14);
    let tres = (1.0 + h1 * 3f64.log2()) / (1.0 + 3f64.log2() + 2.0);
    assert_abs_diff_eq!(bien(&bits, BinaryWeighting::Tres), tres, epsilon = 1e-14);
}

#[test]
fn binary_shannon_values() {
    assert_abs_diff_eq!(binary_shannon(0.5), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(binary_shannon(0.25), binary_shannon(0.75), epsilon = 1e-15);
    assert_abs_diff_eq!(binary_shannon(0.25), 0.8112781244591328, epsilon = 1e-12);
}

#[rstest]
#[case(BinaryWeighting::Standard)]
#[case(BinaryWeighting::Tres)]
fn random_bits_stay_in_unit_interval(#[case] weighting: BinaryWeighting) {
    for seed in 0..10 {
        let bits = generate_bits(32, seed);
        let v = bien(&bits, weighting);
        assert!((0.0..=1.0 + 1e-12).contains(&v), "seed {seed}: {v}");
    }
}

#[test]
fn long_sequences_do_not_overflow() {
    // 2^(N-1) alone would overflow an f64 for N = 2000
    let bits = generate_bits(2000, 99);
    let v = bien(&bits, BinaryWeighting::Standard);
    assert!(v.is_finite());
    assert!((0.0..=1.0 + 1e-12).contains(&v));
}

#[test]
fn non_binary_values_are_rejected() {
    let err = BinaryEntropy::new(vec![0.0, 1.0, 0.5], BinaryWeighting::Standard)
        .err()
        .unwrap();
    assert_eq!(err, EntropyError::NonBinaryValue { index: 2, value: 0.5 });
}

#[test]
fn from_bits_matches_new() {
    let bits = vec![1u8, 1, 0, 1, 0, 0, 0, 1];
    let a = BinaryEntropy::from_bits(Array1::from(bits.clone()), BinaryWeighting::Tres);
    let b = BinaryEntropy::new(
        bits.iter().map(|&b| b as f64).collect::<Vec<_>>(),
        BinaryWeighting::Tres,
    )
    .unwrap();
    assert!(same_bits(a.global_value(), b.global_value()));
    assert_eq!(a.weighting(), BinaryWeighting::Tres);
}

#[test]
fn binary_entropy_is_deterministic() {
    let bits = generate_bits(64, 5);
    let a = bien(&bits, BinaryWeighting::Standard);
    let b = bien(&bits, BinaryWeighting::Standard);
    assert!(same_bits(a, b));
}

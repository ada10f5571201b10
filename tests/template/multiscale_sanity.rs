// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tsentropy::estimators::approaches::template::{
    MatchBackend, MultiscaleEntropy, MultiscaleParams, SampleEntropy, SampleEntropyOutcome,
};
use tsentropy::estimators::error::EntropyError;
use tsentropy::estimators::utils::coarse_grain::coarse_grain;
use tsentropy::estimators::{GlobalValue, ScaleValues};

use crate::test_helpers::{generate_gaussian_series, same_bits};

#[test]
fn scale_one_is_plain_sample_entropy() {
    let series = generate_gaussian_series(300, 0.0, 1.0, 3);
    let mse = MultiscaleEntropy::new(series.clone(), &[1]).unwrap().scale_values();
    let sampen = SampleEntropy::new(series, 2, 0.2).unwrap().global_value();
    assert_eq!(mse.len(), 1);
    assert!(same_bits(mse[&1], sampen));
}

#[test]
fn each_scale_uses_its_coarse_grained_series() {
    let series = generate_gaussian_series(600, 0.0, 1.0, 4);
    let mse = MultiscaleEntropy::new(series.clone(), &[2, 3, 5]).unwrap();
    for scale in [2, 3, 5] {
        let expected = SampleEntropy::new(coarse_grain(&series, scale), 2, 0.2)
            .unwrap()
            .global_value();
        let est = mse.estimator(scale).unwrap();
        assert!(same_bits(est.global_value(), expected), "scale {scale}");
        assert_eq!(est.len(), series.len().div_ceil(scale));
    }
}

#[test]
fn duplicate_scales_collapse() {
    let series = generate_gaussian_series(200, 0.0, 1.0, 5);
    let mse = MultiscaleEntropy::new(series, &[3, 1, 3, 2, 1]).unwrap();
    assert_eq!(mse.scales().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(mse.scale_values().len(), 3);
}

#[test]
fn large_scale_on_short_series_is_insufficient() {
    let series = generate_gaussian_series(20, 0.0, 1.0, 6);
    let mse = MultiscaleEntropy::new(series, &[1, 20, 50]).unwrap();
    assert_eq!(mse.outcome(20), Some(SampleEntropyOutcome::InsufficientData));
    assert_eq!(mse.outcome(50), Some(SampleEntropyOutcome::InsufficientData));
    assert!(mse.scale_values()[&50].is_nan());
    assert_eq!(mse.outcome(7), None);
}

#[test]
fn empty_scale_list_is_rejected() {
    let err = MultiscaleEntropy::new(vec![1.0, 2.0, 3.0], &[]).err().unwrap();
    assert_eq!(err, EntropyError::EmptyScaleFactors);
}

#[test]
fn zero_scale_is_rejected() {
    let err = MultiscaleEntropy::new(vec![1.0, 2.0, 3.0], &[1, 0, 2]).err().unwrap();
    assert_eq!(err, EntropyError::InvalidScaleFactor { scale: 0 });
}

#[test]
fn invalid_sample_entropy_parameters_are_rejected() {
    let params = MultiscaleParams {
        m: 0,
        ..MultiscaleParams::default()
    };
    let err = MultiscaleEntropy::with_params(vec![1.0, 2.0, 3.0], &[1], params)
        .err()
        .unwrap();
    assert_eq!(err, EntropyError::InvalidEmbeddingDimension { m: 0 });
}

#[test]
fn complexity_index_sums_finite_values() {
    let series = generate_gaussian_series(400, 0.0, 1.0, 7);
    let mse = MultiscaleEntropy::new(series, &[1, 2, 3, 400]).unwrap();
    let expected: f64 = mse
        .scale_values()
        .values()
        .filter(|v| v.is_finite())
        .sum();
    assert_eq!(mse.complexity_index(), expected);
    assert!(mse.scale_values()[&400].is_nan());
}

#[test]
fn white_noise_stays_irregular_across_scales() {
    // the tolerance is rescaled per scale, and averaged white noise is still white
    let series = generate_gaussian_series(3000, 0.0, 1.0, 8);
    let mse = MultiscaleEntropy::new(series, &[1, 3]).unwrap().scale_values();
    for (scale, h) in &mse {
        assert!((1.8..2.6).contains(h), "scale {scale}: {h}");
    }
}

#[test]
fn backend_is_forwarded_to_each_scale() {
    let series = generate_gaussian_series(300, 0.0, 1.0, 9);
    let params = MultiscaleParams {
        backend: MatchBackend::KdTree,
        ..MultiscaleParams::default()
    };
    let tree = MultiscaleEntropy::with_params(series.clone(), &[1, 2], params).unwrap();
    let brute = MultiscaleEntropy::new(series, &[1, 2]).unwrap();
    assert_eq!(tree.params().backend, MatchBackend::KdTree);
    for scale in [1, 2] {
        assert_eq!(
            tree.estimator(scale).unwrap().match_counts(),
            brute.estimator(scale).unwrap().match_counts()
        );
    }
}

#[cfg(feature = "parallel")]
#[test]
fn scale_parallel_evaluation_matches_per_scale_estimates() {
    use tsentropy::estimators::approaches::template::SampleEntropyParams;
    use tsentropy::estimators::approaches::template::multiscale::evaluate_scales;

    let series = generate_gaussian_series(900, 0.0, 1.0, 10);
    let scales = [1, 2, 3, 4, 6, 9];
    let evaluated = evaluate_scales(&series, &scales, SampleEntropyParams::default()).unwrap();
    assert_eq!(evaluated.keys().copied().collect::<Vec<_>>(), scales.to_vec());
    for (&scale, est) in &evaluated {
        let expected = SampleEntropy::new(coarse_grain(&series, scale), 2, 0.2).unwrap();
        assert_eq!(est.match_counts(), expected.match_counts(), "scale {scale}");
        assert!(same_bits(est.global_value(), expected.global_value()));
    }
}

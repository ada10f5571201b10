// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tsentropy
//!
//! Complexity and irregularity measures for a single numeric time series:
//! Sample Entropy, discretized Shannon entropy, binary entropy (BiEntropy and
//! Tres BiEntropy) and Multiscale Entropy.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsentropy::estimators::entropy::Entropy;
//! use tsentropy::estimators::traits::{GlobalValue, ScaleValues};
//! use ndarray::array;
//!
//! let series = array![1.0, 2.0, 1.5, 2.5, 1.0, 2.0, 1.5, 2.5, 1.2, 2.1];
//!
//! let sampen = Entropy::new_sample(series.clone(), 2, 0.2).unwrap().global_value();
//! let shannon = Entropy::new_shannon_discrete(series.clone()).global_value();
//! let mse = Entropy::new_multiscale(series, &[1, 2]).unwrap().scale_values();
//!
//! let bits = array![0.0, 1.0, 0.0, 1.0];
//! let bien = Entropy::new_binary(bits).unwrap().global_value();
//! assert!((bien - 1.0 / 7.0).abs() < 1e-12);
//! # let _ = (sampen, shannon, mse);
//! ```
//!
//! ## Measures
//!
//! | Measure | Input | Result |
//! |---------|-------|--------|
//! | Sample Entropy | real series, `m`, `r` | `ln(cm / cm1)`, `+inf`, or `NaN` |
//! | Shannon (discretized) | real series | bits, `NaN` for N < 2 |
//! | BiEntropy / Tres BiEntropy | 0/1 series | value in [0, 1], `NaN` for N < 2 |
//! | Multiscale Entropy | real series, scale factors | Sample Entropy per scale |
//!
//! Undefined results are `NaN` and divergent ones `+inf`; only invalid parameters
//! produce an [`EntropyError`]. [`SampleEntropyOutcome`] keeps the reason behind a
//! `NaN` Sample Entropy.
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-backed template matching and scale-parallel multiscale evaluation
//! - `gpu_support`: wgpu compute backend for template matching on large series

use std::collections::BTreeMap;

pub mod estimators;

pub use estimators::approaches::template::SampleEntropyOutcome;
pub use estimators::error::EntropyError;
pub use estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues, ScaleValues};

use estimators::approaches::discrete::{BinaryEntropy, BinaryWeighting, ShannonEntropy};
use estimators::approaches::template::{MultiscaleEntropy, SampleEntropy};

/// Sample Entropy of `series` with embedding dimension `m` and tolerance ratio `r`.
pub fn sample_entropy(series: &[f64], m: usize, r: f64) -> Result<f64, EntropyError> {
    Ok(SampleEntropy::new(series.to_vec(), m, r)?.global_value())
}

/// Shannon entropy in bits of `series` discretized to buckets of width 0.01.
pub fn shannon_entropy_discrete(series: &[f64]) -> f64 {
    ShannonEntropy::new(series.to_vec()).global_value()
}

/// BiEntropy of a 0/1 series; `use_tres_variant` selects logarithmic weighting.
pub fn binary_entropy(series: &[f64], use_tres_variant: bool) -> Result<f64, EntropyError> {
    let weighting = if use_tres_variant {
        BinaryWeighting::Tres
    } else {
        BinaryWeighting::Standard
    };
    Ok(BinaryEntropy::new(series.to_vec(), weighting)?.global_value())
}

/// Multiscale Entropy: Sample Entropy (m = 2, r = 0.2) of each coarse-grained series.
pub fn multiscale_entropy(
    series: &[f64],
    scale_factors: &[usize],
) -> Result<BTreeMap<usize, f64>, EntropyError> {
    Ok(MultiscaleEntropy::new(series.to_vec(), scale_factors)?.scale_values())
}

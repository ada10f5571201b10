// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multiscale Entropy (MSE).
//!
//! For each scale factor `s` the series is coarse-grained into block means of
//! `s` consecutive values and Sample Entropy is evaluated on the result, with
//! m = 2 and r = 0.2 unless configured otherwise. Note that the tolerance is
//! recomputed from each coarse-grained series.
//!
//! Reference: Costa, Goldberger & Peng (2005), Phys. Rev. E 71, 021906.

use std::collections::{BTreeMap, BTreeSet};

use ndarray::Array1;
use tracing::debug;

use crate::estimators::approaches::template::sample_entropy::{
    MatchBackend, SampleEntropy, SampleEntropyOutcome, SampleEntropyParams,
};
use crate::estimators::error::EntropyError;
use crate::estimators::traits::{GlobalValue, ScaleValues};
use crate::estimators::utils::coarse_grain::coarse_grain;

/// Sample Entropy parameters applied at every scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiscaleParams {
    pub m: usize,
    pub r: f64,
    pub backend: MatchBackend,
}

impl Default for MultiscaleParams {
    fn default() -> Self {
        let SampleEntropyParams { m, r, backend } = SampleEntropyParams::default();
        Self { m, r, backend }
    }
}

impl From<MultiscaleParams> for SampleEntropyParams {
    fn from(p: MultiscaleParams) -> Self {
        SampleEntropyParams::new(p.m, p.r).with_backend(p.backend)
    }
}

pub struct MultiscaleEntropy {
    params: MultiscaleParams,
    per_scale: BTreeMap<usize, SampleEntropy>,
}

impl MultiscaleEntropy {
    /// Evaluate Sample Entropy (m = 2, r = 0.2) at each distinct scale factor.
    pub fn new(
        data: impl Into<Array1<f64>>,
        scale_factors: &[usize],
    ) -> Result<Self, EntropyError> {
        Self::with_params(data, scale_factors, MultiscaleParams::default())
    }

    pub fn with_params(
        data: impl Into<Array1<f64>>,
        scale_factors: &[usize],
        params: MultiscaleParams,
    ) -> Result<Self, EntropyError> {
        if scale_factors.is_empty() {
            return Err(EntropyError::EmptyScaleFactors);
        }
        if let Some(&scale) = scale_factors.iter().find(|&&s| s == 0) {
            return Err(EntropyError::InvalidScaleFactor { scale });
        }
        let sampen_params = SampleEntropyParams::from(params);
        sampen_params.validate()?;

        let data = data.into();
        let series = data.to_vec();
        let scales: Vec<usize> = scale_factors
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        debug!(n = series.len(), scales = scales.len(), "multiscale entropy");

        let per_scale = evaluate_scales(&series, &scales, sampen_params)?;
        Ok(Self { params, per_scale })
    }

    pub fn params(&self) -> MultiscaleParams {
        self.params
    }

    /// Distinct scale factors, ascending.
    pub fn scales(&self) -> impl Iterator<Item = usize> + '_ {
        self.per_scale.keys().copied()
    }

    /// Estimator evaluated on the series coarse-grained at `scale`.
    pub fn estimator(&self, scale: usize) -> Option<&SampleEntropy> {
        self.per_scale.get(&scale)
    }

    pub fn outcome(&self, scale: usize) -> Option<SampleEntropyOutcome> {
        self.per_scale.get(&scale).map(SampleEntropy::outcome)
    }

    /// Complexity index: the sum of the finite per-scale entropies.
    pub fn complexity_index(&self) -> f64 {
        self.per_scale
            .values()
            .map(GlobalValue::global_value)
            .filter(|v| v.is_finite())
            .sum()
    }
}

impl ScaleValues for MultiscaleEntropy {
    fn scale_values(&self) -> BTreeMap<usize, f64> {
        self.per_scale
            .iter()
            .map(|(&scale, est)| (scale, est.global_value()))
            .collect()
    }
}

fn evaluate_scale(
    series: &[f64],
    scale: usize,
    params: SampleEntropyParams,
) -> Result<(usize, SampleEntropy), EntropyError> {
    let coarse = coarse_grain(series, scale);
    Ok((scale, SampleEntropy::with_params(coarse, params)?))
}

/// Sample Entropy of `series` coarse-grained at each of `scales`, one rayon task per scale.
///
/// Scales must be non-zero; validation happens in [`MultiscaleEntropy::with_params`].
#[cfg(feature = "parallel")]
pub fn evaluate_scales(
    series: &[f64],
    scales: &[usize],
    params: SampleEntropyParams,
) -> Result<BTreeMap<usize, SampleEntropy>, EntropyError> {
    use rayon::prelude::*;

    scales
        .par_iter()
        .map(|&scale| evaluate_scale(series, scale, params))
        .collect()
}

/// Sample Entropy of `series` coarse-grained at each of `scales`.
///
/// Scales must be non-zero; validation happens in [`MultiscaleEntropy::with_params`].
#[cfg(not(feature = "parallel"))]
pub fn evaluate_scales(
    series: &[f64],
    scales: &[usize],
    params: SampleEntropyParams,
) -> Result<BTreeMap<usize, SampleEntropy>, EntropyError> {
    scales
        .iter()
        .map(|&scale| evaluate_scale(series, scale, params))
        .collect()
}

use ndarray::Array1;

use crate::estimators::approaches::{discrete, template};
use crate::estimators::error::EntropyError;
pub use crate::estimators::traits::{GlobalValue, LocalValues, ScaleValues};

/// Entropy estimation methods for single time series
///
/// This struct provides static methods for creating entropy estimators
/// for the supported measures.
pub struct Entropy;

impl Entropy {
    /// Creates a Sample Entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional series
    /// * `m` - Embedding dimension (template length), at least 1
    /// * `r` - Tolerance as a fraction of the sample standard deviation, non-negative
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if `m == 0` or `r` is negative or not finite.
    pub fn new_sample(
        data: impl Into<Array1<f64>>,
        m: usize,
        r: f64,
    ) -> Result<template::SampleEntropy, EntropyError> {
        template::SampleEntropy::new(data, m, r)
    }

    /// Creates a Sample Entropy estimator that counts template pairs with `backend`
    ///
    /// # GPU Acceleration
    ///
    /// When compiled with the `gpu_support` feature flag, [`template::MatchBackend::Gpu`]
    /// runs the pair counting in a compute shader for series with at least 2000 templates.
    /// Smaller series and machines without an adapter use the CPU path.
    pub fn new_sample_with_backend(
        data: impl Into<Array1<f64>>,
        m: usize,
        r: f64,
        backend: template::MatchBackend,
    ) -> Result<template::SampleEntropy, EntropyError> {
        let params = template::SampleEntropyParams::new(m, r).with_backend(backend);
        template::SampleEntropy::with_params(data, params)
    }

    /// Creates a Shannon entropy estimator (bits) over the series discretized to 0.01 buckets
    pub fn new_shannon_discrete(data: impl Into<Array1<f64>>) -> discrete::ShannonEntropy {
        discrete::ShannonEntropy::new(data)
    }

    /// Creates a BiEntropy estimator for a 0/1 series
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::NonBinaryValue`] if any value is neither 0 nor 1.
    pub fn new_binary(data: impl Into<Array1<f64>>) -> Result<discrete::BinaryEntropy, EntropyError> {
        discrete::BinaryEntropy::new(data, discrete::BinaryWeighting::Standard)
    }

    /// Creates a Tres BiEntropy (logarithmically weighted) estimator for a 0/1 series
    pub fn new_tres_binary(
        data: impl Into<Array1<f64>>,
    ) -> Result<discrete::BinaryEntropy, EntropyError> {
        discrete::BinaryEntropy::new(data, discrete::BinaryWeighting::Tres)
    }

    /// Creates a Multiscale Entropy estimator over the given scale factors
    ///
    /// Duplicated scale factors are evaluated once.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError`] if `scale_factors` is empty or contains 0.
    pub fn new_multiscale(
        data: impl Into<Array1<f64>>,
        scale_factors: &[usize],
    ) -> Result<template::MultiscaleEntropy, EntropyError> {
        template::MultiscaleEntropy::new(data, scale_factors)
    }

    /// Creates a Multiscale Entropy estimator with custom Sample Entropy parameters
    pub fn new_multiscale_with_params(
        data: impl Into<Array1<f64>>,
        scale_factors: &[usize],
        params: template::MultiscaleParams,
    ) -> Result<template::MultiscaleEntropy, EntropyError> {
        template::MultiscaleEntropy::with_params(data, scale_factors, params)
    }
}

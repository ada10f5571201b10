// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Parameter errors raised when an estimator is constructed.
///
/// Degenerate *data* never produces an error; it is reported as `NaN` or `+inf`
/// by the estimator. Only caller-supplied parameters outside their domain end up here.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EntropyError {
    #[error("embedding dimension must be at least 1, got {m}")]
    InvalidEmbeddingDimension { m: usize },

    #[error("tolerance ratio must be finite and non-negative, got {r}")]
    InvalidTolerance { r: f64 },

    #[error("at least one scale factor is required")]
    EmptyScaleFactors,

    #[error("scale factors must be positive, got {scale}")]
    InvalidScaleFactor { scale: usize },

    #[error("binary entropy expects values in {{0, 1}}, found {value} at index {index}")]
    NonBinaryValue { index: usize, value: f64 },
}

pub(crate) fn check_embedding(m: usize) -> Result<(), EntropyError> {
    if m == 0 {
        return Err(EntropyError::InvalidEmbeddingDimension { m });
    }
    Ok(())
}

pub(crate) fn check_tolerance(r: f64) -> Result<(), EntropyError> {
    if !r.is_finite() || r < 0.0 {
        return Err(EntropyError::InvalidTolerance { r });
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::utils::statistics::mean;

/// Coarse-grain a series by averaging consecutive, non-overlapping blocks of `scale` values.
///
/// Blocks start at index 0. When `N` is not a multiple of `scale` the final block is
/// shorter and is averaged over the values it actually contains, so the output has
/// `ceil(N / scale)` elements.
///
/// Panics if `scale == 0`; the multiscale estimator rejects such scales before calling.
pub fn coarse_grain(series: &[f64], scale: usize) -> Array1<f64> {
    assert!(scale >= 1, "scale factor must be >= 1");
    series.chunks(scale).map(mean).collect()
}

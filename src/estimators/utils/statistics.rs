// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Arithmetic mean of a slice.
///
/// An empty slice yields `NaN` (0/0); callers that need a defined value must
/// guarantee at least one element.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with Bessel's correction, `sqrt(Σ(x - x̄)² / (N - 1))`.
///
/// Requires at least two values; fewer yield `NaN`, as does any non-finite value.
/// Values are divided by `max |x|` before squaring so finite inputs of any
/// magnitude give a finite result.
pub fn standard_deviation(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let scale = values.iter().fold(0.0_f64, |acc, &x| acc.max(x.abs()));
    if !scale.is_finite() || values.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    if scale == 0.0 {
        return 0.0;
    }
    let scaled: Vec<f64> = values.iter().map(|&x| x / scale).collect();
    let mu = mean(&scaled);
    let sum_sq: f64 = scaled
        .iter()
        .map(|&y| {
            let d = y - mu;
            d * d
        })
        .sum();
    scale * (sum_sq / (n - 1) as f64).sqrt()
}

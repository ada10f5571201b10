// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

/// First binary derivative: `d_i = x_i XOR x_{i+1}`.
///
/// The output is one element shorter than the input (empty for fewer than two bits).
/// Elements are expected to be 0 or 1.
pub fn binary_derivative(bits: &[u8]) -> Array1<u8> {
    bits.windows(2).map(|w| w[0] ^ w[1]).collect()
}


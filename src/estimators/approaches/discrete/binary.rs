// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary entropy (BiEntropy) of a finite 0/1 sequence.
//!
//! BiEntropy weights the Shannon entropy of the sequence and of its successive
//! binary derivatives. With `N` bits and `p_k` the fraction of ones in the k-th
//! derivative, the standard variant is
//!
//! ```text
//! BiEn = 1 / (2^(N-1) - 1) · Σ_{k=0}^{N-2} H(p_k) · 2^k
//! ```
//!
//! and the logarithmic (Tres) variant is
//!
//! ```text
//! TBiEn = 1 / Σ_{k=0}^{N-2} log2(k+2) · Σ_{k=0}^{N-2} H(p_k) · log2(k+2)
//! ```
//!
//! where `H(p) = -p log2 p - (1-p) log2 (1-p)`. Accumulation stops at the first
//! derivative that is constant (`p_k` equal to 0 or 1), since every later
//! derivative is constant as well.

use ndarray::Array1;
use tracing::trace;

use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::approaches::discrete::symbolize::RawSymbol;
use crate::estimators::error::EntropyError;
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::binary_derivative::binary_derivative;

/// Per-order weighting and normalization of the derivative entropies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryWeighting {
    /// Weight `2^k`, normalized by `2^(N-1) - 1`.
    #[default]
    Standard,
    /// Weight `log2(k+2)`, normalized by `Σ log2(k+2)`.
    Tres,
}

impl BinaryWeighting {
    /// Weight of derivative order `k`, already divided by the normalization for `n >= 2` bits.
    ///
    /// The standard weight `2^k / (2^(n-1) - 1)` is evaluated as
    /// `2^(k-n+1) / (1 - 2^(1-n))` so long sequences neither overflow nor turn into `inf · 0`.
    fn normalized_weight(self, k: usize, n: usize, tres_norm: f64) -> f64 {
        match self {
            BinaryWeighting::Standard => {
                let top = n as i32 - 1;
                2f64.powi(k as i32 - top) / (1.0 - 2f64.powi(-top))
            }
            BinaryWeighting::Tres => ((k + 2) as f64).log2() / tres_norm,
        }
    }

    /// `Σ_{k=0}^{n-2} log2(k+2)`, the Tres normalization; 1 for the standard variant.
    fn tres_norm(self, n: usize) -> f64 {
        match self {
            BinaryWeighting::Standard => 1.0,
            BinaryWeighting::Tres => (0..=n - 2).map(|k| ((k + 2) as f64).log2()).sum(),
        }
    }
}

/// Shannon entropy of a Bernoulli(p) variable in bits.
pub fn binary_shannon(p: f64) -> f64 {
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// BiEntropy estimator over a 0/1 series.
pub struct BinaryEntropy {
    bits: Array1<u8>,
    weighting: BinaryWeighting,
}

impl BinaryEntropy {
    /// Build from a series whose values are exactly 0.0 or 1.0.
    pub fn new(
        data: impl Into<Array1<f64>>,
        weighting: BinaryWeighting,
    ) -> Result<Self, EntropyError> {
        let data = data.into();
        let mut bits = Vec::with_capacity(data.len());
        for (index, &value) in data.iter().enumerate() {
            let bit = if value == 0.0 {
                0u8
            } else if value == 1.0 {
                1u8
            } else {
                return Err(EntropyError::NonBinaryValue { index, value });
            };
            bits.push(bit);
        }
        Ok(Self::from_bits(Array1::from(bits), weighting))
    }

    /// Build from bits; elements other than 0 and 1 are the caller's responsibility.
    pub fn from_bits(bits: Array1<u8>, weighting: BinaryWeighting) -> Self {
        Self { bits, weighting }
    }

    pub fn weighting(&self) -> BinaryWeighting {
        self.weighting
    }

    /// Normalized, weighted sum over derivative orders for `n >= 2` bits.
    fn weighted_sum(&self) -> f64 {
        let n = self.bits.len();
        let tres_norm = self.weighting.tres_norm(n);
        let mut sum = 0.0;
        let mut dk: Vec<u8> = self.bits.to_vec();
        for k in 0..=n - 2 {
            let dataset = DiscreteDataset::from_series(&dk, &RawSymbol);
            let p1 = dataset.probability(1);
            if p1 == 0.0 || p1 == 1.0 {
                trace!(order = k, p1, "binary derivative became constant");
                break;
            }
            sum += binary_shannon(p1) * self.weighting.normalized_weight(k, n, tres_norm);
            dk = binary_derivative(&dk).to_vec();
        }
        sum
    }
}

impl GlobalValue for BinaryEntropy {
    fn global_value(&self) -> f64 {
        let n = self.bits.len();
        if n < 2 {
            trace!(n, "binary entropy undefined for fewer than two bits");
            return f64::NAN;
        }
        self.weighted_sum()
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use tracing::trace;

use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::approaches::discrete::symbolize::{Hundredths, Symbolizer};
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Shannon entropy (in bits) of a real-valued series after discretization.
///
/// Values are binned by a [`Symbolizer`], `floor(100 * x)` by default, and the
/// entropy H = -Σ p_i log2 p_i is computed from the empirical probabilities
/// p_i = n_i/N. Series with fewer than two samples yield `NaN`.
///
/// Local values are the per-sample information content -log2 p(x_t); their mean
/// equals the global value. Below two samples they are `NaN`, like the global value.
pub struct ShannonEntropy {
    dataset: DiscreteDataset,
}

impl ShannonEntropy {
    pub fn new(data: impl Into<Array1<f64>>) -> Self {
        Self::with_symbolizer(data, &Hundredths)
    }

    /// Build with a custom discretization.
    pub fn with_symbolizer<S: Symbolizer + ?Sized>(
        data: impl Into<Array1<f64>>,
        symbolizer: &S,
    ) -> Self {
        let data = data.into();
        let dataset = DiscreteDataset::from_series(&data.to_vec(), symbolizer);
        Self { dataset }
    }

    /// Number of distinct symbols after discretization.
    pub fn n_symbols(&self) -> usize {
        self.dataset.k
    }

    pub fn dataset(&self) -> &DiscreteDataset {
        &self.dataset
    }
}

impl GlobalValue for ShannonEntropy {
    fn global_value(&self) -> f64 {
        if self.dataset.n < 2 {
            trace!(n = self.dataset.n, "shannon entropy undefined for fewer than two samples");
            return f64::NAN;
        }
        let n_f = self.dataset.n as f64;
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = (cnt as f64) / n_f;
            if p > 0.0 {
                h -= p * p.log2();
            }
        }
        h
    }
}

impl LocalValues for ShannonEntropy {
    fn local_values(&self) -> Array1<f64> {
        if self.dataset.n < 2 {
            return Array1::from_elem(self.dataset.n, f64::NAN);
        }
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::log2)
    }
}

impl OptionalLocalValues for ShannonEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

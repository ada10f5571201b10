// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::{BTreeMap, HashMap};

use crate::estimators::approaches::discrete::symbolize::Symbolizer;

/// Empirical distribution of a symbolized series, shared by the discrete estimators.
///
/// Counts and probabilities are kept ordered by symbol so that sums over the
/// distribution are evaluated in the same order on every call.
pub struct DiscreteDataset {
    /// Symbol per sample
    pub symbols: Array1<i64>,
    /// Counts per unique symbol
    pub counts: BTreeMap<i64, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: BTreeMap<i64, f64>,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset from symbols that are already discrete.
    pub fn from_symbols(symbols: Array1<i64>) -> Self {
        let n = symbols.len();
        let counts: BTreeMap<i64, usize> = count_frequencies(&symbols).into_iter().collect();
        let k = counts.len();
        let n_f = n as f64;
        let dist = counts
            .iter()
            .map(|(&val, &cnt)| (val, cnt as f64 / n_f))
            .collect();
        Self {
            symbols,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Symbolize a series and build its distribution.
    pub fn from_series<T: Copy, S: Symbolizer<T> + ?Sized>(series: &[T], symbolizer: &S) -> Self {
        let symbols: Array1<i64> = series.iter().map(|&v| symbolizer.symbol(v)).collect();
        Self::from_symbols(symbols)
    }

    /// Probability of `symbol`, 0 when it was never observed.
    pub fn probability(&self, symbol: i64) -> f64 {
        self.dist.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Map each sample to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.symbols.mapv(|v| self.dist[&v])
    }
}

/// Helper function to count the occurrences of each symbol in an array.
pub fn count_frequencies(data: &Array1<i64>) -> HashMap<i64, usize> {
    match data.as_slice() {
        Some(slice) => count_frequencies_slice(slice),
        None => count_frequencies_slice(&data.to_vec()),
    }
}

/// Count frequencies from a raw slice of symbols with an optimized dense mode.
/// Uses a dense vector for small non-negative ranges, otherwise falls back to HashMap.
pub fn count_frequencies_slice(data: &[i64]) -> HashMap<i64, usize> {
    if data.is_empty() {
        return HashMap::new();
    }

    let mut min_v = i64::MAX;
    let mut max_v = i64::MIN;
    for &v in data.iter() {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }

    // Range limit chosen to balance memory and speed; can be tuned.
    const MAX_DENSE_RANGE: i64 = 4096;
    if min_v >= 0 {
        let range = max_v - min_v; // min_v >= 0, cannot overflow
        if range <= MAX_DENSE_RANGE {
            let len = (range as usize) + 1;
            let mut dense = vec![0usize; len];
            for &v in data.iter() {
                dense[(v - min_v) as usize] += 1;
            }
            let mut map = HashMap::with_capacity(len);
            for (i, &cnt) in dense.iter().enumerate() {
                if cnt != 0 {
                    map.insert(min_v + i as i64, cnt);
                }
            }
            return map;
        }
    }

    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

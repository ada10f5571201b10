// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template match counting for Sample Entropy.
//!
//! For a series of length `N` and embedding dimension `m`, the templates are the
//! windows `x[i..i+m]` for `i` in `0..N-m`. Every start index leaves room for the
//! extension element `x[i+m]`, so the same index range serves both counters:
//!
//! - `cm` counts pairs `i < j` whose m-windows are within `tol` (Chebyshev),
//! - `cm1` counts those pairs whose extension elements are also within `tol`.
//!
//! Counting is a sum over the outer index and can be split arbitrarily.

use std::ops::{Add, AddAssign};

/// Pair counts at embedding dimensions `m` and `m + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchCounts {
    pub cm: u64,
    pub cm1: u64,
}

impl Add for MatchCounts {
    type Output = MatchCounts;

    fn add(self, rhs: MatchCounts) -> MatchCounts {
        MatchCounts {
            cm: self.cm + rhs.cm,
            cm1: self.cm1 + rhs.cm1,
        }
    }
}

impl AddAssign for MatchCounts {
    fn add_assign(&mut self, rhs: MatchCounts) {
        *self = *self + rhs;
    }
}

/// Number of template start indices, `N - m` clamped at zero.
#[inline]
pub fn template_count(n: usize, m: usize) -> usize {
    n.saturating_sub(m)
}

/// Chebyshev test: every position of the two windows differs by at most `tol`.
#[inline]
pub fn within_tolerance(a: &[f64], b: &[f64], tol: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tol)
}

/// Counts contributed by the pairs `(i, j)` with `j > i`.
#[inline]
pub fn count_from(series: &[f64], m: usize, tol: f64, i: usize) -> MatchCounts {
    let n_templates = template_count(series.len(), m);
    let mut counts = MatchCounts::default();
    let template = &series[i..i + m];
    for j in (i + 1)..n_templates {
        if !within_tolerance(template, &series[j..j + m], tol) {
            continue;
        }
        counts.cm += 1;
        if (series[i + m] - series[j + m]).abs() <= tol {
            counts.cm1 += 1;
        }
    }
    counts
}

/// Exhaustive O(N²) pair counting.
pub fn count_matches_brute_force(series: &[f64], m: usize, tol: f64) -> MatchCounts {
    let n_templates = template_count(series.len(), m);
    let mut counts = MatchCounts::default();
    for i in 0..n_templates {
        counts += count_from(series, m, tol, i);
    }
    counts
}

/// Exhaustive pair counting with the outer index spread over the rayon pool.
#[cfg(feature = "parallel")]
pub fn count_matches_parallel(series: &[f64], m: usize, tol: f64) -> MatchCounts {
    use rayon::prelude::*;

    let n_templates = template_count(series.len(), m);
    (0..n_templates)
        .into_par_iter()
        .map(|i| count_from(series, m, tol, i))
        .reduce(MatchCounts::default, |a, b| a + b)
}

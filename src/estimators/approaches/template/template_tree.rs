// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// KD-tree accelerated template matching.
//
// The templates are stored as K-dimensional points. A Chebyshev ball of radius
// `tol` is contained in the Manhattan ball of radius `K * tol`, so a Manhattan
// range query returns a superset of the matches, which is then filtered with the
// exact Chebyshev test. Counts are identical to the exhaustive search.

use kiddo::{ImmutableKdTree, Manhattan};

use crate::estimators::approaches::template::matching::{
    MatchCounts, template_count, within_tolerance,
};

/// Largest embedding dimension with a KD-tree path.
pub const MAX_TREE_DIM: usize = 8;

/// Count template matches with a KD-tree.
///
/// `None` if `m` is outside `1..=MAX_TREE_DIM` or the query radius is not finite.
pub fn count_matches_tree(series: &[f64], m: usize, tol: f64) -> Option<MatchCounts> {
    if !query_radius(m, tol).is_finite() {
        return None;
    }
    let counts = match m {
        1 => count_matches_tree_k::<1>(series, tol),
        2 => count_matches_tree_k::<2>(series, tol),
        3 => count_matches_tree_k::<3>(series, tol),
        4 => count_matches_tree_k::<4>(series, tol),
        5 => count_matches_tree_k::<5>(series, tol),
        6 => count_matches_tree_k::<6>(series, tol),
        7 => count_matches_tree_k::<7>(series, tol),
        8 => count_matches_tree_k::<8>(series, tol),
        _ => return None,
    };
    Some(counts)
}

// Inflated so rounding in the L1 sum and the query boundary never drop a true match.
fn query_radius(m: usize, tol: f64) -> f64 {
    (m as f64) * tol * (1.0 + 1e-9) + 1e-15
}

fn template_points<const K: usize>(series: &[f64], n_templates: usize) -> Vec<[f64; K]> {
    let mut points: Vec<[f64; K]> = Vec::with_capacity(n_templates);
    for i in 0..n_templates {
        let mut p = [0.0; K];
        p.copy_from_slice(&series[i..i + K]);
        points.push(p);
    }
    points
}

fn count_matches_tree_k<const K: usize>(series: &[f64], tol: f64) -> MatchCounts {
    let n_templates = template_count(series.len(), K);
    let mut counts = MatchCounts::default();
    if n_templates < 2 {
        return counts;
    }

    let points = template_points::<K>(series, n_templates);
    let tree: ImmutableKdTree<f64, K> = ImmutableKdTree::new_from_slice(&points);

    let radius = query_radius(K, tol);

    for (i, p) in points.iter().enumerate() {
        let candidates = tree.within_unsorted::<Manhattan>(p, radius);
        for candidate in candidates {
            let j = candidate.item as usize;
            if j <= i || !within_tolerance(&series[i..i + K], &series[j..j + K], tol) {
                continue;
            }
            counts.cm += 1;
            if (series[i + K] - series[j + K]).abs() <= tol {
                counts.cm1 += 1;
            }
        }
    }
    counts
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample Entropy (SampEn).
//!
//! SampEn(m, r) = ln(cm / cm1), where `cm` is the number of template pairs of
//! length `m` within tolerance `tol = r · sd(x)` (Chebyshev distance, self-matches
//! excluded) and `cm1` the number of those pairs that still match at length `m + 1`.
//!
//! Degenerate cases are reported, not substituted:
//!
//! - fewer than two samples, or no pair of templates: `NaN` ([`SampleEntropyOutcome::InsufficientData`]),
//! - no pair within tolerance: `NaN` ([`SampleEntropyOutcome::NoMatches`]),
//! - matches that never extend to `m + 1`: `+inf` ([`SampleEntropyOutcome::NoExtendedMatches`]).
//!
//! Reference: Richman & Moorman (2000), Am. J. Physiol. Heart Circ. Physiol. 278(6).

use ndarray::Array1;
use tracing::{debug, trace};

use crate::estimators::approaches::template::matching::{
    MatchCounts, count_matches_brute_force, template_count,
};
use crate::estimators::approaches::template::template_tree::count_matches_tree;
use crate::estimators::error::{EntropyError, check_embedding, check_tolerance};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};
use crate::estimators::utils::statistics::standard_deviation;

/// Strategy used to count template pairs. All CPU strategies yield identical counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchBackend {
    /// Exhaustive O(N²) comparison of all template pairs.
    #[default]
    BruteForce,
    /// KD-tree range queries over the templates, for `m <= 8`; larger `m` uses brute force.
    KdTree,
    /// Exhaustive comparison split over the rayon pool. Requires the `parallel`
    /// feature, otherwise brute force is used.
    Parallel,
    /// WGSL compute shader in single precision. Requires the `gpu_support` feature
    /// and at least 2000 templates, otherwise brute force is used.
    Gpu,
}

/// Parameters of the Sample Entropy estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleEntropyParams {
    /// Embedding dimension (template length)
    pub m: usize,
    /// Tolerance as a fraction of the sample standard deviation
    pub r: f64,
    pub backend: MatchBackend,
}

impl Default for SampleEntropyParams {
    fn default() -> Self {
        Self {
            m: 2,
            r: 0.2,
            backend: MatchBackend::BruteForce,
        }
    }
}

impl SampleEntropyParams {
    pub fn new(m: usize, r: f64) -> Self {
        Self {
            m,
            r,
            ..Self::default()
        }
    }

    pub fn with_backend(mut self, backend: MatchBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn validate(&self) -> Result<(), EntropyError> {
        check_embedding(self.m)?;
        check_tolerance(self.r)
    }
}

/// Result of a Sample Entropy evaluation, keeping the reason for undefined values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleEntropyOutcome {
    /// Both counters positive: `ln(cm / cm1)`.
    Finite(f64),
    /// Matches at length `m` exist but none extends to `m + 1`.
    NoExtendedMatches,
    /// No template pair lies within tolerance.
    NoMatches,
    /// Too few samples to form a single pair of templates.
    InsufficientData,
}

impl SampleEntropyOutcome {
    /// Collapse to a float: finite value, `+inf`, or `NaN`.
    pub fn value(self) -> f64 {
        match self {
            SampleEntropyOutcome::Finite(v) => v,
            SampleEntropyOutcome::NoExtendedMatches => f64::INFINITY,
            SampleEntropyOutcome::NoMatches | SampleEntropyOutcome::InsufficientData => f64::NAN,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, SampleEntropyOutcome::Finite(_))
    }
}

/// Sample Entropy estimator for a 1D series.
///
/// Template pairs are counted once at construction; the accessors are cheap.
pub struct SampleEntropy {
    data: Array1<f64>,
    params: SampleEntropyParams,
    tolerance: f64,
    counts: MatchCounts,
}

impl SampleEntropy {
    /// Build with embedding dimension `m` and tolerance ratio `r`, brute-force matching.
    pub fn new(data: impl Into<Array1<f64>>, m: usize, r: f64) -> Result<Self, EntropyError> {
        Self::with_params(data, SampleEntropyParams::new(m, r))
    }

    pub fn with_params(
        data: impl Into<Array1<f64>>,
        params: SampleEntropyParams,
    ) -> Result<Self, EntropyError> {
        params.validate()?;
        let data = data.into();
        let series = data.to_vec();
        let n = series.len();

        if n < 2 {
            trace!(n, "sample entropy undefined for fewer than two samples");
            return Ok(Self {
                data,
                params,
                tolerance: f64::NAN,
                counts: MatchCounts::default(),
            });
        }

        let tolerance = standard_deviation(&series) * params.r;
        let counts = count_matches(&series, params.m, tolerance, params.backend);
        trace!(
            n,
            m = params.m,
            tolerance,
            cm = counts.cm,
            cm1 = counts.cm1,
            "sample entropy template counts"
        );
        Ok(Self {
            data,
            params,
            tolerance,
            counts,
        })
    }

    pub fn params(&self) -> SampleEntropyParams {
        self.params
    }

    /// Absolute tolerance `r · sd(x)`; `NaN` for fewer than two samples.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Template pair counts `(cm, cm1)`.
    pub fn match_counts(&self) -> MatchCounts {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn outcome(&self) -> SampleEntropyOutcome {
        if template_count(self.data.len(), self.params.m) < 2 {
            return SampleEntropyOutcome::InsufficientData;
        }
        let MatchCounts { cm, cm1 } = self.counts;
        if cm == 0 {
            SampleEntropyOutcome::NoMatches
        } else if cm1 == 0 {
            SampleEntropyOutcome::NoExtendedMatches
        } else {
            SampleEntropyOutcome::Finite((cm as f64 / cm1 as f64).ln())
        }
    }
}

impl GlobalValue for SampleEntropy {
    fn global_value(&self) -> f64 {
        self.outcome().value()
    }
}

impl OptionalLocalValues for SampleEntropy {
    fn supports_local(&self) -> bool {
        false
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Err("Sample entropy is a pair statistic and has no per-sample decomposition.")
    }
}

/// Dispatch pair counting to the requested backend, falling back to brute force
/// when the backend is unavailable for this input or build.
pub fn count_matches(series: &[f64], m: usize, tol: f64, backend: MatchBackend) -> MatchCounts {
    match backend {
        MatchBackend::BruteForce => count_matches_brute_force(series, m, tol),
        MatchBackend::KdTree => count_matches_tree(series, m, tol).unwrap_or_else(|| {
            debug!(m, tol, "no KD-tree path for this input, using brute force");
            count_matches_brute_force(series, m, tol)
        }),
        MatchBackend::Parallel => {
            #[cfg(feature = "parallel")]
            {
                crate::estimators::approaches::template::matching::count_matches_parallel(
                    series, m, tol,
                )
            }
            #[cfg(not(feature = "parallel"))]
            {
                debug!("built without `parallel`, using brute force");
                count_matches_brute_force(series, m, tol)
            }
        }
        MatchBackend::Gpu => {
            #[cfg(feature = "gpu_support")]
            {
                if let Some(counts) =
                    crate::estimators::approaches::template::template_gpu::gpu_count_matches(
                        series, m, tol,
                    )
                {
                    return counts;
                }
                debug!("GPU path unavailable for this input, using brute force");
            }
            #[cfg(not(feature = "gpu_support"))]
            debug!("built without `gpu_support`, using brute force");
            count_matches_brute_force(series, m, tol)
        }
    }
}
